//! Java-like rendering of type expressions.
//!
//! The output is stable and intended for diagnostics and assertions, not for
//! re-parsing. Class and variable names come from the catalog; unknown ids
//! render as placeholders rather than failing.

use crate::{Nominal, Type, TypeCatalog};

pub fn display(catalog: &dyn TypeCatalog, ty: &Type) -> String {
    let mut out = String::new();
    write_type(catalog, ty, &mut out);
    out
}

fn write_type(catalog: &dyn TypeCatalog, ty: &Type, out: &mut String) {
    match ty {
        Type::Nominal(nominal) => write_nominal(catalog, nominal, out),
        Type::Parameterized(p) => {
            if let Some(owner) = &p.owner {
                write_type(catalog, owner, out);
                out.push('.');
            }
            write_type(catalog, &p.raw, out);
            if !p.args.is_empty() {
                out.push('<');
                write_list(catalog, &p.args, ",", out);
                out.push('>');
            }
        }
        Type::Array(component) => {
            write_type(catalog, component, out);
            out.push_str("[]");
        }
        Type::Wildcard(w) => {
            out.push('?');
            if !w.upper.is_empty() {
                out.push_str(" extends ");
                write_list(catalog, &w.upper, " & ", out);
            }
            if !w.lower.is_empty() {
                out.push_str(" super ");
                write_list(catalog, &w.lower, " & ", out);
            }
        }
        Type::Variable(id) => match catalog.type_param(*id) {
            Some(def) => out.push_str(&def.name),
            None => out.push_str("<unknown type variable>"),
        },
    }
}

fn write_nominal(catalog: &dyn TypeCatalog, nominal: &Nominal, out: &mut String) {
    match nominal {
        Nominal::Primitive(kind) => out.push_str(kind.name()),
        Nominal::Void => out.push_str("void"),
        Nominal::Class(id) => match catalog.class(*id) {
            Some(def) => out.push_str(&def.name),
            None => out.push_str("<unknown class>"),
        },
        Nominal::Array(component) => {
            write_nominal(catalog, component, out);
            out.push_str("[]");
        }
    }
}

fn write_list(catalog: &dyn TypeCatalog, types: &[Type], separator: &str, out: &mut String) {
    for (i, ty) in types.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        write_type(catalog, ty, out);
    }
}
