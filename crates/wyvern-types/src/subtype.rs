//! Nominal subtyping over the erased class graph.

use std::collections::{HashSet, VecDeque};

use crate::{ClassId, ClassKind, Nominal, Type, TypeCatalog};

/// Whether `sub` is a nominal subtype of `sup`.
///
/// Primitives and `void` relate only to themselves. Every class and array is
/// a subtype of `Object`; arrays additionally implement `Cloneable` and
/// `Serializable`, are covariant in reference components, and invariant in
/// primitive components. Class-to-class subtyping walks the declared
/// superclass/interface graph; classes missing from the catalog are skipped
/// best-effort.
pub fn is_subclass(catalog: &dyn TypeCatalog, sub: &Nominal, sup: &Nominal) -> bool {
    if sub == sup {
        return true;
    }
    let wk = catalog.well_known();
    match (sub, sup) {
        (Nominal::Primitive(_) | Nominal::Void, _) | (_, Nominal::Primitive(_) | Nominal::Void) => {
            false
        }
        (Nominal::Array(_), Nominal::Class(id)) => {
            *id == wk.object || *id == wk.cloneable || *id == wk.serializable
        }
        (Nominal::Array(sub_component), Nominal::Array(sup_component)) => {
            match (sub_component.as_ref(), sup_component.as_ref()) {
                // Unequal primitive components never relate; equality was
                // handled above.
                (Nominal::Primitive(_), _) | (_, Nominal::Primitive(_)) => false,
                (sub_component, sup_component) => {
                    is_subclass(catalog, sub_component, sup_component)
                }
            }
        }
        (Nominal::Class(_), Nominal::Array(_)) => false,
        (Nominal::Class(sub_id), Nominal::Class(sup_id)) => {
            if *sup_id == wk.object {
                return true;
            }
            class_extends(catalog, *sub_id, *sup_id)
        }
    }
}

fn class_extends(catalog: &dyn TypeCatalog, sub: ClassId, sup: ClassId) -> bool {
    let mut queue: VecDeque<ClassId> = VecDeque::new();
    let mut seen: HashSet<ClassId> = HashSet::new();
    queue.push_back(sub);

    while let Some(current) = queue.pop_front() {
        if current == sup {
            return true;
        }
        if !seen.insert(current) {
            continue;
        }
        let Some(def) = catalog.class(current) else {
            continue;
        };
        if let Some(super_class) = &def.super_class {
            if let Some(id) = erased_class_id(super_class) {
                queue.push_back(id);
            }
        }
        for iface in &def.interfaces {
            if let Some(id) = erased_class_id(iface) {
                queue.push_back(id);
            }
        }
        // Interfaces implicitly reach Object (JLS 4.10.2).
        if def.kind == ClassKind::Interface {
            queue.push_back(catalog.well_known().object);
        }
    }
    false
}

// Narrow erasure for supertype declarations, which are always nominal or
// parameterized expressions.
fn erased_class_id(ty: &Type) -> Option<ClassId> {
    match ty {
        Type::Nominal(Nominal::Class(id)) => Some(*id),
        Type::Parameterized(p) => erased_class_id(&p.raw),
        _ => None,
    }
}
