//! Constructors for the composite expression kinds.
//!
//! Component expressions are owned values, so the "reject null components"
//! contract of the source environment holds by construction; the only
//! residual runtime validation is array creation over the two `void` kinds.

use crate::{Nominal, Parameterized, Type, TypeCatalog, TypeError, Wildcard};

/// A generic instantiation of `raw` with the given arguments, optionally
/// qualified by the enclosing type.
pub fn parameterized(owner: Option<Type>, raw: Type, args: Vec<Type>) -> Type {
    Type::Parameterized(Parameterized {
        owner: owner.map(Box::new),
        raw: Box::new(raw),
        args,
    })
}

/// A wildcard with explicit upper and lower bounds.
pub fn wildcard(upper: Vec<Type>, lower: Vec<Type>) -> Type {
    Type::Wildcard(Wildcard { upper, lower })
}

/// `? extends A & B`: a wildcard bounded from above.
pub fn wildcard_extends(upper: Vec<Type>) -> Type {
    wildcard(upper, Vec::new())
}

/// `? super A & B`: a wildcard bounded from below.
pub fn wildcard_super(lower: Vec<Type>) -> Type {
    wildcard(Vec::new(), lower)
}

/// The array type with `component` as its component type.
///
/// Nominal components produce the concrete nominal array type (so the eight
/// scalar kinds land on their dedicated primitive-array types); every other
/// expression kind is wrapped as a generic [`Type::Array`]. Arrays of `void`
/// and of the boxed `Void` class do not exist and are rejected.
pub fn array_of(catalog: &dyn TypeCatalog, component: Type) -> Result<Type, TypeError> {
    match component {
        Type::Nominal(Nominal::Void) => {
            Err(TypeError::InvalidArrayComponent("void".to_string()))
        }
        Type::Nominal(Nominal::Class(id)) if id == catalog.well_known().boxed_void => {
            Err(TypeError::InvalidArrayComponent("java.lang.Void".to_string()))
        }
        Type::Nominal(nominal) => Ok(Type::Nominal(Nominal::Array(Box::new(nominal)))),
        other => Ok(Type::Array(Box::new(other))),
    }
}
