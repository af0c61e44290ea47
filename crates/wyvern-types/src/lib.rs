//! The generic type-expression model shared by the wyvern crates.
//!
//! A [`Type`] is a closed algebra over five kinds of expression: nominal
//! (erased) types, parameterized instantiations, generic arrays, wildcard
//! bounds, and unresolved type variables. Expressions are immutable values;
//! the resolution algorithms in `wyvern-resolve` consume them read-only and
//! produce new expressions.
//!
//! Class metadata (declared type parameters, generic supertypes) is supplied
//! by a [`TypeCatalog`], which stands in for host-environment reflection. The
//! in-memory [`TypeStore`] implements it and seeds a minimal JDK-like class
//! graph for tests.

mod factory;
mod format;
mod store;
mod subtype;

pub use factory::{array_of, parameterized, wildcard, wildcard_extends, wildcard_super};
pub use format::display;
pub use store::TypeStore;
pub use subtype::is_subclass;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identity of a class known to a [`TypeCatalog`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ClassId(pub u32);

/// Identity of a declared type parameter. Two [`Type::Variable`] expressions
/// are equal exactly when they reference the same declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TypeVarId(pub u32);

/// The eight scalar kinds. `void` is not a value type and lives on
/// [`Nominal::Void`] instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveType {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
}

impl PrimitiveType {
    pub fn name(self) -> &'static str {
        match self {
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Byte => "byte",
            PrimitiveType::Short => "short",
            PrimitiveType::Int => "int",
            PrimitiveType::Long => "long",
            PrimitiveType::Char => "char",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
        }
    }
}

/// A concrete, erased type: what is left of an expression once generic
/// argument detail is discarded.
///
/// Array classes are themselves nominal (`int[]` and `String[]` are concrete
/// runtime types), so the variant is recursive: `Nominal::Array` wraps the
/// component's nominal form.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nominal {
    Primitive(PrimitiveType),
    Void,
    Class(ClassId),
    Array(Box<Nominal>),
}

impl Nominal {
    pub fn class_id(&self) -> Option<ClassId> {
        match self {
            Nominal::Class(id) => Some(*id),
            _ => None,
        }
    }

    /// Reference types can stand in anywhere `Object` is expected; primitives
    /// and `void` cannot.
    pub fn is_reference(&self) -> bool {
        matches!(self, Nominal::Class(_) | Nominal::Array(_))
    }
}

/// A generic instantiation: a raw type together with an ordered list of type
/// arguments, optionally qualified by the enclosing type's expression.
///
/// `args` is expected to match the raw type's declared parameter count; this
/// is not checked at construction and positional pairing simply stops at the
/// shorter of the two lists.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Parameterized {
    pub owner: Option<Box<Type>>,
    pub raw: Box<Type>,
    pub args: Vec<Type>,
}

/// An existential bound: "some type within these bounds". A wildcard with no
/// bounds at all is fully unknown and erases to `Object`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Wildcard {
    pub upper: Vec<Type>,
    pub lower: Vec<Type>,
}

/// A generic type expression.
///
/// Equality is structural for `Parameterized`, `Wildcard`, and `Array`, so
/// two independently constructed expressions with the same shape are
/// interchangeable. A `Variable` compares by declaration identity only; its
/// declared bounds live in the catalog.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
    Nominal(Nominal),
    Parameterized(Parameterized),
    Array(Box<Type>),
    Wildcard(Wildcard),
    Variable(TypeVarId),
}

impl Type {
    pub fn class(id: ClassId) -> Type {
        Type::Nominal(Nominal::Class(id))
    }

    pub fn primitive(kind: PrimitiveType) -> Type {
        Type::Nominal(Nominal::Primitive(kind))
    }

    pub fn void() -> Type {
        Type::Nominal(Nominal::Void)
    }

    pub fn variable(id: TypeVarId) -> Type {
        Type::Variable(id)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassKind {
    Class,
    Interface,
}

/// Catalog metadata for one class: its declared type parameters and its
/// generic supertype expressions, in declaration order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDef {
    pub name: String,
    pub kind: ClassKind,
    pub type_params: Vec<TypeVarId>,
    pub super_class: Option<Type>,
    pub interfaces: Vec<Type>,
}

/// Catalog metadata for one declared type parameter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeParamDef {
    pub name: String,
    pub upper_bounds: Vec<Type>,
}

/// Classes the algorithms need to name directly: the universal top type, the
/// array marker interfaces, and the boxed `Void` rejected by array creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WellKnownTypes {
    pub object: ClassId,
    pub string: ClassId,
    pub number: ClassId,
    pub integer: ClassId,
    pub boxed_void: ClassId,
    pub cloneable: ClassId,
    pub serializable: ClassId,
}

/// Read-only source of class metadata, standing in for host reflection.
///
/// Lookups are repeated independent reads keyed by class or declaration
/// identity; implementations must be safe for concurrent readers. Missing
/// metadata is reported as `None` and the algorithms degrade best-effort
/// rather than failing.
pub trait TypeCatalog {
    fn class(&self, id: ClassId) -> Option<&ClassDef>;

    fn type_param(&self, id: TypeVarId) -> Option<&TypeParamDef>;

    fn lookup_class(&self, name: &str) -> Option<ClassId>;

    fn well_known(&self) -> &WellKnownTypes;

    /// Declared type parameters of a nominal type, empty for non-generic
    /// classes, primitives, and arrays.
    fn declared_parameters(&self, nominal: &Nominal) -> &[TypeVarId] {
        match nominal {
            Nominal::Class(id) => self
                .class(*id)
                .map(|def| def.type_params.as_slice())
                .unwrap_or(&[]),
            _ => &[],
        }
    }

    /// The generic superclass expression, if the type declares one.
    fn generic_superclass(&self, nominal: &Nominal) -> Option<&Type> {
        match nominal {
            Nominal::Class(id) => self.class(*id)?.super_class.as_ref(),
            _ => None,
        }
    }

    /// The generic interface expressions the type declares.
    fn generic_interfaces(&self, nominal: &Nominal) -> &[Type] {
        match nominal {
            Nominal::Class(id) => self
                .class(*id)
                .map(|def| def.interfaces.as_slice())
                .unwrap_or(&[]),
            _ => &[],
        }
    }
}

/// A mapping from type-variable declarations to the expressions bound to
/// them in some context.
///
/// Insertion is first-wins: during supertype traversal the nearest
/// declaration is discovered first, so a subclass's binding shadows a more
/// distant ancestor's. Resolution passes snapshot the map at their entry
/// point; later mutation by the caller cannot affect an in-flight pass.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bindings {
    map: HashMap<TypeVarId, Type>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a binding unless the variable is already bound. Returns whether
    /// the binding was recorded.
    pub fn insert_if_absent(&mut self, variable: TypeVarId, ty: Type) -> bool {
        match self.map.entry(variable) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(ty);
                true
            }
        }
    }

    pub fn get(&self, variable: TypeVarId) -> Option<&Type> {
        self.map.get(&variable)
    }

    pub fn contains(&self, variable: TypeVarId) -> bool {
        self.map.contains_key(&variable)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TypeVarId, &Type)> {
        self.map.iter().map(|(variable, ty)| (*variable, ty))
    }
}

impl FromIterator<(TypeVarId, Type)> for Bindings {
    fn from_iter<I: IntoIterator<Item = (TypeVarId, Type)>>(iter: I) -> Self {
        let mut bindings = Bindings::new();
        for (variable, ty) in iter {
            bindings.insert_if_absent(variable, ty);
        }
        bindings
    }
}

/// Failures surfaced by the factories and resolution entry points.
///
/// "Not found" answers (a target class that is simply not an ancestor) are
/// `Ok(None)` results, never errors. `Unsupported` marks branches the
/// algebra intentionally leaves open rather than approximating.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TypeError {
    #[error("cannot create an array with component type {0}")]
    InvalidArrayComponent(String),
    #[error("{0} is not a generic class")]
    NotGeneric(String),
    #[error("type parameter index {index} is out of bounds for {class}")]
    TypeParameterOutOfBounds { class: String, index: usize },
    #[error("class {0:?} is not known to the catalog")]
    UnknownClass(ClassId),
    #[error("{runtime} is not a subclass of {declared}")]
    NotASubclass { declared: String, runtime: String },
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),
}
