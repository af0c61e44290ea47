//! Resolution algorithms over the wyvern type-expression model.
//!
//! Everything here is a pure function of a [`TypeCatalog`] and immutable
//! expressions: [`erase`] reduces an expression to its runtime form,
//! [`collect_bindings`] harvests the variable bindings implied by a type's
//! supertype graph, [`resolve`] substitutes known bindings, and [`reify`]
//! additionally collapses whatever remains unknown to concrete upper
//! bounds. [`resolve_reified_type`] strings them together for the common
//! "what is `T` of `Target`, for this field, in this context?" question.

mod collect;
mod common_super;
mod constrain;
mod erase;
mod reify;
mod resolve;
mod visit;

pub use collect::collect_bindings;
pub use common_super::common_super;
pub use constrain::constrain_to_runtime;
pub use erase::erase;
pub use reify::reify;
pub use resolve::resolve;
pub use visit::{dispatch, TypeVisitor};

use tracing::debug;
use wyvern_types::{ClassId, Nominal, Type, TypeCatalog, TypeError};

/// Whether a value whose static type erases from `sub` can be assigned to a
/// slot of the nominal type `super_type`. Generic detail and wildcards on
/// the subtype side are erased away first.
pub fn is_assignable_from(
    catalog: &dyn TypeCatalog,
    super_type: &Nominal,
    sub: &Type,
) -> bool {
    wyvern_types::is_subclass(catalog, &erase(catalog, sub), super_type)
}

/// Look up the expression bound to `target`'s `index`-th declared type
/// parameter in the context of `bound`.
///
/// `target` must be a generic class (checked before ancestry is even
/// considered) and `index` must be within its declared arity. `Ok(None)`
/// means `target` is not an ancestor of `bound`, which is a legitimate
/// answer rather than a failure.
pub fn resolve_type_variable(
    catalog: &dyn TypeCatalog,
    bound: &Type,
    target: ClassId,
    index: usize,
) -> Result<Option<Type>, TypeError> {
    let def = catalog.class(target).ok_or(TypeError::UnknownClass(target))?;
    if def.type_params.is_empty() {
        return Err(TypeError::NotGeneric(def.name.clone()));
    }
    if index >= def.type_params.len() {
        return Err(TypeError::TypeParameterOutOfBounds {
            class: def.name.clone(),
            index,
        });
    }
    let variable = def.type_params[index];
    Ok(collect_bindings(catalog, Some(bound)).get(variable).cloned())
}

/// Reify `bound` in the context of `context`, then resolve `target`'s
/// `index`-th type parameter against the reified result.
///
/// This is the orchestration entry point: bindings are harvested from the
/// context type, substituted into `bound` with reification defaults, and the
/// answer is read back off the reified expression's own supertype graph.
pub fn resolve_reified_type(
    catalog: &dyn TypeCatalog,
    context: Option<&Type>,
    bound: &Type,
    target: ClassId,
    index: usize,
) -> Result<Option<Type>, TypeError> {
    let bindings = collect_bindings(catalog, context);
    let reified = reify(catalog, bound, &bindings)?;
    debug!(?reified, "reified bound type");
    resolve_type_variable(catalog, &reified, target, index)
}
