//! The common-supertype heuristic.

use wyvern_types::{is_subclass, Type, TypeCatalog, TypeError};

use crate::erase::erase;

/// The most specific expression whose erasure is a nominal supertype of
/// every other input's erasure, or `Object` when no input dominates.
///
/// Folds left to right: whenever the running candidate's erasure is a
/// subtype of the next input's, the next input takes over; when neither
/// dominates, the candidate collapses to `Object` and no further refinement
/// is attempted. This is a heuristic, not a least-upper-bound solver;
/// computing a true LUB across interface implementations is out of scope.
/// Wildcard inputs are unsupported and fail loudly.
pub fn common_super(catalog: &dyn TypeCatalog, types: &[Type]) -> Result<Type, TypeError> {
    let mut candidate: Option<Type> = None;
    for ty in types {
        if matches!(ty, Type::Wildcard(_)) {
            return Err(TypeError::Unsupported(
                "common supertype over a wildcard bound",
            ));
        }
        candidate = Some(match candidate {
            None => ty.clone(),
            Some(current) => {
                let current_raw = erase(catalog, &current);
                let next_raw = erase(catalog, ty);
                if is_subclass(catalog, &current_raw, &next_raw) {
                    ty.clone()
                } else if is_subclass(catalog, &next_raw, &current_raw) {
                    current
                } else {
                    // No dominance either way; give up and widen.
                    Type::class(catalog.well_known().object)
                }
            }
        });
    }
    Ok(candidate.unwrap_or_else(|| Type::class(catalog.well_known().object)))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use wyvern_types::{wildcard_extends, TypeStore};

    use super::*;

    #[test]
    fn empty_input_widens_to_object() {
        let store = TypeStore::with_minimal_jdk();
        assert_eq!(
            common_super(&store, &[]).unwrap(),
            Type::class(store.well_known().object)
        );
    }

    #[test]
    fn a_single_expression_is_its_own_common_supertype() {
        let store = TypeStore::with_minimal_jdk();
        let string = Type::class(store.well_known().string);
        assert_eq!(common_super(&store, &[string.clone()]).unwrap(), string);
    }

    #[test]
    fn dominance_is_direction_independent() {
        let store = TypeStore::with_minimal_jdk();
        let number = Type::class(store.well_known().number);
        let integer = Type::class(store.well_known().integer);

        let a = common_super(&store, &[number.clone(), integer.clone()]).unwrap();
        let b = common_super(&store, &[integer, number.clone()]).unwrap();
        assert_eq!(a, number);
        assert_eq!(a, b);
    }

    #[test]
    fn unrelated_inputs_collapse_to_object() {
        let store = TypeStore::with_minimal_jdk();
        let string = Type::class(store.well_known().string);
        let list = Type::class(store.class_id("java.util.List").unwrap());
        let integer = Type::class(store.well_known().integer);

        // Once the fold has widened to Object, later inputs cannot narrow it.
        assert_eq!(
            common_super(&store, &[string, list, integer]).unwrap(),
            Type::class(store.well_known().object)
        );
    }

    #[test]
    fn wildcard_inputs_are_unsupported() {
        let store = TypeStore::with_minimal_jdk();
        let number = Type::class(store.well_known().number);
        assert_eq!(
            common_super(&store, &[wildcard_extends(vec![number])]),
            Err(TypeError::Unsupported(
                "common supertype over a wildcard bound"
            ))
        );
    }
}
