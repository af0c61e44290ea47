//! Substitution of known bindings into an expression.

use std::collections::HashSet;

use wyvern_types::{
    Bindings, Nominal, Parameterized, Type, TypeCatalog, TypeVarId, Wildcard,
};

use crate::erase::erase;
use crate::visit::{dispatch, TypeVisitor};

/// Substitute `bindings` into `ty`, leaving unmapped variables untouched.
///
/// Chains of variable-to-variable bindings unwind fully. The bindings are
/// snapshotted at this entry point, so concurrent mutation by the caller
/// cannot affect the pass. Idempotent for acyclic bindings; a binding cycle
/// is cut by leaving the revisited variable unresolved.
pub fn resolve(catalog: &dyn TypeCatalog, ty: &Type, bindings: &Bindings) -> Type {
    let mut resolver = Resolver {
        catalog,
        bindings: bindings.clone(),
        in_progress: HashSet::new(),
    };
    dispatch(&mut resolver, ty)
}

/// A raw generic class is reinterpreted as an instantiation of its own
/// declared parameters, so they become resolvable variables rather than
/// staying opaque.
pub(crate) fn as_implicit_parameterized(
    catalog: &dyn TypeCatalog,
    nominal: &Nominal,
) -> Option<Parameterized> {
    let params = catalog.declared_parameters(nominal);
    if params.is_empty() {
        return None;
    }
    Some(Parameterized {
        owner: None,
        raw: Box::new(Type::Nominal(nominal.clone())),
        args: params.iter().copied().map(Type::Variable).collect(),
    })
}

/// Rebuild an array around a substituted component: nominal components give
/// the concrete nominal array, anything else stays a generic array.
pub(crate) fn rebuild_array(component: Type) -> Type {
    match component {
        Type::Nominal(nominal) => Type::Nominal(Nominal::Array(Box::new(nominal))),
        other => Type::Array(Box::new(other)),
    }
}

struct Resolver<'a> {
    catalog: &'a dyn TypeCatalog,
    bindings: Bindings,
    in_progress: HashSet<TypeVarId>,
}

impl TypeVisitor for Resolver<'_> {
    type Output = Type;

    fn visit_nominal(&mut self, nominal: &Nominal) -> Type {
        match as_implicit_parameterized(self.catalog, nominal) {
            Some(parameterized) => self.visit_parameterized(&parameterized),
            None => Type::Nominal(nominal.clone()),
        }
    }

    fn visit_parameterized(&mut self, parameterized: &Parameterized) -> Type {
        let args = parameterized
            .args
            .iter()
            .map(|arg| dispatch(self, arg))
            .collect();
        let raw = erase(self.catalog, &parameterized.raw);
        Type::Parameterized(Parameterized {
            owner: parameterized.owner.clone(),
            raw: Box::new(Type::Nominal(raw)),
            args,
        })
    }

    fn visit_wildcard(&mut self, wildcard: &Wildcard) -> Type {
        let upper = wildcard.upper.iter().map(|b| dispatch(self, b)).collect();
        let lower = wildcard.lower.iter().map(|b| dispatch(self, b)).collect();
        Type::Wildcard(Wildcard { upper, lower })
    }

    fn visit_array(&mut self, component: &Type) -> Type {
        rebuild_array(dispatch(self, component))
    }

    fn visit_variable(&mut self, variable: TypeVarId) -> Type {
        let Some(bound) = self.bindings.get(variable).cloned() else {
            return Type::Variable(variable);
        };
        if !self.in_progress.insert(variable) {
            // Binding cycle; leave the variable unresolved rather than hang.
            return Type::Variable(variable);
        }
        let resolved = dispatch(self, &bound);
        self.in_progress.remove(&variable);
        resolved
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use wyvern_types::{parameterized, wildcard, TypeStore};

    use super::*;

    #[test]
    fn empty_bindings_leave_variables_untouched() {
        let mut store = TypeStore::with_minimal_jdk();
        let list = store.class_id("java.util.List").unwrap();
        let t = store.add_type_param("T", vec![Type::class(store.well_known().object)]);
        let ty = parameterized(None, Type::class(list), vec![Type::Variable(t)]);

        assert_eq!(resolve(&store, &ty, &Bindings::new()), ty);
    }

    #[test]
    fn bindings_substitute_recursively_through_every_position() {
        let mut store = TypeStore::with_minimal_jdk();
        let list = store.class_id("java.util.List").unwrap();
        let string = Type::class(store.well_known().string);
        let t = store.add_type_param("T", vec![Type::class(store.well_known().object)]);

        let bindings: Bindings = [(t, string.clone())].into_iter().collect();

        let in_args = parameterized(None, Type::class(list), vec![Type::Variable(t)]);
        assert_eq!(
            resolve(&store, &in_args, &bindings),
            parameterized(None, Type::class(list), vec![string.clone()])
        );

        let in_array = Type::Array(Box::new(Type::Variable(t)));
        assert_eq!(
            resolve(&store, &in_array, &bindings),
            Type::Nominal(Nominal::Array(Box::new(Nominal::Class(
                store.well_known().string
            ))))
        );

        let in_wildcard = wildcard(vec![Type::Variable(t)], vec![Type::Variable(t)]);
        assert_eq!(
            resolve(&store, &in_wildcard, &bindings),
            wildcard(vec![string.clone()], vec![string])
        );
    }

    #[test]
    fn variable_chains_unwind_fully() {
        let mut store = TypeStore::with_minimal_jdk();
        let object = Type::class(store.well_known().object);
        let string = Type::class(store.well_known().string);
        let t = store.add_type_param("T", vec![object.clone()]);
        let u = store.add_type_param("U", vec![object]);

        let bindings: Bindings = [(t, Type::Variable(u)), (u, string.clone())]
            .into_iter()
            .collect();
        assert_eq!(resolve(&store, &Type::Variable(t), &bindings), string);
    }

    #[test]
    fn a_raw_generic_class_becomes_its_own_instantiation() {
        let store = TypeStore::with_minimal_jdk();
        let list = store.class_id("java.util.List").unwrap();
        let list_e = store.class(list).unwrap().type_params[0];
        let string = Type::class(store.well_known().string);

        let bindings: Bindings = [(list_e, string.clone())].into_iter().collect();
        assert_eq!(
            resolve(&store, &Type::class(list), &bindings),
            parameterized(None, Type::class(list), vec![string])
        );
    }

    #[test]
    fn resolution_is_idempotent_for_acyclic_bindings() {
        let mut store = TypeStore::with_minimal_jdk();
        let list = store.class_id("java.util.List").unwrap();
        let t = store.add_type_param("T", vec![Type::class(store.well_known().object)]);
        let bindings: Bindings = [(t, Type::class(store.well_known().integer))]
            .into_iter()
            .collect();

        let ty = parameterized(
            None,
            Type::class(list),
            vec![Type::Array(Box::new(Type::Variable(t)))],
        );
        let once = resolve(&store, &ty, &bindings);
        let twice = resolve(&store, &once, &bindings);
        assert_eq!(once, twice);
    }

    #[test]
    fn binding_cycles_are_cut_instead_of_hanging() {
        let mut store = TypeStore::with_minimal_jdk();
        let object = Type::class(store.well_known().object);
        let t = store.add_type_param("T", vec![object.clone()]);
        let u = store.add_type_param("U", vec![object]);

        let bindings: Bindings = [(t, Type::Variable(u)), (u, Type::Variable(t))]
            .into_iter()
            .collect();
        // The cycle is cut at the revisited variable.
        assert_eq!(
            resolve(&store, &Type::Variable(t), &bindings),
            Type::Variable(t)
        );
    }
}
