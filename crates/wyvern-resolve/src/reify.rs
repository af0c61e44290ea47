//! Reification: substitution that always produces a concrete expression.

use std::collections::HashSet;

use wyvern_types::{
    Bindings, Nominal, Parameterized, Type, TypeCatalog, TypeError, TypeVarId, Wildcard,
};

use crate::common_super::common_super;
use crate::erase::erase;
use crate::resolve::{as_implicit_parameterized, rebuild_array};
use crate::visit::{dispatch, TypeVisitor};

/// Substitute `bindings` into `ty` like [`crate::resolve`], but never leave a
/// variable or wildcard behind.
///
/// An unmapped variable falls back to its first declared bound (reified in
/// turn), or to `Object` when it has none. A wildcard is structurally
/// resolved and then collapsed to the common supertype of its upper bounds;
/// a reified expression is never itself a wildcard. The bindings are
/// snapshotted at this entry point.
pub fn reify(catalog: &dyn TypeCatalog, ty: &Type, bindings: &Bindings) -> Result<Type, TypeError> {
    let mut reifier = Reifier {
        catalog,
        bindings: bindings.clone(),
        in_progress: HashSet::new(),
    };
    dispatch(&mut reifier, ty)
}

struct Reifier<'a> {
    catalog: &'a dyn TypeCatalog,
    bindings: Bindings,
    in_progress: HashSet<TypeVarId>,
}

impl TypeVisitor for Reifier<'_> {
    type Output = Result<Type, TypeError>;

    fn visit_nominal(&mut self, nominal: &Nominal) -> Self::Output {
        match as_implicit_parameterized(self.catalog, nominal) {
            Some(parameterized) => self.visit_parameterized(&parameterized),
            None => Ok(Type::Nominal(nominal.clone())),
        }
    }

    fn visit_parameterized(&mut self, parameterized: &Parameterized) -> Self::Output {
        let mut args = Vec::with_capacity(parameterized.args.len());
        for arg in &parameterized.args {
            args.push(dispatch(self, arg)?);
        }
        let raw = erase(self.catalog, &parameterized.raw);
        Ok(Type::Parameterized(Parameterized {
            owner: parameterized.owner.clone(),
            raw: Box::new(Type::Nominal(raw)),
            args,
        }))
    }

    fn visit_wildcard(&mut self, wildcard: &Wildcard) -> Self::Output {
        // Lower bounds never survive reification; only the upper bounds feed
        // the collapse.
        let mut upper = Vec::with_capacity(wildcard.upper.len());
        for bound in &wildcard.upper {
            upper.push(dispatch(self, bound)?);
        }
        let collapsed = common_super(self.catalog, &upper)?;
        dispatch(self, &collapsed)
    }

    fn visit_array(&mut self, component: &Type) -> Self::Output {
        Ok(rebuild_array(dispatch(self, component)?))
    }

    fn visit_variable(&mut self, variable: TypeVarId) -> Self::Output {
        let catalog = self.catalog;
        if !self.in_progress.insert(variable) {
            // Self-referential bound such as `T extends Comparable<T>`; cut
            // the cycle at the top type.
            return Ok(Type::class(catalog.well_known().object));
        }
        let reified = match self.bindings.get(variable).cloned() {
            Some(bound) => dispatch(self, &bound),
            None => match catalog
                .type_param(variable)
                .and_then(|def| def.upper_bounds.first())
                .cloned()
            {
                Some(bound) => dispatch(self, &bound),
                None => Ok(Type::class(catalog.well_known().object)),
            },
        };
        self.in_progress.remove(&variable);
        reified
    }
}
