//! Erasure: reduce any expression to its concrete runtime form.

use wyvern_types::{Nominal, Parameterized, Type, TypeCatalog, TypeVarId, Wildcard};

use crate::visit::{dispatch, TypeVisitor};

/// The erased (raw) nominal type of `ty`.
///
/// Generic argument detail is discarded; wildcards and variables reduce to
/// their first upper bound, or to `Object` when unbounded. Lower bounds
/// never affect erasure: a `? super X` wildcard erases to `Object`, not `X`.
/// Total and deterministic; a variable declaration missing from the catalog
/// degrades to `Object`.
pub fn erase(catalog: &dyn TypeCatalog, ty: &Type) -> Nominal {
    dispatch(&mut Eraser { catalog }, ty)
}

struct Eraser<'a> {
    catalog: &'a dyn TypeCatalog,
}

impl TypeVisitor for Eraser<'_> {
    type Output = Nominal;

    fn visit_nominal(&mut self, nominal: &Nominal) -> Nominal {
        nominal.clone()
    }

    fn visit_parameterized(&mut self, parameterized: &Parameterized) -> Nominal {
        dispatch(self, &parameterized.raw)
    }

    fn visit_wildcard(&mut self, wildcard: &Wildcard) -> Nominal {
        match wildcard.upper.first() {
            Some(bound) => dispatch(self, bound),
            None => Nominal::Class(self.catalog.well_known().object),
        }
    }

    fn visit_array(&mut self, component: &Type) -> Nominal {
        Nominal::Array(Box::new(dispatch(self, component)))
    }

    fn visit_variable(&mut self, variable: TypeVarId) -> Nominal {
        let catalog = self.catalog;
        match catalog
            .type_param(variable)
            .and_then(|def| def.upper_bounds.first())
        {
            Some(bound) => dispatch(self, bound),
            None => Nominal::Class(catalog.well_known().object),
        }
    }
}
