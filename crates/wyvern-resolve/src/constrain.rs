//! Constraining a declared type to an observed runtime class.

use wyvern_types::{
    display, is_subclass, parameterized, ClassId, Nominal, Parameterized, Type, TypeCatalog,
    TypeError, TypeVarId, Wildcard,
};

use crate::visit::{dispatch, TypeVisitor};

/// Narrow `declared` to `runtime`, the concrete class observed for a value
/// at runtime.
///
/// Only the nominal case is implemented: the runtime class is by definition
/// the tightest bound on the raw type, so the result is the runtime class
/// instantiated with its own declared parameters (left as variables for a
/// later resolution pass). Propagating constraints through parameterized,
/// wildcard, array, and variable declarations is an open problem and fails
/// loudly rather than approximating.
pub fn constrain_to_runtime(
    catalog: &dyn TypeCatalog,
    declared: &Type,
    runtime: ClassId,
) -> Result<Type, TypeError> {
    let mut constrainer = Constrainer { catalog, runtime };
    dispatch(&mut constrainer, declared)
}

struct Constrainer<'a> {
    catalog: &'a dyn TypeCatalog,
    runtime: ClassId,
}

impl TypeVisitor for Constrainer<'_> {
    type Output = Result<Type, TypeError>;

    fn visit_nominal(&mut self, nominal: &Nominal) -> Self::Output {
        let catalog = self.catalog;
        let runtime = Nominal::Class(self.runtime);
        if !is_subclass(catalog, &runtime, nominal) {
            return Err(TypeError::NotASubclass {
                declared: display(catalog, &Type::Nominal(nominal.clone())),
                runtime: display(catalog, &Type::Nominal(runtime)),
            });
        }
        let params = catalog.declared_parameters(&runtime);
        if params.is_empty() {
            return Ok(Type::Nominal(runtime));
        }
        let args = params.iter().copied().map(Type::Variable).collect();
        Ok(parameterized(None, Type::Nominal(runtime), args))
    }

    fn visit_parameterized(&mut self, _: &Parameterized) -> Self::Output {
        Err(TypeError::Unsupported(
            "constraining a parameterized declared type",
        ))
    }

    fn visit_wildcard(&mut self, _: &Wildcard) -> Self::Output {
        Err(TypeError::Unsupported(
            "constraining a wildcard declared type",
        ))
    }

    fn visit_array(&mut self, _: &Type) -> Self::Output {
        Err(TypeError::Unsupported("constraining an array declared type"))
    }

    fn visit_variable(&mut self, _: TypeVarId) -> Self::Output {
        Err(TypeError::Unsupported(
            "constraining a type variable declaration",
        ))
    }
}
