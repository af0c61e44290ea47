//! The dispatch point the resolution algorithms share.

use wyvern_types::{Nominal, Parameterized, Type, TypeVarId, Wildcard};

/// One method per expression variant.
///
/// Every algorithm in this crate is a `TypeVisitor` and is always entered
/// through [`dispatch`], so adding a variant to [`Type`] fails to compile
/// until each algorithm handles it; there is no runtime "unknown variant"
/// path.
pub trait TypeVisitor {
    type Output;

    fn visit_nominal(&mut self, nominal: &Nominal) -> Self::Output;

    fn visit_parameterized(&mut self, parameterized: &Parameterized) -> Self::Output;

    fn visit_wildcard(&mut self, wildcard: &Wildcard) -> Self::Output;

    fn visit_array(&mut self, component: &Type) -> Self::Output;

    fn visit_variable(&mut self, variable: TypeVarId) -> Self::Output;
}

/// Route `ty` to the visitor method for its variant.
pub fn dispatch<V: TypeVisitor + ?Sized>(visitor: &mut V, ty: &Type) -> V::Output {
    match ty {
        Type::Nominal(nominal) => visitor.visit_nominal(nominal),
        Type::Parameterized(parameterized) => visitor.visit_parameterized(parameterized),
        Type::Wildcard(wildcard) => visitor.visit_wildcard(wildcard),
        Type::Array(component) => visitor.visit_array(component),
        Type::Variable(variable) => visitor.visit_variable(*variable),
    }
}
