//! Harvesting type-variable bindings from a type's inheritance graph.

use std::collections::{HashSet, VecDeque};

use tracing::trace;
use wyvern_types::{Bindings, Type, TypeCatalog};

use crate::erase::erase;

/// Discover which declared type variables are bound to which expressions by
/// `ty`'s position in its supertype graph.
///
/// Breadth-first from `ty`: a parameterized node pairs its raw type's
/// declared parameters positionally with its arguments, first-wins, so the
/// nearest declaration shadows a more distant ancestor's; a bare nominal
/// node contributes nothing itself but enqueues its generic superclass and
/// interfaces from the catalog. Other expression kinds are ignored. `None`
/// is a valid, trivially empty query.
///
/// The visited set is keyed by structural identity, so a malformed cyclic
/// class graph terminates instead of hanging.
pub fn collect_bindings(catalog: &dyn TypeCatalog, ty: Option<&Type>) -> Bindings {
    let mut bindings = Bindings::new();
    let Some(root) = ty else {
        return bindings;
    };

    let mut queue: VecDeque<Type> = VecDeque::new();
    let mut seen: HashSet<Type> = HashSet::new();
    queue.push_back(root.clone());

    while let Some(current) = queue.pop_front() {
        if !seen.insert(current.clone()) {
            continue;
        }
        match &current {
            Type::Parameterized(p) => {
                let raw = erase(catalog, &p.raw);
                let params = catalog.declared_parameters(&raw);
                for (param, arg) in params.iter().copied().zip(p.args.iter()) {
                    bindings.insert_if_absent(param, arg.clone());
                }
            }
            Type::Nominal(nominal) => {
                if let Some(super_class) = catalog.generic_superclass(nominal) {
                    queue.push_back(super_class.clone());
                }
                for iface in catalog.generic_interfaces(nominal) {
                    queue.push_back(iface.clone());
                }
            }
            _ => {}
        }
    }

    trace!(bindings = bindings.len(), "collected type variable bindings");
    bindings
}
