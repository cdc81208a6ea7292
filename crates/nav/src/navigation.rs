//! Top-level navigation, filtered by the caller's permissions.

use corehr_auth::{PermissionContext, can_access_module, has_permission};
use corehr_catalog::{Feature, Module, ModuleRegistry};

use crate::labels::{GROUP_ORDER, group_label};

/// One navigation group: a fixed label and the accessible modules under it,
/// in catalog order.
#[derive(Debug, Clone, PartialEq)]
pub struct NavGroup<'a> {
    pub label: &'static str,
    pub modules: Vec<&'a Module>,
}

/// The modules the caller may see, grouped for the top-level navigation.
///
/// Groups appear in their fixed display order; groups with no accessible
/// module are omitted entirely.
pub fn build_navigation<'a>(
    registry: &'a ModuleRegistry,
    ctx: &PermissionContext,
) -> Vec<NavGroup<'a>> {
    GROUP_ORDER
        .iter()
        .filter_map(|&label| {
            let modules: Vec<&Module> = registry
                .iter()
                .filter(|m| group_label(m.id) == label)
                .filter(|m| can_access_module(ctx, m.id))
                .collect();
            if modules.is_empty() {
                None
            } else {
                Some(NavGroup { label, modules })
            }
        })
        .collect()
}

/// The end-user features of `module` whose extra permission requirements the
/// caller satisfies. Module view access is the caller's concern; this only
/// filters on the per-feature requirements.
pub fn visible_features<'a>(module: &'a Module, ctx: &PermissionContext) -> Vec<&'a Feature> {
    module
        .features
        .iter()
        .filter(|f| f.required_permissions.iter().all(|p| has_permission(ctx, p)))
        .collect()
}
