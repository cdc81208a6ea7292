//! Path-to-module resolution.
//!
//! One resolver, consumed everywhere a component needs to know which module
//! owns a path, so the longest-prefix tie-break cannot drift between the
//! sidebar, breadcrumb, and top-nav call sites.

use corehr_core::ModuleId;

use crate::registry::ModuleRegistry;

/// Does `route` own `path` as a path-segment prefix?
///
/// `/a` owns `/a` and `/a/b`, but not `/ab`.
pub fn path_owns(route: &str, path: &str) -> bool {
    path == route || (path.starts_with(route) && path.as_bytes().get(route.len()) == Some(&b'/'))
}

impl ModuleRegistry {
    /// Which module owns `path`, if any.
    ///
    /// Base routes are unique by construction, so at most one match is
    /// expected; if a nested catalog ever produces several, the longest
    /// matching base route wins. That tie-break is a designed invariant,
    /// not incidental behavior.
    pub fn resolve_module(&self, path: &str) -> Option<ModuleId> {
        let resolved = resolve_in(self.iter().map(|m| (m.id, m.route.as_ref())), path);
        tracing::debug!(path, module = ?resolved, "resolved path ownership");
        resolved
    }
}

/// Longest-prefix resolution over `(id, base route)` pairs.
///
/// Shared with registry validation, which must resolve feature routes before
/// the registry itself exists.
pub(crate) fn resolve_in<'a>(
    routes: impl Iterator<Item = (ModuleId, &'a str)>,
    path: &str,
) -> Option<ModuleId> {
    routes
        .filter(|(_, route)| path_owns(route, path))
        .max_by_key(|(_, route)| route.len())
        .map(|(id, _)| id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_prefix_not_string_prefix() {
        assert!(path_owns("/employees", "/employees"));
        assert!(path_owns("/employees", "/employees/directory"));
        assert!(!path_owns("/employees", "/employees-archive"));
        assert!(!path_owns("/employees", "/payroll"));
    }

    #[test]
    fn unclaimed_path_resolves_to_none() {
        let registry = ModuleRegistry::with_default_catalog();
        assert_eq!(registry.resolve_module("/settings/profile"), None);
        assert_eq!(registry.resolve_module("/"), None);
    }

    #[test]
    fn every_base_route_resolves_to_its_module() {
        let registry = ModuleRegistry::with_default_catalog();
        for module in registry.iter() {
            assert_eq!(registry.resolve_module(&module.route), Some(module.id));
            assert_eq!(
                registry.resolve_module(&format!("{}/anything/nested", module.route)),
                Some(module.id)
            );
        }
    }

    #[test]
    fn resolution_is_idempotent() {
        let registry = ModuleRegistry::with_default_catalog();
        let first = registry.resolve_module("/payroll/runs/2024-06");
        assert_eq!(first, registry.resolve_module("/payroll/runs/2024-06"));
        assert_eq!(first, Some(corehr_core::ModuleId::Payroll));
    }
}
