//! Breadcrumb derivation.
//!
//! A trail is derived fresh from `(registry, path)` on every call; nothing
//! is cached and nothing is persisted. The last entry is always the current
//! location and never navigable.

use corehr_catalog::ModuleRegistry;

use crate::labels::{group_label, segment_label, utility_label};

/// One breadcrumb entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    /// Navigation target; `None` for the current location and for
    /// non-navigable grouping entries.
    pub href: Option<String>,
    pub icon: Option<String>,
}

impl Crumb {
    fn new(label: impl Into<String>, href: Option<String>, icon: Option<String>) -> Self {
        Self {
            label: label.into(),
            href,
            icon,
        }
    }

    pub fn is_navigable(&self) -> bool {
        self.href.is_some()
    }
}

/// Derive the breadcrumb trail for `path`.
pub fn build_breadcrumbs(registry: &ModuleRegistry, path: &str) -> Vec<Crumb> {
    let path = normalize(path);

    match registry.resolve_module(path) {
        Some(id) => module_trail(registry, id, path),
        None => {
            if let Some((label, icon)) = utility_label(path) {
                vec![Crumb::new(label, None, Some(icon.to_string()))]
            } else {
                segment_trail("", path)
            }
        }
    }
}

fn normalize(path: &str) -> &str {
    if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    }
}

fn module_trail(registry: &ModuleRegistry, id: corehr_core::ModuleId, path: &str) -> Vec<Crumb> {
    let module = registry.get(id);
    let mut trail = vec![
        Crumb::new("Modules", Some("/modules".to_string()), Some("layout-grid".to_string())),
        Crumb::new(group_label(id), None, None),
    ];

    let rest = path.strip_prefix(module.route.as_ref()).unwrap_or("");
    let has_children = rest.split('/').any(|s| !s.is_empty());

    let module_href = if module.is_admin_path(path) {
        module.admin_route.as_ref()
    } else {
        module.route.as_ref()
    };
    trail.push(Crumb::new(
        module.name.as_ref(),
        has_children.then(|| module_href.to_string()),
        Some(module.icon.to_string()),
    ));

    if has_children {
        trail.extend(segment_trail(module.route.as_ref(), rest));
    }
    trail
}

/// Crumbs for `rest`'s segments, with cumulative hrefs rooted at `base`.
/// Every entry but the last is navigable.
fn segment_trail(base: &str, rest: &str) -> Vec<Crumb> {
    let segments: Vec<&str> = rest.split('/').filter(|s| !s.is_empty()).collect();
    let mut cumulative = base.to_string();
    let last = segments.len().saturating_sub(1);

    segments
        .iter()
        .enumerate()
        .map(|(idx, segment)| {
            cumulative.push('/');
            cumulative.push_str(segment);
            let label = segment_label(&cumulative, segment);
            let href = (idx != last).then(|| cumulative.clone());
            Crumb::new(label, href, None)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use corehr_core::ModuleId;

    fn registry() -> ModuleRegistry {
        ModuleRegistry::with_default_catalog()
    }

    #[test]
    fn module_root_is_a_three_entry_trail() {
        let trail = build_breadcrumbs(&registry(), "/employees");
        let labels: Vec<&str> = trail.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Modules", "Workforce", "Employees"]);
        assert_eq!(trail[0].href.as_deref(), Some("/modules"));
        assert!(!trail[1].is_navigable());
        assert!(!trail[2].is_navigable(), "terminal entry must not navigate");
    }

    #[test]
    fn admin_subtree_points_the_module_at_its_admin_route() {
        let trail = build_breadcrumbs(&registry(), "/employees/admin/table");
        let labels: Vec<&str> = trail.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Modules", "Workforce", "Employees", "Administration", "Employee Table"]
        );
        assert_eq!(trail[2].href.as_deref(), Some("/employees/admin"));
        assert_eq!(trail[3].href.as_deref(), Some("/employees/admin"));
        assert!(!trail[4].is_navigable());
    }

    #[test]
    fn non_admin_subtree_points_the_module_at_its_base_route() {
        let trail = build_breadcrumbs(&registry(), "/leaves/balance");
        assert_eq!(trail[2].href.as_deref(), Some("/leaves"));
        assert_eq!(trail[3].label, "Leave Balance");
    }

    #[test]
    fn uuid_segment_is_labelled_details() {
        let trail =
            build_breadcrumbs(&registry(), "/employees/123e4567-e89b-12d3-a456-426614174000");
        let last = trail.last().unwrap();
        assert_eq!(last.label, "Details");
        assert!(!last.is_navigable());
    }

    #[test]
    fn utility_paths_yield_a_single_static_entry() {
        let trail = build_breadcrumbs(&registry(), "/modules");
        assert_eq!(trail.len(), 1);
        assert_eq!(trail[0].label, "Modules");
        assert!(!trail[0].is_navigable());
    }

    #[test]
    fn unknown_paths_humanize_segment_by_segment() {
        let trail = build_breadcrumbs(&registry(), "/settings/user-profile");
        let labels: Vec<&str> = trail.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Settings", "User Profile"]);
        assert_eq!(trail[0].href.as_deref(), Some("/settings"));
        assert!(!trail[1].is_navigable());
    }

    #[test]
    fn trailing_slash_does_not_change_the_trail() {
        let reg = registry();
        assert_eq!(
            build_breadcrumbs(&reg, "/payroll/tax-documents/"),
            build_breadcrumbs(&reg, "/payroll/tax-documents")
        );
    }

    #[test]
    fn derivation_is_deterministic() {
        let reg = registry();
        let path = "/recruitment/candidates";
        assert_eq!(build_breadcrumbs(&reg, path), build_breadcrumbs(&reg, path));
    }
}
