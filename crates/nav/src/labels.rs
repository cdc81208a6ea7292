//! The label-resolution tables.
//!
//! One point of truth for "how is this path segment displayed": the group
//! table, the utility-path labels, and the segment overrides consulted by
//! the breadcrumb deriver. Overrides are keyed either by cumulative sub-path
//! (exact match, checked first) or by single segment.

use corehr_core::ModuleId;

/// Fixed navigation group per module; anything missing lands in [`OTHER_GROUP`].
const GROUPS: &[(ModuleId, &str)] = &[
    (ModuleId::Employees, "Workforce"),
    (ModuleId::Attendance, "Workforce"),
    (ModuleId::Leaves, "Workforce"),
    (ModuleId::Payroll, "Compensation"),
    (ModuleId::Expenses, "Compensation"),
    (ModuleId::Benefits, "Compensation"),
    (ModuleId::Recruitment, "Talent"),
    (ModuleId::Performance, "Talent"),
    (ModuleId::Training, "Talent"),
    (ModuleId::Documents, "Workplace"),
    (ModuleId::Assets, "Workplace"),
    (ModuleId::Announcements, "Workplace"),
];

pub const OTHER_GROUP: &str = "Other";

/// Display order of navigation groups.
pub const GROUP_ORDER: &[&str] = &["Workforce", "Compensation", "Talent", "Workplace", OTHER_GROUP];

pub fn group_label(module: ModuleId) -> &'static str {
    GROUPS
        .iter()
        .find(|(id, _)| *id == module)
        .map(|(_, label)| *label)
        .unwrap_or(OTHER_GROUP)
}

/// Top-level utility paths that are not owned by any module.
const UTILITY_PATHS: &[(&str, &str, &str)] = &[
    ("/modules", "Modules", "layout-grid"),
    ("/dashboard", "My Dashboard", "gauge"),
    ("/login", "Sign In", "log-in"),
];

pub(crate) fn utility_label(path: &str) -> Option<(&'static str, &'static str)> {
    UTILITY_PATHS
        .iter()
        .find(|(p, _, _)| *p == path)
        .map(|(_, label, icon)| (*label, *icon))
}

/// Known sub-path and segment labels, keyed by cumulative path or bare
/// segment. Cumulative entries exist where a segment's meaning depends on
/// where it sits; segment entries cover spellings humanization gets wrong.
const SEGMENT_OVERRIDES: &[(&str, &str)] = &[
    // Cumulative sub-paths.
    ("/employees/admin/table", "Employee Table"),
    ("/leaves/balance", "Leave Balance"),
    ("/payroll/admin/runs", "Payroll Runs"),
    ("/attendance/timesheet", "My Timesheet"),
    ("/payroll", "My Payslips"),
    // Bare segments.
    ("admin", "Administration"),
    ("my-learning", "My Learning"),
    ("my-documents", "My Documents"),
    ("my-assets", "My Assets"),
    ("org-chart", "Org Chart"),
    ("hr", "HR"),
    ("faq", "FAQ"),
];

fn override_for(key: &str) -> Option<&'static str> {
    SEGMENT_OVERRIDES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, label)| *label)
}

/// Label for the segment ending `cumulative`, by precedence: cumulative
/// override, segment override, UUID-shaped segment, humanized text.
pub(crate) fn segment_label(cumulative: &str, segment: &str) -> String {
    if let Some(label) = override_for(cumulative).or_else(|| override_for(segment)) {
        return label.to_string();
    }
    if uuid::Uuid::parse_str(segment).is_ok() {
        return "Details".to_string();
    }
    humanize(segment)
}

/// Fallback humanization: separators become spaces, words are capitalized.
pub fn humanize(segment: &str) -> String {
    segment
        .split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_module_has_a_group() {
        for id in ModuleId::ALL {
            assert_ne!(group_label(id), OTHER_GROUP, "{id} should be grouped");
            assert!(GROUP_ORDER.contains(&group_label(id)));
        }
    }

    #[test]
    fn humanize_splits_and_capitalizes() {
        assert_eq!(humanize("tax-documents"), "Tax Documents");
        assert_eq!(humanize("company_policies"), "Company Policies");
        assert_eq!(humanize("feedback"), "Feedback");
        assert_eq!(humanize(""), "");
    }

    #[test]
    fn cumulative_override_beats_segment_override() {
        // "/payroll" has a cumulative entry; the bare segment would humanize.
        assert_eq!(segment_label("/payroll", "payroll"), "My Payslips");
        assert_eq!(segment_label("/expenses/payroll", "payroll"), "Payroll");
    }

    #[test]
    fn uuid_segments_become_details() {
        let seg = "123e4567-e89b-12d3-a456-426614174000";
        assert_eq!(segment_label(&format!("/employees/{seg}"), seg), "Details");
    }

    #[test]
    fn segment_override_applies_anywhere() {
        assert_eq!(segment_label("/training/my-learning", "my-learning"), "My Learning");
        assert_eq!(segment_label("/leaves/admin", "admin"), "Administration");
    }
}
