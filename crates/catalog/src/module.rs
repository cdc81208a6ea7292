//! Module and feature configuration types.

use std::borrow::Cow;

use serde::Serialize;

use corehr_auth::{Action, Permission};
use corehr_core::ModuleId;

use crate::resolver::path_owns;

/// The five permissions gating a module, derived mechanically from its id.
///
/// Escalation between them (admin implies the rest) is the evaluator's
/// business, not encoded here.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct ModulePermissions {
    pub view: Permission,
    pub create: Permission,
    pub update: Permission,
    pub delete: Permission,
    pub admin: Permission,
}

impl ModulePermissions {
    pub fn of(module: ModuleId) -> Self {
        Self {
            view: Permission::scoped(module, Action::View),
            create: Permission::scoped(module, Action::Create),
            update: Permission::scoped(module, Action::Update),
            delete: Permission::scoped(module, Action::Delete),
            admin: Permission::scoped(module, Action::Admin),
        }
    }
}

/// A named, routable capability within a module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feature {
    /// Identifier scoped to the owning module.
    pub id: Cow<'static, str>,
    pub name: Cow<'static, str>,
    pub description: Cow<'static, str>,
    /// Must live under the owning module's namespace (validated at registry
    /// construction).
    pub route: Cow<'static, str>,
    pub icon: Option<Cow<'static, str>>,
    /// Permissions beyond module view required to use the feature.
    pub required_permissions: Vec<Permission>,
}

impl Feature {
    pub fn new(
        id: impl Into<Cow<'static, str>>,
        name: impl Into<Cow<'static, str>>,
        description: impl Into<Cow<'static, str>>,
        route: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            route: route.into(),
            icon: None,
            required_permissions: Vec::new(),
        }
    }

    pub fn with_icon(mut self, icon: impl Into<Cow<'static, str>>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn requiring(mut self, permissions: impl IntoIterator<Item = Permission>) -> Self {
        self.required_permissions = permissions.into_iter().collect();
        self
    }
}

/// Full configuration of one business module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Module {
    pub id: ModuleId,
    pub name: Cow<'static, str>,
    pub description: Cow<'static, str>,
    pub icon: Cow<'static, str>,
    /// Base route; owns every path under it.
    pub route: Cow<'static, str>,
    /// Admin sub-tree root, nested under the base route by convention.
    pub admin_route: Cow<'static, str>,
    pub permissions: ModulePermissions,
    pub features: Vec<Feature>,
    pub admin_features: Vec<Feature>,
}

impl Module {
    /// A module rooted at `/{id}` with admin area `/{id}/admin`.
    pub fn new(
        id: ModuleId,
        name: impl Into<Cow<'static, str>>,
        description: impl Into<Cow<'static, str>>,
        icon: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            icon: icon.into(),
            route: Cow::Owned(format!("/{}", id.as_str())),
            admin_route: Cow::Owned(format!("/{}/admin", id.as_str())),
            permissions: ModulePermissions::of(id),
            features: Vec::new(),
            admin_features: Vec::new(),
        }
    }

    pub fn with_route(mut self, route: impl Into<Cow<'static, str>>) -> Self {
        self.route = route.into();
        self
    }

    pub fn with_admin_route(mut self, admin_route: impl Into<Cow<'static, str>>) -> Self {
        self.admin_route = admin_route.into();
        self
    }

    pub fn with_features(mut self, features: impl IntoIterator<Item = Feature>) -> Self {
        self.features = features.into_iter().collect();
        self
    }

    pub fn with_admin_features(mut self, features: impl IntoIterator<Item = Feature>) -> Self {
        self.admin_features = features.into_iter().collect();
        self
    }

    /// Is `path` inside this module's admin sub-tree?
    pub fn is_admin_path(&self, path: &str) -> bool {
        path_owns(&self.admin_route, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_derive_from_the_id() {
        let m = Module::new(ModuleId::Leaves, "Leaves", "Leave management", "calendar-off");
        assert_eq!(m.route, "/leaves");
        assert_eq!(m.admin_route, "/leaves/admin");
        assert_eq!(m.permissions, ModulePermissions::of(ModuleId::Leaves));
    }

    #[test]
    fn admin_path_classification() {
        let m = Module::new(ModuleId::Employees, "Employees", "", "users");
        assert!(m.is_admin_path("/employees/admin"));
        assert!(m.is_admin_path("/employees/admin/table"));
        assert!(!m.is_admin_path("/employees"));
        // A segment merely starting with "admin" is not the admin sub-tree.
        assert!(!m.is_admin_path("/employees/administration"));
    }
}
