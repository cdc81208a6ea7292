//! The immutable module registry.

use std::collections::HashSet;

use thiserror::Error;

use corehr_core::ModuleId;

use crate::data;
use crate::module::Module;
use crate::resolver::resolve_in;

/// Catalog misconfiguration, surfaced fail-fast at construction.
///
/// These are programming errors in the module table, not runtime conditions:
/// once a registry exists, none of them can occur.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The closed enumeration has a member the table does not.
    #[error("module '{0}' missing from the catalog")]
    MissingModule(ModuleId),

    /// A module appears more than once.
    #[error("module '{0}' defined twice")]
    DuplicateModule(ModuleId),

    /// Two modules claim the same base route.
    #[error("base route '{0}' claimed by more than one module")]
    DuplicateRoute(String),

    /// Two modules claim the same admin route.
    #[error("admin route '{0}' claimed by more than one module")]
    DuplicateAdminRoute(String),

    /// A module's admin route does not resolve back to the module.
    #[error("admin route '{route}' of module '{module}' resolves outside it")]
    ForeignAdminRoute { module: ModuleId, route: String },

    /// A feature's route does not resolve back to its owning module.
    #[error("feature '{feature}' of module '{module}' routes to '{route}', outside the module")]
    ForeignFeatureRoute {
        module: ModuleId,
        feature: String,
        route: String,
    },
}

/// Process-wide, read-only table of every module configuration.
///
/// Built once, validated, then shared by reference; there is no mutation
/// API. Iteration order is the insertion order of the module table.
#[derive(Debug, Clone)]
pub struct ModuleRegistry {
    modules: Vec<Module>,
    // Dense ordinal -> position map; valid because construction proves every
    // ModuleId appears exactly once.
    index: [usize; ModuleId::ALL.len()],
}

impl ModuleRegistry {
    /// Validate and freeze a module table.
    pub fn new(modules: Vec<Module>) -> Result<Self, CatalogError> {
        let mut index = [usize::MAX; ModuleId::ALL.len()];
        let mut base_routes: HashSet<&str> = HashSet::new();
        let mut admin_routes: HashSet<&str> = HashSet::new();

        for (pos, module) in modules.iter().enumerate() {
            let slot = &mut index[module.id.ordinal()];
            if *slot != usize::MAX {
                return Err(CatalogError::DuplicateModule(module.id));
            }
            *slot = pos;

            if !base_routes.insert(module.route.as_ref()) {
                return Err(CatalogError::DuplicateRoute(module.route.to_string()));
            }
            if !admin_routes.insert(module.admin_route.as_ref()) {
                return Err(CatalogError::DuplicateAdminRoute(module.admin_route.to_string()));
            }
        }

        for id in ModuleId::ALL {
            if index[id.ordinal()] == usize::MAX {
                return Err(CatalogError::MissingModule(id));
            }
        }

        // Self-consistency: admin and feature routes must resolve back to
        // their owning module under the same rules callers will use.
        let routes = || modules.iter().map(|m| (m.id, m.route.as_ref()));
        for module in &modules {
            if resolve_in(routes(), &module.admin_route) != Some(module.id) {
                return Err(CatalogError::ForeignAdminRoute {
                    module: module.id,
                    route: module.admin_route.to_string(),
                });
            }
            for feature in module.features.iter().chain(&module.admin_features) {
                if resolve_in(routes(), &feature.route) != Some(module.id) {
                    return Err(CatalogError::ForeignFeatureRoute {
                        module: module.id,
                        feature: feature.id.to_string(),
                        route: feature.route.to_string(),
                    });
                }
            }
        }

        tracing::debug!(modules = modules.len(), "module registry constructed");
        Ok(Self { modules, index })
    }

    /// The built-in HR catalog.
    pub fn with_default_catalog() -> Self {
        Self::new(data::default_modules()).expect("default catalog is internally consistent")
    }

    /// Total lookup: every `ModuleId` has exactly one entry.
    pub fn get(&self, id: ModuleId) -> &Module {
        &self.modules[self.index[id.ordinal()]]
    }

    /// Modules in stable insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Module> {
        self.modules.iter()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}
