//! Sidebar collapse state.
//!
//! A presentation preference, nothing more: one JSON-encoded boolean per
//! scope key in durable client storage. No permission or routing logic may
//! creep in here. Corrupt stored values recover to the default (expanded)
//! instead of propagating.

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Context;

use corehr_core::ModuleId;

/// Durable string key/value storage for presentation preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String) -> anyhow::Result<()>;
}

/// In-memory store, used in tests and as a fallback when no durable
/// location is available.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> anyhow::Result<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

/// JSON-file backed store under the platform data directory.
///
/// The whole map is read once at open and rewritten on every set; the data
/// volume is a handful of booleans, so simplicity wins over incremental IO.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl FileStore {
    /// Open (or start fresh at) the given path. An unreadable or corrupt
    /// file is recovered as an empty map rather than surfaced.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(values) => values,
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "corrupt preference file, starting fresh");
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };
        Self { path, values }
    }

    /// Open the store at its default per-user location.
    pub fn open_default() -> anyhow::Result<Self> {
        let base = dirs::data_dir().context("no platform data directory available")?;
        Ok(Self::open(base.join("corehr").join("preferences.json")))
    }

    fn persist(&self) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create preference directory {:?}", parent))?;
        }
        let raw = serde_json::to_string_pretty(&self.values)?;
        std::fs::write(&self.path, raw)
            .with_context(|| format!("failed to write preferences to {:?}", self.path))
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> anyhow::Result<()> {
        self.values.insert(key.to_string(), value);
        self.persist()
    }
}

/// What a collapse flag is scoped to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SidebarScope {
    Module(ModuleId),
    /// The ungrouped part of the sidebar.
    Global,
}

impl SidebarScope {
    /// Deterministic storage key for this scope.
    pub fn storage_key(self) -> String {
        match self {
            SidebarScope::Module(id) => format!("sidebar.collapsed.{id}"),
            SidebarScope::Global => "sidebar.collapsed.global".to_string(),
        }
    }
}

/// Per-scope collapse flags over a [`PreferenceStore`].
#[derive(Debug, Clone)]
pub struct SidebarState<S> {
    store: S,
}

impl<S: PreferenceStore> SidebarState<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// `false` (expanded) until a toggle has been stored; also `false` when
    /// the stored value does not decode as a JSON boolean.
    pub fn is_collapsed(&self, scope: SidebarScope) -> bool {
        let key = scope.storage_key();
        match self.store.get(&key) {
            None => false,
            Some(raw) => match serde_json::from_str::<bool>(&raw) {
                Ok(collapsed) => collapsed,
                Err(err) => {
                    tracing::warn!(key, %err, "corrupt sidebar state, defaulting to expanded");
                    false
                }
            },
        }
    }

    pub fn set_collapsed(&mut self, scope: SidebarScope, collapsed: bool) -> anyhow::Result<()> {
        let raw = serde_json::to_string(&collapsed)?;
        self.store.set(&scope.storage_key(), raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_read_is_expanded() {
        let state = SidebarState::new(MemoryStore::default());
        assert!(!state.is_collapsed(SidebarScope::Module(ModuleId::Employees)));
        assert!(!state.is_collapsed(SidebarScope::Global));
    }

    #[test]
    fn toggle_round_trips() {
        let mut state = SidebarState::new(MemoryStore::default());
        state
            .set_collapsed(SidebarScope::Module(ModuleId::Employees), true)
            .unwrap();
        assert!(state.is_collapsed(SidebarScope::Module(ModuleId::Employees)));
        // Other scopes are untouched.
        assert!(!state.is_collapsed(SidebarScope::Module(ModuleId::Payroll)));
    }

    #[test]
    fn corrupt_value_recovers_to_expanded() {
        let mut store = MemoryStore::default();
        store
            .set(
                &SidebarScope::Module(ModuleId::Leaves).storage_key(),
                "not-json".to_string(),
            )
            .unwrap();
        let state = SidebarState::new(store);
        assert!(!state.is_collapsed(SidebarScope::Module(ModuleId::Leaves)));
    }

    #[test]
    fn scope_keys_are_deterministic() {
        assert_eq!(
            SidebarScope::Module(ModuleId::Benefits).storage_key(),
            "sidebar.collapsed.benefits"
        );
        assert_eq!(SidebarScope::Global.storage_key(), "sidebar.collapsed.global");
    }
}
