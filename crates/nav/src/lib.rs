//! `corehr-nav` — navigation, breadcrumbs, and sidebar presentation state.
//!
//! Everything here is derived: navigation from the registry filtered by the
//! caller's permissions, breadcrumbs from the current path, both fresh on
//! every call. The only state this crate owns is the sidebar collapse flag,
//! a pure presentation preference with no permission or routing logic.

pub mod breadcrumbs;
pub mod labels;
pub mod navigation;
pub mod sidebar;

pub use breadcrumbs::{Crumb, build_breadcrumbs};
pub use navigation::{NavGroup, build_navigation, visible_features};
pub use sidebar::{FileStore, MemoryStore, PreferenceStore, SidebarScope, SidebarState};
