//! `corehr-catalog` — the immutable module registry and path resolver.
//!
//! The registry is the single source of truth for what modules exist, what
//! routes they claim, and what permissions gate them. It is built once at
//! process start, validated fail-fast, and never mutated afterwards; every
//! other component receives it by reference and treats it as opaque data.

pub mod data;
pub mod module;
pub mod registry;
pub mod resolver;

pub use module::{Feature, Module, ModulePermissions};
pub use registry::{CatalogError, ModuleRegistry};
pub use resolver::path_owns;
