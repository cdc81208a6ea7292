//! `corehr-core` — shared engine primitives.
//!
//! This crate contains **pure identity** primitives (no policy, no routing,
//! no infrastructure concerns): the closed module enumeration, the user
//! identifier, and the parse error model shared by every string boundary.

pub mod error;
pub mod id;
pub mod module_id;

pub use error::{ParseError, ParseResult};
pub use id::UserId;
pub use module_id::ModuleId;
