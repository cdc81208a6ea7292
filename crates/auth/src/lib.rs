//! `corehr-auth` — pure authorization boundary (zero-trust).
//!
//! This crate is intentionally decoupled from HTTP, storage, and rendering:
//! it evaluates permissions, validates session claims, and turns both into
//! guard decisions the hosting router acts on.

pub mod claims;
pub mod context;
pub mod evaluate;
pub mod guard;
pub mod permissions;

pub use claims::{SessionClaims, TokenValidationError, validate_claims};
pub use context::PermissionContext;
pub use evaluate::{can_access_admin, can_access_module, can_perform, has_permission};
pub use guard::{
    AuthState, GuardOutcome, LOGIN_ROUTE, MODULES_ROUTE, guard, require_authenticated,
    require_module,
};
pub use permissions::{Action, Permission};
