//! Route guard pair.
//!
//! Two composable checks gate protected content: authentication (session
//! present and unexpired) and module access (permission check, optionally
//! against the admin area). A failed check is a policy outcome, not an
//! error: the caller receives a redirect target and renders nothing. Denials
//! are deliberately not logged — they happen on every normal navigation.

use chrono::{DateTime, Utc};

use corehr_core::ModuleId;

use crate::{PermissionContext, SessionClaims, can_access_admin, can_access_module, validate_claims};

/// Redirect target for unauthenticated callers.
pub const LOGIN_ROUTE: &str = "/login";

/// Neutral landing route for authenticated but unauthorized callers.
pub const MODULES_ROUTE: &str = "/modules";

/// Authentication state, derived synchronously from the session claims.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AuthState {
    Authenticated,
    Unauthenticated,
}

impl AuthState {
    /// Single synchronous check: a session is authenticated iff claims are
    /// present and their time window is valid at `now`.
    pub fn from_claims(claims: Option<&SessionClaims>, now: DateTime<Utc>) -> Self {
        match claims {
            Some(c) if validate_claims(c, now).is_ok() => AuthState::Authenticated,
            _ => AuthState::Unauthenticated,
        }
    }

    pub fn is_authenticated(self) -> bool {
        self == AuthState::Authenticated
    }
}

/// What the hosting router should do with the guarded content.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Render the protected content.
    Render,
    /// Do not render; navigate to the given path instead.
    Redirect(&'static str),
}

impl GuardOutcome {
    pub fn is_render(self) -> bool {
        self == GuardOutcome::Render
    }

    pub fn redirect_target(self) -> Option<&'static str> {
        match self {
            GuardOutcome::Render => None,
            GuardOutcome::Redirect(path) => Some(path),
        }
    }
}

/// Authentication guard: unauthenticated callers go to the login entry point.
pub fn require_authenticated(
    claims: Option<&SessionClaims>,
    now: DateTime<Utc>,
) -> GuardOutcome {
    match AuthState::from_claims(claims, now) {
        AuthState::Authenticated => GuardOutcome::Render,
        AuthState::Unauthenticated => GuardOutcome::Redirect(LOGIN_ROUTE),
    }
}

/// Module guard: callers without access go to the neutral module picker.
pub fn require_module(ctx: &PermissionContext, module: ModuleId, as_admin: bool) -> GuardOutcome {
    let allowed = if as_admin {
        can_access_admin(ctx, module)
    } else {
        can_access_module(ctx, module)
    };
    if allowed {
        GuardOutcome::Render
    } else {
        GuardOutcome::Redirect(MODULES_ROUTE)
    }
}

/// The composed pair, authentication first: `Authenticated(ModuleGated(_))`.
pub fn guard(
    claims: Option<&SessionClaims>,
    now: DateTime<Utc>,
    ctx: &PermissionContext,
    module: ModuleId,
    as_admin: bool,
) -> GuardOutcome {
    match require_authenticated(claims, now) {
        GuardOutcome::Render => require_module(ctx, module, as_admin),
        redirect => redirect,
    }
}
