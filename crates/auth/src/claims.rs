//! Session claims model (transport-agnostic).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use corehr_core::UserId;

use crate::PermissionContext;

/// The minimal claims the engine expects once a session token has been
/// decoded/verified by whatever transport layer is in use.
///
/// Permissions travel as raw wire strings; [`SessionClaims::permission_context`]
/// is the one place they are parsed into the typed model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject / user identifier.
    pub sub: UserId,

    /// Permission strings granted to the session.
    pub permissions: Vec<String>,

    /// Issued-at timestamp.
    pub issued_at: DateTime<Utc>,

    /// Expiration timestamp.
    pub expires_at: DateTime<Utc>,
}

impl SessionClaims {
    /// Parse the raw permission strings into the typed caller context.
    ///
    /// Performed once per session and cached by the caller; malformed entries
    /// fail closed (see [`PermissionContext::from_strings`]).
    pub fn permission_context(&self) -> PermissionContext {
        PermissionContext::from_strings(&self.permissions)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenValidationError {
    #[error("session has expired")]
    Expired,

    #[error("session not yet valid (issued_at is in the future)")]
    NotYetValid,

    #[error("invalid session time window (expires_at <= issued_at)")]
    InvalidTimeWindow,
}

/// Deterministically validate session claims.
///
/// Note: this validates the *claims* only. Signature verification / decoding
/// is intentionally outside this crate.
pub fn validate_claims(
    claims: &SessionClaims,
    now: DateTime<Utc>,
) -> Result<(), TokenValidationError> {
    if claims.expires_at <= claims.issued_at {
        return Err(TokenValidationError::InvalidTimeWindow);
    }
    if now < claims.issued_at {
        return Err(TokenValidationError::NotYetValid);
    }
    if now >= claims.expires_at {
        return Err(TokenValidationError::Expired);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn claims(issued: DateTime<Utc>, expires: DateTime<Utc>) -> SessionClaims {
        SessionClaims {
            sub: UserId::new(),
            permissions: vec!["employees:view".to_string()],
            issued_at: issued,
            expires_at: expires,
        }
    }

    #[test]
    fn valid_window_passes() {
        let now = Utc::now();
        let c = claims(now - Duration::minutes(5), now + Duration::minutes(5));
        assert_eq!(validate_claims(&c, now), Ok(()));
    }

    #[test]
    fn expired_session_rejected() {
        let now = Utc::now();
        let c = claims(now - Duration::minutes(10), now - Duration::minutes(1));
        assert_eq!(validate_claims(&c, now), Err(TokenValidationError::Expired));
    }

    #[test]
    fn future_session_rejected() {
        let now = Utc::now();
        let c = claims(now + Duration::minutes(1), now + Duration::minutes(10));
        assert_eq!(validate_claims(&c, now), Err(TokenValidationError::NotYetValid));
    }

    #[test]
    fn inverted_window_rejected() {
        let now = Utc::now();
        let c = claims(now, now - Duration::minutes(1));
        assert_eq!(
            validate_claims(&c, now),
            Err(TokenValidationError::InvalidTimeWindow)
        );
    }
}
