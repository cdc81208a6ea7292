//! Caller permission context.

use std::collections::HashSet;

use crate::Permission;

/// The set of permissions attached to the current session.
///
/// Built once at authentication time from the raw permission strings the
/// session carries; read-only for the remainder of the session. Strings that
/// do not follow the wire format are dropped here, so a misbehaving upstream
/// collaborator fails closed rather than open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionContext {
    granted: HashSet<Permission>,
}

impl PermissionContext {
    /// An empty context: denies everything.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from raw wire strings, skipping anything malformed.
    pub fn from_strings<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let granted = raw
            .into_iter()
            .filter_map(|s| match s.as_ref().parse::<Permission>() {
                Ok(p) => Some(p),
                Err(err) => {
                    tracing::debug!(raw = s.as_ref(), %err, "skipping malformed permission");
                    None
                }
            })
            .collect();
        Self { granted }
    }

    pub fn contains(&self, permission: &Permission) -> bool {
        self.granted.contains(permission)
    }

    pub fn is_superuser(&self) -> bool {
        self.granted.contains(&Permission::Superuser)
    }

    pub fn is_empty(&self) -> bool {
        self.granted.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Permission> {
        self.granted.iter()
    }
}

impl FromIterator<Permission> for PermissionContext {
    fn from_iter<I: IntoIterator<Item = Permission>>(iter: I) -> Self {
        Self {
            granted: iter.into_iter().collect(),
        }
    }
}
