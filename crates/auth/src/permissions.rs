//! Typed permission model.
//!
//! Permissions travel over the wire as strings (`"{module}:{action}"`, or the
//! bare literal `"admin"` for the superuser grant). This module owns the only
//! mapping between that format and the typed model; nothing else in the
//! workspace assembles or splits permission strings.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use corehr_core::{ModuleId, ParseError};

/// Action half of a module-scoped permission.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    View,
    Create,
    Update,
    Delete,
    Admin,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::View,
        Action::Create,
        Action::Update,
        Action::Delete,
        Action::Admin,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Action::View => "view",
            Action::Create => "create",
            Action::Update => "update",
            Action::Delete => "delete",
            Action::Admin => "admin",
        }
    }
}

impl core::fmt::Display for Action {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "view" => Ok(Action::View),
            "create" => Ok(Action::Create),
            "update" => Ok(Action::Update),
            "delete" => Ok(Action::Delete),
            "admin" => Ok(Action::Admin),
            other => Err(ParseError::unknown_action(other)),
        }
    }
}

/// A capability held by (or required of) a caller.
///
/// `Superuser` is the bare `"admin"` wire literal: it grants every action on
/// every module and exists so policy layers never hardcode a magic string.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Permission {
    Superuser,
    Scoped { module: ModuleId, action: Action },
}

impl Permission {
    pub fn scoped(module: ModuleId, action: Action) -> Self {
        Self::Scoped { module, action }
    }

    pub fn is_superuser(self) -> bool {
        matches!(self, Permission::Superuser)
    }

    /// The module this permission is scoped to, if any.
    pub fn module(self) -> Option<ModuleId> {
        match self {
            Permission::Superuser => None,
            Permission::Scoped { module, .. } => Some(module),
        }
    }
}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Permission::Superuser => f.write_str("admin"),
            Permission::Scoped { module, action } => write!(f, "{}:{}", module, action),
        }
    }
}

impl FromStr for Permission {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value == "admin" {
            return Ok(Permission::Superuser);
        }
        let Some((module, action)) = value.split_once(':') else {
            return Err(ParseError::malformed_permission(value));
        };
        if module.is_empty() || action.is_empty() || action.contains(':') {
            return Err(ParseError::malformed_permission(value));
        }
        Ok(Permission::Scoped {
            module: module.parse()?,
            action: action.parse()?,
        })
    }
}

impl Serialize for Permission {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Permission {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn superuser_wire_literal() {
        assert_eq!(Permission::Superuser.to_string(), "admin");
        assert_eq!("admin".parse::<Permission>().unwrap(), Permission::Superuser);
    }

    #[test]
    fn scoped_wire_format() {
        let p = Permission::scoped(ModuleId::Employees, Action::View);
        assert_eq!(p.to_string(), "employees:view");
        assert_eq!("employees:view".parse::<Permission>().unwrap(), p);
    }

    #[test]
    fn malformed_tokens_rejected() {
        for raw in ["", "employees", "employees:", ":view", "employees:view:extra"] {
            assert!(raw.parse::<Permission>().is_err(), "accepted {:?}", raw);
        }
    }

    #[test]
    fn unknown_module_or_action_rejected() {
        assert!(matches!(
            "timesheets:view".parse::<Permission>(),
            Err(ParseError::UnknownModule(_))
        ));
        assert!(matches!(
            "employees:approve".parse::<Permission>(),
            Err(ParseError::UnknownAction(_))
        ));
    }

    #[test]
    fn serde_uses_the_wire_string() {
        let p = Permission::scoped(ModuleId::Payroll, Action::Admin);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, "\"payroll:admin\"");
        assert_eq!(serde_json::from_str::<Permission>(&json).unwrap(), p);
    }
}
