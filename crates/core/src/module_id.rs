//! The closed enumeration of business modules.
//!
//! New modules are added here and in the catalog crate's module table, and
//! nowhere else. Everything downstream (permissions, routing, navigation)
//! treats this enumeration as final.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Identifier of a top-level business module.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleId {
    Employees,
    Attendance,
    Leaves,
    Payroll,
    Expenses,
    Benefits,
    Recruitment,
    Performance,
    Training,
    Documents,
    Assets,
    Announcements,
}

impl ModuleId {
    /// Every module, in canonical catalog order.
    pub const ALL: [ModuleId; 12] = [
        ModuleId::Employees,
        ModuleId::Attendance,
        ModuleId::Leaves,
        ModuleId::Payroll,
        ModuleId::Expenses,
        ModuleId::Benefits,
        ModuleId::Recruitment,
        ModuleId::Performance,
        ModuleId::Training,
        ModuleId::Documents,
        ModuleId::Assets,
        ModuleId::Announcements,
    ];

    /// Wire/lookup string, also the first segment of permission tokens.
    pub fn as_str(self) -> &'static str {
        match self {
            ModuleId::Employees => "employees",
            ModuleId::Attendance => "attendance",
            ModuleId::Leaves => "leaves",
            ModuleId::Payroll => "payroll",
            ModuleId::Expenses => "expenses",
            ModuleId::Benefits => "benefits",
            ModuleId::Recruitment => "recruitment",
            ModuleId::Performance => "performance",
            ModuleId::Training => "training",
            ModuleId::Documents => "documents",
            ModuleId::Assets => "assets",
            ModuleId::Announcements => "announcements",
        }
    }

    /// Position in [`ModuleId::ALL`]; stable, used for dense indexing.
    pub fn ordinal(self) -> usize {
        self as usize
    }
}

impl core::fmt::Display for ModuleId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModuleId {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.as_str() == value)
            .ok_or_else(|| ParseError::unknown_module(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_exhaustive_and_ordered() {
        for (idx, module) in ModuleId::ALL.iter().enumerate() {
            assert_eq!(module.ordinal(), idx);
        }
    }

    #[test]
    fn round_trips_through_wire_string() {
        for module in ModuleId::ALL {
            assert_eq!(module.as_str().parse::<ModuleId>().unwrap(), module);
        }
    }

    #[test]
    fn unknown_module_fails_loud() {
        let err = "timesheets".parse::<ModuleId>().unwrap_err();
        assert_eq!(err, ParseError::unknown_module("timesheets"));
    }
}
