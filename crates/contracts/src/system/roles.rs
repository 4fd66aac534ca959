//! Sales hierarchy roles.
//!
//! The set is closed and the rank ordering is fixed: a higher rank means a
//! broader organisational scope. Navigation gating compares ranks only.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "RSM")]
    Rsm,
    #[serde(rename = "ASM")]
    Asm,
    #[serde(rename = "TSM")]
    Tsm,
    #[serde(rename = "SO")]
    So,
    #[serde(rename = "DSR")]
    Dsr,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role identifier: {0}")]
pub struct RoleParseError(pub String);

/// Hierarchy nodes a role is scoped to after login
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleScope {
    pub user_id: &'static str,
    pub region_id: Option<&'static str>,
    pub area_id: Option<&'static str>,
    pub territory_id: Option<&'static str>,
    pub dsr_id: Option<&'static str>,
}

impl Role {
    /// Broadest scope first
    pub const ALL: [Role; 5] = [Role::Rsm, Role::Asm, Role::Tsm, Role::So, Role::Dsr];

    pub fn rank(&self) -> u8 {
        match self {
            Role::Rsm => 5,
            Role::Asm => 4,
            Role::Tsm => 3,
            Role::So => 2,
            Role::Dsr => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Rsm => "RSM",
            Role::Asm => "ASM",
            Role::Tsm => "TSM",
            Role::So => "SO",
            Role::Dsr => "DSR",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Rsm => "Regional Sales Manager",
            Role::Asm => "Area Sales Manager",
            Role::Tsm => "Territory Sales Manager",
            Role::So => "Sales Officer",
            Role::Dsr => "Distribution Sales Representative",
        }
    }

    /// One-line description for the role picker on the login page
    pub fn description(&self) -> &'static str {
        match self {
            Role::Rsm => "View all regions & areas performance",
            Role::Asm => "View area-level insights & territories",
            Role::Tsm => "View territory & DSR performance",
            Role::So => "View sales team performance",
            Role::Dsr => "View personal performance & outlets",
        }
    }

    /// Fixed mock scope for the role. Not user input.
    pub fn scope(&self) -> RoleScope {
        match self {
            Role::Rsm => RoleScope {
                user_id: "RSM1",
                region_id: Some("R1"),
                area_id: None,
                territory_id: None,
                dsr_id: None,
            },
            Role::Asm => RoleScope {
                user_id: "ASM1",
                region_id: Some("R1"),
                area_id: Some("A1"),
                territory_id: None,
                dsr_id: None,
            },
            Role::Tsm => RoleScope {
                user_id: "TSM1",
                region_id: Some("R1"),
                area_id: Some("A1"),
                territory_id: Some("T1"),
                dsr_id: None,
            },
            Role::So => RoleScope {
                user_id: "SO1",
                region_id: Some("R1"),
                area_id: Some("A1"),
                territory_id: Some("T1"),
                dsr_id: None,
            },
            Role::Dsr => RoleScope {
                user_id: "DSR1",
                region_id: Some("R1"),
                area_id: Some("A1"),
                territory_id: Some("T1"),
                dsr_id: Some("DSR1"),
            },
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| RoleParseError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_order_is_strict() {
        let ranks: Vec<u8> = Role::ALL.iter().map(|r| r.rank()).collect();
        assert_eq!(ranks, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_parse() {
        assert_eq!("TSM".parse::<Role>(), Ok(Role::Tsm));
        assert_eq!(
            "Manager".parse::<Role>(),
            Err(RoleParseError("Manager".to_string()))
        );
        assert!("tsm".parse::<Role>().is_err());
    }

    #[test]
    fn test_serde_uses_identifier() {
        let json = serde_json::to_string(&Role::So).unwrap();
        assert_eq!(json, "\"SO\"");
        let role: Role = serde_json::from_str("\"ASM\"").unwrap();
        assert_eq!(role, Role::Asm);
    }

    #[test]
    fn test_scope_narrows_with_rank() {
        assert_eq!(Role::Rsm.scope().area_id, None);
        assert_eq!(Role::Asm.scope().area_id, Some("A1"));
        assert_eq!(Role::Dsr.scope().dsr_id, Some("DSR1"));
        assert_eq!(Role::So.scope().territory_id, Some("T1"));
    }
}
