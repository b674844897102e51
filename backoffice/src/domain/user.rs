//! Platform account records.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tabular::Searchable;

/// Role assigned to a platform account.
///
/// Serialized with the legacy wire tokens; `Display` yields the label
/// shown in the support UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// A worker taking shifts (`empleado`).
    #[serde(rename = "empleado")]
    Worker,
    /// A business publishing shifts (`negocio`).
    #[serde(rename = "negocio")]
    Business,
    /// A support operator (`soporte`).
    #[serde(rename = "soporte")]
    Support,
    /// A system administrator (`admin`).
    #[serde(rename = "admin")]
    Admin,
}

impl Role {
    /// Returns the legacy wire token.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Worker => "empleado",
            Self::Business => "negocio",
            Self::Support => "soporte",
            Self::Admin => "admin",
        }
    }

    /// Parses a legacy wire token.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "empleado" => Some(Self::Worker),
            "negocio" => Some(Self::Business),
            "soporte" => Some(Self::Support),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Worker => "Empleado",
            Self::Business => "Negocio",
            Self::Support => "Soporte",
            Self::Admin => "Admin",
        };
        f.write_str(label)
    }
}

/// Whether an account may currently use the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountStatus {
    /// The account is in good standing (`activo`).
    #[serde(rename = "activo")]
    Active,
    /// The account is banned from the platform (`suspendido`).
    #[serde(rename = "suspendido")]
    Suspended,
}

impl AccountStatus {
    /// Returns the legacy wire token.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Active => "activo",
            Self::Suspended => "suspendido",
        }
    }

    /// Parses a legacy wire token.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "activo" => Some(Self::Active),
            "suspendido" => Some(Self::Suspended),
            _ => None,
        }
    }

    /// Returns the opposite status, used by the suspend/reactivate toggle.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Suspended,
            Self::Suspended => Self::Active,
        }
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Active => "Activo",
            Self::Suspended => "Suspendido",
        };
        f.write_str(label)
    }
}

/// A platform account.
///
/// ## Invariants
/// - `id` is unique within the user collection.
/// - `role` and `status` are closed sets; changes go through the
///   directory's update operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Numeric account identifier.
    pub id: u32,
    /// Full display name.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// Assigned role.
    pub role: Role,
    /// Current account status.
    pub status: AccountStatus,
    /// Date the account was created.
    pub created_on: NaiveDate,
}

impl Searchable for User {
    // User listings search over name and email.
    fn search_text(&self) -> String {
        format!("{}{}", self.name, self.email)
    }
}

#[cfg(test)]
mod tests {
    #![expect(
        clippy::expect_used,
        reason = "test code uses expect for clear failure messages"
    )]

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Role::Worker, "empleado")]
    #[case(Role::Business, "negocio")]
    #[case(Role::Support, "soporte")]
    #[case(Role::Admin, "admin")]
    fn role_tokens_round_trip(#[case] role: Role, #[case] token: &str) {
        assert_eq!(role.token(), token);
        assert_eq!(Role::from_token(token), Some(role));
    }

    #[test]
    fn unknown_role_token_is_rejected() {
        assert_eq!(Role::from_token("gerente"), None);
    }

    #[test]
    fn status_toggle_is_an_involution() {
        assert_eq!(AccountStatus::Active.toggled(), AccountStatus::Suspended);
        assert_eq!(AccountStatus::Suspended.toggled().toggled(), AccountStatus::Suspended);
    }

    #[test]
    fn user_serializes_with_wire_tokens() {
        let user = User {
            id: 1,
            name: "Carla López".to_owned(),
            email: "carla@correo.com".to_owned(),
            role: Role::Worker,
            status: AccountStatus::Active,
            created_on: NaiveDate::from_ymd_opt(2025, 8, 12).expect("valid date"),
        };

        let json = serde_json::to_string(&user).expect("serialize");
        assert!(json.contains("\"empleado\""));
        assert!(json.contains("\"activo\""));
        assert!(json.contains("\"createdOn\":\"2025-08-12\""));
    }

    #[test]
    fn search_text_covers_name_and_email() {
        let user = User {
            id: 2,
            name: "Diego Fernández".to_owned(),
            email: "diego@correo.com".to_owned(),
            role: Role::Worker,
            status: AccountStatus::Active,
            created_on: NaiveDate::from_ymd_opt(2025, 7, 2).expect("valid date"),
        };

        assert!(user.search_text().contains("Diego Fernández"));
        assert!(user.search_text().contains("diego@correo.com"));
    }
}
