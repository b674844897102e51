//! Payment and charge records.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tabular::Searchable;

/// Direction of a money movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentKind {
    /// A payout owed to a worker (`payout_trabajador`).
    #[serde(rename = "payout_trabajador")]
    WorkerPayout,
    /// A charge collected from a business (`cobro_negocio`).
    #[serde(rename = "cobro_negocio")]
    BusinessCharge,
}

impl PaymentKind {
    /// Returns the legacy wire token.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::WorkerPayout => "payout_trabajador",
            Self::BusinessCharge => "cobro_negocio",
        }
    }

    /// Parses a legacy wire token.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "payout_trabajador" => Some(Self::WorkerPayout),
            "cobro_negocio" => Some(Self::BusinessCharge),
            _ => None,
        }
    }
}

impl fmt::Display for PaymentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::WorkerPayout => "Payout trabajador",
            Self::BusinessCharge => "Cobro a negocio",
        };
        f.write_str(label)
    }
}

/// Settlement state of a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    /// Awaiting support approval (`pendiente`).
    #[serde(rename = "pendiente")]
    Pending,
    /// Approved for settlement (`aprobado`).
    #[serde(rename = "aprobado")]
    Approved,
    /// Rejected by support (`rechazado`).
    #[serde(rename = "rechazado")]
    Rejected,
}

impl PaymentStatus {
    /// Returns the legacy wire token.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Pending => "pendiente",
            Self::Approved => "aprobado",
            Self::Rejected => "rechazado",
        }
    }

    /// Parses a legacy wire token.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "pendiente" => Some(Self::Pending),
            "aprobado" => Some(Self::Approved),
            "rechazado" => Some(Self::Rejected),
            _ => None,
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Pending => "Pendiente",
            Self::Approved => "Aprobado",
            Self::Rejected => "Rechazado",
        };
        f.write_str(label)
    }
}

/// A payout or charge handled by support.
///
/// ## Invariants
/// - `id` is unique within the payment collection.
/// - `amount_ars` is non-negative by construction (whole ARS pesos).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// Payment identifier (`PAY-…`).
    pub id: String,
    /// Direction of the movement.
    pub kind: PaymentKind,
    /// Person or business the payment concerns.
    pub beneficiary: String,
    /// Amount in whole ARS pesos.
    pub amount_ars: u64,
    /// Settlement method label (`CBU`, `MP`).
    pub method: String,
    /// Current settlement state.
    pub status: PaymentStatus,
    /// Date the payment was created.
    pub created_on: NaiveDate,
}

impl Searchable for Payment {
    // Payment listings search over id, beneficiary, and kind token.
    fn search_text(&self) -> String {
        format!("{}{}{}", self.id, self.beneficiary, self.kind.token())
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
    #[case(PaymentKind::WorkerPayout, "payout_trabajador", "Payout trabajador")]
    #[case(PaymentKind::BusinessCharge, "cobro_negocio", "Cobro a negocio")]
    fn kind_tokens_and_labels(
        #[case] kind: PaymentKind,
        #[case] token: &str,
        #[case] label: &str,
    ) {
        assert_eq!(kind.token(), token);
        assert_eq!(kind.to_string(), label);
        assert_eq!(PaymentKind::from_token(token), Some(kind));
    }

    #[rstest]
    #[case(PaymentStatus::Pending, "pendiente")]
    #[case(PaymentStatus::Approved, "aprobado")]
    #[case(PaymentStatus::Rejected, "rechazado")]
    fn status_tokens_round_trip(#[case] status: PaymentStatus, #[case] token: &str) {
        assert_eq!(status.token(), token);
        assert_eq!(PaymentStatus::from_token(token), Some(status));
    }

    #[test]
    fn search_text_includes_the_kind_token() {
        let payment = Payment {
            id: "PAY-903".to_owned(),
            kind: PaymentKind::BusinessCharge,
            beneficiary: "Cafetería 9 de Julio".to_owned(),
            amount_ars: 45_800,
            method: "MP".to_owned(),
            status: PaymentStatus::Pending,
            created_on: NaiveDate::from_ymd_opt(2025, 9, 18).expect("valid date"),
        };

        assert!(payment.search_text().contains("cobro_negocio"));
    }
}
