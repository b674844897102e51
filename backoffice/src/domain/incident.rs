//! Service incident records and support resolutions.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tabular::Searchable;

/// Why an incident was reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncidentReason {
    /// The worker arrived late (`tardanza`).
    #[serde(rename = "tardanza")]
    LateArrival,
    /// The worker underperformed (`desempeno`).
    #[serde(rename = "desempeno")]
    Performance,
    /// Anything else (`otros`).
    #[serde(rename = "otros")]
    Other,
}

impl IncidentReason {
    /// Returns the legacy wire token.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::LateArrival => "tardanza",
            Self::Performance => "desempeno",
            Self::Other => "otros",
        }
    }

    /// Parses a legacy wire token.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "tardanza" => Some(Self::LateArrival),
            "desempeno" => Some(Self::Performance),
            "otros" => Some(Self::Other),
            _ => None,
        }
    }
}

/// Where an incident sits in the support workflow.
///
/// The refund and payout variants record the decision support took; an
/// incident only stops counting as open once it reaches [`Self::Resolved`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncidentStatus {
    /// Freshly reported (`abierta`).
    #[serde(rename = "abierta")]
    Open,
    /// Support is looking at it (`en_revisión`).
    #[serde(rename = "en_revisión")]
    InReview,
    /// Closed without compensation (`resuelta`).
    #[serde(rename = "resuelta")]
    Resolved,
    /// The business will be refunded (`reembolsar_negocio`).
    #[serde(rename = "reembolsar_negocio")]
    RefundBusiness,
    /// The worker will be paid out (`pagar_trabajador`).
    #[serde(rename = "pagar_trabajador")]
    PayWorker,
}

impl IncidentStatus {
    /// Returns the legacy wire token.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Open => "abierta",
            Self::InReview => "en_revisión",
            Self::Resolved => "resuelta",
            Self::RefundBusiness => "reembolsar_negocio",
            Self::PayWorker => "pagar_trabajador",
        }
    }

    /// Parses a legacy wire token.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "abierta" => Some(Self::Open),
            "en_revisión" => Some(Self::InReview),
            "resuelta" => Some(Self::Resolved),
            "reembolsar_negocio" => Some(Self::RefundBusiness),
            "pagar_trabajador" => Some(Self::PayWorker),
            _ => None,
        }
    }

    /// Whether the incident still counts towards the open-incidents KPI.
    #[must_use]
    pub const fn is_open(self) -> bool {
        !matches!(self, Self::Resolved)
    }
}

impl fmt::Display for IncidentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Open => "Abierta",
            Self::InReview => "En revisión",
            Self::Resolved => "Resuelta",
            Self::RefundBusiness => "Reembolsar negocio",
            Self::PayWorker => "Pagar trabajador",
        };
        f.write_str(label)
    }
}

/// A decision support can apply to an incident.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Close the incident without compensation.
    Resolved,
    /// Refund the business.
    RefundBusiness,
    /// Pay the worker anyway.
    PayWorker,
    /// Keep the incident under review.
    KeepInReview,
}

impl Resolution {
    /// The status an incident ends up in after this decision.
    #[must_use]
    pub const fn status(self) -> IncidentStatus {
        match self {
            Self::Resolved => IncidentStatus::Resolved,
            Self::RefundBusiness => IncidentStatus::RefundBusiness,
            Self::PayWorker => IncidentStatus::PayWorker,
            Self::KeepInReview => IncidentStatus::InReview,
        }
    }
}

/// A reported service incident.
///
/// ## Invariants
/// - `id` is unique within the incident collection.
/// - `status` only changes through the directory's resolution operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    /// Incident identifier (`INC-…`).
    pub id: String,
    /// Identifier of the affected service (`SRV-…`).
    pub service_id: String,
    /// Name of the business that reported the incident.
    pub business_name: String,
    /// Name of the worker involved.
    pub worker_name: String,
    /// Reported reason.
    pub reason: IncidentReason,
    /// Current workflow status.
    pub status: IncidentStatus,
    /// Date the incident was opened.
    pub created_on: NaiveDate,
}

impl Searchable for Incident {
    // Incident listings search over id, service, business, and worker.
    fn search_text(&self) -> String {
        format!(
            "{}{}{}{}",
            self.id, self.service_id, self.business_name, self.worker_name
        )
    }
}
