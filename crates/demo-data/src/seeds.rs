//! Raw fixture record types.
//!
//! These types mirror the backoffice entities without depending on them.
//! Enum-valued fields stay as legacy wire tokens (for example the role
//! `"empleado"` or the incident status `"en_revisión"`); the consumer
//! validates them when converting to domain types.

use serde::{Deserialize, Serialize};

/// A platform account record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSeed {
    /// Numeric account identifier.
    pub id: u32,
    /// Full display name.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// Role wire token (`empleado`, `negocio`, `soporte`, `admin`).
    pub role: String,
    /// Account status wire token (`activo`, `suspendido`).
    pub status: String,
    /// ISO date the account was created.
    pub created_on: String,
}

/// A registered business record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessSeed {
    /// Numeric business identifier.
    pub id: u32,
    /// Trading name.
    pub name: String,
    /// Subscription tier wire token (`Esencial`, `Profesional`, `Enterprise`).
    pub tier: String,
    /// Number of active job postings.
    pub postings: u32,
    /// Outstanding debt in whole ARS pesos.
    pub debt_ars: u64,
    /// Email address of the owning account.
    pub owner_email: String,
    /// ISO date the business joined.
    pub joined_on: String,
}

/// A service incident record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentSeed {
    /// Incident identifier (`INC-…`).
    pub id: String,
    /// Identifier of the affected service (`SRV-…`).
    pub service_id: String,
    /// Name of the business that reported the incident.
    pub business_name: String,
    /// Name of the worker involved.
    pub worker_name: String,
    /// Reason wire token (`tardanza`, `desempeno`, `otros`).
    pub reason: String,
    /// Status wire token (`abierta`, `en_revisión`, `resuelta`, …).
    pub status: String,
    /// ISO date the incident was opened.
    pub created_on: String,
}

/// A payment or charge record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSeed {
    /// Payment identifier (`PAY-…`).
    pub id: String,
    /// Kind wire token (`payout_trabajador`, `cobro_negocio`).
    pub kind: String,
    /// Person or business the payment concerns.
    pub beneficiary: String,
    /// Amount in whole ARS pesos.
    pub amount_ars: u64,
    /// Settlement method label (`CBU`, `MP`).
    pub method: String,
    /// Status wire token (`pendiente`, `aprobado`, `rechazado`).
    pub status: String,
    /// ISO date the payment was created.
    pub created_on: String,
}

/// Posting allowance carried by a plan seed.
///
/// The legacy data stores either an integer or the keyword
/// `"ilimitadas"`, so the raw form is an untagged union.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostingLimitSeed {
    /// A concrete monthly posting allowance.
    Count(u32),
    /// A keyword, expected to be `ilimitadas`.
    Keyword(String),
}

/// A subscription plan configuration record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSeed {
    /// Tier wire token the configuration belongs to.
    pub tier: String,
    /// Monthly price in whole ARS pesos.
    pub monthly_ars: u64,
    /// Commission in basis points (800 = 8%).
    pub commission_bps: u16,
    /// Monthly posting allowance.
    pub posting_limit: PostingLimitSeed,
    /// Payout release service level (`48h`, `24h`, `inmediata`).
    pub release_sla: String,
    /// Free-form sales notes.
    pub notes: String,
}
