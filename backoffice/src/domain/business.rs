//! Registered business records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tabular::Searchable;

use super::plan::PlanTier;

/// A business registered on the platform.
///
/// ## Invariants
/// - `id` is unique within the business collection.
/// - `debt_ars` is non-negative by construction (whole ARS pesos).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Business {
    /// Numeric business identifier.
    pub id: u32,
    /// Trading name.
    pub name: String,
    /// Subscription tier the business is on.
    pub tier: PlanTier,
    /// Number of active job postings.
    pub postings: u32,
    /// Outstanding debt in whole ARS pesos.
    pub debt_ars: u64,
    /// Email address of the owning account.
    pub owner_email: String,
    /// Date the business joined.
    pub joined_on: NaiveDate,
}

impl Searchable for Business {
    // Business listings search over name and owner email.
    fn search_text(&self) -> String {
        format!("{}{}", self.name, self.owner_email)
    }
}
