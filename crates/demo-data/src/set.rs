//! Fixture set loading and validation.
//!
//! A fixture set is a versioned JSON document holding one array per
//! backoffice collection. Parsing validates the schema version and
//! rejects empty collections so consumers can rely on a populated
//! backoffice.

use std::fs;

use camino::Utf8Path;
use serde::Deserialize;

use crate::error::FixtureError;
use crate::seeds::{BusinessSeed, IncidentSeed, PaymentSeed, PlanSeed, UserSeed};

/// Current supported fixture schema version.
const SUPPORTED_VERSION: u32 = 1;

/// Built-in fixture JSON mirroring the legacy demo records.
const BUILTIN_JSON: &str = include_str!("../data/fixtures.json");

/// A validated collection of demo records.
///
/// # Example
///
/// ```
/// use demo_data::FixtureSet;
///
/// let json = r#"{
///     "version": 1,
///     "users": [{"id": 1, "name": "Ana", "email": "ana@x.com",
///                "role": "empleado", "status": "activo",
///                "createdOn": "2025-01-01"}],
///     "businesses": [{"id": 101, "name": "Bar Sur", "tier": "Esencial",
///                     "postings": 1, "debtArs": 0,
///                     "ownerEmail": "bar@x.com", "joinedOn": "2025-01-01"}],
///     "incidents": [{"id": "INC-1", "serviceId": "SRV-1",
///                    "businessName": "Bar Sur", "workerName": "Ana",
///                    "reason": "otros", "status": "abierta",
///                    "createdOn": "2025-01-02"}],
///     "payments": [{"id": "PAY-1", "kind": "payout_trabajador",
///                   "beneficiary": "Ana", "amountArs": 100,
///                   "method": "CBU", "status": "pendiente",
///                   "createdOn": "2025-01-03"}],
///     "plans": [{"tier": "Esencial", "monthlyArs": 9900,
///                "commissionBps": 800, "postingLimit": 5,
///                "releaseSla": "48h", "notes": ""}]
/// }"#;
///
/// let fixtures = FixtureSet::from_json(json).expect("valid fixtures");
/// assert_eq!(fixtures.users().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureSet {
    users: Vec<UserSeed>,
    businesses: Vec<BusinessSeed>,
    incidents: Vec<IncidentSeed>,
    payments: Vec<PaymentSeed>,
    plans: Vec<PlanSeed>,
}

impl FixtureSet {
    /// Parses a fixture set from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError`] if:
    /// - The JSON is malformed or missing required fields
    /// - The version is unsupported
    /// - Any collection is empty
    pub fn from_json(json: &str) -> Result<Self, FixtureError> {
        let raw: RawFixtureSet =
            serde_json::from_str(json).map_err(|e| FixtureError::Parse {
                message: e.to_string(),
            })?;

        Self::from_raw(raw)
    }

    /// Loads a fixture set from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError`] if the file cannot be read or parsed.
    pub fn from_file(path: &Utf8Path) -> Result<Self, FixtureError> {
        let contents = fs::read_to_string(path).map_err(|e| FixtureError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_json(&contents)
    }

    /// Returns the built-in fixture set shipped with the crate.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError`] if the embedded JSON fails validation;
    /// the unit tests keep the embedded document parseable.
    pub fn builtin() -> Result<Self, FixtureError> {
        Self::from_json(BUILTIN_JSON)
    }

    fn from_raw(raw: RawFixtureSet) -> Result<Self, FixtureError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(FixtureError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        require_non_empty("users", raw.users.len())?;
        require_non_empty("businesses", raw.businesses.len())?;
        require_non_empty("incidents", raw.incidents.len())?;
        require_non_empty("payments", raw.payments.len())?;
        require_non_empty("plans", raw.plans.len())?;

        Ok(Self {
            users: raw.users,
            businesses: raw.businesses,
            incidents: raw.incidents,
            payments: raw.payments,
            plans: raw.plans,
        })
    }

    /// Returns the user records.
    #[must_use]
    pub fn users(&self) -> &[UserSeed] {
        &self.users
    }

    /// Returns the business records.
    #[must_use]
    pub fn businesses(&self) -> &[BusinessSeed] {
        &self.businesses
    }

    /// Returns the incident records.
    #[must_use]
    pub fn incidents(&self) -> &[IncidentSeed] {
        &self.incidents
    }

    /// Returns the payment records.
    #[must_use]
    pub fn payments(&self) -> &[PaymentSeed] {
        &self.payments
    }

    /// Returns the plan configuration records.
    #[must_use]
    pub fn plans(&self) -> &[PlanSeed] {
        &self.plans
    }
}

fn require_non_empty(collection: &'static str, len: usize) -> Result<(), FixtureError> {
    if len == 0 {
        return Err(FixtureError::EmptyCollection { collection });
    }
    Ok(())
}

/// Raw JSON representation for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFixtureSet {
    version: u32,
    users: Vec<UserSeed>,
    businesses: Vec<BusinessSeed>,
    incidents: Vec<IncidentSeed>,
    payments: Vec<PaymentSeed>,
    plans: Vec<PlanSeed>,
}
