//! Fixture seed to domain conversion.
//!
//! `demo-data` keeps its records raw so it stays independent of domain
//! types; this module validates the legacy wire tokens and dates at the
//! point of use and assembles a [`Directory`] from a fixture set.

use chrono::NaiveDate;
use demo_data::{
    BusinessSeed, FixtureSet, IncidentSeed, PaymentSeed, PlanSeed, PostingLimitSeed, UserSeed,
};
use thiserror::Error;

use crate::directory::Directory;
use crate::domain::{
    AccountStatus, Business, CommissionRate, Incident, IncidentReason, IncidentStatus, Payment,
    PaymentKind, PaymentStatus, PlanBook, PlanConfig, PlanError, PlanTier, PostingLimit, Role,
    User,
};

/// Errors raised when fixture records violate the domain's closed sets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// A token did not belong to its field's closed set.
    #[error("unknown {field} token '{value}'")]
    UnknownToken {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected token.
        value: String,
    },

    /// A date was not in ISO `YYYY-MM-DD` form.
    #[error("invalid date '{value}'")]
    InvalidDate {
        /// The rejected date string.
        value: String,
    },

    /// A plan field failed validation.
    #[error(transparent)]
    Plan(#[from] PlanError),
}

/// Builds a directory from a validated fixture set.
///
/// # Errors
///
/// Returns [`ConvertError`] when a record carries an unknown wire token,
/// a malformed date, or an out-of-range commission.
pub fn directory_from_fixtures(fixtures: &FixtureSet) -> Result<Directory, ConvertError> {
    let users = fixtures
        .users()
        .iter()
        .map(user_from_seed)
        .collect::<Result<Vec<_>, _>>()?;
    let businesses = fixtures
        .businesses()
        .iter()
        .map(business_from_seed)
        .collect::<Result<Vec<_>, _>>()?;
    let incidents = fixtures
        .incidents()
        .iter()
        .map(incident_from_seed)
        .collect::<Result<Vec<_>, _>>()?;
    let payments = fixtures
        .payments()
        .iter()
        .map(payment_from_seed)
        .collect::<Result<Vec<_>, _>>()?;
    let plans = fixtures
        .plans()
        .iter()
        .map(plan_entry_from_seed)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Directory::new(
        users,
        businesses,
        incidents,
        payments,
        PlanBook::new(plans),
    ))
}

fn user_from_seed(seed: &UserSeed) -> Result<User, ConvertError> {
    Ok(User {
        id: seed.id,
        name: seed.name.clone(),
        email: seed.email.clone(),
        role: Role::from_token(&seed.role).ok_or_else(|| unknown("role", &seed.role))?,
        status: AccountStatus::from_token(&seed.status)
            .ok_or_else(|| unknown("status", &seed.status))?,
        created_on: parse_date(&seed.created_on)?,
    })
}

fn business_from_seed(seed: &BusinessSeed) -> Result<Business, ConvertError> {
    Ok(Business {
        id: seed.id,
        name: seed.name.clone(),
        tier: PlanTier::from_token(&seed.tier).ok_or_else(|| unknown("tier", &seed.tier))?,
        postings: seed.postings,
        debt_ars: seed.debt_ars,
        owner_email: seed.owner_email.clone(),
        joined_on: parse_date(&seed.joined_on)?,
    })
}

fn incident_from_seed(seed: &IncidentSeed) -> Result<Incident, ConvertError> {
    Ok(Incident {
        id: seed.id.clone(),
        service_id: seed.service_id.clone(),
        business_name: seed.business_name.clone(),
        worker_name: seed.worker_name.clone(),
        reason: IncidentReason::from_token(&seed.reason)
            .ok_or_else(|| unknown("reason", &seed.reason))?,
        status: IncidentStatus::from_token(&seed.status)
            .ok_or_else(|| unknown("incident status", &seed.status))?,
        created_on: parse_date(&seed.created_on)?,
    })
}

fn payment_from_seed(seed: &PaymentSeed) -> Result<Payment, ConvertError> {
    Ok(Payment {
        id: seed.id.clone(),
        kind: PaymentKind::from_token(&seed.kind).ok_or_else(|| unknown("kind", &seed.kind))?,
        beneficiary: seed.beneficiary.clone(),
        amount_ars: seed.amount_ars,
        method: seed.method.clone(),
        status: PaymentStatus::from_token(&seed.status)
            .ok_or_else(|| unknown("payment status", &seed.status))?,
        created_on: parse_date(&seed.created_on)?,
    })
}

fn plan_entry_from_seed(seed: &PlanSeed) -> Result<(PlanTier, PlanConfig), ConvertError> {
    let tier = PlanTier::from_token(&seed.tier).ok_or_else(|| unknown("tier", &seed.tier))?;
    let posting_limit = match &seed.posting_limit {
        PostingLimitSeed::Count(count) => PostingLimit::Limited(*count),
        PostingLimitSeed::Keyword(keyword) if keyword == "ilimitadas" => PostingLimit::Unlimited,
        PostingLimitSeed::Keyword(keyword) => {
            return Err(ConvertError::Plan(PlanError::UnknownPostingKeyword {
                value: keyword.clone(),
            }));
        }
    };
    Ok((
        tier,
        PlanConfig {
            monthly_ars: seed.monthly_ars,
            commission: CommissionRate::new(seed.commission_bps)?,
            posting_limit,
            release_sla: seed.release_sla.clone(),
            notes: seed.notes.clone(),
        },
    ))
}

fn unknown(field: &'static str, value: &str) -> ConvertError {
    ConvertError::UnknownToken {
        field,
        value: value.to_owned(),
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, ConvertError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| ConvertError::InvalidDate {
        value: value.to_owned(),
    })
}
