//! Subscription plan configuration.
//!
//! The legacy system mutated a shared plan map in place when support
//! saved an edit. Here the plan book is a value: [`PlanBook::with_updated`]
//! returns a new book and the caller owns propagating it.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Commission in basis points, capped at 100%.
pub const COMMISSION_MAX_BPS: u16 = 10_000;

/// Subscription tier offered to businesses.
///
/// The legacy tokens double as display labels, so serde and `Display`
/// agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlanTier {
    /// Entry tier (`Esencial`).
    #[serde(rename = "Esencial")]
    Essential,
    /// Mid tier (`Profesional`).
    #[serde(rename = "Profesional")]
    Professional,
    /// Top tier (`Enterprise`).
    Enterprise,
}

impl PlanTier {
    /// Returns the legacy wire token.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Essential => "Esencial",
            Self::Professional => "Profesional",
            Self::Enterprise => "Enterprise",
        }
    }

    /// Parses a legacy wire token.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "Esencial" => Some(Self::Essential),
            "Profesional" => Some(Self::Professional),
            "Enterprise" => Some(Self::Enterprise),
            _ => None,
        }
    }
}

impl fmt::Display for PlanTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Errors raised by plan configuration updates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// The book holds no configuration for the tier.
    #[error("no plan configuration for tier '{tier}'")]
    UnknownTier {
        /// The tier that was requested.
        tier: PlanTier,
    },

    /// A commission exceeded 100%.
    #[error("commission of {bps} basis points exceeds the {COMMISSION_MAX_BPS} cap")]
    CommissionOutOfRange {
        /// The rejected basis point value.
        bps: u16,
    },

    /// A posting limit keyword other than `ilimitadas` was supplied.
    #[error("unknown posting limit keyword '{value}'")]
    UnknownPostingKeyword {
        /// The rejected keyword.
        value: String,
    },
}

/// Platform commission expressed in basis points (800 = 8%).
///
/// Stored as an integer so plan arithmetic stays exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct CommissionRate(u16);

impl CommissionRate {
    /// Validates and constructs a commission rate.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::CommissionOutOfRange`] above 10 000 bps.
    pub const fn new(bps: u16) -> Result<Self, PlanError> {
        if bps > COMMISSION_MAX_BPS {
            return Err(PlanError::CommissionOutOfRange { bps });
        }
        Ok(Self(bps))
    }

    /// Returns the rate in basis points.
    #[must_use]
    pub const fn as_bps(self) -> u16 {
        self.0
    }
}

impl TryFrom<u16> for CommissionRate {
    type Error = PlanError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CommissionRate> for u16 {
    fn from(value: CommissionRate) -> Self {
        value.0
    }
}

/// Monthly posting allowance of a tier.
///
/// The legacy data stores either an integer or the keyword
/// `ilimitadas`; serde round-trips through that representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PostingLimitRepr", into = "PostingLimitRepr")]
pub enum PostingLimit {
    /// A concrete monthly allowance.
    Limited(u32),
    /// No cap (legacy keyword `ilimitadas`).
    Unlimited,
}

/// Legacy wire representation of [`PostingLimit`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum PostingLimitRepr {
    Count(u32),
    Keyword(String),
}

impl From<PostingLimit> for PostingLimitRepr {
    fn from(value: PostingLimit) -> Self {
        match value {
            PostingLimit::Limited(count) => Self::Count(count),
            PostingLimit::Unlimited => Self::Keyword("ilimitadas".to_owned()),
        }
    }
}

impl TryFrom<PostingLimitRepr> for PostingLimit {
    type Error = PlanError;

    fn try_from(value: PostingLimitRepr) -> Result<Self, Self::Error> {
        match value {
            PostingLimitRepr::Count(count) => Ok(Self::Limited(count)),
            PostingLimitRepr::Keyword(keyword) if keyword == "ilimitadas" => Ok(Self::Unlimited),
            PostingLimitRepr::Keyword(keyword) => {
                Err(PlanError::UnknownPostingKeyword { value: keyword })
            }
        }
    }
}

impl fmt::Display for PostingLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Limited(count) => write!(f, "{count}"),
            Self::Unlimited => f.write_str("ilimitadas"),
        }
    }
}

/// Configuration of one subscription tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanConfig {
    /// Monthly price in whole ARS pesos.
    pub monthly_ars: u64,
    /// Platform commission.
    pub commission: CommissionRate,
    /// Monthly posting allowance.
    pub posting_limit: PostingLimit,
    /// Payout release service level (`48h`, `24h`, `inmediata`).
    pub release_sla: String,
    /// Free-form sales notes.
    pub notes: String,
}

/// A partial edit of a plan configuration.
///
/// Fields left as `None` keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanPatch {
    /// New monthly price, if changed.
    pub monthly_ars: Option<u64>,
    /// New commission, if changed.
    pub commission: Option<CommissionRate>,
    /// New posting allowance, if changed.
    pub posting_limit: Option<PostingLimit>,
    /// New release service level, if changed.
    pub release_sla: Option<String>,
    /// New sales notes, if changed.
    pub notes: Option<String>,
}

/// The tier-keyed plan configuration map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanBook {
    configs: BTreeMap<PlanTier, PlanConfig>,
}

impl PlanBook {
    /// Builds a book from tier/configuration pairs.
    ///
    /// Later entries for the same tier replace earlier ones.
    #[must_use]
    pub fn new(entries: impl IntoIterator<Item = (PlanTier, PlanConfig)>) -> Self {
        Self {
            configs: entries.into_iter().collect(),
        }
    }

    /// Looks up the configuration for a tier.
    #[must_use]
    pub fn get(&self, tier: PlanTier) -> Option<&PlanConfig> {
        self.configs.get(&tier)
    }

    /// Iterates configurations in tier order.
    pub fn iter(&self) -> impl Iterator<Item = (PlanTier, &PlanConfig)> {
        self.configs.iter().map(|(tier, config)| (*tier, config))
    }

    /// Returns a new book with the tier's configuration patched.
    ///
    /// The receiver is left untouched; the caller decides whether and
    /// where to propagate the returned book.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::UnknownTier`] when the book has no
    /// configuration for `tier`.
    pub fn with_updated(&self, tier: PlanTier, patch: PlanPatch) -> Result<Self, PlanError> {
        let current = self
            .configs
            .get(&tier)
            .ok_or(PlanError::UnknownTier { tier })?;

        let updated = PlanConfig {
            monthly_ars: patch.monthly_ars.unwrap_or(current.monthly_ars),
            commission: patch.commission.unwrap_or(current.commission),
            posting_limit: patch.posting_limit.unwrap_or(current.posting_limit),
            release_sla: patch.release_sla.unwrap_or_else(|| current.release_sla.clone()),
            notes: patch.notes.unwrap_or_else(|| current.notes.clone()),
        };

        let mut configs = self.configs.clone();
        configs.insert(tier, updated);
        Ok(Self { configs })
    }
}

#[cfg(test)]
mod tests {
    #![expect(
        clippy::expect_used,
        reason = "test code uses expect for clear failure messages"
    )]

    use super::*;

    fn essential() -> PlanConfig {
        PlanConfig {
            monthly_ars: 9_900,
            commission: CommissionRate::new(800).expect("valid rate"),
            posting_limit: PostingLimit::Limited(5),
            release_sla: "48h".to_owned(),
            notes: "Analítica básica, soporte chat".to_owned(),
        }
    }

    fn book() -> PlanBook {
        PlanBook::new([(PlanTier::Essential, essential())])
    }

    #[test]
    fn commission_rate_rejects_values_above_the_cap() {
        assert_eq!(
            CommissionRate::new(10_001),
            Err(PlanError::CommissionOutOfRange { bps: 10_001 })
        );
        assert_eq!(
            CommissionRate::new(10_000).map(CommissionRate::as_bps),
            Ok(10_000)
        );
    }

    #[test]
    fn patch_merges_only_the_provided_fields() {
        let patch = PlanPatch {
            monthly_ars: Some(10_900),
            release_sla: Some("24h".to_owned()),
            ..PlanPatch::default()
        };

        let updated = book()
            .with_updated(PlanTier::Essential, patch)
            .expect("tier exists");
        let config = updated.get(PlanTier::Essential).expect("tier present");

        assert_eq!(config.monthly_ars, 10_900);
        assert_eq!(config.release_sla, "24h");
        assert_eq!(config.commission.as_bps(), 800);
        assert_eq!(config.posting_limit, PostingLimit::Limited(5));
    }

    #[test]
    fn updating_leaves_the_original_book_untouched() {
        let original = book();
        let patch = PlanPatch {
            monthly_ars: Some(1),
            ..PlanPatch::default()
        };

        let updated = original
            .with_updated(PlanTier::Essential, patch)
            .expect("tier exists");

        let before = original.get(PlanTier::Essential).expect("tier present");
        let after = updated.get(PlanTier::Essential).expect("tier present");
        assert_eq!(before.monthly_ars, 9_900);
        assert_eq!(after.monthly_ars, 1);
    }

    #[test]
    fn updating_an_unknown_tier_errors() {
        let result = book().with_updated(PlanTier::Enterprise, PlanPatch::default());
        assert_eq!(
            result,
            Err(PlanError::UnknownTier {
                tier: PlanTier::Enterprise
            })
        );
    }

    #[test]
    fn posting_limit_renders_count_or_keyword() {
        assert_eq!(PostingLimit::Limited(20).to_string(), "20");
        assert_eq!(PostingLimit::Unlimited.to_string(), "ilimitadas");
    }

    #[test]
    fn posting_limit_serde_round_trips_both_legacy_forms() {
        let unlimited: PostingLimit =
            serde_json::from_str("\"ilimitadas\"").expect("keyword parses");
        assert_eq!(unlimited, PostingLimit::Unlimited);
        assert_eq!(
            serde_json::to_string(&PostingLimit::Unlimited).expect("serialize"),
            "\"ilimitadas\""
        );

        let limited: PostingLimit = serde_json::from_str("20").expect("count parses");
        assert_eq!(limited, PostingLimit::Limited(20));
    }

    #[test]
    fn unknown_posting_keyword_is_rejected() {
        let result: Result<PostingLimit, _> = serde_json::from_str("\"infinitas\"");
        assert!(result.is_err());
    }
}
