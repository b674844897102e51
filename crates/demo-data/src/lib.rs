//! Versioned demo fixture sets for the backoffice collections.
//!
//! This crate carries the fixed demo records (users, businesses,
//! incidents, payments, plan tiers) that populate the backoffice at
//! start-up. It is designed to be independent of backoffice domain types
//! to avoid circular dependencies: every record is a raw seed whose enum
//! fields stay as legacy wire tokens, converted into domain types at the
//! point of use.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Loading fixture sets from JSON strings or files
//! - A built-in embedded set mirroring the legacy demo data
//! - Schema versioning with semantic parse errors
//!
//! # Example
//!
//! ```
//! use demo_data::FixtureSet;
//!
//! let fixtures = FixtureSet::builtin().expect("embedded fixtures are valid");
//!
//! assert_eq!(fixtures.users().len(), 5);
//! assert_eq!(fixtures.incidents().len(), 3);
//! ```

mod error;
mod seeds;
mod set;

pub use error::FixtureError;
pub use seeds::{
    BusinessSeed, IncidentSeed, PaymentSeed, PlanSeed, PostingLimitSeed, UserSeed,
};
pub use set::FixtureSet;
