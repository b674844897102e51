//! Domain entities and closed enums.
//!
//! Purpose: define strongly typed records for the five backoffice
//! collections. Records are plain data with public fields; invariants
//! that need enforcement (commission range, closed token sets) live in
//! dedicated types. Serde round-trips through the legacy wire tokens so
//! exported data matches the original system byte for byte.
//!
//! Public surface:
//! - [`User`], [`Role`], [`AccountStatus`] — platform accounts.
//! - [`Business`], [`PlanTier`] — registered businesses.
//! - [`Incident`], [`IncidentReason`], [`IncidentStatus`],
//!   [`Resolution`] — service incidents and support decisions.
//! - [`Payment`], [`PaymentKind`], [`PaymentStatus`] — money movements.
//! - [`PlanBook`], [`PlanConfig`], [`PlanPatch`], [`CommissionRate`],
//!   [`PostingLimit`], [`PlanError`] — subscription plan configuration.

pub mod business;
pub mod incident;
pub mod payment;
pub mod plan;
pub mod user;

pub use self::business::Business;
pub use self::incident::{Incident, IncidentReason, IncidentStatus, Resolution};
pub use self::payment::{Payment, PaymentKind, PaymentStatus};
pub use self::plan::{
    CommissionRate, PlanBook, PlanConfig, PlanError, PlanPatch, PlanTier, PostingLimit,
};
pub use self::user::{AccountStatus, Role, User};
