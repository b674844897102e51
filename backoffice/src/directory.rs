//! The in-memory backoffice directory and its update operations.
//!
//! The directory holds the five collections the backoffice works over.
//! It is created once from fixture data and never deletes a record;
//! every operation returns a new directory with exactly one record
//! replaced, leaving the receiver untouched so the caller decides when
//! the change becomes visible.

use thiserror::Error;

use crate::domain::{
    Business, Incident, Payment, PaymentStatus, PlanBook, PlanError, PlanPatch, PlanTier,
    Resolution, Role, User,
};

/// Errors raised by directory update operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    /// No user with the given id exists.
    #[error("no user with id {id}")]
    UnknownUser {
        /// The id that was requested.
        id: u32,
    },

    /// No incident with the given id exists.
    #[error("no incident with id '{id}'")]
    UnknownIncident {
        /// The id that was requested.
        id: String,
    },

    /// No payment with the given id exists.
    #[error("no payment with id '{id}'")]
    UnknownPayment {
        /// The id that was requested.
        id: String,
    },

    /// A plan book update failed.
    #[error(transparent)]
    Plan(#[from] PlanError),
}

/// The in-memory collections behind the backoffice listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directory {
    users: Vec<User>,
    businesses: Vec<Business>,
    incidents: Vec<Incident>,
    payments: Vec<Payment>,
    plans: PlanBook,
}

impl Directory {
    /// Assembles a directory from its collections.
    ///
    /// Insertion order is preserved for display; ids are assumed unique
    /// within each collection.
    #[must_use]
    pub const fn new(
        users: Vec<User>,
        businesses: Vec<Business>,
        incidents: Vec<Incident>,
        payments: Vec<Payment>,
        plans: PlanBook,
    ) -> Self {
        Self {
            users,
            businesses,
            incidents,
            payments,
            plans,
        }
    }

    /// Returns the user collection in insertion order.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Returns the business collection in insertion order.
    #[must_use]
    pub fn businesses(&self) -> &[Business] {
        &self.businesses
    }

    /// Returns the incident collection in insertion order.
    #[must_use]
    pub fn incidents(&self) -> &[Incident] {
        &self.incidents
    }

    /// Returns the payment collection in insertion order.
    #[must_use]
    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }

    /// Returns the plan configuration book.
    #[must_use]
    pub const fn plans(&self) -> &PlanBook {
        &self.plans
    }

    /// Returns a directory with the user's status flipped between
    /// active and suspended.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::UnknownUser`] for an unknown id.
    pub fn with_user_suspension_toggled(&self, id: u32) -> Result<Self, DirectoryError> {
        let users = replace_user(&self.users, id, |user| User {
            status: user.status.toggled(),
            ..user.clone()
        })?;
        Ok(Self {
            users,
            ..self.clone()
        })
    }

    /// Returns a directory with the user's role replaced.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::UnknownUser`] for an unknown id.
    pub fn with_role_assigned(&self, id: u32, role: Role) -> Result<Self, DirectoryError> {
        let users = replace_user(&self.users, id, |user| User {
            role,
            ..user.clone()
        })?;
        Ok(Self {
            users,
            ..self.clone()
        })
    }

    /// Returns a directory with the incident moved to the status the
    /// resolution decides.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::UnknownIncident`] for an unknown id.
    pub fn with_incident_resolved(
        &self,
        id: &str,
        resolution: Resolution,
    ) -> Result<Self, DirectoryError> {
        if !self.incidents.iter().any(|incident| incident.id == id) {
            return Err(DirectoryError::UnknownIncident { id: id.to_owned() });
        }
        let incidents = self
            .incidents
            .iter()
            .map(|incident| {
                if incident.id == id {
                    Incident {
                        status: resolution.status(),
                        ..incident.clone()
                    }
                } else {
                    incident.clone()
                }
            })
            .collect();
        Ok(Self {
            incidents,
            ..self.clone()
        })
    }

    /// Returns a directory with the payment's settlement status replaced.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::UnknownPayment`] for an unknown id.
    pub fn with_payment_status(
        &self,
        id: &str,
        status: PaymentStatus,
    ) -> Result<Self, DirectoryError> {
        if !self.payments.iter().any(|payment| payment.id == id) {
            return Err(DirectoryError::UnknownPayment { id: id.to_owned() });
        }
        let payments = self
            .payments
            .iter()
            .map(|payment| {
                if payment.id == id {
                    Payment {
                        status,
                        ..payment.clone()
                    }
                } else {
                    payment.clone()
                }
            })
            .collect();
        Ok(Self {
            payments,
            ..self.clone()
        })
    }

    /// Returns a directory with the tier's plan configuration patched.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Plan`] when the tier has no
    /// configuration.
    pub fn with_plan_updated(
        &self,
        tier: PlanTier,
        patch: PlanPatch,
    ) -> Result<Self, DirectoryError> {
        let plans = self.plans.with_updated(tier, patch)?;
        Ok(Self {
            plans,
            ..self.clone()
        })
    }
}

/// Rebuilds the user list with the matching record mapped through `edit`.
fn replace_user(
    users: &[User],
    id: u32,
    edit: impl Fn(&User) -> User,
) -> Result<Vec<User>, DirectoryError> {
    if !users.iter().any(|user| user.id == id) {
        return Err(DirectoryError::UnknownUser { id });
    }
    Ok(users
        .iter()
        .map(|user| if user.id == id { edit(user) } else { user.clone() })
        .collect())
}
