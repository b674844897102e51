//! Dashboard KPI summary.
//!
//! The overview panel shows five numbers computed from the directory.
//! All of them reduce to the `tabular` aggregation primitives.

use tabular::{count, sum};

use crate::directory::Directory;
use crate::domain::{AccountStatus, PaymentStatus};

/// The KPI figures shown on the overview panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Users currently in good standing.
    pub active_users: usize,
    /// Users currently suspended.
    pub suspended_users: usize,
    /// Incidents not yet resolved.
    pub open_incidents: usize,
    /// Payments awaiting approval.
    pub pending_payments: usize,
    /// Total business debt in whole ARS pesos.
    pub total_debt_ars: u64,
}

impl Summary {
    /// Computes the summary for the current directory state.
    #[must_use]
    pub fn of(directory: &Directory) -> Self {
        let active_users = count(directory.users(), |user| {
            user.status == AccountStatus::Active
        });
        Self {
            active_users,
            suspended_users: directory.users().len().saturating_sub(active_users),
            open_incidents: count(directory.incidents(), |incident| incident.status.is_open()),
            pending_payments: count(directory.payments(), |payment| {
                payment.status == PaymentStatus::Pending
            }),
            total_debt_ars: sum(directory.businesses(), |business| Some(business.debt_ars)),
        }
    }
}
