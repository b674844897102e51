//! Operator session context.
//!
//! Exports are always performed on behalf of a named operator. The
//! context is opaque to the tabular core; it only feeds audit logging
//! at the delivery boundary.

use crate::domain::Role;

/// The operator driving a backoffice session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operator {
    name: String,
    role: Role,
}

impl Operator {
    /// Creates a session context for the named operator.
    #[must_use]
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
        }
    }

    /// The operator's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The operator's role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }
}
