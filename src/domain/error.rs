//! Domain errors

use thiserror::Error;

/// Failures the billing core can raise.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A session timestamp falls on or before the minimum supported date.
    #[error("{field} must be greater than {minimum}")]
    Validation {
        /// Wire name of the offending field, e.g. `entryDateTime`.
        field: &'static str,
        /// Minimum date, formatted for the message.
        minimum: String,
    },

    /// No pricing rule matched the session. The standard rate accepts every
    /// session, so hitting this indicates a defect rather than bad input.
    #[error("This entryDateTime & exitDateTime is not supported, please contact support")]
    NoApplicableRate,
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

// ─── Tests ───────────────────────────────────────────────────────────
