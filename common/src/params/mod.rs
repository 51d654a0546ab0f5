//! Input parameters for the various functions within flightdeck.

use thiserror::Error;

mod auth;
pub use auth::*;

mod flight;
pub use flight::*;

/// A request body field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Field-level rules a request body must satisfy before it reaches a handler.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Check that `value` is between `min` and `max` characters long, inclusive.
pub(crate) fn check_length(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len < min || len > max {
        let reason = if min == max {
            format!("must be exactly {min} characters long")
        } else {
            format!("must be between {min} and {max} characters long")
        };
        return Err(ValidationError::new(field, reason));
    }
    Ok(())
}
