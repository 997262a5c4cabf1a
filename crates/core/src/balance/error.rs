//! Balance ledger error types.

use solde_shared::types::Days;
use thiserror::Error;

/// Errors that can occur when writing balance components.
#[derive(Debug, Error)]
pub enum BalanceError {
    /// An earned-day component must be non-negative.
    #[error("Component {component} cannot be negative (got {value})")]
    NegativeComponent {
        /// The component being written.
        component: &'static str,
        /// The rejected value.
        value: Days,
    },
}

impl BalanceError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NegativeComponent { .. } => 400,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NegativeComponent { .. } => "NEGATIVE_COMPONENT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_negative_component_error() {
        let err = BalanceError::NegativeComponent {
            component: "carried_over",
            value: Days::new(dec!(-1)),
        };
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "NEGATIVE_COMPONENT");
        assert!(err.to_string().contains("carried_over"));
    }
}
