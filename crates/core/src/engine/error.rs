//! Engine error types.

use solde_shared::error::AppError;
use solde_shared::types::Role;
use thiserror::Error;

use crate::balance::BalanceError;
use crate::cet::CetError;
use crate::request::RequestError;

/// Errors surfaced by engine operations.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A leave request rule was violated.
    #[error(transparent)]
    Request(#[from] RequestError),

    /// A CET rule was violated.
    #[error(transparent)]
    Cet(#[from] CetError),

    /// A balance rule was violated.
    #[error(transparent)]
    Balance(#[from] BalanceError),

    /// The acting user's role does not permit the operation.
    #[error("Role {role} may not {action}")]
    Forbidden {
        /// The acting user's role.
        role: Role,
        /// The attempted operation.
        action: &'static str,
    },

    /// The referenced record does not exist.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// The record kind.
        kind: &'static str,
        /// The identifier that missed.
        id: String,
    },
}

impl EngineError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Request(e) => e.status_code(),
            Self::Cet(e) => e.status_code(),
            Self::Balance(e) => e.status_code(),
            Self::Forbidden { .. } => 403,
            Self::NotFound { .. } => 404,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Request(e) => e.error_code(),
            Self::Cet(e) => e.error_code(),
            Self::Balance(e) => e.error_code(),
            Self::Forbidden { .. } => "FORBIDDEN",
            Self::NotFound { .. } => "NOT_FOUND",
        }
    }
}

impl From<EngineError> for AppError {
    fn from(err: EngineError) -> Self {
        let message = err.to_string();
        match err.status_code() {
            400 => Self::Validation(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            409 => Self::StateConflict(message),
            422 => Self::Capacity(message),
            _ => Self::Internal(message),
        }
    }
}
