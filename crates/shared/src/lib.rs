//! Shared types, errors, and configuration for Solde.
//!
//! This crate provides common types used across all other crates:
//! - `Days` quantities with decimal precision (whole and half days)
//! - Typed IDs for type-safe entity references
//! - Roles supplied by the authorization collaborator
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, PolicyConfig};
pub use error::{AppError, AppResult};
