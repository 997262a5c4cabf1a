//! Common types used across the application.

pub mod days;
pub mod id;
pub mod role;

pub use days::Days;
pub use id::*;
pub use role::Role;
