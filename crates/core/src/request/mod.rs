//! Leave request lifecycle state machine.
//!
//! A request is priced at creation (frozen business-day count), then
//! moves `pending → {validated, refused}`, `{pending, validated} →
//! cancelled`, or is withdrawn by its owner while still pending and
//! future-dated.

pub mod error;
pub mod service;
pub mod types;

pub use error::RequestError;
pub use service::{RequestAction, RequestService};
pub use types::{LeaveRequest, LeaveStatus};
