//! Core business logic for Solde.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `calendar` - French public holidays and business-day counting
//! - `accrual` - Leave entitlement calculations
//! - `balance` - Per-user/per-year leave balance reconciliation
//! - `request` - Leave request lifecycle state machine
//! - `cet` - Time-savings (CET) account and transfer protocol
//! - `engine` - Orchestration over the in-memory ledger store
//! - `notify` - Best-effort notification boundary
//! - `store` - In-memory persistence collaborator

pub mod accrual;
pub mod balance;
pub mod calendar;
pub mod cet;
pub mod engine;
pub mod notify;
pub mod request;
pub mod store;
