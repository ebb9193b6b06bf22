//! # CardSim Domain
//!
//! Business domain types and models for the virtual-card transaction
//! simulator.
//!
//! This crate contains:
//! - Operation inputs and responses (authorization, debit, refund, ...)
//! - Per-operation error families
//! - Epoch-millisecond timestamp conversion
//!
//! ## Architecture
//! - No dependencies on other CardSim crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod errors;
pub mod time;
pub mod types;

// Re-export commonly used items
pub use errors::*;
pub use time::datetime_from_epoch_ms;
pub use types::*;
