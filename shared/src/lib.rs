//! Shared types for the Mesa reservation client
//!
//! Domain models used by the client crate and by the application code
//! that renders them.

pub mod models;

// Re-exports
pub use models::{Customer, CustomerSummary, Reservation, Table, TableNumber, TableSummary};
pub use serde::{Deserialize, Serialize};
