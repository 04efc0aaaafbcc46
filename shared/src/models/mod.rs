//! Data models
//!
//! Domain entities in their canonical (application-side) shape. The backend's
//! wire naming lives in `mesa-client::normalize`, not here.
//! All IDs are `i64` and `None` until the backend assigns them.

pub mod customer;
pub mod reservation;
pub mod table;

// Re-exports
pub use customer::*;
pub use reservation::*;
pub use table::*;
