//! Mesa Client - data access for the restaurant reservation backend
//!
//! Repositories for customers, tables and reservations that translate
//! between the domain models in `shared` and the backend's localized wire
//! format, plus an ephemeral notification queue for surfacing outcomes.

pub mod client;
pub mod config;
pub mod connectivity;
pub mod envelope;
pub mod error;
pub mod transport;
pub mod logger;
pub mod normalize;
pub mod notification;
pub mod repository;

pub use client::MesaClient;
pub use config::ClientConfig;
pub use connectivity::{AlwaysOnline, Connectivity, ConnectivityFlag};
pub use error::{ClientError, ClientResult, Operation, TransportError};
pub use transport::{HttpTransport, Transport, WireRequest, WireResponse};
pub use notification::{
    ManualScheduler, Notification, NotificationId, NotificationKind, NotificationQueue,
    QueueEvent, Scheduler, TokioScheduler,
};
pub use repository::{
    CustomerRepository, Repository, ReservationRepository, Resource, ResourceRepository,
    TableRepository,
};

// Re-export domain models for convenience
pub use shared::models::{
    Customer, CustomerSummary, Reservation, Table, TableNumber, TableSummary,
};
