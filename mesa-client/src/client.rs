//! Client facade bundling the three repositories

use crate::connectivity::{AlwaysOnline, Connectivity};
use crate::transport::{HttpTransport, Transport};
use crate::repository::{CustomerRepository, ReservationRepository, TableRepository};
use crate::{ClientConfig, ClientResult};
use std::sync::Arc;

/// Entry point for the reservation backend
///
/// All repositories share one transport and one connectivity probe.
#[derive(Debug, Clone)]
pub struct MesaClient {
    config: ClientConfig,
    customers: CustomerRepository,
    tables: TableRepository,
    reservations: ReservationRepository,
}

impl MesaClient {
    /// Create a client over HTTP that assumes the network is reachable
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let transport = Arc::new(HttpTransport::new(&config)?);
        Ok(Self::with_parts(config, transport, Arc::new(AlwaysOnline)))
    }

    /// Create a client from explicit transport and connectivity seams
    pub fn with_parts(
        config: ClientConfig,
        transport: Arc<dyn Transport>,
        connectivity: Arc<dyn Connectivity>,
    ) -> Self {
        Self {
            customers: CustomerRepository::new(&config, transport.clone(), connectivity.clone()),
            tables: TableRepository::new(&config, transport.clone(), connectivity.clone()),
            reservations: ReservationRepository::new(&config, transport, connectivity),
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn customers(&self) -> &CustomerRepository {
        &self.customers
    }

    pub fn tables(&self) -> &TableRepository {
        &self.tables
    }

    pub fn reservations(&self) -> &ReservationRepository {
        &self.reservations
    }
}
