//! Resource repositories
//!
//! One generic [`Repository`] performs CRUD against a REST collection; a
//! [`Resource`] binding supplies the endpoint, the normalizer pair and the
//! per-resource diagnostics policy. Repositories hold no cache: every read
//! goes to the backend.

mod customer;
mod reservation;
mod table;

pub use customer::{CustomerRepository, CustomerResource};
pub use reservation::{ReservationRepository, ReservationResource};
pub use table::{TableRepository, TableResource};

use crate::connectivity::Connectivity;
use crate::envelope::{unwrap_collection, unwrap_entity};
use crate::error::{Operation, TransportError};
use crate::transport::{Transport, WireRequest, WireResponse};
use crate::{ClientConfig, ClientError, ClientResult};
use async_trait::async_trait;
use http::{Method, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Binding between a domain entity and its REST collection
pub trait Resource: Send + Sync + 'static {
    type Entity: Send + Sync;
    type Dto: Serialize;

    /// Singular name used in diagnostics
    const NAME: &'static str;
    /// Collection path relative to the API base
    const PATH: &'static str;
    /// Send `Accept: application/json` on writes
    const ACCEPT_JSON: bool = false;
    /// Attach the endpoint to failed writes and the body to failed deletes
    const VERBOSE_ERRORS: bool = false;

    fn from_wire(value: &Value) -> ClientResult<Self::Entity>;
    fn to_wire(entity: &Self::Entity) -> Self::Dto;
}

/// CRUD contract shared by all repositories
#[async_trait]
pub trait ResourceRepository: Send + Sync {
    type Entity: Send + Sync;

    /// Fetch the whole collection
    async fn get_all(&self) -> ClientResult<Vec<Self::Entity>>;

    /// Fetch one entity; `Ok(None)` when the backend answers 404
    async fn get_by_id(&self, id: i64) -> ClientResult<Option<Self::Entity>>;

    /// Persist a new entity and return it with its server-assigned id
    async fn create(&self, entity: &Self::Entity) -> ClientResult<Self::Entity>;

    /// Replace an existing entity
    async fn update(&self, id: i64, entity: &Self::Entity) -> ClientResult<Self::Entity>;

    async fn delete(&self, id: i64) -> ClientResult<()>;
}

/// REST repository for one resource
pub struct Repository<R: Resource> {
    transport: Arc<dyn Transport>,
    connectivity: Arc<dyn Connectivity>,
    endpoint: String,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> Clone for Repository<R> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            connectivity: self.connectivity.clone(),
            endpoint: self.endpoint.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R: Resource> std::fmt::Debug for Repository<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repository")
            .field("resource", &R::NAME)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl<R: Resource> Repository<R> {
    /// Create a repository rooted at the collection endpoint for `R::PATH`
    pub fn new(
        config: &ClientConfig,
        transport: Arc<dyn Transport>,
        connectivity: Arc<dyn Connectivity>,
    ) -> Self {
        Self {
            transport,
            connectivity,
            endpoint: config.endpoint(R::PATH),
            _resource: PhantomData,
        }
    }

    /// Collection URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/{}", self.endpoint, id)
    }

    fn ensure_online(&self) -> ClientResult<()> {
        if self.connectivity.is_online() {
            Ok(())
        } else {
            Err(ClientError::Connectivity)
        }
    }

    async fn send(&self, request: WireRequest) -> ClientResult<WireResponse> {
        self.ensure_online()?;
        debug!(resource = R::NAME, method = %request.method, url = %request.url, "Sending request");
        self.transport.send(request).await
    }

    fn write_request(&self, method: Method, url: String, entity: &R::Entity) -> ClientResult<WireRequest> {
        let payload = serde_json::to_value(R::to_wire(entity))?;
        debug!(resource = R::NAME, %payload, "Serialized payload");
        Ok(WireRequest::new(method, url)
            .with_json(payload)
            .with_accept_json(R::ACCEPT_JSON))
    }

    /// Build the transport error for a non-success response
    fn failure(&self, operation: Operation, response: WireResponse) -> ClientError {
        let mut err = TransportError::new(R::NAME, operation, response.status);
        let keep_body = match operation {
            Operation::Create | Operation::Update => true,
            Operation::Delete => R::VERBOSE_ERRORS,
            Operation::Fetch | Operation::FetchOne => false,
        };
        if keep_body {
            err = err.with_body(response.body);
        }
        err.into()
    }

    /// Attach the endpoint to every failure of a write on a verbose resource
    fn annotate(&self, operation: Operation, err: ClientError) -> ClientError {
        if R::VERBOSE_ERRORS && operation.is_write() {
            err.at_endpoint(self.endpoint.as_str())
        } else {
            err
        }
    }

    fn log_failure(&self, operation: Operation, id: Option<i64>, err: &ClientError) {
        error!(
            resource = R::NAME,
            ?operation,
            id = ?id,
            error = %err,
            "Repository operation failed"
        );
    }

    fn entity_from_response(&self, response: &WireResponse) -> ClientResult<R::Entity> {
        R::from_wire(&unwrap_entity(response.json()?))
    }

    async fn fetch_all(&self) -> ClientResult<Vec<R::Entity>> {
        let response = self.send(WireRequest::get(self.endpoint.as_str())).await?;
        if !response.is_success() {
            return Err(self.failure(Operation::Fetch, response));
        }

        let items = unwrap_collection(response.json()?);
        let mut entities = Vec::with_capacity(items.len());
        for item in &items {
            match R::from_wire(item) {
                Ok(entity) => entities.push(entity),
                Err(e) => warn!(resource = R::NAME, error = %e, "Skipping malformed item"),
            }
        }
        Ok(entities)
    }

    async fn fetch_one(&self, id: i64) -> ClientResult<Option<R::Entity>> {
        let response = self.send(WireRequest::get(self.item_url(id))).await?;
        if response.status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.is_success() {
            return Err(self.failure(Operation::FetchOne, response));
        }

        match unwrap_entity(response.json()?) {
            Value::Null => Ok(None),
            value => R::from_wire(&value).map(Some),
        }
    }

    async fn write(
        &self,
        operation: Operation,
        method: Method,
        url: String,
        entity: &R::Entity,
    ) -> ClientResult<R::Entity> {
        let request = self.write_request(method, url, entity)?;
        let response = self.send(request).await?;
        if !response.is_success() {
            return Err(self.failure(operation, response));
        }
        self.entity_from_response(&response)
    }

    async fn remove(&self, id: i64) -> ClientResult<()> {
        let response = self.send(WireRequest::delete(self.item_url(id))).await?;
        if !response.is_success() {
            return Err(self.failure(Operation::Delete, response));
        }
        Ok(())
    }
}

#[async_trait]
impl<R: Resource> ResourceRepository for Repository<R> {
    type Entity = R::Entity;

    async fn get_all(&self) -> ClientResult<Vec<R::Entity>> {
        self.fetch_all()
            .await
            .inspect_err(|e| self.log_failure(Operation::Fetch, None, e))
    }

    async fn get_by_id(&self, id: i64) -> ClientResult<Option<R::Entity>> {
        self.fetch_one(id)
            .await
            .inspect_err(|e| self.log_failure(Operation::FetchOne, Some(id), e))
    }

    async fn create(&self, entity: &R::Entity) -> ClientResult<R::Entity> {
        self.write(Operation::Create, Method::POST, self.endpoint.clone(), entity)
            .await
            .map_err(|e| self.annotate(Operation::Create, e))
            .inspect_err(|e| self.log_failure(Operation::Create, None, e))
    }

    async fn update(&self, id: i64, entity: &R::Entity) -> ClientResult<R::Entity> {
        self.write(Operation::Update, Method::PUT, self.item_url(id), entity)
            .await
            .map_err(|e| self.annotate(Operation::Update, e))
            .inspect_err(|e| self.log_failure(Operation::Update, Some(id), e))
    }

    async fn delete(&self, id: i64) -> ClientResult<()> {
        self.remove(id)
            .await
            .map_err(|e| self.annotate(Operation::Delete, e))
            .inspect_err(|e| self.log_failure(Operation::Delete, Some(id), e))
    }
}
