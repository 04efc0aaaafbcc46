//! Client error types

use http::StatusCode;
use std::fmt;
use thiserror::Error;

/// Repository operation that produced a transport failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Fetch,
    FetchOne,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// Gerund used in diagnostics ("Error creating reservation")
    pub fn verb(&self) -> &'static str {
        match self {
            Self::Fetch | Self::FetchOne => "fetching",
            Self::Create => "creating",
            Self::Update => "updating",
            Self::Delete => "deleting",
        }
    }

    pub fn is_write(&self) -> bool {
        matches!(self, Self::Create | Self::Update | Self::Delete)
    }
}

/// Non-success HTTP status returned by the backend
///
/// Carries the raw pieces; rendering happens in `Display` or
/// [`ClientError::user_message`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError {
    /// Singular resource name, e.g. "reservation"
    pub resource: &'static str,
    pub operation: Operation,
    pub status: StatusCode,
    pub status_text: String,
    /// Raw response body, when it was read
    pub body: Option<String>,
    /// Collection endpoint the request targeted, when annotated
    pub endpoint: Option<String>,
}

impl TransportError {
    pub fn new(resource: &'static str, operation: Operation, status: StatusCode) -> Self {
        Self {
            resource,
            operation,
            status,
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            body: None,
            endpoint: None,
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Error {} {} ({}): {}",
            self.operation.verb(),
            self.resource,
            self.status.as_u16(),
            self.status_text
        )?;
        if let Some(body) = self.body.as_deref().filter(|b| !b.is_empty()) {
            write!(f, ". Details: {}", body)?;
        }
        if let Some(endpoint) = &self.endpoint {
            write!(f, " (API URL: {})", endpoint)?;
        }
        Ok(())
    }
}

impl std::error::Error for TransportError {}

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connectivity probe reported offline; no request was issued
    #[error("No internet connection available")]
    Connectivity,

    /// Backend answered with a non-success status
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// HTTP request failed before a response arrived
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Failure on a write, annotated with the endpoint it targeted
    #[error("{source} (API URL: {endpoint})")]
    AtEndpoint {
        source: Box<ClientError>,
        endpoint: String,
    },
}

impl ClientError {
    /// Attach the endpoint a failed write targeted
    ///
    /// Transport errors carry it in their own field. Connectivity failures
    /// never reached an endpoint and are returned unchanged.
    pub fn at_endpoint(self, endpoint: impl Into<String>) -> Self {
        match self {
            Self::Connectivity | Self::AtEndpoint { .. } => self,
            Self::Transport(e) => Self::Transport(e.with_endpoint(endpoint)),
            other => Self::AtEndpoint {
                source: Box::new(other),
                endpoint: endpoint.into(),
            },
        }
    }

    /// Endpoint the failed request targeted, when annotated
    pub fn endpoint(&self) -> Option<&str> {
        match self {
            Self::Transport(e) => e.endpoint.as_deref(),
            Self::AtEndpoint { endpoint, .. } => Some(endpoint),
            _ => None,
        }
    }

    pub fn is_connectivity(&self) -> bool {
        match self {
            Self::Connectivity => true,
            Self::AtEndpoint { source, .. } => source.is_connectivity(),
            _ => false,
        }
    }

    /// HTTP status, for transport failures
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Transport(e) => Some(e.status),
            Self::AtEndpoint { source, .. } => source.status(),
            _ => None,
        }
    }

    /// Short message suitable for a notification
    pub fn user_message(&self) -> String {
        match self {
            Self::Connectivity => "No internet connection available".to_string(),
            Self::Transport(e) => format!(
                "Error {} {}: {}",
                e.operation.verb(),
                e.resource,
                e.status_text
            ),
            Self::Http(_) => "Could not reach the server".to_string(),
            Self::InvalidResponse(_) | Self::Serialization(_) => {
                "The server returned an unexpected response".to_string()
            }
            Self::AtEndpoint { source, .. } => source.user_message(),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_display_with_details() {
        let err = TransportError::new("reservation", Operation::Create, StatusCode::UNPROCESSABLE_ENTITY)
            .with_body("{\"mesa_id\":[\"required\"]}")
            .with_endpoint("http://127.0.0.1:8000/api/reservations");
        assert_eq!(
            err.to_string(),
            "Error creating reservation (422): Unprocessable Entity. Details: {\"mesa_id\":[\"required\"]} (API URL: http://127.0.0.1:8000/api/reservations)"
        );
    }

    #[test]
    fn test_transport_error_display_plain() {
        let err = TransportError::new("customer", Operation::Fetch, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.to_string(),
            "Error fetching customer (500): Internal Server Error"
        );
    }

    #[test]
    fn test_user_message() {
        let err: ClientError =
            TransportError::new("table", Operation::Delete, StatusCode::CONFLICT).into();
        assert_eq!(err.user_message(), "Error deleting table: Conflict");
        assert_eq!(err.status(), Some(StatusCode::CONFLICT));
        assert!(ClientError::Connectivity.is_connectivity());
        assert_eq!(ClientError::Connectivity.status(), None);
    }

    #[test]
    fn test_at_endpoint() {
        let endpoint = "http://127.0.0.1:8000/api/reservations";

        let err = ClientError::InvalidResponse("empty body".into()).at_endpoint(endpoint);
        assert_eq!(
            err.to_string(),
            "Invalid response: empty body (API URL: http://127.0.0.1:8000/api/reservations)"
        );
        assert_eq!(err.endpoint(), Some(endpoint));
        assert_eq!(err.user_message(), "The server returned an unexpected response");
        assert!(std::error::Error::source(&err).is_some());

        let err: ClientError =
            TransportError::new("reservation", Operation::Delete, StatusCode::CONFLICT).into();
        let err = err.at_endpoint(endpoint);
        assert!(matches!(&err, ClientError::Transport(e) if e.endpoint.as_deref() == Some(endpoint)));
        assert_eq!(err.status(), Some(StatusCode::CONFLICT));

        let err = ClientError::Connectivity.at_endpoint(endpoint);
        assert!(matches!(err, ClientError::Connectivity));
        assert_eq!(err.endpoint(), None);
    }
}
