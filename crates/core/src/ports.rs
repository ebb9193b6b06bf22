//! Transport ports implemented outside the core.
//!
//! The core never performs I/O; it talks to the backend through
//! [`GraphQlTransport`] and obtains bearer credentials through
//! [`TokenProvider`]. `cardsim-infra` provides the reqwest-backed
//! defaults; tests and embedders inject their own.

use async_trait::async_trait;
use serde_json::Value;

use crate::graphql::GraphQlResponse;

/// Error type surfaced by transports at the port boundary.
///
/// Transports keep their own concrete error types internally; the port
/// erases them so the interpreter can classify by status and message
/// chain without knowing the transport.
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// GraphQL transport to the simulator backend.
#[async_trait]
pub trait GraphQlTransport: Send + Sync {
    /// Execute a query document.
    ///
    /// # Errors
    /// Returns the transport's error when the call could not produce a
    /// GraphQL envelope at all (network failure, non-JSON body).
    /// Backend-reported errors arrive inside the envelope, not here.
    async fn query(
        &self,
        document: &str,
        variables: Value,
    ) -> Result<GraphQlResponse, TransportError>;

    /// Execute a mutation document.
    ///
    /// # Errors
    /// Same contract as [`query`](Self::query).
    async fn mutate(
        &self,
        document: &str,
        variables: Value,
    ) -> Result<GraphQlResponse, TransportError>;
}

/// Provides bearer tokens for authenticated transports.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Retrieve the current access token, signing in if necessary.
    ///
    /// # Errors
    /// Returns the underlying authenticator or provider error.
    async fn auth_token(&self) -> Result<String, TransportError>;
}
