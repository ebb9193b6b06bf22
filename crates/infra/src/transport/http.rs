//! Reqwest-backed GraphQL transport.
//!
//! Every operation is a JSON POST of `{"query": ..., "variables": ...}`
//! against a single endpoint. Authentication is either a static
//! `x-api-key` header or a bearer token fetched from a
//! [`TokenProvider`] immediately before each request. Nothing is cached
//! or retried at this layer.
//!
//! Backends routinely return GraphQL error envelopes on non-2xx
//! responses, so the body is parsed before the status is judged; when a
//! non-2xx envelope carries errors, the HTTP status is stamped into
//! each error's `httpStatus` extension so the interpreter can see it.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::{debug, warn};
use url::Url;
use uuid::Uuid;

use cardsim_core::{GraphQlResponse, GraphQlTransport, TokenProvider, TransportError};

/// Default timeout for GraphQL calls.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Error type for the HTTP transport.
#[derive(Debug, thiserror::Error)]
pub enum GraphQlClientError {
    /// The HTTP exchange itself failed (connect, timeout, TLS).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response whose body was not a GraphQL error envelope.
    #[error("HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body, for diagnostics.
        body: String,
    },

    /// A 2xx response whose body was not valid JSON.
    #[error("Failed to parse GraphQL response: {0}")]
    InvalidBody(#[from] serde_json::Error),

    /// Token acquisition failed before the request was sent.
    ///
    /// The provider's message is surfaced verbatim so downstream
    /// classification can inspect it.
    #[error("{0}")]
    Token(#[source] TransportError),
}

enum AuthMode {
    ApiKey(String),
    Bearer(Arc<dyn TokenProvider>),
}

/// GraphQL transport over HTTPS.
pub struct HttpGraphQlTransport {
    endpoint: Url,
    client: reqwest::Client,
    auth: AuthMode,
}

impl HttpGraphQlTransport {
    /// Transport authenticating with a static API key.
    ///
    /// # Errors
    /// Returns [`GraphQlClientError::Http`] if the underlying HTTP
    /// client cannot be constructed.
    pub fn with_api_key(endpoint: Url, api_key: String) -> Result<Self, GraphQlClientError> {
        Ok(Self { endpoint, client: build_client()?, auth: AuthMode::ApiKey(api_key) })
    }

    /// Transport authenticating with bearer tokens from `provider`.
    ///
    /// The provider is consulted on every request; token freshness is
    /// its concern, not the transport's.
    ///
    /// # Errors
    /// Returns [`GraphQlClientError::Http`] if the underlying HTTP
    /// client cannot be constructed.
    pub fn with_token_provider(
        endpoint: Url,
        provider: Arc<dyn TokenProvider>,
    ) -> Result<Self, GraphQlClientError> {
        Ok(Self { endpoint, client: build_client()?, auth: AuthMode::Bearer(provider) })
    }

    async fn execute(
        &self,
        kind: &'static str,
        document: &str,
        variables: Value,
    ) -> Result<GraphQlResponse, GraphQlClientError> {
        // Correlates the request/response log lines of one call.
        let request_id = Uuid::new_v4();

        let mut request = self
            .client
            .post(self.endpoint.clone())
            .json(&json!({ "query": document, "variables": variables }));

        request = match &self.auth {
            AuthMode::ApiKey(key) => request.header("x-api-key", key),
            AuthMode::Bearer(provider) => {
                let token =
                    provider.auth_token().await.map_err(GraphQlClientError::Token)?;
                request.bearer_auth(token)
            }
        };

        debug!(%request_id, kind, endpoint = %self.endpoint, "dispatching GraphQL request");

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        debug!(%request_id, status = status.as_u16(), "GraphQL response received");

        match serde_json::from_str::<GraphQlResponse>(&body) {
            Ok(envelope) if status.is_success() => Ok(envelope),
            Ok(envelope) if !envelope.errors.is_empty() => {
                warn!(%request_id, kind, status = status.as_u16(), "GraphQL errors on non-2xx response");
                let errors = envelope
                    .errors
                    .into_iter()
                    .map(|error| {
                        if error.http_status().is_none() {
                            error.with_http_status(status.as_u16())
                        } else {
                            error
                        }
                    })
                    .collect();
                Ok(GraphQlResponse { data: envelope.data, errors })
            }
            Ok(_) => Err(GraphQlClientError::Status { status: status.as_u16(), body }),
            Err(parse_error) => {
                if status.is_success() {
                    Err(GraphQlClientError::InvalidBody(parse_error))
                } else {
                    Err(GraphQlClientError::Status { status: status.as_u16(), body })
                }
            }
        }
    }
}

fn build_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder().timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS)).build()
}

#[async_trait]
impl GraphQlTransport for HttpGraphQlTransport {
    async fn query(
        &self,
        document: &str,
        variables: Value,
    ) -> Result<GraphQlResponse, TransportError> {
        self.execute("query", document, variables).await.map_err(Into::into)
    }

    async fn mutate(
        &self,
        document: &str,
        variables: Value,
    ) -> Result<GraphQlResponse, TransportError> {
        self.execute("mutation", document, variables).await.map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn endpoint(server: &MockServer) -> Url {
        Url::parse(&format!("{}/graphql", server.uri())).expect("endpoint url")
    }

    #[tokio::test]
    async fn sends_api_key_header_and_parses_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/graphql"))
            .and(header("x-api-key", "key-1"))
            .and(body_partial_json(serde_json::json!({ "query": "query Q { ping }" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": { "ping": true }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let transport = HttpGraphQlTransport::with_api_key(endpoint(&server), "key-1".to_string())
            .expect("transport");
        let response = transport
            .query("query Q { ping }", serde_json::json!({}))
            .await
            .expect("response");

        assert!(response.errors.is_empty());
        assert_eq!(response.data, Some(serde_json::json!({ "ping": true })));
    }

    #[tokio::test]
    async fn stamps_http_status_onto_errors_of_non_2xx_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "data": null,
                "errors": [{ "message": "token rejected" }]
            })))
            .mount(&server)
            .await;

        let transport = HttpGraphQlTransport::with_api_key(endpoint(&server), "key-1".to_string())
            .expect("transport");
        let response = transport
            .mutate("mutation M { x }", serde_json::json!({}))
            .await
            .expect("envelope should pass through");

        assert_eq!(response.errors[0].http_status(), Some(401));
    }

    #[tokio::test]
    async fn non_2xx_without_envelope_is_a_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
            .mount(&server)
            .await;

        let transport = HttpGraphQlTransport::with_api_key(endpoint(&server), "key-1".to_string())
            .expect("transport");
        let error = transport
            .query("query Q { ping }", serde_json::json!({}))
            .await
            .expect_err("should fail");

        assert!(error.to_string().contains("502"));
    }
}
