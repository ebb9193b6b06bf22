//! Cognito User Pool identity provider.
//!
//! Implements the identity port over Cognito's `InitiateAuth` API with
//! the `USER_PASSWORD_AUTH` flow. A successful sign-in caches the token
//! triple in memory; `initialize` reports `SignedIn` exactly when a
//! triple is cached. Token refresh is not handled here: the
//! authenticator re-runs sign-in whenever the session is not signed in.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::debug;
use url::Url;

use cardsim_core::{AuthTokens, IdentityError, IdentityProvider, SignInOutcome, UserState};

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const AMZ_JSON_CONTENT_TYPE: &str = "application/x-amz-json-1.1";
const INITIATE_AUTH_TARGET: &str = "AWSCognitoIdentityProviderService.InitiateAuth";
const USER_PASSWORD_AUTH_FLOW: &str = "USER_PASSWORD_AUTH";

/// Error type for Cognito User Pool calls.
///
/// Display strings all carry the `Cognito UserPool` prefix; the error
/// classification layer keys on that text.
#[derive(Debug, thiserror::Error)]
pub enum CognitoError {
    /// The HTTP exchange itself failed.
    #[error("Cognito UserPool request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Cognito rejected the call with a structured error body.
    #[error("Cognito UserPool error {error_type}: {message}")]
    Api {
        /// Cognito's `__type` discriminator, e.g. `NotAuthorizedException`.
        error_type: String,
        /// Human-readable message from Cognito.
        message: String,
    },

    /// Non-2xx response without a structured error body.
    #[error("Cognito UserPool rejected the request (HTTP {status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// A 2xx response whose body was not valid JSON.
    #[error("Cognito UserPool returned an unreadable response: {0}")]
    InvalidBody(#[from] serde_json::Error),

    /// The regional endpoint URL could not be formed.
    #[error("Invalid Cognito endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct InitiateAuthRequest<'a> {
    auth_flow: &'a str,
    client_id: &'a str,
    auth_parameters: AuthParameters<'a>,
}

#[derive(Serialize)]
struct AuthParameters<'a> {
    #[serde(rename = "USERNAME")]
    username: &'a str,
    #[serde(rename = "PASSWORD")]
    password: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct InitiateAuthResponse {
    authentication_result: Option<AuthenticationResult>,
    challenge_name: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AuthenticationResult {
    access_token: String,
    id_token: String,
    refresh_token: String,
}

#[derive(Deserialize)]
struct CognitoErrorBody {
    #[serde(rename = "__type")]
    error_type: String,
    #[serde(rename = "message", alias = "Message", default)]
    message: String,
}

/// Identity provider backed by a Cognito User Pool app client.
pub struct CognitoUserPoolProvider {
    endpoint: Url,
    client_id: String,
    client: reqwest::Client,
    tokens: RwLock<Option<AuthTokens>>,
}

impl CognitoUserPoolProvider {
    /// Provider for the standard regional endpoint.
    ///
    /// # Errors
    /// Returns [`CognitoError`] if the endpoint URL cannot be formed or
    /// the HTTP client cannot be constructed.
    pub fn new(region: &str, client_id: String) -> Result<Self, CognitoError> {
        let endpoint = Url::parse(&format!("https://cognito-idp.{region}.amazonaws.com/"))?;
        Self::with_endpoint(endpoint, client_id)
    }

    /// Provider pointed at an explicit endpoint.
    ///
    /// # Errors
    /// Returns [`CognitoError::Http`] if the HTTP client cannot be
    /// constructed.
    pub fn with_endpoint(endpoint: Url, client_id: String) -> Result<Self, CognitoError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;
        Ok(Self { endpoint, client_id, client, tokens: RwLock::new(None) })
    }

    async fn initiate_auth(
        &self,
        username: &str,
        password: &str,
    ) -> Result<InitiateAuthResponse, CognitoError> {
        let payload = InitiateAuthRequest {
            auth_flow: USER_PASSWORD_AUTH_FLOW,
            client_id: &self.client_id,
            auth_parameters: AuthParameters { username, password },
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .header("Content-Type", AMZ_JSON_CONTENT_TYPE)
            .header("X-Amz-Target", INITIATE_AUTH_TARGET)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return match serde_json::from_str::<CognitoErrorBody>(&body) {
                Ok(error) => Err(CognitoError::Api {
                    error_type: error.error_type,
                    message: error.message,
                }),
                Err(_) => Err(CognitoError::Status { status: status.as_u16(), body }),
            };
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl IdentityProvider for CognitoUserPoolProvider {
    async fn initialize(&self) -> Result<UserState, IdentityError> {
        let signed_in = self.tokens.read().await.is_some();
        Ok(if signed_in { UserState::SignedIn } else { UserState::SignedOut })
    }

    async fn sign_in(&self, username: &str, password: &str) -> Result<SignInOutcome, IdentityError> {
        let response = self.initiate_auth(username, password).await?;

        if let Some(result) = response.authentication_result {
            *self.tokens.write().await = Some(AuthTokens {
                access_token: result.access_token,
                id_token: result.id_token,
                refresh_token: result.refresh_token,
            });
            debug!("sign-in completed with token triple");
            return Ok(SignInOutcome::Done);
        }

        debug!(challenge = ?response.challenge_name, "sign-in halted on challenge");
        Ok(SignInOutcome::Other)
    }

    async fn get_tokens(&self) -> Result<Option<AuthTokens>, IdentityError> {
        Ok(self.tokens.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_partial_json, header, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    async fn provider(server: &MockServer) -> CognitoUserPoolProvider {
        let endpoint = Url::parse(&server.uri()).expect("endpoint url");
        CognitoUserPoolProvider::with_endpoint(endpoint, "client-1".to_string())
            .expect("provider")
    }

    #[tokio::test]
    async fn successful_sign_in_caches_tokens_and_reports_signed_in() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(header("X-Amz-Target", INITIATE_AUTH_TARGET))
            .and(body_partial_json(serde_json::json!({
                "AuthFlow": "USER_PASSWORD_AUTH",
                "ClientId": "client-1",
                "AuthParameters": { "USERNAME": "user", "PASSWORD": "secret" }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "AuthenticationResult": {
                    "AccessToken": "access-1",
                    "IdToken": "id-1",
                    "RefreshToken": "refresh-1"
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let provider = provider(&server).await;
        assert_eq!(provider.initialize().await.expect("state"), UserState::SignedOut);

        let outcome = provider.sign_in("user", "secret").await.expect("sign in");
        assert!(matches!(outcome, SignInOutcome::Done));

        assert_eq!(provider.initialize().await.expect("state"), UserState::SignedIn);
        let tokens = provider.get_tokens().await.expect("tokens").expect("cached triple");
        assert_eq!(tokens.access_token, "access-1");
    }

    #[tokio::test]
    async fn challenge_response_maps_to_other_outcome() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "ChallengeName": "NEW_PASSWORD_REQUIRED",
                "ChallengeParameters": {}
            })))
            .mount(&server)
            .await;

        let provider = provider(&server).await;
        let outcome = provider.sign_in("user", "secret").await.expect("sign in");

        assert!(matches!(outcome, SignInOutcome::Other));
        assert!(provider.get_tokens().await.expect("tokens").is_none());
    }

    #[tokio::test]
    async fn structured_rejection_surfaces_cognito_error_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "__type": "NotAuthorizedException",
                "message": "Incorrect username or password."
            })))
            .mount(&server)
            .await;

        let provider = provider(&server).await;
        let error = provider.sign_in("user", "wrong").await.expect_err("should fail");

        let rendered = error.to_string();
        assert!(rendered.contains("Cognito UserPool"));
        assert!(rendered.contains("NotAuthorizedException"));
        assert!(rendered.contains("Incorrect username or password."));
    }
}
