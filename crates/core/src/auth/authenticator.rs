//! Token authenticator state machine.
//!
//! Produces a valid bearer token for each outbound authenticated call,
//! performing on-demand sign-in rather than eager pre-emptive refresh:
//!
//! 1. `initialize()` the session
//! 2. `sign_in()` if the session is not already signed in
//! 3. `get_tokens()` and hand back the access token
//!
//! No retries happen at this layer and provider errors pass through
//! unmodified. The only shared mutable state is the session state; two
//! tasks racing through `latest_auth_token` may initialize or sign in
//! redundantly, each independently reaching a consistent state.

use tokio::sync::RwLock;
use tracing::debug;

use super::traits::{IdentityError, IdentityProvider};
use super::types::{AuthTokens, SignInOutcome, UserState};

/// Error type for authenticator operations.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticatorError {
    /// Initialize and sign-in both completed without reaching
    /// `SignedIn`. Indicates a provider misconfiguration rather than an
    /// expected runtime condition.
    #[error("Failed to authenticate with Cognito")]
    NotAuthenticated,

    /// The provider reported `SignedIn` but holds no token triple.
    #[error("Null authentication token")]
    MissingToken,

    /// The identity provider's own error, passed through unmodified.
    #[error("{0}")]
    Identity(#[source] IdentityError),
}

/// Lazily signs in against an identity provider and serves the latest
/// access token on demand.
pub struct TokenAuthenticator<P: IdentityProvider> {
    provider: P,
    username: String,
    password: String,
    state: RwLock<UserState>,
}

impl<P: IdentityProvider> TokenAuthenticator<P> {
    /// Create an authenticator in the `Unknown` state.
    ///
    /// The credentials are held for on-demand sign-in from
    /// [`latest_auth_token`](Self::latest_auth_token); no provider call
    /// happens until a token is requested.
    pub fn new(provider: P, username: String, password: String) -> Self {
        Self { provider, username, password, state: RwLock::new(UserState::Unknown) }
    }

    /// Current session state.
    pub async fn state(&self) -> UserState {
        *self.state.read().await
    }

    /// Establish or refresh session state against the provider.
    ///
    /// Idempotent: repeated calls with an unchanged provider leave the
    /// state unchanged.
    ///
    /// # Errors
    /// Provider errors propagate unmodified; the prior state is kept.
    pub async fn initialize(&self) -> Result<UserState, AuthenticatorError> {
        let reported =
            self.provider.initialize().await.map_err(AuthenticatorError::Identity)?;

        let mut state = self.state.write().await;
        if *state != reported {
            debug!(from = %state, to = %reported, "session state updated by initialize");
        }
        *state = reported;
        Ok(reported)
    }

    /// Perform a credential-based sign-in.
    ///
    /// An explicit `Done` outcome moves the session to `SignedIn`; any
    /// other outcome (pending challenge, confirmation step) maps to
    /// `Unknown`.
    ///
    /// # Errors
    /// Provider errors propagate unmodified; the prior state is kept.
    pub async fn sign_in(
        &self,
        username: &str,
        password: &str,
    ) -> Result<UserState, AuthenticatorError> {
        let outcome = self
            .provider
            .sign_in(username, password)
            .await
            .map_err(AuthenticatorError::Identity)?;

        let new_state = match outcome {
            SignInOutcome::Done => UserState::SignedIn,
            SignInOutcome::Other => UserState::Unknown,
        };

        debug!(state = %new_state, "sign-in completed");
        *self.state.write().await = new_state;
        Ok(new_state)
    }

    /// Return the provider's current token triple, if any.
    ///
    /// Does not change session state.
    ///
    /// # Errors
    /// Provider errors propagate unmodified.
    pub async fn get_tokens(&self) -> Result<Option<AuthTokens>, AuthenticatorError> {
        self.provider.get_tokens().await.map_err(AuthenticatorError::Identity)
    }

    /// Produce the latest access token, signing in on demand.
    ///
    /// Runs initialize, then sign-in if the session is not yet signed
    /// in, then token retrieval. The calling task is suspended for the
    /// full round trip; no cancellation or retry is layered on top.
    ///
    /// # Errors
    /// - [`AuthenticatorError::NotAuthenticated`] if sign-in completes
    ///   without reaching `SignedIn`
    /// - [`AuthenticatorError::MissingToken`] if the provider holds no
    ///   tokens despite being signed in
    /// - provider errors, unmodified
    pub async fn latest_auth_token(&self) -> Result<String, AuthenticatorError> {
        let mut state = self.initialize().await?;

        if state != UserState::SignedIn {
            state = self.sign_in(&self.username, &self.password).await?;
        }

        if state != UserState::SignedIn {
            return Err(AuthenticatorError::NotAuthenticated);
        }

        match self.get_tokens().await? {
            Some(tokens) => Ok(tokens.access_token),
            None => Err(AuthenticatorError::MissingToken),
        }
    }
}

/// The authenticator is the default bearer-token source for
/// authenticated transports.
#[async_trait::async_trait]
impl<P: IdentityProvider> crate::ports::TokenProvider for TokenAuthenticator<P> {
    async fn auth_token(&self) -> Result<String, crate::ports::TransportError> {
        self.latest_auth_token().await.map_err(Into::into)
    }
}
