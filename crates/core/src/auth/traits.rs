//! Identity transport port.
//!
//! Abstracts the user-pool identity provider so the authenticator state
//! machine can be exercised with mock implementations and composed with
//! any concrete provider (the default lives in `cardsim-infra`).

use async_trait::async_trait;

use super::types::{AuthTokens, SignInOutcome, UserState};

/// Error type surfaced by identity providers.
///
/// Provider failures are propagated to callers unmodified, so the port
/// carries them as boxed errors rather than forcing a conversion.
pub type IdentityError = Box<dyn std::error::Error + Send + Sync>;

/// Operations against the user-pool identity provider.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Establish or refresh session state against the provider.
    ///
    /// Idempotent to call repeatedly.
    ///
    /// # Errors
    /// Returns the provider's error unmodified if the identity
    /// transport fails; session state is then unspecified.
    async fn initialize(&self) -> Result<UserState, IdentityError>;

    /// Perform a credential-based sign-in.
    ///
    /// # Errors
    /// Returns the provider's error unmodified on transport or
    /// credential failure.
    async fn sign_in(&self, username: &str, password: &str)
        -> Result<SignInOutcome, IdentityError>;

    /// Return the provider's cached token triple, or `None` if no
    /// tokens are held.
    ///
    /// # Errors
    /// Returns the provider's error unmodified if token retrieval
    /// fails.
    async fn get_tokens(&self) -> Result<Option<AuthTokens>, IdentityError>;
}
