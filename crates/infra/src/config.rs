//! Client configuration.
//!
//! A [`SimulatorConfig`] is only obtainable through its smart
//! constructors, so a constructed value always carries a parseable API
//! URL and exactly one complete credential set.

use url::Url;

/// Error type for configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The API endpoint was not a valid absolute URL.
    #[error("Invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A required field was empty.
    #[error("Configuration field '{0}' must not be empty")]
    EmptyField(&'static str),

    /// Wiring up the default transport or identity provider failed.
    #[error("Client construction failed: {0}")]
    Build(String),
}

/// Cognito User Pool coordinates for the username/password credential
/// mode.
#[derive(Debug, Clone)]
pub struct IdentityConfig {
    /// AWS region hosting the user pool, e.g. `us-east-1`.
    pub region: String,
    /// App client id registered with the pool.
    pub client_id: String,
}

/// How the client authenticates against the simulator API.
///
/// The two modes are mutually exclusive by construction.
#[derive(Debug, Clone)]
pub enum Credentials {
    /// A static API key sent on every request.
    ApiKey {
        /// The key value.
        api_key: String,
    },
    /// Username/password sign-in through a Cognito User Pool, exchanged
    /// lazily for a bearer token.
    UserPassword {
        /// User pool coordinates.
        identity: IdentityConfig,
        /// Sign-in username.
        username: String,
        /// Sign-in password.
        password: String,
    },
}

/// Validated configuration for [`SimulatorClient`](crate::SimulatorClient).
#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    pub(crate) api_url: Url,
    pub(crate) credentials: Credentials,
}

impl SimulatorConfig {
    /// Configuration for the API-key credential mode.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the URL does not parse or the key is
    /// empty.
    pub fn with_api_key(
        api_url: &str,
        api_key: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let api_key = api_key.into();
        require_non_empty(&api_key, "api_key")?;
        Ok(Self {
            api_url: Url::parse(api_url)?,
            credentials: Credentials::ApiKey { api_key },
        })
    }

    /// Configuration for the username/password credential mode.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the URL does not parse or any field
    /// is empty.
    pub fn with_user_password(
        api_url: &str,
        identity: IdentityConfig,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let username = username.into();
        let password = password.into();
        require_non_empty(&identity.region, "region")?;
        require_non_empty(&identity.client_id, "client_id")?;
        require_non_empty(&username, "username")?;
        require_non_empty(&password, "password")?;
        Ok(Self {
            api_url: Url::parse(api_url)?,
            credentials: Credentials::UserPassword { identity, username, password },
        })
    }

    /// API endpoint this configuration points at.
    pub fn api_url(&self) -> &Url {
        &self.api_url
    }
}

fn require_non_empty(value: &str, field: &'static str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::EmptyField(field));
    }
    Ok(())
}
