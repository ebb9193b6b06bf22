//! Session state and token types for the identity layer.

use std::fmt;

/// Authentication state of one authenticator instance.
///
/// State only advances forward through
/// `Unknown → SignedOut → SignedIn`; a failed provider call leaves the
/// prior state in place, and `SignedIn` regresses only if the provider
/// explicitly reports otherwise during a later `initialize()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserState {
    /// No session information has been established yet.
    Unknown,
    /// A session exists but the user has not signed in.
    SignedOut,
    /// The user holds a valid signed-in session.
    SignedIn,
}

impl fmt::Display for UserState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown"),
            Self::SignedOut => write!(f, "signed_out"),
            Self::SignedIn => write!(f, "signed_in"),
        }
    }
}

/// Result of a credential sign-in attempt.
///
/// Anything other than an explicit `Done` (additional challenges,
/// confirmation steps) is treated as not-yet-signed-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInOutcome {
    /// Sign-in completed; the provider holds a token set.
    Done,
    /// The provider requires further steps before tokens are issued.
    Other,
}

/// The access/id/refresh token triple cached by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthTokens {
    /// Short-lived access token presented as the bearer credential.
    pub access_token: String,
    /// OpenID Connect identity token.
    pub id_token: String,
    /// Long-lived token used by the provider to mint new access tokens.
    pub refresh_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_state_display() {
        assert_eq!(UserState::Unknown.to_string(), "unknown");
        assert_eq!(UserState::SignedOut.to_string(), "signed_out");
        assert_eq!(UserState::SignedIn.to_string(), "signed_in");
    }
}
