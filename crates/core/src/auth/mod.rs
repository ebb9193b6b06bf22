//! Authentication session state and the token authenticator.

pub mod authenticator;
pub mod traits;
pub mod types;

pub use authenticator::{AuthenticatorError, TokenAuthenticator};
pub use traits::{IdentityError, IdentityProvider};
pub use types::{AuthTokens, SignInOutcome, UserState};
