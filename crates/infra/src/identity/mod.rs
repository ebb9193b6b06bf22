//! Identity provider adapters.

mod cognito;

pub use cognito::{CognitoError, CognitoUserPoolProvider};
