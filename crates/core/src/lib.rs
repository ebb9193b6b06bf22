//! # CardSim Core
//!
//! The reimplementable core of the simulator SDK:
//!
//! - [`auth`] — the token-authenticator state machine over a pluggable
//!   identity provider
//! - [`graphql`] — the wire-level GraphQL response and error model
//! - [`interpret`] — classification of backend errors into the typed
//!   per-operation error families
//! - [`ports`] — transport traits implemented by `cardsim-infra` (or by
//!   callers injecting their own transport)
//!
//! No I/O happens in this crate; everything here is pure logic over the
//! ports.

pub mod auth;
pub mod graphql;
pub mod interpret;
pub mod ports;

pub use auth::{
    AuthTokens, AuthenticatorError, IdentityError, IdentityProvider, SignInOutcome,
    TokenAuthenticator, UserState,
};
pub use graphql::{GraphQlError, GraphQlResponse};
pub use interpret::{interpret_graphql_error, interpret_transport_error, OperationError};
pub use ports::{GraphQlTransport, TokenProvider, TransportError};
