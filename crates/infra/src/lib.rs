//! # CardSim Infra
//!
//! Adapters and the public SDK surface for the virtual-card transaction
//! simulator:
//!
//! - [`config`] — validated client configuration (API-key or
//!   username/password credential modes)
//! - [`transport`] — reqwest-backed GraphQL transport implementing the
//!   core's transport port
//! - [`identity`] — Cognito User Pool identity provider backing the
//!   token authenticator
//! - [`client`] — [`SimulatorClient`], the dispatch wrapper exposing
//!   the simulator operations
//!
//! Everything takes its collaborators as constructor parameters;
//! [`SimulatorClient::new`] is the one convenience composition point
//! that wires up the defaults from a [`SimulatorConfig`].

pub mod client;
pub mod config;
pub mod identity;
pub mod transport;

pub use client::SimulatorClient;
pub use config::{ConfigError, Credentials, IdentityConfig, SimulatorConfig};
pub use identity::CognitoUserPoolProvider;
pub use transport::HttpGraphQlTransport;
