//! GraphQL transport adapters.

mod http;

pub use http::{GraphQlClientError, HttpGraphQlTransport};
