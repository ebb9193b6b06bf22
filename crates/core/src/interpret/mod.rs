//! Backend error classification.
//!
//! Maps opaque backend GraphQL error payloads onto the typed
//! per-operation error families. The rule ladder is identical for every
//! operation family and is parameterized only by which family's
//! constructors run:
//!
//! 1. HTTP status 401/403, or a Cognito marker anywhere in the message
//!    chain, means the caller's authentication is invalid.
//! 2. Otherwise the backend's `errorType` extension is matched against
//!    the family's vocabulary.
//! 3. Otherwise the error is a generic failure carrying the raw error's
//!    string form.
//!
//! Transport-level errors without a structured payload only get rule 1;
//! anything unmatched there is wrapped as the family's `Unknown` with
//! the original error preserved as cause. Cancellation is never
//! intercepted: in this runtime cancellation is future drop, and
//! nothing in this module or the dispatch path catches or converts it.

mod families;

use cardsim_domain::ErrorCause;

use crate::graphql::GraphQlError;
use crate::ports::TransportError;

/// Message substrings identifying authentication failures surfaced by
/// the identity layer.
///
/// A deliberate heuristic tied to the Cognito provider's error text,
/// kept for compatibility because the backend emits no structured
/// authentication code; the HTTP-status rule is consulted first as the
/// structured signal.
const AUTH_MESSAGE_MARKERS: [&str; 3] =
    ["Cognito User Pools token", "Cognito Identity", "Cognito UserPool"];

/// Authentication failures surface as wrapped errors from the
/// transport, so the cause chain is walked to this depth.
const MAX_CAUSE_DEPTH: usize = 4;

/// Constructors each error family exposes to the interpreter.
///
/// Implemented for every per-operation error family in
/// `cardsim-domain`; each family's `errorType` vocabulary lives in its
/// `from_error_type` implementation.
pub trait OperationError: Sized {
    /// The caller's authentication is invalid or expired.
    fn authentication(message: String) -> Self;

    /// The backend reported an error with no mapping in this family.
    fn failed(message: String) -> Self;

    /// An unclassified failure; the original error is kept as cause.
    fn unknown(cause: ErrorCause) -> Self;

    /// Map a recognized `errorType` vocabulary entry, if this family
    /// has one for it.
    fn from_error_type(error_type: &str, message: String) -> Option<Self>;
}

/// Classify one structured backend error into family `E`.
///
/// First match wins: authentication signal, then the family's
/// `errorType` vocabulary, then generic failure.
pub fn interpret_graphql_error<E: OperationError>(error: &GraphQlError) -> E {
    if payload_has_authentication_signal(error) {
        return E::authentication(error.message.clone());
    }

    if let Some(error_type) = error.error_type() {
        if let Some(mapped) = E::from_error_type(error_type, error.message.clone()) {
            return mapped;
        }
    }

    E::failed(error.to_string())
}

/// Classify a transport-level error that carried no structured payload.
///
/// Only the authentication rule applies here; anything else becomes the
/// family's `Unknown` with the original error as cause.
pub fn interpret_transport_error<E: OperationError>(cause: TransportError) -> E {
    if error_chain_has_authentication_signal(cause.as_ref()) {
        return E::authentication(cause.to_string());
    }
    E::unknown(cause)
}

/// Rule 1 against a structured payload: status extension or message
/// markers.
fn payload_has_authentication_signal(error: &GraphQlError) -> bool {
    if matches!(error.http_status(), Some(401 | 403)) {
        return true;
    }
    message_has_marker(&error.message)
}

/// Rule 1 against an error value: the message itself plus up to
/// [`MAX_CAUSE_DEPTH`] nested causes.
fn error_chain_has_authentication_signal(error: &(dyn std::error::Error + 'static)) -> bool {
    let mut current: Option<&(dyn std::error::Error + 'static)> = Some(error);
    for _ in 0..=MAX_CAUSE_DEPTH {
        match current {
            Some(err) => {
                if message_has_marker(&err.to_string()) {
                    return true;
                }
                current = err.source();
            }
            None => return false,
        }
    }
    false
}

fn message_has_marker(message: &str) -> bool {
    AUTH_MESSAGE_MARKERS.iter().any(|marker| message.contains(marker))
}
