//! Per-operation error families for the simulator.
//!
//! Each public operation throws exactly one error from its own family.
//! The variants mirror the backend's failure taxonomy: an
//! authentication failure, one or more resource-not-found kinds, an
//! amount-exceeded kind where refunds/reversals apply, a generic
//! `Failed` for recognised-but-unmapped server errors, and `Unknown`
//! for anything else with the original cause preserved.

use thiserror::Error;

/// Boxed error cause carried by `Unknown` variants.
pub type ErrorCause = Box<dyn std::error::Error + Send + Sync>;

/// Errors raised by authorization simulations.
///
/// Shared by `simulate_authorization`,
/// `simulate_incremental_authorization` and
/// `simulate_authorization_expiry`.
#[derive(Debug, Error)]
pub enum AuthorizationError {
    /// The caller is not (or no longer) authenticated with the backend.
    #[error("Authentication error: {0}")]
    Authentication(String),
    /// No virtual card matched the supplied card number.
    #[error("Card not found: {0}")]
    CardNotFound(String),
    /// No authorization matched the supplied identifier.
    #[error("Authorization not found: {0}")]
    AuthorizationNotFound(String),
    /// The referenced authorization has already expired.
    #[error("Authorization expired: {0}")]
    AuthorizationExpired(String),
    /// The backend reported a failure this SDK has no mapping for.
    #[error("Authorization failed: {0}")]
    Failed(String),
    /// An unclassified transport or runtime failure.
    #[error("Unknown authorization error")]
    Unknown(#[source] ErrorCause),
}

/// Errors raised by debit simulations.
#[derive(Debug, Error)]
pub enum DebitError {
    /// The caller is not (or no longer) authenticated with the backend.
    #[error("Authentication error: {0}")]
    Authentication(String),
    /// No authorization matched the supplied identifier.
    #[error("Authorization not found: {0}")]
    AuthorizationNotFound(String),
    /// The backend reported a failure this SDK has no mapping for.
    #[error("Debit failed: {0}")]
    Failed(String),
    /// An unclassified transport or runtime failure.
    #[error("Unknown debit error")]
    Unknown(#[source] ErrorCause),
}

/// Errors raised by refund simulations.
#[derive(Debug, Error)]
pub enum RefundError {
    /// The caller is not (or no longer) authenticated with the backend.
    #[error("Authentication error: {0}")]
    Authentication(String),
    /// No debit matched the supplied identifier.
    #[error("Debit not found: {0}")]
    DebitNotFound(String),
    /// The refund amount exceeds the refundable balance of the debit.
    #[error("Excessive refund: {0}")]
    ExcessiveRefund(String),
    /// The backend reported a failure this SDK has no mapping for.
    #[error("Refund failed: {0}")]
    Failed(String),
    /// An unclassified transport or runtime failure.
    #[error("Unknown refund error")]
    Unknown(#[source] ErrorCause),
}

/// Errors raised by reversal simulations.
#[derive(Debug, Error)]
pub enum ReversalError {
    /// The caller is not (or no longer) authenticated with the backend.
    #[error("Authentication error: {0}")]
    Authentication(String),
    /// No authorization matched the supplied identifier.
    #[error("Authorization not found: {0}")]
    AuthorizationNotFound(String),
    /// The reversal amount exceeds the reversible balance of the
    /// authorization.
    #[error("Excessive reversal: {0}")]
    ExcessiveReversal(String),
    /// The backend reported a failure this SDK has no mapping for.
    #[error("Reversal failed: {0}")]
    Failed(String),
    /// An unclassified transport or runtime failure.
    #[error("Unknown reversal error")]
    Unknown(#[source] ErrorCause),
}

/// Errors raised by the merchant listing query.
///
/// The merchant listing has no operation-specific vocabulary; any
/// non-authentication backend error surfaces as `Failed`.
#[derive(Debug, Error)]
pub enum MerchantError {
    /// The caller is not (or no longer) authenticated with the backend.
    #[error("Authentication error: {0}")]
    Authentication(String),
    /// The backend reported an error for the listing query.
    #[error("Merchant listing failed: {0}")]
    Failed(String),
    /// An unclassified transport or runtime failure.
    #[error("Unknown merchant listing error")]
    Unknown(#[source] ErrorCause),
}

/// Errors raised by the conversion-rate listing query.
#[derive(Debug, Error)]
pub enum ConversionRateError {
    /// The caller is not (or no longer) authenticated with the backend.
    #[error("Authentication error: {0}")]
    Authentication(String),
    /// The backend reported an error for the listing query.
    #[error("Conversion rate listing failed: {0}")]
    Failed(String),
    /// An unclassified transport or runtime failure.
    #[error("Unknown conversion rate error")]
    Unknown(#[source] ErrorCause),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authorization_error_display_includes_message() {
        let err = AuthorizationError::CardNotFound("4242...".to_string());
        assert_eq!(err.to_string(), "Card not found: 4242...");
    }

    #[test]
    fn unknown_variant_preserves_cause() {
        let cause = std::io::Error::new(std::io::ErrorKind::Other, "socket closed");
        let err = RefundError::Unknown(Box::new(cause));

        let source = std::error::Error::source(&err).expect("cause should be preserved");
        assert!(source.to_string().contains("socket closed"));
    }

    #[test]
    fn excessive_variants_render_amount_context() {
        let refund = RefundError::ExcessiveRefund("amount exceeds debit".to_string());
        let reversal = ReversalError::ExcessiveReversal("amount exceeds hold".to_string());

        assert!(refund.to_string().contains("Excessive refund"));
        assert!(reversal.to_string().contains("Excessive reversal"));
    }
}
