//! Per-family vocabulary tables.
//!
//! `errorType` values are matched as case-sensitive substrings, per the
//! backend's contract.

use cardsim_domain::{
    AuthorizationError, ConversionRateError, DebitError, ErrorCause, MerchantError, RefundError,
    ReversalError,
};

use super::OperationError;

const CARD_NOT_FOUND: &str = "CardNotFoundError";
const TRANSACTION_NOT_FOUND: &str = "TransactionNotFoundError";
const ALREADY_EXPIRED: &str = "AlreadyExpiredError";
const EXCESSIVE_REFUND: &str = "ExcessiveRefundError";
const EXCESSIVE_REVERSAL: &str = "ExcessiveReversalError";

impl OperationError for AuthorizationError {
    fn authentication(message: String) -> Self {
        Self::Authentication(message)
    }

    fn failed(message: String) -> Self {
        Self::Failed(message)
    }

    fn unknown(cause: ErrorCause) -> Self {
        Self::Unknown(cause)
    }

    fn from_error_type(error_type: &str, message: String) -> Option<Self> {
        if error_type.contains(CARD_NOT_FOUND) {
            Some(Self::CardNotFound(message))
        } else if error_type.contains(TRANSACTION_NOT_FOUND) {
            Some(Self::AuthorizationNotFound(message))
        } else if error_type.contains(ALREADY_EXPIRED) {
            Some(Self::AuthorizationExpired(message))
        } else {
            None
        }
    }
}

impl OperationError for DebitError {
    fn authentication(message: String) -> Self {
        Self::Authentication(message)
    }

    fn failed(message: String) -> Self {
        Self::Failed(message)
    }

    fn unknown(cause: ErrorCause) -> Self {
        Self::Unknown(cause)
    }

    fn from_error_type(error_type: &str, message: String) -> Option<Self> {
        error_type.contains(TRANSACTION_NOT_FOUND).then_some(Self::AuthorizationNotFound(message))
    }
}

impl OperationError for RefundError {
    fn authentication(message: String) -> Self {
        Self::Authentication(message)
    }

    fn failed(message: String) -> Self {
        Self::Failed(message)
    }

    fn unknown(cause: ErrorCause) -> Self {
        Self::Unknown(cause)
    }

    fn from_error_type(error_type: &str, message: String) -> Option<Self> {
        if error_type.contains(TRANSACTION_NOT_FOUND) {
            Some(Self::DebitNotFound(message))
        } else if error_type.contains(EXCESSIVE_REFUND) {
            Some(Self::ExcessiveRefund(message))
        } else {
            None
        }
    }
}

impl OperationError for ReversalError {
    fn authentication(message: String) -> Self {
        Self::Authentication(message)
    }

    fn failed(message: String) -> Self {
        Self::Failed(message)
    }

    fn unknown(cause: ErrorCause) -> Self {
        Self::Unknown(cause)
    }

    fn from_error_type(error_type: &str, message: String) -> Option<Self> {
        if error_type.contains(TRANSACTION_NOT_FOUND) {
            Some(Self::AuthorizationNotFound(message))
        } else if error_type.contains(EXCESSIVE_REVERSAL) {
            Some(Self::ExcessiveReversal(message))
        } else {
            None
        }
    }
}

impl OperationError for MerchantError {
    fn authentication(message: String) -> Self {
        Self::Authentication(message)
    }

    fn failed(message: String) -> Self {
        Self::Failed(message)
    }

    fn unknown(cause: ErrorCause) -> Self {
        Self::Unknown(cause)
    }

    // No operation-specific vocabulary for the merchant listing.
    fn from_error_type(_error_type: &str, _message: String) -> Option<Self> {
        None
    }
}

impl OperationError for ConversionRateError {
    fn authentication(message: String) -> Self {
        Self::Authentication(message)
    }

    fn failed(message: String) -> Self {
        Self::Failed(message)
    }

    fn unknown(cause: ErrorCause) -> Self {
        Self::Unknown(cause)
    }

    // No operation-specific vocabulary for conversion rates.
    fn from_error_type(_error_type: &str, _message: String) -> Option<Self> {
        None
    }
}
