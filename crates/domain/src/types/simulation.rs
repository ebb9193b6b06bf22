//! Inputs and responses for simulated transaction lifecycle events.
//!
//! All amounts are integers in the minor unit of the merchant's
//! currency (cents for USD). Inputs are constructed by the caller per
//! call and never persisted; responses are assembled by the transform
//! layer from the raw backend payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Billing address attached to an authorization attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingAddress {
    /// First street address line.
    pub address_line1: String,
    /// Optional second street address line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    /// City name.
    pub city: String,
    /// State or province code.
    pub state: String,
    /// Postal or ZIP code.
    pub postal_code: String,
    /// ISO country code.
    pub country: String,
}

/// Card expiry as it appears on the physical or virtual card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardExpiry {
    /// Expiry month, 1-12.
    pub mm: u32,
    /// Four-digit expiry year.
    pub yyyy: u32,
}

/// Parameters for simulating an authorization against a virtual card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationInput {
    /// Card number (PAN) of the virtual card to authorize against.
    pub pan: String,
    /// Amount to hold, in minor currency units.
    pub amount: i64,
    /// Identifier of the simulated merchant placing the hold.
    pub merchant_id: String,
    /// Card expiry supplied by the merchant.
    pub expiry: CardExpiry,
    /// Optional billing address for AVS checks.
    pub billing_address: Option<BillingAddress>,
    /// Optional card security code (CSC/CVV).
    pub csc: Option<String>,
}

/// Parameters for increasing the held amount of an existing
/// authorization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncrementalAuthorizationInput {
    /// Identifier of the authorization to increment.
    pub authorization_id: String,
    /// Additional amount to hold, in minor currency units.
    pub amount: i64,
}

/// Parameters for expiring an existing authorization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationExpiryInput {
    /// Identifier of the authorization to expire.
    pub authorization_id: String,
}

/// Parameters for debiting a previously authorized amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebitInput {
    /// Identifier of the authorization to debit against.
    pub authorization_id: String,
    /// Amount to debit, in minor currency units.
    pub amount: i64,
}

/// Parameters for refunding a previously completed debit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefundInput {
    /// Identifier of the debit to refund.
    pub debit_id: String,
    /// Amount to refund, in minor currency units.
    pub amount: i64,
}

/// Parameters for reversing (fully or partially) an authorization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReversalInput {
    /// Identifier of the authorization to reverse.
    pub authorization_id: String,
    /// Amount to reverse, in minor currency units.
    pub amount: i64,
}

/// Result of an authorization or incremental authorization simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationResponse {
    /// Identifier of the authorization record.
    pub id: String,
    /// Whether the authorization was approved.
    pub approved: bool,
    /// Held amount, in minor currency units.
    pub amount: i64,
    /// ISO currency code of the held amount.
    pub currency: String,
    /// Reason the authorization was declined, when `approved` is false.
    pub decline_reason: Option<String>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Result of an authorization-expiry simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationExpiryResponse {
    /// Identifier of the expired authorization.
    pub id: String,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Result of a debit, refund or reversal simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionResponse {
    /// Identifier of the transaction record.
    pub id: String,
    /// Transaction amount, in minor currency units.
    pub amount: i64,
    /// ISO currency code of the amount.
    pub currency: String,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}
