//! Simulated merchant listing and conversion-rate types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A merchant available in the simulator environment.
///
/// Merchants carry decline flags so callers can provoke deterministic
/// decline behavior: `decline_after_authorization` merchants approve
/// the hold and then decline settlement, `decline_before_authorization`
/// merchants decline the hold outright.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Merchant {
    /// Merchant identifier used in authorization inputs.
    pub id: String,
    /// Human-readable description of the merchant's behavior.
    pub description: String,
    /// Merchant display name, when the backend provides one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Merchant category code.
    pub mcc: String,
    /// Merchant city.
    pub city: String,
    /// Merchant state or province, when applicable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Merchant postal code, when applicable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// ISO country code.
    pub country: String,
    /// ISO currency code the merchant transacts in.
    pub currency: String,
    /// Whether this merchant declines transactions after authorizing.
    pub decline_after_authorization: bool,
    /// Whether this merchant declines authorization attempts outright.
    pub decline_before_authorization: bool,
    /// When the merchant record was created.
    pub created_at: DateTime<Utc>,
    /// When the merchant record was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Conversion rate from one ISO currency to the simulator's base
/// currency, scaled to minor units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRate {
    /// ISO currency code.
    pub currency: String,
    /// Scaled conversion rate.
    pub amount: i64,
}
