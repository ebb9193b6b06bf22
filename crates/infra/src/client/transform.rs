//! Raw backend payloads and their conversion into domain responses.
//!
//! The backend sends amounts as `{currency, amount}` pairs and
//! timestamps as fractional epoch milliseconds; conversion flattens the
//! pair and truncates the timestamps into `DateTime<Utc>`.

use serde::Deserialize;

use cardsim_domain::{
    datetime_from_epoch_ms, AuthorizationExpiryResponse, AuthorizationResponse, ConversionRate,
    Merchant, TransactionResponse,
};

#[derive(Debug, Deserialize)]
pub(crate) struct RawAmount {
    pub currency: String,
    pub amount: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawAuthorization {
    pub id: String,
    pub approved: bool,
    pub billed_amount: RawAmount,
    #[serde(default)]
    pub decline_reason: Option<String>,
    pub created_at_epoch_ms: f64,
    pub updated_at_epoch_ms: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawExpiredAuthorization {
    pub id: String,
    pub created_at_epoch_ms: f64,
    pub updated_at_epoch_ms: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawTransaction {
    pub id: String,
    pub billed_amount: RawAmount,
    pub created_at_epoch_ms: f64,
    pub updated_at_epoch_ms: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawMerchant {
    pub id: String,
    pub description: String,
    #[serde(default)]
    pub name: Option<String>,
    pub mcc: String,
    pub city: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    pub country: String,
    pub currency: String,
    pub decline_after_authorization: bool,
    pub decline_before_authorization: bool,
    pub created_at_epoch_ms: f64,
    pub updated_at_epoch_ms: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawConversionRate {
    pub currency: String,
    pub amount: i64,
}

impl From<RawAuthorization> for AuthorizationResponse {
    fn from(raw: RawAuthorization) -> Self {
        Self {
            id: raw.id,
            approved: raw.approved,
            amount: raw.billed_amount.amount,
            currency: raw.billed_amount.currency,
            decline_reason: raw.decline_reason,
            created_at: datetime_from_epoch_ms(raw.created_at_epoch_ms),
            updated_at: datetime_from_epoch_ms(raw.updated_at_epoch_ms),
        }
    }
}

impl From<RawExpiredAuthorization> for AuthorizationExpiryResponse {
    fn from(raw: RawExpiredAuthorization) -> Self {
        Self {
            id: raw.id,
            created_at: datetime_from_epoch_ms(raw.created_at_epoch_ms),
            updated_at: datetime_from_epoch_ms(raw.updated_at_epoch_ms),
        }
    }
}

impl From<RawTransaction> for TransactionResponse {
    fn from(raw: RawTransaction) -> Self {
        Self {
            id: raw.id,
            amount: raw.billed_amount.amount,
            currency: raw.billed_amount.currency,
            created_at: datetime_from_epoch_ms(raw.created_at_epoch_ms),
            updated_at: datetime_from_epoch_ms(raw.updated_at_epoch_ms),
        }
    }
}

impl From<RawMerchant> for Merchant {
    fn from(raw: RawMerchant) -> Self {
        Self {
            id: raw.id,
            description: raw.description,
            name: raw.name,
            mcc: raw.mcc,
            city: raw.city,
            state: raw.state,
            postal_code: raw.postal_code,
            country: raw.country,
            currency: raw.currency,
            decline_after_authorization: raw.decline_after_authorization,
            decline_before_authorization: raw.decline_before_authorization,
            created_at: datetime_from_epoch_ms(raw.created_at_epoch_ms),
            updated_at: datetime_from_epoch_ms(raw.updated_at_epoch_ms),
        }
    }
}

impl From<RawConversionRate> for ConversionRate {
    fn from(raw: RawConversionRate) -> Self {
        Self { currency: raw.currency, amount: raw.amount }
    }
}

// Per-operation data envelopes, keyed by the GraphQL field name.

#[derive(Debug, Deserialize)]
pub(crate) struct ListMerchantsData {
    #[serde(rename = "listSimulatorMerchants")]
    pub items: Vec<RawMerchant>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListConversionRatesData {
    #[serde(rename = "listSimulatorConversionRates")]
    pub items: Vec<RawConversionRate>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SimulateAuthorizationData {
    #[serde(rename = "simulateAuthorization")]
    pub result: RawAuthorization,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SimulateIncrementalAuthorizationData {
    #[serde(rename = "simulateIncrementalAuthorization")]
    pub result: RawAuthorization,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SimulateAuthorizationExpiryData {
    #[serde(rename = "simulateAuthorizationExpiry")]
    pub result: RawExpiredAuthorization,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SimulateDebitData {
    #[serde(rename = "simulateDebit")]
    pub result: RawTransaction,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SimulateRefundData {
    #[serde(rename = "simulateRefund")]
    pub result: RawTransaction,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SimulateReversalData {
    #[serde(rename = "simulateReversal")]
    pub result: RawTransaction,
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn authorization_payload_flattens_amount_and_truncates_timestamps() {
        let raw: RawAuthorization = serde_json::from_value(serde_json::json!({
            "id": "auth-1",
            "approved": false,
            "billedAmount": { "currency": "USD", "amount": 2500 },
            "declineReason": "DECLINED_BEFORE_AUTH",
            "createdAtEpochMs": 1_700_000_000_123.9_f64,
            "updatedAtEpochMs": 1_700_000_000_456.2_f64
        }))
        .expect("payload should parse");

        let response = AuthorizationResponse::from(raw);

        assert_eq!(response.amount, 2500);
        assert_eq!(response.currency, "USD");
        assert_eq!(response.decline_reason.as_deref(), Some("DECLINED_BEFORE_AUTH"));
        assert_eq!(
            response.created_at,
            chrono::Utc.timestamp_millis_opt(1_700_000_000_123).single().expect("valid ts")
        );
        assert_eq!(
            response.updated_at,
            chrono::Utc.timestamp_millis_opt(1_700_000_000_456).single().expect("valid ts")
        );
    }

    #[test]
    fn missing_decline_reason_is_none() {
        let raw: RawAuthorization = serde_json::from_value(serde_json::json!({
            "id": "auth-1",
            "approved": true,
            "billedAmount": { "currency": "USD", "amount": 100 },
            "createdAtEpochMs": 0.0,
            "updatedAtEpochMs": 0.0
        }))
        .expect("payload should parse");

        assert!(AuthorizationResponse::from(raw).decline_reason.is_none());
    }

    #[test]
    fn merchant_payload_maps_optionals_and_flags() {
        let raw: RawMerchant = serde_json::from_value(serde_json::json!({
            "id": "merchant-1",
            "description": "declines after auth",
            "mcc": "5411",
            "city": "Springfield",
            "country": "US",
            "currency": "USD",
            "declineAfterAuthorization": true,
            "declineBeforeAuthorization": false,
            "createdAtEpochMs": 1_000.0,
            "updatedAtEpochMs": 2_000.0
        }))
        .expect("payload should parse");

        let merchant = Merchant::from(raw);
        assert!(merchant.name.is_none());
        assert!(merchant.state.is_none());
        assert!(merchant.decline_after_authorization);
        assert!(!merchant.decline_before_authorization);
    }
}
