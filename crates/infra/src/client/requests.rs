//! GraphQL documents and variable builders for the simulator API.

use serde_json::{json, Value};

use cardsim_domain::{
    AuthorizationExpiryInput, AuthorizationInput, DebitInput, IncrementalAuthorizationInput,
    RefundInput, ReversalInput,
};

pub(crate) const LIST_SIMULATOR_MERCHANTS: &str = r"
    query ListSimulatorMerchants {
        listSimulatorMerchants {
            id
            description
            name
            mcc
            city
            state
            postalCode
            country
            currency
            declineAfterAuthorization
            declineBeforeAuthorization
            createdAtEpochMs
            updatedAtEpochMs
        }
    }
";

pub(crate) const LIST_SIMULATOR_CONVERSION_RATES: &str = r"
    query ListSimulatorConversionRates {
        listSimulatorConversionRates {
            currency
            amount
        }
    }
";

pub(crate) const SIMULATE_AUTHORIZATION: &str = r"
    mutation SimulateAuthorization($input: SimulateAuthorizationInput!) {
        simulateAuthorization(input: $input) {
            id
            approved
            billedAmount {
                currency
                amount
            }
            declineReason
            createdAtEpochMs
            updatedAtEpochMs
        }
    }
";

pub(crate) const SIMULATE_INCREMENTAL_AUTHORIZATION: &str = r"
    mutation SimulateIncrementalAuthorization($input: SimulateIncrementalAuthorizationInput!) {
        simulateIncrementalAuthorization(input: $input) {
            id
            approved
            billedAmount {
                currency
                amount
            }
            declineReason
            createdAtEpochMs
            updatedAtEpochMs
        }
    }
";

pub(crate) const SIMULATE_AUTHORIZATION_EXPIRY: &str = r"
    mutation SimulateAuthorizationExpiry($input: SimulateAuthorizationExpiryInput!) {
        simulateAuthorizationExpiry(input: $input) {
            id
            createdAtEpochMs
            updatedAtEpochMs
        }
    }
";

pub(crate) const SIMULATE_DEBIT: &str = r"
    mutation SimulateDebit($input: SimulateDebitInput!) {
        simulateDebit(input: $input) {
            id
            billedAmount {
                currency
                amount
            }
            createdAtEpochMs
            updatedAtEpochMs
        }
    }
";

pub(crate) const SIMULATE_REFUND: &str = r"
    mutation SimulateRefund($input: SimulateRefundInput!) {
        simulateRefund(input: $input) {
            id
            billedAmount {
                currency
                amount
            }
            createdAtEpochMs
            updatedAtEpochMs
        }
    }
";

pub(crate) const SIMULATE_REVERSAL: &str = r"
    mutation SimulateReversal($input: SimulateReversalInput!) {
        simulateReversal(input: $input) {
            id
            billedAmount {
                currency
                amount
            }
            createdAtEpochMs
            updatedAtEpochMs
        }
    }
";

pub(crate) fn no_variables() -> Value {
    json!({})
}

pub(crate) fn authorization_variables(input: &AuthorizationInput) -> Value {
    json!({
        "input": {
            "pan": input.pan,
            "amount": input.amount,
            "merchantId": input.merchant_id,
            "expiry": { "mm": input.expiry.mm, "yyyy": input.expiry.yyyy },
            "billingAddress": input.billing_address,
            "csc": input.csc,
        }
    })
}

pub(crate) fn incremental_authorization_variables(
    input: &IncrementalAuthorizationInput,
) -> Value {
    json!({
        "input": {
            "authorizationId": input.authorization_id,
            "amount": input.amount,
        }
    })
}

pub(crate) fn authorization_expiry_variables(input: &AuthorizationExpiryInput) -> Value {
    json!({
        "input": {
            "authorizationId": input.authorization_id,
        }
    })
}

pub(crate) fn debit_variables(input: &DebitInput) -> Value {
    json!({
        "input": {
            "authorizationId": input.authorization_id,
            "amount": input.amount,
        }
    })
}

pub(crate) fn refund_variables(input: &RefundInput) -> Value {
    json!({
        "input": {
            "debitId": input.debit_id,
            "amount": input.amount,
        }
    })
}

pub(crate) fn reversal_variables(input: &ReversalInput) -> Value {
    json!({
        "input": {
            "authorizationId": input.authorization_id,
            "amount": input.amount,
        }
    })
}

#[cfg(test)]
mod tests {
    use cardsim_domain::{BillingAddress, CardExpiry};

    use super::*;

    #[test]
    fn authorization_variables_serialize_camel_case_fields() {
        let input = AuthorizationInput {
            pan: "4111111111111111".to_string(),
            amount: 2500,
            merchant_id: "merchant-1".to_string(),
            expiry: CardExpiry { mm: 4, yyyy: 2028 },
            billing_address: Some(BillingAddress {
                address_line1: "1 Main St".to_string(),
                address_line2: None,
                city: "Springfield".to_string(),
                state: "OR".to_string(),
                postal_code: "97477".to_string(),
                country: "US".to_string(),
            }),
            csc: Some("123".to_string()),
        };

        let vars = authorization_variables(&input);
        assert_eq!(vars["input"]["merchantId"], "merchant-1");
        assert_eq!(vars["input"]["expiry"]["yyyy"], 2028);
        assert_eq!(vars["input"]["billingAddress"]["addressLine1"], "1 Main St");
        assert_eq!(vars["input"]["billingAddress"]["postalCode"], "97477");
        assert_eq!(vars["input"]["csc"], "123");
    }

    #[test]
    fn omitted_optionals_serialize_as_null() {
        let input = AuthorizationInput {
            pan: "4111111111111111".to_string(),
            amount: 100,
            merchant_id: "merchant-1".to_string(),
            expiry: CardExpiry { mm: 1, yyyy: 2027 },
            billing_address: None,
            csc: None,
        };

        let vars = authorization_variables(&input);
        assert!(vars["input"]["billingAddress"].is_null());
        assert!(vars["input"]["csc"].is_null());
    }

    #[test]
    fn refund_variables_use_debit_id() {
        let vars = refund_variables(&RefundInput { debit_id: "debit-9".to_string(), amount: 50 });
        assert_eq!(vars["input"]["debitId"], "debit-9");
        assert_eq!(vars["input"]["amount"], 50);
    }
}
