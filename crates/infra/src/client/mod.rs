//! The simulator client.
//!
//! [`SimulatorClient`] exposes one method per simulator operation. All
//! methods share a single dispatch path:
//!
//! 1. execute the GraphQL document over the transport
//! 2. a transport error is classified into the operation's error family
//! 3. the first error in a returned envelope is classified likewise
//! 4. an envelope with no data is the generic failure
//! 5. otherwise the payload is decoded and projected into the domain
//!    response
//!
//! Each method borrows the client, so calls are cancelled by dropping
//! the returned future; nothing in the dispatch path catches or
//! converts cancellation.

mod requests;
mod transform;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use cardsim_core::{
    interpret_graphql_error, interpret_transport_error, GraphQlTransport, OperationError,
    TokenAuthenticator,
};
use cardsim_domain::{
    AuthorizationError, AuthorizationExpiryInput, AuthorizationExpiryResponse, AuthorizationInput,
    AuthorizationResponse, ConversionRate, ConversionRateError, DebitError, DebitInput,
    IncrementalAuthorizationInput, Merchant, MerchantError, RefundError, RefundInput,
    ReversalError, ReversalInput, TransactionResponse,
};

use crate::config::{ConfigError, Credentials, SimulatorConfig};
use crate::identity::CognitoUserPoolProvider;
use crate::transport::HttpGraphQlTransport;

use transform::{
    ListConversionRatesData, ListMerchantsData, SimulateAuthorizationData,
    SimulateAuthorizationExpiryData, SimulateDebitData, SimulateIncrementalAuthorizationData,
    SimulateRefundData, SimulateReversalData,
};

enum OpKind {
    Query,
    Mutation,
}

/// Client for the virtual-card transaction simulator API.
pub struct SimulatorClient {
    transport: Arc<dyn GraphQlTransport>,
}

impl SimulatorClient {
    /// Build a client with the default HTTP transport for `config`.
    ///
    /// In the username/password mode the first authenticated call signs
    /// in lazily; construction performs no network activity.
    ///
    /// # Errors
    /// Returns [`ConfigError::Build`] if the transport or identity
    /// provider cannot be constructed.
    pub fn new(config: SimulatorConfig) -> Result<Self, ConfigError> {
        let transport: Arc<dyn GraphQlTransport> = match config.credentials {
            Credentials::ApiKey { api_key } => Arc::new(
                HttpGraphQlTransport::with_api_key(config.api_url, api_key)
                    .map_err(|e| ConfigError::Build(e.to_string()))?,
            ),
            Credentials::UserPassword { identity, username, password } => {
                let provider =
                    CognitoUserPoolProvider::new(&identity.region, identity.client_id)
                        .map_err(|e| ConfigError::Build(e.to_string()))?;
                let authenticator =
                    Arc::new(TokenAuthenticator::new(provider, username, password));
                Arc::new(
                    HttpGraphQlTransport::with_token_provider(config.api_url, authenticator)
                        .map_err(|e| ConfigError::Build(e.to_string()))?,
                )
            }
        };
        Ok(Self { transport })
    }

    /// Build a client over an externally supplied transport.
    pub fn with_transport(transport: Arc<dyn GraphQlTransport>) -> Self {
        Self { transport }
    }

    /// List the merchants available in the simulator environment.
    ///
    /// # Errors
    /// Returns [`MerchantError`] per the shared classification rules.
    pub async fn list_simulator_merchants(&self) -> Result<Vec<Merchant>, MerchantError> {
        debug!("listing simulator merchants");
        self.dispatch(
            OpKind::Query,
            requests::LIST_SIMULATOR_MERCHANTS,
            requests::no_variables(),
            |data: ListMerchantsData| data.items.into_iter().map(Merchant::from).collect(),
        )
        .await
    }

    /// List the simulator's currency conversion rates.
    ///
    /// # Errors
    /// Returns [`ConversionRateError`] per the shared classification
    /// rules.
    pub async fn list_simulator_conversion_rates(
        &self,
    ) -> Result<Vec<ConversionRate>, ConversionRateError> {
        debug!("listing simulator conversion rates");
        self.dispatch(
            OpKind::Query,
            requests::LIST_SIMULATOR_CONVERSION_RATES,
            requests::no_variables(),
            |data: ListConversionRatesData| {
                data.items.into_iter().map(ConversionRate::from).collect()
            },
        )
        .await
    }

    /// Simulate an authorization hold against a virtual card.
    ///
    /// A declined authorization is a successful simulation: the
    /// response carries `approved: false` and a decline reason rather
    /// than an error.
    ///
    /// # Errors
    /// Returns [`AuthorizationError`] per the shared classification
    /// rules, including `CardNotFound` for an unknown PAN.
    pub async fn simulate_authorization(
        &self,
        input: &AuthorizationInput,
    ) -> Result<AuthorizationResponse, AuthorizationError> {
        debug!(merchant_id = %input.merchant_id, "simulating authorization");
        self.dispatch(
            OpKind::Mutation,
            requests::SIMULATE_AUTHORIZATION,
            requests::authorization_variables(input),
            |data: SimulateAuthorizationData| AuthorizationResponse::from(data.result),
        )
        .await
    }

    /// Simulate an incremental authorization on an existing hold.
    ///
    /// # Errors
    /// Returns [`AuthorizationError`] per the shared classification
    /// rules, including `AuthorizationNotFound` for an unknown hold.
    pub async fn simulate_incremental_authorization(
        &self,
        input: &IncrementalAuthorizationInput,
    ) -> Result<AuthorizationResponse, AuthorizationError> {
        debug!(authorization_id = %input.authorization_id, "simulating incremental authorization");
        self.dispatch(
            OpKind::Mutation,
            requests::SIMULATE_INCREMENTAL_AUTHORIZATION,
            requests::incremental_authorization_variables(input),
            |data: SimulateIncrementalAuthorizationData| {
                AuthorizationResponse::from(data.result)
            },
        )
        .await
    }

    /// Simulate the expiry of an existing authorization hold.
    ///
    /// # Errors
    /// Returns [`AuthorizationError`] per the shared classification
    /// rules, including `AuthorizationExpired` when the hold already
    /// expired.
    pub async fn simulate_authorization_expiry(
        &self,
        input: &AuthorizationExpiryInput,
    ) -> Result<AuthorizationExpiryResponse, AuthorizationError> {
        debug!(authorization_id = %input.authorization_id, "simulating authorization expiry");
        self.dispatch(
            OpKind::Mutation,
            requests::SIMULATE_AUTHORIZATION_EXPIRY,
            requests::authorization_expiry_variables(input),
            |data: SimulateAuthorizationExpiryData| {
                AuthorizationExpiryResponse::from(data.result)
            },
        )
        .await
    }

    /// Simulate a debit against a previously authorized amount.
    ///
    /// # Errors
    /// Returns [`DebitError`] per the shared classification rules.
    pub async fn simulate_debit(
        &self,
        input: &DebitInput,
    ) -> Result<TransactionResponse, DebitError> {
        debug!(authorization_id = %input.authorization_id, "simulating debit");
        self.dispatch(
            OpKind::Mutation,
            requests::SIMULATE_DEBIT,
            requests::debit_variables(input),
            |data: SimulateDebitData| TransactionResponse::from(data.result),
        )
        .await
    }

    /// Simulate a refund of a previously completed debit.
    ///
    /// # Errors
    /// Returns [`RefundError`] per the shared classification rules,
    /// including `ExcessiveRefund` when the amount exceeds what was
    /// debited.
    pub async fn simulate_refund(
        &self,
        input: &RefundInput,
    ) -> Result<TransactionResponse, RefundError> {
        debug!(debit_id = %input.debit_id, "simulating refund");
        self.dispatch(
            OpKind::Mutation,
            requests::SIMULATE_REFUND,
            requests::refund_variables(input),
            |data: SimulateRefundData| TransactionResponse::from(data.result),
        )
        .await
    }

    /// Simulate a full or partial reversal of an authorization hold.
    ///
    /// # Errors
    /// Returns [`ReversalError`] per the shared classification rules,
    /// including `ExcessiveReversal` when the amount exceeds the held
    /// amount.
    pub async fn simulate_reversal(
        &self,
        input: &ReversalInput,
    ) -> Result<TransactionResponse, ReversalError> {
        debug!(authorization_id = %input.authorization_id, "simulating reversal");
        self.dispatch(
            OpKind::Mutation,
            requests::SIMULATE_REVERSAL,
            requests::reversal_variables(input),
            |data: SimulateReversalData| TransactionResponse::from(data.result),
        )
        .await
    }

    async fn dispatch<D, T, E, F>(
        &self,
        kind: OpKind,
        document: &str,
        variables: Value,
        project: F,
    ) -> Result<T, E>
    where
        D: DeserializeOwned,
        E: OperationError,
        F: FnOnce(D) -> T,
    {
        let result = match kind {
            OpKind::Query => self.transport.query(document, variables).await,
            OpKind::Mutation => self.transport.mutate(document, variables).await,
        };

        let response = match result {
            Ok(response) => response,
            Err(cause) => {
                warn!(error = %cause, "transport error");
                return Err(interpret_transport_error(cause));
            }
        };

        if let Some(first) = response.errors.first() {
            warn!(error = %first, "backend returned GraphQL errors");
            return Err(interpret_graphql_error(first));
        }

        let data = match response.data {
            Some(data) if !data.is_null() => data,
            _ => return Err(E::failed("No response from server".to_string())),
        };

        match serde_json::from_value::<D>(data) {
            Ok(parsed) => Ok(project(parsed)),
            Err(error) => Err(E::unknown(Box::new(error))),
        }
    }
}
