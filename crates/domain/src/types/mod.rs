//! Domain data types for simulator operations.

pub mod merchant;
pub mod simulation;

pub use merchant::{ConversionRate, Merchant};
pub use simulation::{
    AuthorizationExpiryInput, AuthorizationExpiryResponse, AuthorizationInput,
    AuthorizationResponse, BillingAddress, CardExpiry, DebitInput, IncrementalAuthorizationInput,
    RefundInput, ReversalInput, TransactionResponse,
};
