//! Card error types.

use thiserror::Error;

/// Errors surfaced by defensive card validation.
///
/// Classification and rendering never produce these; they exist for
/// callers that want to fail fast on data-quality slips from upstream.
#[derive(Error, Debug)]
pub enum CardError {
    /// A price field is negative.
    #[error("Negative amount for {field}: {minor_units}")]
    NegativeAmount {
        field: &'static str,
        minor_units: i64,
    },

    /// Sale price is not below the regular price.
    #[error("Sale price {sale} is not below price {price}")]
    SalePriceNotBelowPrice { price: String, sale: String },

    /// Currency mismatch between price fields.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },
}
