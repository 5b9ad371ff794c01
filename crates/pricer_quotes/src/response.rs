//! Response shapes relayed to callers.

use pricer_core::traits::{Describable, Priceable};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::factory::QuoteFactory;
use crate::payload::QuotePayload;
use crate::quotes::{QuoteError, QuoteRequest};

/// Successful quote: human-readable details and the computed price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteResponse {
    /// Output of [`Describable::describe`]
    pub details: String,
    /// Output of [`Priceable::price`]
    pub price: f64,
}

impl QuoteResponse {
    /// Prices and describes a validated quote.
    pub fn from_quote(quote: &QuoteRequest) -> Self {
        Self {
            details: quote.describe(),
            price: quote.price(),
        }
    }
}

impl From<&QuoteRequest> for QuoteResponse {
    fn from(quote: &QuoteRequest) -> Self {
        Self::from_quote(quote)
    }
}

/// Failed quote: error kind code and display message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteErrorResponse {
    /// Stable code from [`QuoteError::kind`]
    pub error: String,
    /// Human-readable message
    pub message: String,
}

impl From<&QuoteError> for QuoteErrorResponse {
    fn from(err: &QuoteError) -> Self {
        Self {
            error: err.kind().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<QuoteError> for QuoteErrorResponse {
    fn from(err: QuoteError) -> Self {
        Self::from(&err)
    }
}

/// Builds, prices and describes a quote in one call.
///
/// # Examples
/// ```
/// use pricer_quotes::{price_quote, QuotePayload};
///
/// let payload = QuotePayload::from_json_str(
///     r#"{"spotPrice": 100, "strikePrice": 100, "riskFreeRate": 0.05,
///         "volatility": 0.2, "timeToMaturity": 1}"#,
/// )
/// .unwrap();
///
/// let response = price_quote("Option", &payload).unwrap();
/// assert!((response.price - 10.4506).abs() < 1e-4);
/// assert!(response.details.starts_with("QuoteType = Option:"));
/// ```
///
/// # Errors
/// Any [`QuoteError`] raised by [`QuoteFactory::create_quote`].
pub fn price_quote(type_tag: &str, fields: &QuotePayload) -> Result<QuoteResponse, QuoteError> {
    let quote = QuoteFactory::new().create_quote(type_tag, fields)?;
    let response = QuoteResponse::from_quote(&quote);
    trace!(price = response.price, "Quote priced");
    Ok(response)
}
