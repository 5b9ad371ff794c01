//! Swap quote.
//!
//! A swap carries only the common market fields and is priced with the same
//! continuously-compounded forward formula as [`ForwardQuote`](super::ForwardQuote).
//! No curve or leg structure is modelled.

use pricer_core::traits::{Describable, Priceable};
use serde::Serialize;

use super::error::QuoteError;
use super::params::{describe_fields, MarketParams};
use super::quote_type::{QuoteField, QuoteType};
use crate::builders::SwapQuoteBuilder;

/// Swap quote, priced as `S · exp(r · T)`.
///
/// # Examples
/// ```
/// use pricer_quotes::{Describable, Priceable, SwapQuote};
///
/// let swap = SwapQuote::new(100.0, 0.05, 1.0).unwrap();
/// assert!((swap.price() - 105.1271).abs() < 1e-4);
/// assert!(swap.describe().starts_with("QuoteType = Swap:"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SwapQuote {
    market: MarketParams,
}

impl SwapQuote {
    /// Creates a swap quote, validating every field.
    pub fn new(
        spot_price: f64,
        risk_free_rate: f64,
        time_to_maturity: f64,
    ) -> Result<Self, QuoteError> {
        MarketParams::new(spot_price, risk_free_rate, time_to_maturity).map(Self::from)
    }

    /// Returns a builder for field-by-field assembly.
    pub fn builder() -> SwapQuoteBuilder {
        SwapQuoteBuilder::new()
    }

    /// Returns the market parameters.
    #[inline]
    pub fn market(&self) -> &MarketParams {
        &self.market
    }
}

impl From<MarketParams> for SwapQuote {
    fn from(market: MarketParams) -> Self {
        Self { market }
    }
}

impl Priceable<f64> for SwapQuote {
    #[inline]
    fn price(&self) -> f64 {
        self.market.forward_price()
    }
}

impl Describable for SwapQuote {
    fn describe(&self) -> String {
        describe_fields(
            QuoteType::Swap,
            &[
                (QuoteField::SpotPrice, self.market.spot_price()),
                (QuoteField::RiskFreeRate, self.market.risk_free_rate()),
                (QuoteField::TimeToMaturity, self.market.time_to_maturity()),
            ],
        )
    }
}
