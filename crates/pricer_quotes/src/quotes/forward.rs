//! Forward quote.

use pricer_core::traits::{Describable, Priceable};
use serde::Serialize;

use super::error::QuoteError;
use super::params::{describe_fields, MarketParams};
use super::quote_type::{QuoteField, QuoteType};
use crate::builders::ForwardQuoteBuilder;

/// Forward contract quote.
///
/// Priced as the continuously-compounded forward of spot:
/// `F = S · exp(r · T)`.
///
/// # Examples
/// ```
/// use pricer_quotes::{Describable, ForwardQuote, Priceable};
///
/// let forward = ForwardQuote::new(100.0, 0.05, 1.0).unwrap();
/// assert!((forward.price() - 105.1271).abs() < 1e-4);
/// assert_eq!(
///     forward.describe(),
///     "QuoteType = Forward: Spot Price = 100, Risk Free Rate = 0.05, Time to Maturity = 1"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ForwardQuote {
    market: MarketParams,
}

impl ForwardQuote {
    /// Creates a forward quote, validating every field.
    pub fn new(
        spot_price: f64,
        risk_free_rate: f64,
        time_to_maturity: f64,
    ) -> Result<Self, QuoteError> {
        MarketParams::new(spot_price, risk_free_rate, time_to_maturity).map(Self::from)
    }

    /// Returns a builder for field-by-field assembly.
    pub fn builder() -> ForwardQuoteBuilder {
        ForwardQuoteBuilder::new()
    }

    /// Returns the market parameters.
    #[inline]
    pub fn market(&self) -> &MarketParams {
        &self.market
    }
}

impl From<MarketParams> for ForwardQuote {
    fn from(market: MarketParams) -> Self {
        Self { market }
    }
}

impl Priceable<f64> for ForwardQuote {
    #[inline]
    fn price(&self) -> f64 {
        self.market.forward_price()
    }
}

impl Describable for ForwardQuote {
    fn describe(&self) -> String {
        describe_fields(
            QuoteType::Forward,
            &[
                (QuoteField::SpotPrice, self.market.spot_price()),
                (QuoteField::RiskFreeRate, self.market.risk_free_rate()),
                (QuoteField::TimeToMaturity, self.market.time_to_maturity()),
            ],
        )
    }
}
