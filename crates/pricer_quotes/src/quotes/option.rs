//! European call option quote (Black-Scholes).

use pricer_core::math::distributions::norm_cdf;
use pricer_core::traits::{Describable, Priceable};
use serde::Serialize;

use super::error::QuoteError;
use super::params::{describe_fields, MarketParams};
use super::quote_type::{QuoteField, QuoteType};
use crate::builders::OptionQuoteBuilder;

/// European call option quote on a non-dividend-paying underlying.
///
/// # Mathematical Definition
/// ```text
/// d1 = (ln(S/K) + (r + σ²/2)T) / (σ√T)
/// d2 = d1 - σ√T
/// C  = S·N(d1) - K·exp(-rT)·N(d2)
/// ```
///
/// Volatility and maturity are validated strictly positive, so `σ√T` is
/// never zero and the price is always finite.
///
/// # Examples
/// ```
/// use pricer_quotes::{OptionQuote, Priceable};
///
/// let call = OptionQuote::new(100.0, 100.0, 0.05, 0.2, 1.0).unwrap();
/// assert!((call.price() - 10.4506).abs() < 1e-4);
///
/// assert!(OptionQuote::new(100.0, 100.0, 0.05, 0.0, 1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionQuote {
    #[serde(flatten)]
    market: MarketParams,
    strike_price: f64,
    volatility: f64,
}

impl OptionQuote {
    /// Creates an option quote, validating every field.
    ///
    /// Fields are checked in canonical order (spot, strike, rate, volatility,
    /// maturity) and the first violation is reported. Combinations that would
    /// make the price non-finite are rejected afterwards:
    /// - `σ√T` must be a normal positive number and `σ²T` finite (volatility)
    /// - `K·exp(-rT)` must be finite (strike)
    pub fn new(
        spot_price: f64,
        strike_price: f64,
        risk_free_rate: f64,
        volatility: f64,
        time_to_maturity: f64,
    ) -> Result<Self, QuoteError> {
        QuoteField::SpotPrice.validate(spot_price)?;
        let strike_price = QuoteField::StrikePrice.validate(strike_price)?;
        QuoteField::RiskFreeRate.validate(risk_free_rate)?;
        let volatility = QuoteField::Volatility.validate(volatility)?;
        let market = MarketParams::new(spot_price, risk_free_rate, time_to_maturity)?;

        let quote = Self {
            market,
            strike_price,
            volatility,
        };

        let variance = volatility * volatility * time_to_maturity;
        if !quote.total_volatility().is_normal() || !variance.is_finite() {
            return Err(QuoteError::InvalidParameter {
                field: QuoteField::Volatility,
                value: volatility,
            });
        }
        if !(strike_price * market.discount_factor()).is_finite() {
            return Err(QuoteError::InvalidParameter {
                field: QuoteField::StrikePrice,
                value: strike_price,
            });
        }

        Ok(quote)
    }

    /// Returns a builder for field-by-field assembly.
    pub fn builder() -> OptionQuoteBuilder {
        OptionQuoteBuilder::new()
    }

    /// Returns the market parameters.
    #[inline]
    pub fn market(&self) -> &MarketParams {
        &self.market
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike_price(&self) -> f64 {
        self.strike_price
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// σ√T
    #[inline]
    fn total_volatility(&self) -> f64 {
        self.volatility * self.market.time_to_maturity().sqrt()
    }

    /// Black-Scholes d1.
    pub fn d1(&self) -> f64 {
        let spot = self.market.spot_price();
        let rate = self.market.risk_free_rate();
        let maturity = self.market.time_to_maturity();

        ((spot / self.strike_price).ln()
            + (rate + 0.5 * self.volatility * self.volatility) * maturity)
            / self.total_volatility()
    }

    /// Black-Scholes d2 = d1 - σ√T.
    pub fn d2(&self) -> f64 {
        self.d1() - self.total_volatility()
    }
}

impl Priceable<f64> for OptionQuote {
    fn price(&self) -> f64 {
        let d1 = self.d1();
        let d2 = d1 - self.total_volatility();

        self.market.spot_price() * norm_cdf(d1)
            - self.strike_price * self.market.discount_factor() * norm_cdf(d2)
    }
}

impl Describable for OptionQuote {
    fn describe(&self) -> String {
        describe_fields(
            QuoteType::Option,
            &[
                (QuoteField::SpotPrice, self.market.spot_price()),
                (QuoteField::StrikePrice, self.strike_price),
                (QuoteField::RiskFreeRate, self.market.risk_free_rate()),
                (QuoteField::Volatility, self.volatility),
                (QuoteField::TimeToMaturity, self.market.time_to_maturity()),
            ],
        )
    }
}
