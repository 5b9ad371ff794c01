//! Fluent builders for quote requests.
//!
//! Every setter validates its value immediately and returns
//! `Result<Self, QuoteError>`, so a chain of setters reads naturally with `?`.
//! `build` consumes the builder and fails with
//! [`QuoteError::IncompleteRequest`] if a required field was never set.
//!
//! # Examples
//!
//! ```
//! use pricer_quotes::{OptionQuote, Priceable, QuoteError};
//!
//! let call = OptionQuote::builder()
//!     .spot_price(100.0)?
//!     .strike_price(100.0)?
//!     .risk_free_rate(0.05)?
//!     .volatility(0.2)?
//!     .time_to_maturity(1.0)?
//!     .build()?;
//!
//! assert!((call.price() - 10.4506).abs() < 1e-4);
//! # Ok::<(), QuoteError>(())
//! ```

use std::marker::PhantomData;

use crate::quotes::{ForwardQuote, MarketParams, OptionQuote, QuoteError, QuoteField, SwapQuote};

/// Builder for [`ForwardQuote`].
pub type ForwardQuoteBuilder = MarketQuoteBuilder<ForwardQuote>;

/// Builder for [`SwapQuote`].
pub type SwapQuoteBuilder = MarketQuoteBuilder<SwapQuote>;

#[inline]
fn require(value: Option<f64>, field: QuoteField) -> Result<f64, QuoteError> {
    value.ok_or(QuoteError::IncompleteRequest { field })
}

/// Builder for quotes that carry only market parameters.
///
/// Used through the [`ForwardQuoteBuilder`] and [`SwapQuoteBuilder`] aliases.
///
/// # Examples
///
/// ```
/// use pricer_quotes::{QuoteError, QuoteField, SwapQuoteBuilder};
///
/// let result = SwapQuoteBuilder::new()
///     .spot_price(100.0)
///     .and_then(|b| b.risk_free_rate(0.05))
///     .and_then(|b| b.build());
///
/// assert_eq!(
///     result,
///     Err(QuoteError::IncompleteRequest { field: QuoteField::TimeToMaturity })
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MarketQuoteBuilder<Q> {
    spot_price: Option<f64>,
    risk_free_rate: Option<f64>,
    time_to_maturity: Option<f64>,
    quote: PhantomData<Q>,
}

impl<Q> Default for MarketQuoteBuilder<Q> {
    fn default() -> Self {
        Self {
            spot_price: None,
            risk_free_rate: None,
            time_to_maturity: None,
            quote: PhantomData,
        }
    }
}

impl<Q: From<MarketParams>> MarketQuoteBuilder<Q> {
    /// Creates an empty builder.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the spot price (must be positive).
    pub fn spot_price(mut self, spot_price: f64) -> Result<Self, QuoteError> {
        self.spot_price = Some(QuoteField::SpotPrice.validate(spot_price)?);
        Ok(self)
    }

    /// Sets the risk-free rate (must be finite).
    pub fn risk_free_rate(mut self, risk_free_rate: f64) -> Result<Self, QuoteError> {
        self.risk_free_rate = Some(QuoteField::RiskFreeRate.validate(risk_free_rate)?);
        Ok(self)
    }

    /// Sets the time to maturity in years (must be positive).
    pub fn time_to_maturity(mut self, time_to_maturity: f64) -> Result<Self, QuoteError> {
        self.time_to_maturity = Some(QuoteField::TimeToMaturity.validate(time_to_maturity)?);
        Ok(self)
    }

    /// Builds the quote.
    ///
    /// # Errors
    ///
    /// `QuoteError::IncompleteRequest` naming the first unset field.
    pub fn build(self) -> Result<Q, QuoteError> {
        let spot_price = require(self.spot_price, QuoteField::SpotPrice)?;
        let risk_free_rate = require(self.risk_free_rate, QuoteField::RiskFreeRate)?;
        let time_to_maturity = require(self.time_to_maturity, QuoteField::TimeToMaturity)?;

        MarketParams::new(spot_price, risk_free_rate, time_to_maturity).map(Q::from)
    }
}

/// Builder for [`OptionQuote`].
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionQuoteBuilder {
    spot_price: Option<f64>,
    strike_price: Option<f64>,
    risk_free_rate: Option<f64>,
    volatility: Option<f64>,
    time_to_maturity: Option<f64>,
}

impl OptionQuoteBuilder {
    /// Creates an empty builder.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the spot price (must be positive).
    pub fn spot_price(mut self, spot_price: f64) -> Result<Self, QuoteError> {
        self.spot_price = Some(QuoteField::SpotPrice.validate(spot_price)?);
        Ok(self)
    }

    /// Sets the strike price (must be positive).
    pub fn strike_price(mut self, strike_price: f64) -> Result<Self, QuoteError> {
        self.strike_price = Some(QuoteField::StrikePrice.validate(strike_price)?);
        Ok(self)
    }

    /// Sets the risk-free rate (must be finite).
    pub fn risk_free_rate(mut self, risk_free_rate: f64) -> Result<Self, QuoteError> {
        self.risk_free_rate = Some(QuoteField::RiskFreeRate.validate(risk_free_rate)?);
        Ok(self)
    }

    /// Sets the volatility (must be positive).
    pub fn volatility(mut self, volatility: f64) -> Result<Self, QuoteError> {
        self.volatility = Some(QuoteField::Volatility.validate(volatility)?);
        Ok(self)
    }

    /// Sets the time to maturity in years (must be positive).
    pub fn time_to_maturity(mut self, time_to_maturity: f64) -> Result<Self, QuoteError> {
        self.time_to_maturity = Some(QuoteField::TimeToMaturity.validate(time_to_maturity)?);
        Ok(self)
    }

    /// Builds the option quote.
    ///
    /// # Errors
    ///
    /// `QuoteError::IncompleteRequest` naming the first unset field, in the
    /// order spot, strike, rate, volatility, maturity.
    pub fn build(self) -> Result<OptionQuote, QuoteError> {
        let spot_price = require(self.spot_price, QuoteField::SpotPrice)?;
        let strike_price = require(self.strike_price, QuoteField::StrikePrice)?;
        let risk_free_rate = require(self.risk_free_rate, QuoteField::RiskFreeRate)?;
        let volatility = require(self.volatility, QuoteField::Volatility)?;
        let time_to_maturity = require(self.time_to_maturity, QuoteField::TimeToMaturity)?;

        OptionQuote::new(
            spot_price,
            strike_price,
            risk_free_rate,
            volatility,
            time_to_maturity,
        )
    }
}
