//! Market parameters shared by every quote type.

use serde::Serialize;

use super::error::QuoteError;
use super::quote_type::{QuoteField, QuoteType};

/// Common market parameters shared across quote types.
///
/// Contains spot price, risk-free rate, and time to maturity, validated so
/// that spot and maturity are strictly positive and the rate is finite.
///
/// # Examples
/// ```
/// use pricer_quotes::MarketParams;
///
/// let params = MarketParams::new(100.0, 0.05, 1.0).unwrap();
/// assert_eq!(params.spot_price(), 100.0);
/// assert_eq!(params.risk_free_rate(), 0.05);
/// assert_eq!(params.time_to_maturity(), 1.0);
///
/// assert!(MarketParams::new(100.0, 0.05, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketParams {
    spot_price: f64,
    risk_free_rate: f64,
    time_to_maturity: f64,
}

impl MarketParams {
    /// Creates new market parameters with validation.
    ///
    /// # Arguments
    /// * `spot_price` - Current price of the underlying (must be positive)
    /// * `risk_free_rate` - Continuously-compounded rate (must be finite)
    /// * `time_to_maturity` - Time to maturity in years (must be positive)
    ///
    /// # Errors
    /// `QuoteError::InvalidParameter` naming the first offending field. If
    /// every field is valid on its own but `S·exp(rT)` or `exp(-rT)`
    /// overflows, the risk-free rate is reported.
    pub fn new(
        spot_price: f64,
        risk_free_rate: f64,
        time_to_maturity: f64,
    ) -> Result<Self, QuoteError> {
        let params = Self {
            spot_price: QuoteField::SpotPrice.validate(spot_price)?,
            risk_free_rate: QuoteField::RiskFreeRate.validate(risk_free_rate)?,
            time_to_maturity: QuoteField::TimeToMaturity.validate(time_to_maturity)?,
        };

        if params.forward_price().is_finite() && params.discount_factor().is_finite() {
            Ok(params)
        } else {
            Err(QuoteError::InvalidParameter {
                field: QuoteField::RiskFreeRate,
                value: risk_free_rate,
            })
        }
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot_price(&self) -> f64 {
        self.spot_price
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn risk_free_rate(&self) -> f64 {
        self.risk_free_rate
    }

    /// Returns the time to maturity in years.
    #[inline]
    pub fn time_to_maturity(&self) -> f64 {
        self.time_to_maturity
    }

    /// Continuously-compounded growth of spot to maturity: S · exp(r · T).
    #[inline]
    pub fn forward_price(&self) -> f64 {
        self.spot_price * (self.risk_free_rate * self.time_to_maturity).exp()
    }

    /// Discount factor to maturity: exp(-r · T).
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.risk_free_rate * self.time_to_maturity).exp()
    }
}

/// Renders `QuoteType = <tag>: <Label> = <value>, ...`.
pub(crate) fn describe_fields(quote_type: QuoteType, fields: &[(QuoteField, f64)]) -> String {
    let body = fields
        .iter()
        .map(|(field, value)| format!("{} = {}", field.label(), value))
        .collect::<Vec<_>>()
        .join(", ");

    format!("QuoteType = {}: {}", quote_type, body)
}
