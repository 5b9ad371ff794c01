//! Quote factory: type tag plus keyed payload to a validated [`QuoteRequest`].
//!
//! Construction runs in three stages, each with its own error kind:
//!
//! 1. Tag parsing ([`QuoteError::UnknownQuoteType`])
//! 2. Payload extraction of every required field
//!    ([`QuoteError::ShapeMismatch`])
//! 3. Builder feed in canonical order ([`QuoteError::InvalidParameter`])
//!
//! Fields a quote type does not use are ignored.

use tracing::debug;

use crate::builders::{ForwardQuoteBuilder, OptionQuoteBuilder, SwapQuoteBuilder};
use crate::payload::QuotePayload;
use crate::quotes::{QuoteError, QuoteField, QuoteRequest, QuoteType};

/// Stateless factory for quote requests.
///
/// # Examples
/// ```
/// use pricer_quotes::{QuoteError, QuoteFactory, QuotePayload};
///
/// let factory = QuoteFactory::new();
/// let payload = QuotePayload::from_json_str(
///     r#"{"spotPrice": 100, "riskFreeRate": 0.05, "timeToMaturity": 1}"#,
/// )
/// .unwrap();
///
/// let swap = factory.create_quote("Swap", &payload).unwrap();
/// assert_eq!(swap.spot_price(), 100.0);
///
/// assert!(matches!(
///     factory.create_quote("Bond", &payload),
///     Err(QuoteError::UnknownQuoteType { .. })
/// ));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct QuoteFactory;

impl QuoteFactory {
    /// Creates a factory.
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Builds a quote from a case-sensitive type tag and its payload.
    ///
    /// # Errors
    ///
    /// - `UnknownQuoteType` if `type_tag` is not `Forward`, `Swap` or `Option`
    /// - `ShapeMismatch` if a required field is absent, `null` or not a number
    /// - `InvalidParameter` if a field fails validation
    pub fn create_quote(
        &self,
        type_tag: &str,
        fields: &QuotePayload,
    ) -> Result<QuoteRequest, QuoteError> {
        let quote_type: QuoteType = type_tag.parse()?;
        self.create_typed(quote_type, fields)
    }

    /// Builds a quote for an already-parsed type.
    ///
    /// # Errors
    ///
    /// Same as [`create_quote`](Self::create_quote), minus tag parsing.
    pub fn create_typed(
        &self,
        quote_type: QuoteType,
        fields: &QuotePayload,
    ) -> Result<QuoteRequest, QuoteError> {
        let quote: QuoteRequest = match quote_type {
            QuoteType::Forward => {
                let [spot, rate, maturity] = market_fields(quote_type, fields)?;
                ForwardQuoteBuilder::new()
                    .spot_price(spot)?
                    .risk_free_rate(rate)?
                    .time_to_maturity(maturity)?
                    .build()?
                    .into()
            }
            QuoteType::Swap => {
                let [spot, rate, maturity] = market_fields(quote_type, fields)?;
                SwapQuoteBuilder::new()
                    .spot_price(spot)?
                    .risk_free_rate(rate)?
                    .time_to_maturity(maturity)?
                    .build()?
                    .into()
            }
            QuoteType::Option => {
                let spot = fields.numeric(quote_type, QuoteField::SpotPrice)?;
                let strike = fields.numeric(quote_type, QuoteField::StrikePrice)?;
                let rate = fields.numeric(quote_type, QuoteField::RiskFreeRate)?;
                let vol = fields.numeric(quote_type, QuoteField::Volatility)?;
                let maturity = fields.numeric(quote_type, QuoteField::TimeToMaturity)?;

                OptionQuoteBuilder::new()
                    .spot_price(spot)?
                    .strike_price(strike)?
                    .risk_free_rate(rate)?
                    .volatility(vol)?
                    .time_to_maturity(maturity)?
                    .build()?
                    .into()
            }
        };

        debug!(quote_type = %quote_type, "Quote request built");
        Ok(quote)
    }
}

/// Spot, rate and maturity, extracted before any of them is validated.
fn market_fields(quote_type: QuoteType, fields: &QuotePayload) -> Result<[f64; 3], QuoteError> {
    Ok([
        fields.numeric(quote_type, QuoteField::SpotPrice)?,
        fields.numeric(quote_type, QuoteField::RiskFreeRate)?,
        fields.numeric(quote_type, QuoteField::TimeToMaturity)?,
    ])
}
