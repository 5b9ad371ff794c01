//! Quote type tags and field names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::QuoteError;

/// Kind of quote being requested.
///
/// Parsed case-sensitively from its variant name, matching the tag supplied
/// by callers (`"Forward"`, `"Swap"`, `"Option"`).
///
/// # Examples
/// ```
/// use pricer_quotes::QuoteType;
///
/// let quote_type: QuoteType = "Swap".parse().unwrap();
/// assert_eq!(quote_type, QuoteType::Swap);
/// assert_eq!(quote_type.to_string(), "Swap");
///
/// assert!("swap".parse::<QuoteType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuoteType {
    /// Forward contract
    Forward,
    /// Swap, priced with the forward formula
    Swap,
    /// European call option (Black-Scholes)
    Option,
}

impl QuoteType {
    /// All quote types, in declaration order.
    pub const ALL: [QuoteType; 3] = [QuoteType::Forward, QuoteType::Swap, QuoteType::Option];

    /// Returns the tag name.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            QuoteType::Forward => "Forward",
            QuoteType::Swap => "Swap",
            QuoteType::Option => "Option",
        }
    }

    /// Fields a request of this type must carry, in the order they are fed
    /// into the builder.
    ///
    /// # Examples
    /// ```
    /// use pricer_quotes::{QuoteField, QuoteType};
    ///
    /// assert_eq!(
    ///     QuoteType::Forward.required_fields(),
    ///     &[QuoteField::SpotPrice, QuoteField::RiskFreeRate, QuoteField::TimeToMaturity]
    /// );
    /// assert_eq!(QuoteType::Option.required_fields().len(), 5);
    /// ```
    pub fn required_fields(&self) -> &'static [QuoteField] {
        const MARKET: &[QuoteField] = &[
            QuoteField::SpotPrice,
            QuoteField::RiskFreeRate,
            QuoteField::TimeToMaturity,
        ];

        match self {
            QuoteType::Forward | QuoteType::Swap => MARKET,
            QuoteType::Option => &QuoteField::ALL,
        }
    }
}

impl FromStr for QuoteType {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuoteType::ALL
            .into_iter()
            .find(|quote_type| quote_type.name() == s)
            .ok_or_else(|| QuoteError::UnknownQuoteType { tag: s.to_string() })
    }
}

impl fmt::Display for QuoteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Named numeric field of a quote request.
///
/// Each field has an external key (the camelCase name used in request
/// payloads) and a display label (used in quote descriptions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuoteField {
    /// Current price of the underlying
    SpotPrice,
    /// Option strike
    StrikePrice,
    /// Continuously-compounded risk-free rate
    RiskFreeRate,
    /// Annualised volatility of the underlying
    Volatility,
    /// Time to maturity in years
    TimeToMaturity,
}

impl QuoteField {
    /// All fields, in canonical order.
    pub const ALL: [QuoteField; 5] = [
        QuoteField::SpotPrice,
        QuoteField::StrikePrice,
        QuoteField::RiskFreeRate,
        QuoteField::Volatility,
        QuoteField::TimeToMaturity,
    ];

    /// Returns the payload key.
    #[inline]
    pub fn key(&self) -> &'static str {
        match self {
            QuoteField::SpotPrice => "spotPrice",
            QuoteField::StrikePrice => "strikePrice",
            QuoteField::RiskFreeRate => "riskFreeRate",
            QuoteField::Volatility => "volatility",
            QuoteField::TimeToMaturity => "timeToMaturity",
        }
    }

    /// Returns the label used in descriptions.
    #[inline]
    pub fn label(&self) -> &'static str {
        match self {
            QuoteField::SpotPrice => "Spot Price",
            QuoteField::StrikePrice => "Strike Price",
            QuoteField::RiskFreeRate => "Risk Free Rate",
            QuoteField::Volatility => "Volatility",
            QuoteField::TimeToMaturity => "Time to Maturity",
        }
    }

    /// Returns the constraint a value of this field must satisfy.
    #[inline]
    pub fn constraint(&self) -> &'static str {
        match self {
            QuoteField::RiskFreeRate => "must be finite",
            _ => "must be positive",
        }
    }

    /// Checks a value against this field's constraint.
    ///
    /// The risk-free rate accepts any finite value (negative rates included);
    /// every other field must be finite and strictly positive.
    ///
    /// # Examples
    /// ```
    /// use pricer_quotes::{QuoteError, QuoteField};
    ///
    /// assert_eq!(QuoteField::RiskFreeRate.validate(-0.01), Ok(-0.01));
    /// assert_eq!(
    ///     QuoteField::Volatility.validate(-0.1),
    ///     Err(QuoteError::InvalidParameter {
    ///         field: QuoteField::Volatility,
    ///         value: -0.1,
    ///     })
    /// );
    /// ```
    pub fn validate(&self, value: f64) -> Result<f64, QuoteError> {
        let valid = match self {
            QuoteField::RiskFreeRate => value.is_finite(),
            _ => value.is_finite() && value > 0.0,
        };

        if valid {
            Ok(value)
        } else {
            Err(QuoteError::InvalidParameter {
                field: *self,
                value,
            })
        }
    }
}

impl fmt::Display for QuoteField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
