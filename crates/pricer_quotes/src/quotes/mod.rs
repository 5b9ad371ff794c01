//! Quote request definitions.
//!
//! # Architecture
//!
//! Uses enum dispatch (NOT trait objects):
//! - [`QuoteRequest`] wraps one struct per [`QuoteType`]
//! - Each struct carries only its own fields and implements
//!   [`Priceable`] and [`Describable`]
//! - The enum forwards both capabilities with an exhaustive `match`
//!
//! # Quote Types
//!
//! - [`ForwardQuote`]: `S · exp(r · T)`
//! - [`SwapQuote`]: same formula as the forward
//! - [`OptionQuote`]: Black-Scholes European call
//!
//! # Examples
//!
//! ```
//! use pricer_quotes::{Describable, OptionQuote, Priceable, QuoteRequest, QuoteType};
//!
//! let quote = QuoteRequest::from(OptionQuote::new(100.0, 100.0, 0.05, 0.2, 1.0).unwrap());
//!
//! assert_eq!(quote.quote_type(), QuoteType::Option);
//! assert!((quote.price() - 10.4506).abs() < 1e-4);
//! assert!(quote.describe().contains("Volatility = 0.2"));
//! ```

mod error;
mod forward;
mod option;
mod params;
mod quote_type;
mod swap;

pub use error::{QuoteError, ShapeIssue};
pub use forward::ForwardQuote;
pub use option::OptionQuote;
pub use params::MarketParams;
pub use quote_type::{QuoteField, QuoteType};
pub use swap::SwapQuote;

use pricer_core::traits::{Describable, Priceable};
use serde::Serialize;

/// Validated quote request, one variant per [`QuoteType`].
///
/// Instances are immutable once built; `price` and `describe` are pure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "quoteType")]
pub enum QuoteRequest {
    /// Forward contract
    Forward(ForwardQuote),
    /// Swap
    Swap(SwapQuote),
    /// European call option
    Option(OptionQuote),
}

impl QuoteRequest {
    /// Returns the type tag of this quote.
    #[inline]
    pub fn quote_type(&self) -> QuoteType {
        match self {
            QuoteRequest::Forward(_) => QuoteType::Forward,
            QuoteRequest::Swap(_) => QuoteType::Swap,
            QuoteRequest::Option(_) => QuoteType::Option,
        }
    }

    /// Returns the market parameters shared by every variant.
    #[inline]
    pub fn market(&self) -> &MarketParams {
        match self {
            QuoteRequest::Forward(forward) => forward.market(),
            QuoteRequest::Swap(swap) => swap.market(),
            QuoteRequest::Option(option) => option.market(),
        }
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot_price(&self) -> f64 {
        self.market().spot_price()
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn risk_free_rate(&self) -> f64 {
        self.market().risk_free_rate()
    }

    /// Returns the time to maturity.
    #[inline]
    pub fn time_to_maturity(&self) -> f64 {
        self.market().time_to_maturity()
    }

    /// Returns whether this is an option quote.
    #[inline]
    pub fn is_option(&self) -> bool {
        matches!(self, QuoteRequest::Option(_))
    }

    /// Returns a reference to the option if this is an Option variant.
    pub fn as_option(&self) -> Option<&OptionQuote> {
        match self {
            QuoteRequest::Option(option) => Some(option),
            _ => None,
        }
    }
}

impl Priceable<f64> for QuoteRequest {
    #[inline]
    fn price(&self) -> f64 {
        match self {
            QuoteRequest::Forward(forward) => forward.price(),
            QuoteRequest::Swap(swap) => swap.price(),
            QuoteRequest::Option(option) => option.price(),
        }
    }
}

impl Describable for QuoteRequest {
    fn describe(&self) -> String {
        match self {
            QuoteRequest::Forward(forward) => forward.describe(),
            QuoteRequest::Swap(swap) => swap.describe(),
            QuoteRequest::Option(option) => option.describe(),
        }
    }
}

impl From<ForwardQuote> for QuoteRequest {
    fn from(quote: ForwardQuote) -> Self {
        QuoteRequest::Forward(quote)
    }
}

impl From<SwapQuote> for QuoteRequest {
    fn from(quote: SwapQuote) -> Self {
        QuoteRequest::Swap(quote)
    }
}

impl From<OptionQuote> for QuoteRequest {
    fn from(quote: OptionQuote) -> Self {
        QuoteRequest::Option(quote)
    }
}
