//! # Pricer Quotes (Business Logic)
//!
//! Quote requests for closed-form pricing of forwards, swaps, and options.
//!
//! This crate provides:
//! - The quote model: a closed [`QuoteRequest`] enum over [`ForwardQuote`],
//!   [`SwapQuote`], and [`OptionQuote`], each priced and described through the
//!   [`Priceable`] and [`Describable`] traits
//! - Per-variant builders that validate every field on assignment
//! - A stateless [`QuoteFactory`] that turns a type tag and a keyed payload
//!   into a validated quote
//! - The `{ details, price }` response shape relayed to callers
//!
//! ## Design Principles
//!
//! - **Enum-based quotes** for static dispatch
//! - **Validate on construction**: an invalid or incomplete quote can never
//!   be observed, so pricing is total
//! - **Builder pattern** with typed `Result`s at every step
//!
//! ## Example
//!
//! ```
//! use pricer_quotes::{Priceable, QuoteFactory, QuotePayload};
//!
//! let payload = QuotePayload::from_json_str(
//!     r#"{"spotPrice": 100.0, "riskFreeRate": 0.05, "timeToMaturity": 1.0}"#,
//! )
//! .unwrap();
//!
//! let quote = QuoteFactory::new().create_quote("Forward", &payload).unwrap();
//! assert!((quote.price() - 105.1271).abs() < 1e-4);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod builders;
pub mod factory;
pub mod payload;
pub mod quotes;
pub mod response;

pub use builders::{ForwardQuoteBuilder, MarketQuoteBuilder, OptionQuoteBuilder, SwapQuoteBuilder};
pub use factory::QuoteFactory;
pub use payload::QuotePayload;
pub use quotes::{
    ForwardQuote, MarketParams, OptionQuote, QuoteError, QuoteField, QuoteRequest, QuoteType,
    ShapeIssue, SwapQuote,
};
pub use response::{price_quote, QuoteErrorResponse, QuoteResponse};

pub use pricer_core::traits::{Describable, Priceable};
