//! Mathematical building blocks.
//!
//! - [`distributions`]: standard normal CDF and the error function it is built on

pub mod distributions;
