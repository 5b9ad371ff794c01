//! Core traits for priced instruments.
//!
//! This module defines fundamental abstractions for:
//! - Generic floating-point operations (`Float` trait)
//! - Price calculation (`Priceable` trait)
//! - Human-readable summaries (`Describable` trait)
//!
//! Traits are designed for static dispatch: implement them on concrete
//! instrument structs and dispatch through an `enum` with `match`.

/// Generic floating-point trait for numeric computations.
///
/// # Examples
/// ```
/// use pricer_core::traits::Float;
///
/// fn compute_growth<T: Float>(rate: T, time: T) -> T {
///     (rate * time).exp()
/// }
///
/// let growth: f64 = compute_growth(0.05, 1.0);
/// assert!((growth - 1.051271).abs() < 1e-6);
/// ```
pub use num_traits::Float;

pub mod priceable;

pub use priceable::{Describable, Priceable};
