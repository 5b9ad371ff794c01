//! Traits for priceable and describable instruments.
//!
//! This module defines the capability set shared by every quoted instrument:
//! - Price calculation (`Priceable` trait)
//! - Textual summary (`Describable` trait)

use num_traits::Float;

/// Trait for entities that can be priced.
///
/// # Type Parameters
/// * `T` - Floating-point type (f32 or f64)
///
/// # Design Philosophy
///
/// Implement this trait on concrete instrument types and wrap them in an
/// `enum` for dispatch rather than boxing them as trait objects:
///
/// ```
/// use pricer_core::traits::priceable::Priceable;
/// use num_traits::Float;
///
/// enum Instrument<T: Float> {
///     ZeroCoupon { face: T, rate: T, maturity: T },
///     Cash { amount: T },
/// }
///
/// impl<T: Float> Priceable<T> for Instrument<T> {
///     fn price(&self) -> T {
///         match self {
///             Instrument::ZeroCoupon { face, rate, maturity } => {
///                 *face * (-*rate * *maturity).exp()
///             }
///             Instrument::Cash { amount } => *amount,
///         }
///     }
/// }
///
/// let cash = Instrument::Cash { amount: 10.0_f64 };
/// assert_eq!(cash.price(), 10.0);
/// ```
pub trait Priceable<T: Float> {
    /// Calculate the price of the instrument.
    ///
    /// # Invariants
    /// - The method must be pure (no side effects, deterministic)
    /// - The result is finite for an instrument whose parameters were validated
    fn price(&self) -> T;
}

/// Trait for entities that render a human-readable summary of themselves.
///
/// The summary is meant for display and diagnostics; it is stable for a
/// given set of field values but is not a serialisation format.
///
/// # Examples
/// ```
/// use pricer_core::traits::priceable::Describable;
///
/// struct Deposit {
///     amount: f64,
/// }
///
/// impl Describable for Deposit {
///     fn describe(&self) -> String {
///         format!("Deposit: Amount = {}", self.amount)
///     }
/// }
///
/// assert_eq!(Deposit { amount: 5.0 }.describe(), "Deposit: Amount = 5");
/// ```
pub trait Describable {
    /// Render the summary.
    fn describe(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priceable_with_f64() {
        enum SimpleInstrument {
            FixedValue(f64),
        }

        impl Priceable<f64> for SimpleInstrument {
            fn price(&self) -> f64 {
                match self {
                    SimpleInstrument::FixedValue(val) => *val,
                }
            }
        }

        let instrument = SimpleInstrument::FixedValue(100.0);
        assert_eq!(instrument.price(), 100.0);
    }

    #[test]
    fn test_priceable_with_f32() {
        struct Growth {
            rate: f32,
        }

        impl Priceable<f32> for Growth {
            fn price(&self) -> f32 {
                self.rate.exp()
            }
        }

        assert_eq!(Growth { rate: 0.0 }.price(), 1.0_f32);
    }

    #[test]
    fn test_trait_methods_have_no_side_effects() {
        struct Fixed(f64);

        impl Priceable<f64> for Fixed {
            fn price(&self) -> f64 {
                self.0
            }
        }

        impl Describable for Fixed {
            fn describe(&self) -> String {
                format!("Fixed = {}", self.0)
            }
        }

        let instrument = Fixed(2.5);
        assert_eq!(instrument.price(), instrument.price());
        assert_eq!(instrument.describe(), instrument.describe());
        assert_eq!(instrument.describe(), "Fixed = 2.5");
    }
}
