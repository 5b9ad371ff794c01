//! # pricer_core: Numerical Foundation for the Quote Pricer
//!
//! ## Foundation Layer Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - The standard normal distribution (`math::distributions`)
//! - Traits for priced and describable instruments (`traits`)
//!
//! ## Zero Dependency Principle
//!
//! This layer has no dependencies on other pricer_* crates and a single
//! external dependency:
//! - num-traits: Traits for generic numerical computation
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::distributions::norm_cdf;
//! use pricer_core::traits::priceable::Priceable;
//!
//! // Φ(1.96) ≈ 0.975
//! let p = norm_cdf(1.96_f64);
//! assert!((p - 0.975).abs() < 1e-4);
//!
//! struct Cash(f64);
//!
//! impl Priceable<f64> for Cash {
//!     fn price(&self) -> f64 {
//!         self.0
//!     }
//! }
//!
//! assert_eq!(Cash(42.0).price(), 42.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod traits;
