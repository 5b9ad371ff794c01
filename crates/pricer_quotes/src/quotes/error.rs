//! Quote error types.
//!
//! This module provides structured error handling for quote construction:
//! tag parsing, payload shape checks, and field validation. Pricing itself
//! never fails once a quote has been built.

use std::fmt;

use thiserror::Error;

use super::quote_type::{QuoteField, QuoteType};

/// Why a payload field could not be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeIssue {
    /// The field is absent (or explicitly `null`).
    Missing,
    /// The field is present but is not a number.
    NotNumeric,
}

impl fmt::Display for ShapeIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeIssue::Missing => f.write_str("is missing"),
            ShapeIssue::NotNumeric => f.write_str("is not a number"),
        }
    }
}

/// Quote construction errors.
///
/// Every variant is a deterministic input-validation failure detected
/// synchronously while building a quote; none of them is transient.
///
/// # Variants
/// - `UnknownQuoteType`: The type tag matches no known quote type
/// - `ShapeMismatch`: The payload lacks a field the resolved type requires
/// - `InvalidParameter`: A field value violates its constraint
/// - `IncompleteRequest`: A builder was finalised before a field was set
///
/// # Examples
/// ```
/// use pricer_quotes::{QuoteError, QuoteField};
///
/// let err = QuoteError::InvalidParameter { field: QuoteField::Volatility, value: -0.1 };
/// assert_eq!(err.kind(), "invalid_parameter");
/// assert!(err.to_string().contains("volatility"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuoteError {
    /// Type tag does not match any known quote type.
    #[error("Unknown quote type: '{tag}'. Expected one of: Forward, Swap, Option")]
    UnknownQuoteType {
        /// The unrecognised tag
        tag: String,
    },

    /// Payload does not have the shape the resolved quote type requires.
    #[error("Request is not correctly formatted as {quote_type}: field {field} {issue}")]
    ShapeMismatch {
        /// The quote type the payload was read as
        quote_type: QuoteType,
        /// The offending field
        field: QuoteField,
        /// What is wrong with it
        issue: ShapeIssue,
    },

    /// A field value violates its constraint.
    #[error("Invalid parameter: {field} = {value} ({constraint})", constraint = .field.constraint())]
    InvalidParameter {
        /// The offending field
        field: QuoteField,
        /// The rejected value
        value: f64,
    },

    /// Builder finalised before a required field was set.
    #[error("Incomplete request: required field {field} was never set")]
    IncompleteRequest {
        /// The first missing field, in canonical order
        field: QuoteField,
    },
}

impl QuoteError {
    /// Returns a stable snake_case code for the error kind.
    ///
    /// Transport layers map this code to their own status values.
    pub fn kind(&self) -> &'static str {
        match self {
            QuoteError::UnknownQuoteType { .. } => "unknown_quote_type",
            QuoteError::ShapeMismatch { .. } => "shape_mismatch",
            QuoteError::InvalidParameter { .. } => "invalid_parameter",
            QuoteError::IncompleteRequest { .. } => "incomplete_request",
        }
    }

    /// Returns the field the error refers to, if any.
    pub fn field(&self) -> Option<QuoteField> {
        match self {
            QuoteError::UnknownQuoteType { .. } => None,
            QuoteError::ShapeMismatch { field, .. }
            | QuoteError::InvalidParameter { field, .. }
            | QuoteError::IncompleteRequest { field } => Some(*field),
        }
    }
}
