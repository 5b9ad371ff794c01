//! Raw keyed payload for quote requests.
//!
//! A [`QuotePayload`] maps external field names (`spotPrice`, `strikePrice`,
//! `riskFreeRate`, `volatility`, `timeToMaturity`) to JSON values. It is
//! deliberately loose: the factory decides which fields a quote type needs
//! and reports missing or non-numeric ones as
//! [`QuoteError::ShapeMismatch`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::quotes::{QuoteError, QuoteField, QuoteType, ShapeIssue};

/// Keyed fields supplied with a quote request.
///
/// # Examples
/// ```
/// use pricer_quotes::{QuoteField, QuotePayload};
///
/// let from_json = QuotePayload::from_json_str(
///     r#"{"spotPrice": 100, "riskFreeRate": 0.05, "timeToMaturity": 1}"#,
/// )
/// .unwrap();
///
/// let built = QuotePayload::new()
///     .with_field(QuoteField::SpotPrice, 100.0)
///     .with_field(QuoteField::RiskFreeRate, 0.05)
///     .with_field(QuoteField::TimeToMaturity, 1.0);
///
/// assert_eq!(from_json.len(), built.len());
/// assert!(built.contains(QuoteField::SpotPrice));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuotePayload {
    fields: Map<String, Value>,
}

impl QuotePayload {
    /// Creates an empty payload.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a payload from JSON text.
    ///
    /// # Errors
    /// Returns the parser error if the text is not a JSON object.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Converts a JSON value into a payload.
    ///
    /// # Errors
    /// Returns an error if the value is not a JSON object.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Adds a numeric field, consuming and returning the payload.
    ///
    /// JSON has no NaN or infinity, so a non-finite `value` is stored as its
    /// string form (`"NaN"`, `"inf"`) and later read as
    /// [`ShapeIssue::NotNumeric`] rather than as a missing field.
    pub fn with_field(mut self, field: QuoteField, value: f64) -> Self {
        let value = Number::from_f64(value)
            .map_or_else(|| Value::String(value.to_string()), Value::Number);
        self.insert(field.key(), value);
        self
    }

    /// Inserts an arbitrary value under `key`, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Returns the raw value stored under `key`.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Returns whether a non-null value is present for `field`.
    #[inline]
    pub fn contains(&self, field: QuoteField) -> bool {
        !matches!(self.get(field.key()), None | Some(Value::Null))
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns whether the payload has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Reads `field` as a number for a request of `quote_type`.
    ///
    /// Absent and `null` values are reported as [`ShapeIssue::Missing`];
    /// any other non-numeric value as [`ShapeIssue::NotNumeric`].
    pub fn numeric(&self, quote_type: QuoteType, field: QuoteField) -> Result<f64, QuoteError> {
        let mismatch = |issue| QuoteError::ShapeMismatch {
            quote_type,
            field,
            issue,
        };

        match self.get(field.key()) {
            None | Some(Value::Null) => Err(mismatch(ShapeIssue::Missing)),
            Some(value) => value.as_f64().ok_or_else(|| mismatch(ShapeIssue::NotNumeric)),
        }
    }
}

impl From<Map<String, Value>> for QuotePayload {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

impl FromIterator<(QuoteField, f64)> for QuotePayload {
    fn from_iter<I: IntoIterator<Item = (QuoteField, f64)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |payload, (field, value)| payload.with_field(field, value))
    }
}
