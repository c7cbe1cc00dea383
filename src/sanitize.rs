//! JSON-safe numeric values
//!
//! The forecast service reports gaps in its daily series as nulls, and the
//! columnar decode can surface NaN or infinite values. Strict JSON has no
//! token for any of these, so every number is funneled through [`SafeNumber`]
//! before serialization: finite values pass through unchanged, everything
//! else collapses to an empty-string placeholder.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A numeric value guaranteed to be representable in strict JSON
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SafeNumber {
    Finite(f64),
    Empty,
}

impl SafeNumber {
    /// True if the value carries an actual number
    pub fn is_finite(&self) -> bool {
        matches!(self, SafeNumber::Finite(_))
    }

    /// The inner value, if present
    pub fn value(&self) -> Option<f64> {
        match self {
            SafeNumber::Finite(v) => Some(*v),
            SafeNumber::Empty => None,
        }
    }

    /// Re-sanitize: a no-op on values built through the `From` impls,
    /// but collapses a directly constructed non-finite `Finite`
    pub fn sanitized(self) -> SafeNumber {
        match self {
            SafeNumber::Finite(v) if !v.is_finite() => SafeNumber::Empty,
            other => other,
        }
    }
}

impl From<f64> for SafeNumber {
    fn from(value: f64) -> Self {
        if value.is_finite() {
            SafeNumber::Finite(value)
        } else {
            SafeNumber::Empty
        }
    }
}

impl From<Option<f64>> for SafeNumber {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(v) => SafeNumber::from(v),
            None => SafeNumber::Empty,
        }
    }
}

impl Serialize for SafeNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SafeNumber::Finite(v) => serializer.serialize_f64(*v),
            SafeNumber::Empty => serializer.serialize_str(""),
        }
    }
}

impl<'de> Deserialize<'de> for SafeNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(v) => Ok(SafeNumber::from(v)),
            Raw::Text(s) if s.is_empty() => Ok(SafeNumber::Empty),
            Raw::Text(s) => Err(D::Error::custom(format!(
                "expected a number or an empty placeholder, got {:?}",
                s
            ))),
        }
    }
}

/// Sanitize a series of optional values, preserving order
pub fn sanitize_series<I>(values: I) -> Vec<SafeNumber>
where
    I: IntoIterator<Item = Option<f64>>,
{
    values.into_iter().map(SafeNumber::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finite_values_pass_through() {
        assert_eq!(SafeNumber::from(1.5), SafeNumber::Finite(1.5));
        assert_eq!(SafeNumber::from(0.0), SafeNumber::Finite(0.0));
        assert_eq!(SafeNumber::from(-273.15), SafeNumber::Finite(-273.15));
    }

    #[test]
    fn test_non_finite_values_become_placeholder() {
        assert_eq!(SafeNumber::from(f64::NAN), SafeNumber::Empty);
        assert_eq!(SafeNumber::from(f64::INFINITY), SafeNumber::Empty);
        assert_eq!(SafeNumber::from(f64::NEG_INFINITY), SafeNumber::Empty);
        assert_eq!(SafeNumber::from(None), SafeNumber::Empty);
    }

    #[test]
    fn test_series_order_and_placeholders() {
        let series = sanitize_series([
            Some(1.0),
            Some(f64::NAN),
            Some(2.0),
            None,
            Some(f64::NEG_INFINITY),
            Some(3.0),
        ]);

        assert_eq!(
            series,
            vec![
                SafeNumber::Finite(1.0),
                SafeNumber::Empty,
                SafeNumber::Finite(2.0),
                SafeNumber::Empty,
                SafeNumber::Empty,
                SafeNumber::Finite(3.0),
            ]
        );
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let values = [
            SafeNumber::from(4.2),
            SafeNumber::from(f64::NAN),
            SafeNumber::Finite(f64::INFINITY),
        ];

        let once: Vec<SafeNumber> = values.iter().map(|v| v.sanitized()).collect();
        let twice: Vec<SafeNumber> = once.iter().map(|v| v.sanitized()).collect();
        assert_eq!(once, twice);
        assert_eq!(once[2], SafeNumber::Empty);
    }

    #[test]
    fn test_serializes_as_number_or_empty_string() {
        assert_eq!(
            serde_json::to_string(&SafeNumber::Finite(2.5)).unwrap(),
            "2.5"
        );
        assert_eq!(serde_json::to_string(&SafeNumber::Empty).unwrap(), "\"\"");
    }

    #[test]
    fn test_deserializes_wire_forms() {
        let number: SafeNumber = serde_json::from_str("2.5").unwrap();
        assert_eq!(number, SafeNumber::Finite(2.5));

        let empty: SafeNumber = serde_json::from_str("\"\"").unwrap();
        assert_eq!(empty, SafeNumber::Empty);

        let bad: Result<SafeNumber, _> = serde_json::from_str("\"n/a\"");
        assert!(bad.is_err());
    }
}
