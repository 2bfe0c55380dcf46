//! Typed values and raw-response normalization
//!
//! The upstream webserver answers every query with a bare text body. The
//! type of a value (number, boolean flag, status string) is decided once
//! here, at the fetch boundary, so every downstream consumer can match
//! exhaustively instead of re-deriving the type from the text.

use serde::{Deserialize, Serialize};

use crate::error::FetchError;

/// The normalized result of fetching one variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum TypedValue {
    /// Numeric reading (temperatures, pressures, speeds, counters)
    Numeric(f64),
    /// Boolean flag ("TRUE"/"FALSE" upstream literals)
    Boolean(bool),
    /// Anything upstream sent that is neither numeric nor boolean
    Text(String),
    /// The fetch failed; the cause travels as data, never as a panic
    Error(FetchError),
}

impl TypedValue {
    pub fn is_numeric(&self) -> bool {
        matches!(self, TypedValue::Numeric(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, TypedValue::Error(_))
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            TypedValue::Numeric(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            TypedValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_error(&self) -> Option<&FetchError> {
        match self {
            TypedValue::Error(e) => Some(e),
            _ => None,
        }
    }

    /// Whether the delta tracker should remember this value.
    ///
    /// Errors must never overwrite good history and deltas are undefined
    /// for free-form text, so only numerics and booleans are trackable.
    pub fn is_trackable(&self) -> bool {
        matches!(self, TypedValue::Numeric(_) | TypedValue::Boolean(_))
    }

    /// Render the value the way the dashboard shows it: two decimals for
    /// numerics, upstream-style TRUE/FALSE for booleans, text verbatim,
    /// and "N/A" for errors.
    pub fn display_text(&self) -> String {
        match self {
            TypedValue::Numeric(n) => format!("{n:.2}"),
            TypedValue::Boolean(true) => "TRUE".to_string(),
            TypedValue::Boolean(false) => "FALSE".to_string(),
            TypedValue::Text(s) => s.clone(),
            TypedValue::Error(_) => "N/A".to_string(),
        }
    }
}

impl std::fmt::Display for TypedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display_text())
    }
}

/// Normalize one raw response body into a `TypedValue`.
///
/// Total over all inputs: every possible body maps to exactly one
/// variant. Classification order follows the upstream contract: numeric
/// parse first, then the boolean literals, then opaque text.
pub fn classify(raw: &str) -> TypedValue {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return TypedValue::Error(FetchError::empty_response());
    }

    if let Ok(n) = trimmed.parse::<f64>() {
        if n.is_nan() {
            return TypedValue::Error(FetchError::invalid_numeric());
        }
        return TypedValue::Numeric(n);
    }

    if trimmed.eq_ignore_ascii_case("true") {
        return TypedValue::Boolean(true);
    }
    if trimmed.eq_ignore_ascii_case("false") {
        return TypedValue::Boolean(false);
    }

    TypedValue::Text(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchErrorKind;

    #[test]
    fn test_classify_numeric() {
        assert_eq!(classify("42.5"), TypedValue::Numeric(42.5));
        assert_eq!(classify("-3"), TypedValue::Numeric(-3.0));
        assert_eq!(classify("  17.25  "), TypedValue::Numeric(17.25));
    }

    #[test]
    fn test_classify_boolean_case_insensitive() {
        assert_eq!(classify("TRUE"), TypedValue::Boolean(true));
        assert_eq!(classify("true"), TypedValue::Boolean(true));
        assert_eq!(classify("False"), TypedValue::Boolean(false));
    }

    #[test]
    fn test_classify_empty_is_error() {
        let v = classify("   ");
        let err = v.as_error().expect("expected error variant");
        assert_eq!(err.kind, FetchErrorKind::EmptyResponse);
    }

    #[test]
    fn test_classify_nan_is_error() {
        let v = classify("NaN");
        let err = v.as_error().expect("expected error variant");
        assert_eq!(err.kind, FetchErrorKind::InvalidNumeric);
    }

    #[test]
    fn test_classify_opaque_text_passthrough() {
        assert_eq!(classify("abc"), TypedValue::Text("abc".to_string()));
        // Whitespace around text is trimmed like everything else
        assert_eq!(classify(" RUNNING \n"), TypedValue::Text("RUNNING".to_string()));
    }

    #[test]
    fn test_display_text_formats() {
        assert_eq!(TypedValue::Numeric(25.0).display_text(), "25.00");
        assert_eq!(TypedValue::Boolean(true).display_text(), "TRUE");
        assert_eq!(TypedValue::Boolean(false).display_text(), "FALSE");
        assert_eq!(
            TypedValue::Error(FetchError::timeout()).display_text(),
            "N/A"
        );
    }

    #[test]
    fn test_trackable_variants() {
        assert!(TypedValue::Numeric(1.0).is_trackable());
        assert!(TypedValue::Boolean(false).is_trackable());
        assert!(!TypedValue::Text("x".into()).is_trackable());
        assert!(!TypedValue::Error(FetchError::timeout()).is_trackable());
    }

    #[test]
    fn test_serde_round_trip() {
        let v = TypedValue::Numeric(98.6);
        let json = serde_json::to_string(&v).unwrap();
        assert!(json.contains("\"type\":\"Numeric\""));
        let back: TypedValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }
}
