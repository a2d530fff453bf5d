//! Attribute value types.
//!
//! This module defines the runtime representation of item attribute values as
//! seen by search, facets and validation.

use std::fmt;

/// Runtime representation of an attribute value.
///
/// Items store a handful of typed fields; the filtering core only needs to know
/// whether a value is text or a number. Dates are stored as text and surface as
/// `Text`.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// Free text (title, artist, acquisition date, ...)
    Text(String),

    /// Numeric value (quantity, or a year entered as a number)
    Number(f64),
}

impl AttrValue {
    /// Get the text if this is a `Text` value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            AttrValue::Number(_) => None,
        }
    }

    /// Get the number if this is a `Number` value.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttrValue::Number(n) => Some(*n),
            AttrValue::Text(_) => None,
        }
    }

    /// True when the value carries something other than whitespace.
    ///
    /// Numbers always count as present; their sign is a validation concern.
    pub fn is_present(&self) -> bool {
        match self {
            AttrValue::Text(s) => !s.trim().is_empty(),
            AttrValue::Number(n) => !n.is_nan(),
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Text(s) => write!(f, "{}", s),
            AttrValue::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Text(s.to_string())
    }
}

impl From<f64> for AttrValue {
    fn from(n: f64) -> Self {
        AttrValue::Number(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_numbers_display_without_fraction() {
        assert_eq!(AttrValue::Number(1920.0).to_string(), "1920");
        assert_eq!(AttrValue::Number(2.5).to_string(), "2.5");
    }

    #[test]
    fn whitespace_text_is_not_present() {
        assert!(!AttrValue::from("   ").is_present());
        assert!(AttrValue::from(" Vase ").is_present());
        assert!(AttrValue::Number(0.0).is_present());
    }

    #[test]
    fn typed_accessors() {
        assert_eq!(AttrValue::from("x").as_text(), Some("x"));
        assert_eq!(AttrValue::from("x").as_number(), None);
        assert_eq!(AttrValue::Number(3.0).as_number(), Some(3.0));
    }
}
