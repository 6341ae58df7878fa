//! Numeric feed values with an optional unit suffix.
//!
//! The feed is loose about numbers: depth may be `38`, `"38"` or `"38 km"`,
//! magnitude may be `2.7` or `"2.7 Ml"`. A [`Measure`] keeps the text as
//! received and the leading number when there is one.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A number as the feed reported it.
#[derive(Debug, Clone, PartialEq)]
pub struct Measure {
    raw: String,
    value: Option<f64>,
}

impl Measure {
    /// Build from feed text, parsing the leading number if any.
    pub fn from_text(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let value = leading_number(&raw);
        Self { raw, value }
    }

    /// Build from a plain number.
    pub fn from_value(value: f64) -> Self {
        Self {
            raw: value.to_string(),
            value: Some(value),
        }
    }

    /// Text as received (used as a table cell and as a category label).
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Leading numeric value, if the text starts with one.
    pub fn value(&self) -> Option<f64> {
        self.value
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.raw)
    }
}

impl Serialize for Measure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for Measure {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Number(f64),
            Text(String),
        }

        Ok(match Wire::deserialize(deserializer)? {
            Wire::Number(n) => Measure::from_value(n),
            Wire::Text(s) => Measure::from_text(s),
        })
    }
}

/// Parse `[+-]digits[.digits]` at the start of `text` (after leading spaces).
fn leading_number(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }
    if !bytes[digits_start..end].iter().any(u8::is_ascii_digit) {
        return None;
    }
    text[..end].parse().ok()
}
