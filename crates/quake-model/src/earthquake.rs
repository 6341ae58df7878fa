//! Earthquake records as published by the feed.
//!
//! The feed returns a JSON array of objects; each becomes one
//! [`Earthquake`]. Fields not listed here are ignored.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::location::LocationRecord;
use crate::measure::Measure;

/// Date format used by the feed and when writing records back out.
pub const FEED_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One earthquake record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Earthquake {
    /// Local date and time of the event.
    #[serde(
        rename = "Fecha",
        serialize_with = "serialize_fecha",
        deserialize_with = "deserialize_fecha"
    )]
    pub fecha: NaiveDateTime,

    /// Hypocenter depth, usually in km.
    #[serde(rename = "Profundidad")]
    pub profundidad: Measure,

    /// Magnitude with its scale suffix when the feed sends one.
    #[serde(rename = "Magnitud")]
    pub magnitud: Measure,

    /// Free-text location, e.g. `"20 km al NE de Santiago"`.
    #[serde(rename = "RefGeografica")]
    pub ref_geografica: String,

    /// When the feed last revised this record.
    #[serde(
        rename = "FechaUpdate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub fecha_update: Option<String>,
}

impl Earthquake {
    /// Create a record from its four main fields.
    pub fn new(
        fecha: NaiveDateTime,
        profundidad: Measure,
        magnitud: Measure,
        ref_geografica: impl Into<String>,
    ) -> Self {
        Self {
            fecha,
            profundidad,
            magnitud,
            ref_geografica: ref_geografica.into(),
            fecha_update: None,
        }
    }

    /// Depth in km, when it parses.
    pub fn depth_km(&self) -> Option<f64> {
        self.profundidad.value()
    }

    /// Magnitude value, when it parses.
    pub fn magnitude(&self) -> Option<f64> {
        self.magnitud.value()
    }
}

impl LocationRecord for Earthquake {
    fn reference(&self) -> &str {
        &self.ref_geografica
    }
}

/// Parse a date in any of the shapes the feed has been seen to use.
pub fn parse_fecha(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    NaiveDateTime::parse_from_str(text, FEED_DATE_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S"))
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|dt| dt.naive_local())
        })
}

fn deserialize_fecha<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
    let text = String::deserialize(deserializer)?;
    parse_fecha(&text)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid Fecha: {text:?}")))
}

fn serialize_fecha<S: Serializer>(fecha: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&fecha.format(FEED_DATE_FORMAT))
}

/// Parse the feed payload (a JSON array of records).
pub fn parse_records(json: &str) -> Result<Vec<Earthquake>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Serialize records back to the feed's JSON shape.
pub fn serialize_records(records: &[Earthquake]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(records)
}
