//! Magnitude against depth, one point per record.

use serde::{Deserialize, Serialize};

use sismos_quake_model::earthquake::Earthquake;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub magnitude: f64,
    pub depth_km: f64,
}

/// Points for every record with both values, plus how many were left out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScatterSeries {
    pub points: Vec<ScatterPoint>,
    pub skipped: usize,
}

pub fn scatter_points(records: &[Earthquake]) -> ScatterSeries {
    let mut series = ScatterSeries::default();
    for record in records {
        match (record.magnitude(), record.depth_km()) {
            (Some(magnitude), Some(depth_km)) => series.points.push(ScatterPoint {
                magnitude,
                depth_km,
            }),
            _ => series.skipped += 1,
        }
    }
    if series.skipped > 0 {
        tracing::debug!(
            skipped = series.skipped,
            "Records without numeric magnitude or depth left out of scatter"
        );
    }
    series
}
