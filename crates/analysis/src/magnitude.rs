//! Record counts per magnitude, for the magnitude bar chart.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use sismos_quake_model::earthquake::Earthquake;

/// One bar: every record sharing the same magnitude text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MagnitudeBin {
    /// Magnitude as the feed wrote it.
    pub label: String,
    /// Parsed magnitude, if the label starts with a number.
    pub value: Option<f64>,
    pub count: usize,
}

/// Bins ordered by ascending magnitude.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MagnitudeHistogram {
    pub bins: Vec<MagnitudeBin>,
}

impl MagnitudeHistogram {
    pub fn from_records(records: &[Earthquake]) -> Self {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut bins: Vec<MagnitudeBin> = Vec::new();

        for record in records {
            let label = record.magnitud.raw();
            match index.get(label) {
                Some(&i) => bins[i].count += 1,
                None => {
                    index.insert(label, bins.len());
                    bins.push(MagnitudeBin {
                        label: label.to_string(),
                        value: record.magnitude(),
                        count: 1,
                    });
                }
            }
        }

        bins.sort_by(compare_bins);
        Self { bins }
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Number of records across all bins.
    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }
}

/// Numeric magnitudes first in ascending order, unparsable labels after.
fn compare_bins(a: &MagnitudeBin, b: &MagnitudeBin) -> Ordering {
    match (a.value, b.value) {
        (Some(x), Some(y)) => x.total_cmp(&y).then_with(|| a.label.cmp(&b.label)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.label.cmp(&b.label),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sismos_quake_model::measure::Measure;

    fn quake(magnitude: &str) -> Earthquake {
        let fecha = NaiveDate::from_ymd_opt(2024, 11, 26)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        Earthquake::new(
            fecha,
            Measure::from_text("10 km"),
            Measure::from_text(magnitude),
            "10 km al N de Arica",
        )
    }

    #[test]
    fn counts_records_per_magnitude_in_ascending_order() {
        let records = vec![
            quake("3.1"),
            quake("2.5"),
            quake("3.1"),
            quake("10.0"),
            quake("2.5"),
            quake("3.1"),
        ];
        let histogram = MagnitudeHistogram::from_records(&records);

        let labels: Vec<_> = histogram.bins.iter().map(|b| b.label.as_str()).collect();
        let counts: Vec<_> = histogram.bins.iter().map(|b| b.count).collect();
        assert_eq!(labels, vec!["2.5", "3.1", "10.0"]);
        assert_eq!(counts, vec![2, 3, 1]);
        assert_eq!(histogram.total(), records.len());
    }

    #[test]
    fn unparsable_magnitudes_sort_last() {
        let records = vec![quake("s/i"), quake("4.0 Mw")];
        let histogram = MagnitudeHistogram::from_records(&records);
        assert_eq!(histogram.bins[0].label, "4.0 Mw");
        assert_eq!(histogram.bins[1].label, "s/i");
        assert_eq!(histogram.bins[1].value, None);
    }

    #[test]
    fn empty_records_give_empty_histogram() {
        let histogram = MagnitudeHistogram::from_records(&[]);
        assert!(histogram.is_empty());
        assert_eq!(histogram.total(), 0);
    }
}
