//! Compass-direction classification of location references.
//!
//! References look like `"20 km al NE de Santiago"`. The classifier looks
//! for the Spanish compass abbreviations as plain substrings, in a fixed
//! priority order, and takes the first hit. Matching is case-sensitive and
//! the text is not trimmed or normalized.
//!
//! Because `N`, `E`, `S` and `O` are tested before the two-letter codes that
//! contain them, a reference written with `NE`, `SE`, `SO` or `NO` resolves
//! to `N`, `E`, `S` or `N` respectively. Any uppercase `N` in a place name
//! ("Nevados de Chillán") also counts as a match.

use std::fmt;

use serde::{Deserialize, Serialize};

use sismos_quake_model::location::LocationRecord;

/// A compass direction in Spanish abbreviation, or `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DirectionCode {
    N,
    NE,
    E,
    SE,
    S,
    SO,
    O,
    NO,
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl DirectionCode {
    /// The eight codes in the order they are tested.
    pub const PRIORITY: [DirectionCode; 8] = [
        DirectionCode::N,
        DirectionCode::NE,
        DirectionCode::E,
        DirectionCode::SE,
        DirectionCode::S,
        DirectionCode::SO,
        DirectionCode::O,
        DirectionCode::NO,
    ];

    /// Every code, `Unknown` last.
    pub const ALL: [DirectionCode; 9] = [
        DirectionCode::N,
        DirectionCode::NE,
        DirectionCode::E,
        DirectionCode::SE,
        DirectionCode::S,
        DirectionCode::SO,
        DirectionCode::O,
        DirectionCode::NO,
        DirectionCode::Unknown,
    ];

    /// The abbreviation searched for in reference text (`"UNKNOWN"` for the sentinel).
    pub fn as_str(self) -> &'static str {
        match self {
            DirectionCode::N => "N",
            DirectionCode::NE => "NE",
            DirectionCode::E => "E",
            DirectionCode::SE => "SE",
            DirectionCode::S => "S",
            DirectionCode::SO => "SO",
            DirectionCode::O => "O",
            DirectionCode::NO => "NO",
            DirectionCode::Unknown => "UNKNOWN",
        }
    }

    /// Position in [`DirectionCode::ALL`].
    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for DirectionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Classify one reference text.
pub fn classify(reference: &str) -> DirectionCode {
    DirectionCode::PRIORITY
        .into_iter()
        .find(|code| reference.contains(code.as_str()))
        .unwrap_or(DirectionCode::Unknown)
}

/// Classify every record, preserving input order.
pub fn classify_records<R: LocationRecord>(records: &[R]) -> Vec<DirectionCode> {
    records.iter().map(|r| classify(r.reference())).collect()
}

/// Classify and summarize a batch of records.
pub fn aggregate<R: LocationRecord>(records: &[R]) -> DirectionSummary {
    DirectionSummary::from_codes(classify_records(records))
}

/// Count and share of one direction code.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DirectionEntry {
    pub code: DirectionCode,
    pub count: usize,
    /// Share of the total in percent, rounded to two decimals.
    pub percentage: f64,
}

/// Per-code counts and percentages over a batch of records.
///
/// Only codes that occurred are present. Entries are sorted by descending
/// count, ties in classifier priority order with `Unknown` last.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectionSummary {
    pub total: usize,
    pub entries: Vec<DirectionEntry>,
}

impl DirectionSummary {
    /// Build a summary from already classified codes.
    pub fn from_codes(codes: impl IntoIterator<Item = DirectionCode>) -> Self {
        let mut counts = [0usize; DirectionCode::ALL.len()];
        for code in codes {
            counts[code.index()] += 1;
        }

        let total: usize = counts.iter().sum();
        if total == 0 {
            return Self::default();
        }

        let mut entries: Vec<DirectionEntry> = DirectionCode::ALL
            .into_iter()
            .filter(|code| counts[code.index()] > 0)
            .map(|code| {
                let count = counts[code.index()];
                DirectionEntry {
                    code,
                    count,
                    percentage: round2(100.0 * count as f64 / total as f64),
                }
            })
            .collect();

        // Stable: equal counts keep priority order.
        entries.sort_by(|a, b| b.count.cmp(&a.count));

        tracing::debug!(total, codes = entries.len(), "Summarized directions");

        Self { total, entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, code: DirectionCode) -> Option<&DirectionEntry> {
        self.entries.iter().find(|e| e.code == code)
    }

    pub fn count(&self, code: DirectionCode) -> usize {
        self.get(code).map(|e| e.count).unwrap_or(0)
    }

    pub fn percentage(&self, code: DirectionCode) -> f64 {
        self.get(code).map(|e| e.percentage).unwrap_or(0.0)
    }
}

/// Two decimals, exact halves to the even digit (3.125 -> 3.12).
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn ne_reference_resolves_to_n() {
        assert_eq!(classify("10 km al NE de Santiago"), DirectionCode::N);
    }

    #[test]
    fn two_letter_codes_resolve_to_their_first_tested_letter() {
        assert_eq!(classify("20 km al SE de Arica"), DirectionCode::E);
        assert_eq!(classify("8 km al SO de Pica"), DirectionCode::S);
        assert_eq!(classify("22 km al NO de Toconao"), DirectionCode::N);
    }

    #[test]
    fn single_letter_codes() {
        assert_eq!(classify("5 km al O de Ovalle"), DirectionCode::O);
        assert_eq!(classify("32 km al S de Calama"), DirectionCode::S);
        assert_eq!(classify("41 km al E de la costa"), DirectionCode::E);
    }

    #[test]
    fn matching_is_case_sensitive_and_unanchored() {
        assert_eq!(classify("12 km al norte de arica"), DirectionCode::Unknown);
        assert_eq!(classify("cerca de Nevados"), DirectionCode::N);
    }

    #[test]
    fn empty_text_is_unknown() {
        assert_eq!(classify(""), DirectionCode::Unknown);
    }

    #[test]
    fn aggregate_empty_is_empty() {
        let summary = aggregate::<&str>(&[]);
        assert!(summary.is_empty());
        assert_eq!(summary.total, 0);
    }

    #[test]
    fn aggregate_reference_scenario() {
        let refs = [
            "20 km al NE de Santiago",
            "15 km al S de Valparaíso",
            "30 km al NE de Temuco",
        ];
        assert_eq!(
            classify_records(&refs),
            vec![DirectionCode::N, DirectionCode::S, DirectionCode::N]
        );

        let summary = aggregate(&refs);
        assert_eq!(summary.total, 3);
        assert_eq!(
            summary.entries,
            vec![
                DirectionEntry {
                    code: DirectionCode::N,
                    count: 2,
                    percentage: 66.67,
                },
                DirectionEntry {
                    code: DirectionCode::S,
                    count: 1,
                    percentage: 33.33,
                },
            ]
        );
    }

    #[test]
    fn exact_half_percentages_round_to_even() {
        let mut refs = vec!["1 km al N de x".to_string()];
        refs.extend((0..31).map(|i| format!("{i} km al S de y")));

        let summary = aggregate(&refs);
        assert_eq!(summary.percentage(DirectionCode::N), 3.12);
        assert_eq!(summary.percentage(DirectionCode::S), 96.88);

        assert_eq!(round2(100.0 / 160.0), 0.62);
    }

    #[test]
    fn ties_follow_priority_order_with_unknown_last() {
        let refs = ["sin referencia", "3 km al O de x", "4 km al E de y", "9 km al N de z"];
        let codes: Vec<_> = aggregate(&refs).entries.iter().map(|e| e.code).collect();
        assert_eq!(
            codes,
            vec![
                DirectionCode::N,
                DirectionCode::E,
                DirectionCode::O,
                DirectionCode::Unknown
            ]
        );
    }

    #[test]
    fn code_serializes_as_abbreviation() {
        assert_eq!(serde_json::to_string(&DirectionCode::SO).unwrap(), "\"SO\"");
        assert_eq!(
            serde_json::to_string(&DirectionCode::Unknown).unwrap(),
            "\"UNKNOWN\""
        );
    }

    fn single_code() -> impl Strategy<Value = DirectionCode> {
        prop_oneof![
            Just(DirectionCode::N),
            Just(DirectionCode::E),
            Just(DirectionCode::S),
            Just(DirectionCode::O),
        ]
    }

    proptest! {
        #[test]
        fn text_without_codes_is_unknown(text in "[a-z0-9 áéíóúñ,.]{0,40}") {
            prop_assert_eq!(classify(&text), DirectionCode::Unknown);
        }

        #[test]
        fn text_with_one_code_returns_it(
            km in 1u32..500,
            code in single_code(),
            place in "[a-z]{1,12}",
        ) {
            let text = format!("{km} km al {code} de {place}");
            prop_assert_eq!(classify(&text), code);
        }

        #[test]
        fn counts_sum_to_input_length(refs in prop::collection::vec("[A-Za-z0-9 ]{0,24}", 1..60)) {
            let summary = aggregate(&refs);
            let total: usize = summary.entries.iter().map(|e| e.count).sum();
            prop_assert_eq!(total, refs.len());
            prop_assert_eq!(summary.total, refs.len());
        }

        #[test]
        fn percentages_sum_to_hundred(refs in prop::collection::vec("[A-Za-z0-9 ]{0,24}", 1..60)) {
            let summary = aggregate(&refs);
            let sum: f64 = summary.entries.iter().map(|e| e.percentage).sum();
            prop_assert!((sum - 100.0).abs() <= 0.1, "sum was {}", sum);
        }

        #[test]
        fn summary_codes_match_classified_codes(refs in prop::collection::vec("[A-Za-z ]{0,16}", 0..40)) {
            let mut expected: Vec<_> = classify_records(&refs);
            expected.sort();
            expected.dedup();
            let mut actual: Vec<_> = aggregate(&refs).entries.iter().map(|e| e.code).collect();
            actual.sort();
            prop_assert_eq!(actual, expected);
        }

        #[test]
        fn entries_are_sorted_by_descending_count(refs in prop::collection::vec("[A-Za-z ]{0,16}", 0..40)) {
            let summary = aggregate(&refs);
            for pair in summary.entries.windows(2) {
                prop_assert!(pair[0].count > pair[1].count
                    || (pair[0].count == pair[1].count && pair[0].code < pair[1].code));
            }
        }
    }
}
