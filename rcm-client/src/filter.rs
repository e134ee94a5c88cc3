//! Filter box and visible list derivation
//!
//! The filter text is used as a case-insensitive regular expression,
//! unescaped. Text that does not compile matches nothing, so a half-typed
//! pattern like `(` empties the list instead of failing.

use rcm_common::Record;
use regex::{Regex, RegexBuilder};
use tracing::debug;

/// A compiled filter
#[derive(Debug, Clone)]
pub enum RecordFilter {
    /// Empty text: everything is visible
    All,
    Pattern(Regex),
    /// Text that is not a valid pattern: nothing is visible
    Malformed,
}

impl RecordFilter {
    pub fn new(text: &str) -> Self {
        if text.is_empty() {
            return RecordFilter::All;
        }

        match RegexBuilder::new(text).case_insensitive(true).build() {
            Ok(regex) => RecordFilter::Pattern(regex),
            Err(e) => {
                debug!(filter = %text, "Filter does not compile: {}", e);
                RecordFilter::Malformed
            }
        }
    }

    /// A record matches if any of its four fields does
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            RecordFilter::All => true,
            RecordFilter::Pattern(regex) => record
                .values()
                .into_iter()
                .any(|value| !value.is_empty() && regex.is_match(value)),
            RecordFilter::Malformed => false,
        }
    }

    /// Matching records, in store order
    pub fn apply(&self, records: &[Record]) -> Vec<Record> {
        records
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect()
    }
}

/// Records visible under `filter_text`
pub fn visible(records: &[Record], filter_text: &str) -> Vec<Record> {
    RecordFilter::new(filter_text).apply(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Record> {
        vec![
            Record::new("OK Computer", "Radiohead", "1997", "Rock"),
            Record::new("Kind of Blue", "Miles Davis", "1959", "Jazz"),
            Record::new("Blue Train", "John Coltrane", "1957", "Jazz"),
        ]
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let records = sample();
        assert_eq!(visible(&records, ""), records);
        assert!(visible(&[], "").is_empty());
    }

    #[test]
    fn test_matches_across_fields() {
        let record = Record::new("OK Computer", "Radiohead", "1997", "Rock");
        let records = vec![record.clone()];

        assert_eq!(visible(&records, "radio"), vec![record.clone()]);
        assert_eq!(visible(&records, "1997"), vec![record]);
        assert!(visible(&records, "jazz").is_empty());
    }

    #[test]
    fn test_case_insensitive() {
        let records = sample();
        let albums: Vec<String> = visible(&records, "BLUE").into_iter().map(|r| r.album).collect();
        assert_eq!(albums, vec!["Kind of Blue", "Blue Train"]);
    }

    #[test]
    fn test_pattern_syntax_is_honoured() {
        let records = sample();
        let albums: Vec<String> = visible(&records, "^19[5]").into_iter().map(|r| r.album).collect();
        assert_eq!(albums, vec!["Kind of Blue", "Blue Train"]);
    }

    #[test]
    fn test_malformed_pattern_matches_nothing() {
        let records = sample();
        assert!(visible(&records, "(").is_empty());
        assert!(visible(&records, "[a-").is_empty());
        assert!(matches!(RecordFilter::new("("), RecordFilter::Malformed));
    }

    #[test]
    fn test_filter_preserves_order() {
        let records = sample();
        let filtered = visible(&records, "j");
        let albums: Vec<&str> = filtered.iter().map(|r| r.album.as_str()).collect();
        assert_eq!(albums, vec!["Kind of Blue", "Blue Train"]);
    }
}
