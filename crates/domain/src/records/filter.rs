use serde::Serialize;

use crate::dates::IsoDate;

use super::SigningRecord;

/// Inclusive `[start, end]` bounds over record dates.
///
/// Comparison is lexicographic on the stored date string. Bounds are
/// [`IsoDate`]s so they always sort like calendar dates; a record whose own
/// date is in some other shape is still compared as text.
#[derive(Clone, Debug, Serialize, Eq, PartialEq)]
pub struct DateRange {
    pub start: IsoDate,
    pub end: IsoDate,
}

impl DateRange {
    pub fn new(start: IsoDate, end: IsoDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: &str) -> bool {
        self.start.as_str() <= date && date <= self.end.as_str()
    }

    /// Keeps matching records in their stored order.
    pub fn filter(&self, records: Vec<SigningRecord>) -> Vec<SigningRecord> {
        records
            .into_iter()
            .filter(|record| self.contains(&record.date))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: &str, end: &str) -> DateRange {
        DateRange::new(
            IsoDate::parse("start", start).unwrap(),
            IsoDate::parse("end", end).unwrap(),
        )
    }

    #[test]
    fn bounds_are_inclusive() {
        let r = range("2024-01-10", "2024-01-12");
        assert!(r.contains("2024-01-10"));
        assert!(r.contains("2024-01-11"));
        assert!(r.contains("2024-01-12"));
        assert!(!r.contains("2024-01-09"));
        assert!(!r.contains("2024-01-13"));
    }

    #[test]
    fn inverted_range_matches_nothing() {
        let r = range("2024-02-01", "2024-01-01");
        let records = vec![SigningRecord::new("A1", "2024-01-15", vec![])];
        assert!(r.filter(records).is_empty());
    }

    #[test]
    fn filter_preserves_order_and_duplicates() {
        let r = range("2024-01-01", "2024-01-31");
        let records = vec![
            SigningRecord::new("B2", "2024-01-20", vec![]),
            SigningRecord::new("A1", "2023-12-31", vec![]),
            SigningRecord::new("A1", "2024-01-05", vec![]),
            SigningRecord::new("A1", "2024-01-05", vec![]),
        ];

        let kept = r.filter(records);
        let dates: Vec<_> = kept.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, ["2024-01-20", "2024-01-05", "2024-01-05"]);
    }
}
