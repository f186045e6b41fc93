use domain::records::{export_csv, DateRange, DrugLine, Quoting, SigningRecord};
use domain::IsoDate;
use proptest::prelude::*;

fn iso_date_strategy() -> impl Strategy<Value = String> {
    (2020u32..2027, 1u32..13, 1u32..29)
        .prop_map(|(y, m, d)| format!("{y:04}-{m:02}-{d:02}"))
}

fn record_strategy() -> impl Strategy<Value = SigningRecord> {
    let drug = ("[A-Za-z]{1,12}", "[0-9]{1,3}", any::<bool>())
        .prop_map(|(name, quantity, confirmed)| DrugLine::new(name, quantity, confirmed));

    (
        "[A-Z][0-9]{3}",
        iso_date_strategy(),
        proptest::collection::vec(drug, 0..4),
    )
        .prop_map(|(personnel, date, drugs)| SigningRecord::new(personnel, date, drugs))
}

fn range(start: &str, end: &str) -> DateRange {
    DateRange::new(
        IsoDate::parse("start", start).expect("start"),
        IsoDate::parse("end", end).expect("end"),
    )
}

proptest! {
    #[test]
    fn filter_keeps_exactly_records_within_bounds(
        records in proptest::collection::vec(record_strategy(), 0..24),
        a in iso_date_strategy(),
        b in iso_date_strategy(),
    ) {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        let r = range(&start, &end);

        let expected: Vec<_> = records
            .iter()
            .filter(|rec| start.as_str() <= rec.date.as_str() && rec.date.as_str() <= end.as_str())
            .cloned()
            .collect();

        prop_assert_eq!(r.filter(records), expected);
    }

    #[test]
    fn export_is_deterministic(records in proptest::collection::vec(record_strategy(), 0..12)) {
        let first = export_csv(&records, Quoting::Raw).expect("first export");
        let second = export_csv(&records, Quoting::Raw).expect("second export");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn export_has_one_line_per_drug(records in proptest::collection::vec(record_strategy(), 0..12)) {
        let csv = String::from_utf8(export_csv(&records, Quoting::Raw).expect("export")).expect("utf8");
        let drug_count: usize = records.iter().map(|r| r.drugs.len()).sum();

        prop_assert_eq!(csv.chars().next(), Some('\u{feff}'));
        prop_assert_eq!(csv.lines().count(), drug_count + 1);
    }
}
