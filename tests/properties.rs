//! Property tests for dataset ordering, persistence round-trips, and
//! chart math.

use oiltrend_core::schema::FIELD_COUNT;
use oiltrend_core::{tick_stride, y_limits, Dataset, NormalRange, Record};
use oiltrend_store::CsvStore;
use proptest::prelude::*;
use tempfile::TempDir;

fn arb_values() -> impl Strategy<Value = [f64; FIELD_COUNT]> {
    // Measurement-scale finite values; quantized to 2 decimals like the
    // entry form displays them.
    proptest::array::uniform8(0..10_000i32).prop_map(|raw| raw.map(|v| f64::from(v) / 100.0))
}

fn arb_record() -> impl Strategy<Value = Record> {
    (2020u32..2030, 1u32..13, 1u32..29, arb_values())
        .prop_map(|(y, m, d, values)| Record::new(format!("{y:04}-{m:02}-{d:02}"), values))
}

proptest! {
    #[test]
    fn append_ordering(records in proptest::collection::vec(arb_record(), 0..30)) {
        let mut ds = Dataset::new();
        for r in &records {
            ds = ds.append(r.clone());
        }
        prop_assert_eq!(ds.len(), records.len());
        prop_assert_eq!(ds.records(), records.as_slice());
    }

    #[test]
    fn persist_load_round_trip(records in proptest::collection::vec(arb_record(), 0..20)) {
        let dir = TempDir::new().unwrap();
        let store = CsvStore::new(dir.path().join("values.csv"));
        let ds = Dataset::from_records(records);

        store.persist(&ds).unwrap();
        let loaded = store.load().unwrap();
        prop_assert_eq!(loaded, ds);
    }

    #[test]
    fn subset_size_is_min_n_10(n in 0usize..40) {
        let mut ds = Dataset::new();
        for _ in 0..n {
            ds = ds.append(Record::new("2024-01-01", [0.0; FIELD_COUNT]));
        }
        prop_assert_eq!(ds.recent(10).len(), n.min(10));
    }

    #[test]
    fn y_limits_formula_is_exact(
        values in proptest::collection::vec(0.01f64..100.0, 1..20),
        low in 0.01f64..50.0,
        span in 0.01f64..50.0,
    ) {
        let range = NormalRange { low, high: low + span };
        let (lower, upper) = y_limits(&values, range);

        let data_min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let data_max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assert_eq!(lower, 0.8 * data_min.min(range.low));
        prop_assert_eq!(upper, 1.2 * data_max.max(range.high));
    }

    #[test]
    fn tick_stride_formula(len in 0usize..200) {
        prop_assert_eq!(tick_stride(len), (len / 6).max(1));
    }
}
