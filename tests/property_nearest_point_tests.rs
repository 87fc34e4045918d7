use chrono::{DateTime, Utc};
use mortality_chart::core::{NearestPointResolver, Record};
use proptest::prelude::*;

fn records_from_offsets(offsets: &[i64]) -> Vec<Record> {
    let mut seconds = 0_i64;
    offsets
        .iter()
        .map(|offset| {
            seconds += offset;
            let timestamp = DateTime::<Utc>::from_timestamp(seconds, 0).expect("timestamp in range");
            Record::new(timestamp, vec![1.0])
        })
        .collect()
}

proptest! {
    #[test]
    fn resolved_index_is_left_most_insertion_point_clamped(
        offsets in prop::collection::vec(1_i64..5_000_000, 1..64),
        query_seconds in -1_000_000_i64..400_000_000
    ) {
        let records = records_from_offsets(&offsets);
        let query = DateTime::<Utc>::from_timestamp(query_seconds, 0).expect("timestamp in range");
        let index = NearestPointResolver::from_records(&records)
            .resolve(query)
            .expect("non-empty records");

        prop_assert!(index < records.len());
        let last = records.len() - 1;
        if index < last {
            // Never left of the query, and the previous record is strictly earlier.
            prop_assert!(records[index].timestamp >= query);
        }
        if index > 0 {
            prop_assert!(records[index - 1].timestamp < query);
        }
    }

    #[test]
    fn every_stored_timestamp_resolves_to_itself(
        offsets in prop::collection::vec(1_i64..5_000_000, 1..64)
    ) {
        let records = records_from_offsets(&offsets);
        let resolver = NearestPointResolver::from_records(&records);

        for (index, record) in records.iter().enumerate() {
            prop_assert_eq!(resolver.resolve(record.timestamp), Some(index));
        }
    }
}
