use chrono::{DateTime, Duration, TimeZone, Utc};
use mortality_chart::core::{
    Color, NearestPointResolver, Record, SeriesCatalog, SeriesDescriptor, TimeSeriesStore,
};

fn month(year: i32, month: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0)
        .single()
        .expect("valid date")
}

fn monthly_store(months: &[u32]) -> TimeSeriesStore {
    let catalog = SeriesCatalog::new(
        vec![SeriesDescriptor::new("total", Color::rgb8(255, 0, 0), "Total")],
        "total",
    )
    .expect("valid catalog");
    let records = months
        .iter()
        .map(|&m| Record::new(month(2020, m), vec![f64::from(m) * 100.0]))
        .collect();
    TimeSeriesStore::new(catalog, records).expect("valid store")
}

#[test]
fn query_before_first_record_resolves_to_first_index() {
    let store = monthly_store(&[1, 2, 3, 4]);
    let resolver = NearestPointResolver::new(&store);

    assert_eq!(resolver.resolve(month(2019, 6)), Some(0));
}

#[test]
fn query_after_last_record_resolves_to_last_index() {
    let store = monthly_store(&[1, 2, 3, 4]);
    let resolver = NearestPointResolver::new(&store);

    assert_eq!(resolver.resolve(month(2021, 1)), Some(3));
}

#[test]
fn exact_timestamp_match_resolves_to_that_record() {
    let store = monthly_store(&[1, 2, 3, 4]);
    let resolver = NearestPointResolver::new(&store);

    for (index, m) in [1, 2, 3, 4].into_iter().enumerate() {
        assert_eq!(resolver.resolve(month(2020, m)), Some(index));
    }
}

#[test]
fn query_between_records_resolves_to_the_later_one() {
    let store = monthly_store(&[1, 2, 3, 4]);
    let resolver = NearestPointResolver::new(&store);

    // Mid-January sits after record 0, so the insertion point is record 1
    // even though January 1st is closer in absolute distance.
    let just_after_first = month(2020, 1) + Duration::days(1);
    assert_eq!(resolver.resolve(just_after_first), Some(1));

    let just_before_last = month(2020, 4) - Duration::seconds(1);
    assert_eq!(resolver.resolve(just_before_last), Some(3));
}

#[test]
fn single_record_store_always_resolves_to_zero() {
    let store = monthly_store(&[6]);
    let resolver = NearestPointResolver::new(&store);

    assert_eq!(resolver.resolve(month(1999, 1)), Some(0));
    assert_eq!(resolver.resolve(month(2020, 6)), Some(0));
    assert_eq!(resolver.resolve(month(2077, 12)), Some(0));
}

#[test]
fn empty_record_slice_resolves_to_none() {
    let resolver = NearestPointResolver::from_records(&[]);

    assert_eq!(resolver.resolve(month(2020, 1)), None);
}
