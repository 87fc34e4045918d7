use approx::assert_relative_eq;
use chrono::{DateTime, TimeZone, Utc};
use mortality_chart::api::ScaleCoordinator;
use mortality_chart::core::{
    Color, LOG_DOMAIN_FLOOR, PlotArea, Record, ScaleMode, SeriesCatalog, SeriesDescriptor,
    TimeSeriesStore, ValueScale,
};

fn month(m: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2020, m, 1, 0, 0, 0)
        .single()
        .expect("valid date")
}

fn store() -> TimeSeriesStore {
    let catalog = SeriesCatalog::new(
        vec![
            SeriesDescriptor::new("total", Color::rgb8(255, 0, 0), "Total"),
            SeriesDescriptor::new("minor", Color::rgb8(0, 0, 255), "Minor"),
        ],
        "total",
    )
    .expect("valid catalog");
    TimeSeriesStore::new(
        catalog,
        vec![
            Record::new(month(1), vec![0.0, 3.0]),
            Record::new(month(2), vec![512.0, 0.5]),
            Record::new(month(3), vec![1_024.0, 64.0]),
        ],
    )
    .expect("valid store")
}

#[test]
fn linear_value_domain_spans_zero_to_max_across_all_series() {
    let scales = ScaleCoordinator::new(&store(), PlotArea::new(600.0, 400.0), ScaleMode::Linear)
        .expect("scales");

    let value_scale = scales.value_scale();
    assert_eq!(value_scale.domain(), (0.0, 1_024.0));
    assert_eq!(value_scale.range(), (400.0, 0.0));
    assert_relative_eq!(value_scale.value_to_pixel(0.0), 400.0);
    assert_relative_eq!(value_scale.value_to_pixel(512.0), 200.0);
    assert_relative_eq!(value_scale.value_to_pixel(1_024.0), 0.0);
}

#[test]
fn log_domain_is_floored_at_one_and_sub_floor_values_clip() {
    let scales = ScaleCoordinator::new(&store(), PlotArea::new(600.0, 400.0), ScaleMode::Log2)
        .expect("scales");

    let value_scale = scales.value_scale();
    assert_eq!(value_scale.domain(), (LOG_DOMAIN_FLOOR, 1_024.0));
    assert_relative_eq!(value_scale.value_to_pixel(1.0), 400.0);
    assert_relative_eq!(value_scale.value_to_pixel(32.0), 200.0);
    assert_relative_eq!(value_scale.value_to_pixel(0.0), 400.0);
    assert_relative_eq!(value_scale.value_to_pixel(0.5), 400.0);
    assert_relative_eq!(value_scale.pixel_to_value(200.0), 32.0, epsilon = 1e-9);
}

#[test]
fn time_domain_spans_record_extent() {
    let scales = ScaleCoordinator::new(&store(), PlotArea::new(600.0, 400.0), ScaleMode::Linear)
        .expect("scales");

    let time_scale = scales.time_scale();
    assert_eq!(time_scale.domain(), (month(1), month(3)));
    assert_relative_eq!(time_scale.time_to_pixel(month(1)), 0.0);
    assert_relative_eq!(time_scale.time_to_pixel(month(3)), 600.0);
    assert_eq!(scales.time_at(0.0), month(1));
    assert_eq!(scales.time_at(600.0), month(3));
}

#[test]
fn plot_area_change_keeps_domains_and_rescales_ranges() {
    let store = store();
    let mut scales = ScaleCoordinator::new(&store, PlotArea::new(600.0, 400.0), ScaleMode::Log2)
        .expect("scales");
    let time_domain = scales.time_scale().domain_seconds();
    let value_domain = scales.value_scale().domain();

    scales
        .set_plot_area(PlotArea::new(300.0, 100.0))
        .expect("resize");

    assert_eq!(scales.time_scale().domain_seconds(), time_domain);
    assert_eq!(scales.value_scale().domain(), value_domain);
    assert_eq!(scales.time_scale().range(), (0.0, 300.0));
    assert_eq!(scales.value_scale().range(), (100.0, 0.0));
    assert_eq!(scales.mode(), ScaleMode::Log2);
}

#[test]
fn mode_change_rebuilds_value_mapping_only() {
    let store = store();
    let mut scales = ScaleCoordinator::new(&store, PlotArea::new(600.0, 400.0), ScaleMode::Linear)
        .expect("scales");
    let time_scale = scales.time_scale();

    scales.set_mode(ScaleMode::Log2).expect("log mode");
    assert_eq!(scales.time_scale(), time_scale);
    assert_eq!(scales.value_scale().domain(), (1.0, 1_024.0));

    scales.set_mode(ScaleMode::Linear).expect("linear mode");
    assert_eq!(scales.value_scale().domain(), (0.0, 1_024.0));
}

#[test]
fn single_record_store_maps_time_to_left_edge() {
    let catalog = SeriesCatalog::new(
        vec![SeriesDescriptor::new("total", Color::rgb8(255, 0, 0), "Total")],
        "total",
    )
    .expect("valid catalog");
    let store = TimeSeriesStore::new(catalog, vec![Record::new(month(5), vec![10.0])])
        .expect("valid store");

    let scales = ScaleCoordinator::new(&store, PlotArea::new(600.0, 400.0), ScaleMode::Linear)
        .expect("scales");
    let point = scales.project(month(5), 10.0);

    assert_relative_eq!(point.x, 0.0);
    assert_relative_eq!(point.y, 0.0);
}

#[test]
fn all_values_below_log_floor_produce_degenerate_domain() {
    let scale = ValueScale::new(ScaleMode::Log2, 0.25, 300.0).expect("scale");

    assert_eq!(scale.domain(), (1.0, 1.0));
    assert_relative_eq!(scale.value_to_pixel(0.25), 300.0);
}
