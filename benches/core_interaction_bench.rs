use chrono::{DateTime, Utc};
use criterion::{Criterion, criterion_group, criterion_main};
use mortality_chart::api::{ChartEngine, ChartEngineConfig, DisplayMode, TooltipContentBuilder};
use mortality_chart::core::{
    NearestPointResolver, Record, SeriesCatalog, TimeSeriesStore, Viewport,
};
use mortality_chart::render::NullRenderer;
use std::hint::black_box;

const DAY_SECONDS: i64 = 86_400;

fn synthetic_store(record_count: usize) -> TimeSeriesStore {
    let catalog = SeriesCatalog::mortality().expect("mortality catalog");
    let series_count = catalog.len();
    let records = (0..record_count)
        .map(|i| {
            let timestamp = DateTime::<Utc>::from_timestamp(i as i64 * DAY_SECONDS, 0)
                .expect("timestamp in range");
            let values = (0..series_count)
                .map(|s| ((i * 31 + s * 17) % 997) as f64 * 10.0 + 1.0)
                .collect();
            Record::new(timestamp, values)
        })
        .collect();
    TimeSeriesStore::new(catalog, records).expect("valid store")
}

fn bench_nearest_point_resolve_10k(c: &mut Criterion) {
    let store = synthetic_store(10_000);
    let resolver = NearestPointResolver::new(&store);
    let query = DateTime::<Utc>::from_timestamp(4_321 * DAY_SECONDS + 3_600, 0)
        .expect("timestamp in range");

    c.bench_function("nearest_point_resolve_10k", |b| {
        b.iter(|| {
            let _ = resolver.resolve(black_box(query));
        })
    });
}

fn bench_tooltip_build_top_k(c: &mut Criterion) {
    let store = synthetic_store(64);
    let record = store.get(42).expect("record exists");
    let builder = TooltipContentBuilder::new(store.catalog());

    c.bench_function("tooltip_build_top_k", |b| {
        b.iter(|| {
            let _ = builder.build(black_box(record), DisplayMode::TopK, None);
        })
    });
}

fn bench_engine_pointer_move_2k(c: &mut Criterion) {
    let store = synthetic_store(2_000);
    let config = ChartEngineConfig::new(Viewport::new(1600, 900));
    let mut engine =
        ChartEngine::new(NullRenderer::default(), config, store).expect("engine init");
    let width = engine.scales().plot_area().width;

    c.bench_function("engine_pointer_move_2k", |b| {
        let mut step = 0_usize;
        b.iter(|| {
            step = (step + 37) % 1_000;
            let x = width * step as f64 / 1_000.0;
            engine
                .pointer_move(black_box(x), black_box(120.0))
                .expect("pointer move");
        })
    });
}

fn bench_engine_resize_2k(c: &mut Criterion) {
    let store = synthetic_store(2_000);
    let config = ChartEngineConfig::new(Viewport::new(1600, 900));
    let mut engine =
        ChartEngine::new(NullRenderer::default(), config, store).expect("engine init");

    c.bench_function("engine_resize_2k", |b| {
        let mut wide = false;
        b.iter(|| {
            wide = !wide;
            let width = if wide { 1_920 } else { 1_280 };
            engine.resize(black_box(width), 900).expect("resize");
        })
    });
}

criterion_group!(
    benches,
    bench_nearest_point_resolve_10k,
    bench_tooltip_build_top_k,
    bench_engine_pointer_move_2k,
    bench_engine_resize_2k
);
criterion_main!(benches);
