use astro_wheel::config::WheelConfig;
use astro_wheel::ephemeris::{BodyPosition, ChartPositions};
use astro_wheel::layout::adjust_positions;
use astro_wheel::wheel::{WheelKind, WheelRenderer, WheelRequest};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn positions(label: &str, offset: f64) -> ChartPositions {
    let bodies = [
        ("sun", 100.0, 1.0),
        ("moon", 220.0, 13.2),
        ("mercury", 110.0, -0.4),
        ("venus", 130.0, 1.2),
        ("mars", 10.0, 0.6),
        ("jupiter", 250.0, 0.1),
        ("saturn", 300.0, 0.05),
        ("uranus", 40.0, 0.02),
        ("neptune", 350.0, 0.01),
        ("pluto", 290.0, 0.01),
        ("north_node", 80.0, -0.05),
    ]
    .into_iter()
    .map(|(name, lon, speed)| BodyPosition::new(name, lon + offset, speed))
    .collect();
    let cusps = (0..12).map(|i| 15.0 + offset + 30.0 * i as f64).collect();
    ChartPositions::from_cusps(label, bodies, cusps)
}

fn bench_natal_render(c: &mut Criterion) {
    let renderer = WheelRenderer::new(WheelConfig::default()).expect("default config is valid");
    let request = WheelRequest::natal(positions("natal", 0.0));

    c.bench_function("render_natal", |b| {
        b.iter(|| renderer.render(black_box(&request)))
    });
}

fn bench_synastry_render(c: &mut Criterion) {
    let renderer = WheelRenderer::new(WheelConfig::default()).expect("default config is valid");
    let request = WheelRequest::with_second(
        WheelKind::Synastry,
        positions("alice", 0.0),
        positions("bob", 47.0),
    );

    c.bench_function("render_synastry", |b| {
        b.iter(|| renderer.render(black_box(&request)))
    });
}

fn bench_crowded_placement(c: &mut Criterion) {
    let crowded: Vec<f64> = (0..13).map(|i| 100.0 + i as f64 * 1.5).collect();

    c.bench_function("adjust_positions_13", |b| {
        b.iter(|| adjust_positions(black_box(&crowded), black_box(8.0)))
    });
}

criterion_group!(
    benches,
    bench_natal_render,
    bench_synastry_render,
    bench_crowded_placement
);
criterion_main!(benches);
