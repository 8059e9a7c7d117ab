use criterion::{black_box, criterion_group, criterion_main, Criterion};
use synastry::chart::TRACKED_PLANETS;
use synastry::{AspectCalculator, Chart, Locale, PlanetPosition, SynastryEngine};

fn spread_chart(offset: f64) -> Chart {
    let positions = TRACKED_PLANETS
        .iter()
        .enumerate()
        .map(|(i, planet)| PlanetPosition::new(*planet, (offset + i as f64 * 37.0) % 360.0, 1.0))
        .collect();
    let cusps = (0..12).map(|i| (offset + i as f64 * 30.0) % 360.0).collect();
    Chart::new(positions, offset, cusps)
}

fn bench_calculate_aspects(c: &mut Criterion) {
    let calculator = AspectCalculator::default();

    c.bench_function("calculate_aspects", |b| {
        b.iter(|| {
            calculator
                .calculate_aspects(black_box(100.0), black_box(102.0), black_box(1.0), black_box(13.0))
                .count()
        })
    });
}

fn bench_analyze(c: &mut Criterion) {
    let engine = SynastryEngine::default();
    let chart_a = spread_chart(10.0);
    let chart_b = spread_chart(95.0);

    c.bench_function("analyze", |b| {
        b.iter(|| engine.analyze(black_box(&chart_a), black_box(&chart_b), Locale::English))
    });
}

criterion_group!(benches, bench_calculate_aspects, bench_analyze);
criterion_main!(benches);
