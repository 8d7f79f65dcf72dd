use criterion::{black_box, criterion_group, criterion_main, Criterion};
use color_space_converter::{ColorConverter, InkColor, LightColor};

fn benchmark_conversion(c: &mut Criterion) {
    let converter = ColorConverter::new();
    let light = LightColor::from_rgb(50, 100, 150);
    let ink = InkColor::new(25.0, 50.0, 75.0, 25.0).expect("valid ink");

    c.bench_function("to_ink", |b| b.iter(|| converter.to_ink(black_box(light))));
    c.bench_function("to_light", |b| b.iter(|| converter.to_light(black_box(ink))));
    c.bench_function("to_hex", |b| b.iter(|| converter.to_hex(black_box(light))));
    c.bench_function("parse_hex", |b| {
        b.iter(|| converter.parse_hex(black_box("#326496")))
    });
}

criterion_group!(benches, benchmark_conversion);
criterion_main!(benches);
