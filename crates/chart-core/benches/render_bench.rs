// File: crates/chart-core/benches/render_bench.rs
// Summary: Scene construction and SVG serialization throughput for large single/multi datasets.

use chart_core::svg::to_svg;
use chart_core::{classify, render, Dataset, RawPoint, RenderOptions};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn single_dataset(n: usize) -> Dataset {
    let points = (0..n)
        .map(|i| {
            let x = i as f64;
            // every 97th sample is a gap
            let y = if i % 97 == 0 { None } else { Some((x * 0.01).sin() * 10.0 + x * 0.0001) };
            RawPoint::scalar(x, y)
        })
        .collect();
    Dataset::new("bench-single", points)
}

fn multi_dataset(n: usize) -> Dataset {
    let points = (0..n)
        .map(|i| {
            let x = i as f64;
            let ys = vec![Some((x * 0.01).sin()), if i % 5 == 0 { None } else { Some((x * 0.02).cos()) }, Some(x * 0.001)];
            RawPoint::bundle(x, ys)
        })
        .collect();
    Dataset::new("bench-multi", points)
}

fn bench_render(c: &mut Criterion) {
    let opts = RenderOptions::default();
    let mut group = c.benchmark_group("render_scene");
    for &n in &[1_000usize, 10_000usize] {
        let single = classify(&single_dataset(n));
        group.bench_function(format!("single_{n}"), |b| b.iter(|| black_box(render(&single, &opts))));
        let multi = classify(&multi_dataset(n));
        group.bench_function(format!("multi_{n}"), |b| b.iter(|| black_box(render(&multi, &opts))));
        let scene = render(&single, &opts);
        group.bench_function(format!("svg_{n}"), |b| b.iter(|| black_box(to_svg(&scene, "bench"))));
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
