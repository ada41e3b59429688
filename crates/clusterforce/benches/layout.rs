use clusterforce::{LayoutOptions, Point, Simulation, layout};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;

fn build_cloud(point_count: usize, cluster_count: usize) -> Vec<Point<usize>> {
    // Points on a sunflower spiral, clusters assigned round-robin so every cluster spans the cloud.
    let golden = std::f64::consts::PI * (3.0 - 5.0f64.sqrt());
    (0..point_count)
        .map(|i| {
            let r = (i as f64 + 0.5).sqrt();
            let theta = i as f64 * golden;
            Point::new(r * theta.cos(), r * theta.sin(), i % cluster_count)
        })
        .collect()
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("force_layout");
    group.measurement_time(Duration::from_secs(10));

    let cases = [
        ("n50_k5", 50usize, 5usize),
        ("n200_k20", 200usize, 20usize),
        ("n500_k20", 500usize, 20usize),
    ];

    for (name, points, clusters) in cases {
        let cloud = build_cloud(points, clusters);
        let opts = LayoutOptions::default().with_iterations(100);
        group.bench_with_input(BenchmarkId::new("layout", name), &cloud, |b, cloud| {
            b.iter(|| black_box(layout(black_box(cloud), &opts).expect("layout")))
        });
    }

    group.finish();
}

fn bench_single_step(c: &mut Criterion) {
    let cloud = build_cloud(1000, 20);
    let mut sim = Simulation::new(&cloud, &LayoutOptions::default()).expect("sim");
    c.bench_function("force_layout/step/n1000_k20", |b| {
        b.iter(|| {
            sim.step();
            black_box(sim.steps_taken());
        })
    });
}

criterion_group!(benches, bench_layout, bench_single_step);
criterion_main!(benches);
