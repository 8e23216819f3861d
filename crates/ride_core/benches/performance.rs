//! Performance benchmarks for ride_core using Criterion.rs.

use bevy_ecs::prelude::{Entity, World};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ride_core::clock::ONE_SEC_MS;
use ride_core::matching::{GreedyBatchMatching, MatchingAlgorithm, NearestMatching};
use ride_core::runner::{run_until_empty, simulation_schedule};
use ride_core::scenario::{build_scenario, ScenarioParams};
use ride_core::spatial::Point;

fn bench_simulation_run(c: &mut Criterion) {
    let scenarios = vec![("small", 10, 50), ("medium", 50, 250), ("large", 100, 500)];

    let mut group = c.benchmark_group("simulation_run");
    for (name, drivers, requests) in scenarios {
        group.bench_with_input(
            BenchmarkId::from_parameter(name),
            &(drivers, requests),
            |b, &(drivers, requests)| {
                b.iter(|| {
                    let mut world = World::new();
                    let params = ScenarioParams {
                        num_drivers: drivers,
                        num_requests: requests,
                        ..Default::default()
                    }
                    .with_seed(42)
                    .with_request_window_ms(60 * 60 * ONE_SEC_MS);

                    build_scenario(&mut world, params);
                    let mut schedule = simulation_schedule();
                    black_box(run_until_empty(&mut world, &mut schedule, 1_000_000));
                });
            },
        );
    }
    group.finish();
}

fn bench_matching_algorithms(c: &mut Criterion) {
    let drivers: Vec<(Entity, Point)> = (0..100)
        .map(|i| {
            (
                Entity::from_raw(i + 200),
                Point::new((i % 10) as f64, (i / 10) as f64),
            )
        })
        .collect();
    let requests: Vec<(Entity, Point)> = (0..50)
        .map(|i| {
            (
                Entity::from_raw(i),
                Point::new((i % 7) as f64 * 1.3, (i % 5) as f64 * 1.7),
            )
        })
        .collect();

    let mut group = c.benchmark_group("matching_algorithms");
    group.bench_function("nearest_single", |b| {
        b.iter(|| black_box(NearestMatching.find_match(Point::new(4.5, 4.5), &drivers)));
    });
    group.bench_function("greedy_batch", |b| {
        b.iter(|| black_box(GreedyBatchMatching.find_batch_matches(&requests, &drivers)));
    });
    group.finish();
}

criterion_group!(benches, bench_simulation_run, bench_matching_algorithms);
criterion_main!(benches);
