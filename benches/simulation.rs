//! Simulation benchmarks
//!
//! - Force accumulation for growing body counts
//! - Full clock steps for generated systems with and without moons
//! - System generation

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use orrery::config::GenerationConfig;
use orrery::physics::forces::NewtonianGravity;
use orrery::physics::math::{GRAVITATIONAL_CONSTANT, Vector};
use orrery::prelude::{SharedRng, SimulationClock, SimulationConfig, SystemGenerator};

fn generated_config(planets: usize, moons: Option<usize>) -> SimulationConfig {
    let mut config = SimulationConfig::default();
    config.physics.initial_seed = Some(42);
    config.generation.planet_count = planets;
    config.generation.moons_per_planet = moons;
    config
}

fn bench_force_accumulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("force_accumulation");
    let gravity = NewtonianGravity::default();

    for &planets in &[4, 8, 16, 32] {
        let clock = SimulationClock::from_config(&generated_config(planets, Some(2)));
        let bodies = clock.bodies().to_vec();
        let mut forces = vec![Vector::ZERO; bodies.len()];

        group.bench_with_input(
            BenchmarkId::from_parameter(bodies.len()),
            &bodies,
            |b, bodies| {
                b.iter(|| {
                    gravity.accumulate(black_box(bodies), &mut forces);
                    black_box(&forces);
                });
            },
        );
    }

    group.finish();
}

fn bench_clock_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("clock_step");

    for (label, moons) in [("planets_only", None), ("with_moons", Some(3))] {
        let mut clock = SimulationClock::from_config(&generated_config(8, moons));

        group.bench_function(BenchmarkId::new(label, clock.len()), |b| {
            b.iter(|| clock.step(black_box(3600.0)));
        });
    }

    group.finish();
}

fn bench_generation(c: &mut Criterion) {
    let generator = SystemGenerator::new(GenerationConfig::default(), GRAVITATIONAL_CONSTANT);
    let mut rng = SharedRng::from_seed(7);

    c.bench_function("generate_system", |b| {
        b.iter(|| generator.generate_system(&mut *rng, black_box(8), Some(2)));
    });
}

criterion_group!(
    benches,
    bench_force_accumulation,
    bench_clock_step,
    bench_generation
);
criterion_main!(benches);
