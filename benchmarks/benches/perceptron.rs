use benchmarks::oracles::{half_plane, is_bright};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use perceptron_rs::sampling::UniformSampler;
use perceptron_rs::{
    train_with_finite_set, Classifier, InMemoryDataset, Label, LinearUnit, OnlineLearner,
    PerformanceGoalTrainer,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;

fn bench_classify(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let sampler = UniformSampler::new();

    let unit4 = LinearUnit::<4>::with_bias(-0.5);
    let x4 = sampler.sample::<4, _>(&mut rng);
    c.bench_function("classify_4", |b| b.iter(|| unit4.classify(black_box(&x4))));

    let unit64 = LinearUnit::<64>::with_bias(-0.5);
    let x64 = sampler.sample::<64, _>(&mut rng);
    c.bench_function("classify_64", |b| {
        b.iter(|| unit64.classify(black_box(&x64)))
    });
}

fn bench_learn(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);
    let sampler = UniformSampler::new();
    let x = sampler.sample::<4, _>(&mut rng);

    c.bench_function("learn_4", |b| {
        let mut unit = LinearUnit::<4>::new();
        let mut label = Label::Positive;
        b.iter(|| {
            // alternate labels so every call updates the weights
            label = Label::from(label == Label::Negative);
            unit.learn(black_box(&x), label, 0.1)
        })
    });
}

fn bench_finite_set(c: &mut Criterion) {
    let sampler = UniformSampler::new();

    for size in [100usize, 1_000, 10_000] {
        let dataset = InMemoryDataset::<4>::generate(
            size,
            is_bright,
            &sampler,
            &mut StdRng::seed_from_u64(3),
        );
        c.bench_with_input(BenchmarkId::new("finite_set", size), &dataset, |b, ds| {
            b.iter(|| {
                let mut unit = LinearUnit::<4>::new();
                train_with_finite_set(black_box(ds), &mut unit);
                unit
            })
        });
    }
}

fn bench_performance_goal(c: &mut Criterion) {
    let trainer = PerformanceGoalTrainer::builder()
        .max_iterations(10_000_000)
        .build()
        .expect("valid trainer settings");

    for target in [80.0, 90.0, 95.0] {
        c.bench_with_input(
            BenchmarkId::new("performance_goal_bright", target),
            &target,
            |b, &t| {
                let mut seed = 0u64;
                b.iter(|| {
                    seed += 1;
                    let mut rng = StdRng::seed_from_u64(seed);
                    let mut unit = LinearUnit::<4>::new();
                    trainer
                        .train(is_bright, t, &mut rng, &mut unit)
                        .expect("goal reachable")
                })
            },
        );
    }

    c.bench_function("performance_goal_half_plane_1d_90", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed += 1;
            let mut rng = StdRng::seed_from_u64(seed);
            let mut unit = LinearUnit::<2>::new();
            trainer
                .train(half_plane::<2>, 90.0, &mut rng, &mut unit)
                .expect("goal reachable")
        })
    });
}

criterion_group!(
    benches,
    bench_classify,
    bench_learn,
    bench_finite_set,
    bench_performance_goal
);
criterion_main!(benches);
