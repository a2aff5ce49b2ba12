// Scoring benchmarks: cosine fallback vs. a learned pair model
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ddix_core::{similarity, FeatureVector};
use ddix_model::{Activation, DenseLayer, DenseNetwork, ModelHandle, Predictor};
use ddix_storage::FeatureStore;
use rand::prelude::*;
use std::sync::Arc;

const DIM: usize = 128;

fn generate_random_vector(rng: &mut impl Rng, dim: usize) -> FeatureVector {
    FeatureVector::new((0..dim).map(|_| rng.random_range(-1.0f32..1.0f32)).collect())
}

fn generate_layer(rng: &mut impl Rng, inputs: usize, outputs: usize, activation: Activation) -> DenseLayer {
    DenseLayer {
        weights: (0..outputs)
            .map(|_| (0..inputs).map(|_| rng.random_range(-0.1f32..0.1f32)).collect())
            .collect(),
        bias: vec![0.0; outputs],
        activation,
    }
}

fn generate_store(rng: &mut impl Rng, size: usize) -> FeatureStore {
    FeatureStore::from_entries(
        (0..size).map(|i| (format!("Drug{}", i), generate_random_vector(&mut *rng, DIM))),
    )
    .unwrap()
}

fn benchmark_similarity(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let a = generate_random_vector(&mut rng, DIM);
    let b = generate_random_vector(&mut rng, DIM);

    c.bench_function("cosine_score_128d", |bench| {
        bench.iter(|| similarity::score(black_box(&a), black_box(&b)).unwrap())
    });
}

fn benchmark_predict(c: &mut Criterion) {
    let mut group = c.benchmark_group("predict");
    let mut rng = StdRng::seed_from_u64(7);

    for size in [100, 10_000].iter() {
        let store = Arc::new(generate_store(&mut rng, *size));
        let network = DenseNetwork::new(vec![
            generate_layer(&mut rng, 2 * DIM, 64, Activation::Relu),
            generate_layer(&mut rng, 64, 1, Activation::Linear),
        ]);
        let predictor = Predictor::new(store, ModelHandle::usable(network), ModelHandle::Unloaded);

        group.bench_with_input(BenchmarkId::new("graphsage", size), size, |bench, &size| {
            let d1 = format!("drug{}", size / 3);
            let d2 = format!("DRUG{}", size / 2);
            bench.iter(|| predictor.predict(black_box(&d1), black_box(&d2), "graphsage").unwrap())
        });

        group.bench_with_input(BenchmarkId::new("fallback", size), size, |bench, &size| {
            let d1 = format!("drug{}", size / 3);
            let d2 = format!("DRUG{}", size / 2);
            bench.iter(|| predictor.predict(black_box(&d1), black_box(&d2), "edge_predictor").unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_similarity, benchmark_predict);
criterion_main!(benches);
