use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use pagesim::trace::generate;
use pagesim::{simulate, Experiment, ExperimentKind, PolicyKind};

fn policy_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Policy");
    let mut rng = StdRng::seed_from_u64(0);
    let trace = generate(&mut rng, 10_000, 64, 0.6).unwrap();

    for frames in [4usize, 16, 32].iter() {
        for kind in PolicyKind::ALL {
            group.bench_with_input(
                BenchmarkId::new(kind.to_string(), frames),
                frames,
                |b, &frames| {
                    b.iter(|| {
                        let mut policy = kind.build(frames, 64);
                        simulate(policy.as_mut(), &trace)
                    });
                },
            );
        }
    }

    group.finish();
}

fn experiment_benchmark(c: &mut Criterion) {
    c.bench_function("frames_sweep", |b| {
        let mut rng = StdRng::seed_from_u64(1);
        let exp = Experiment::new(ExperimentKind::Frames, 0.6);
        b.iter(|| exp.run(&[2.0, 3.0, 4.0, 5.0, 6.0], &mut rng).unwrap());
    });
}

criterion_group!(benches, policy_benchmark, experiment_benchmark);
criterion_main!(benches);
