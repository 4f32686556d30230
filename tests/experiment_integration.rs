//! Integration tests for trace generation and experiment sweeps.

use pagesim::common::config::DEFAULT_TRACE_LENGTH;
use pagesim::experiment::run;
use pagesim::report::render_table;
use pagesim::trace::generate;
use pagesim::{Error, Experiment, ExperimentKind, Trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Distinct-page counts of every window of five consecutive references.
fn window_distinct(trace: &Trace) -> Vec<usize> {
    trace
        .windows(5)
        .map(|w| {
            let mut pages: Vec<_> = w.to_vec();
            pages.sort();
            pages.dedup();
            pages.len()
        })
        .collect()
}

fn mean(xs: &[usize]) -> f64 {
    xs.iter().sum::<usize>() as f64 / xs.len() as f64
}

#[test]
fn test_locality_clusters_references() {
    let mut rng = StdRng::seed_from_u64(17);

    let local = generate(&mut rng, 1000, 10, 1.0).unwrap();
    let random = generate(&mut rng, 1000, 10, 0.0).unwrap();

    let local_windows = window_distinct(&local);
    let small = local_windows.iter().filter(|&&d| d <= 3).count();
    assert!(small as f64 / local_windows.len() as f64 >= 0.75);

    assert!(mean(&local_windows) < 3.0);
    assert!(mean(&window_distinct(&random)) > 3.5);
}

#[test]
fn test_frames_sweep_shape() {
    let mut rng = StdRng::seed_from_u64(42);

    let result = run(&[2.0, 3.0, 4.0], 0.6, ExperimentKind::Frames, 1, 10, &mut rng).unwrap();

    assert_eq!(result.kind(), ExperimentKind::Frames);
    assert_eq!(result.values(), &[2.0, 3.0, 4.0]);
    assert_eq!(result.fifo_faults().len(), 3);
    assert_eq!(result.mfu_faults().len(), 3);
    for (_, fifo, mfu) in result.rows() {
        assert!(fifo <= DEFAULT_TRACE_LENGTH as u64);
        assert!(mfu <= DEFAULT_TRACE_LENGTH as u64);
    }
}

#[test]
fn test_sweep_is_reproducible_with_seed() {
    let exp = Experiment::new(ExperimentKind::Length, 0.6).with_repetitions(3);
    let values = [50.0, 100.0, 150.0];

    let a = exp.run(&values, &mut StdRng::seed_from_u64(7)).unwrap();
    let b = exp.run(&values, &mut StdRng::seed_from_u64(7)).unwrap();

    assert_eq!(a, b);
}

#[test]
fn test_length_sweep_bounds() {
    let mut rng = StdRng::seed_from_u64(3);

    let result = Experiment::new(ExperimentKind::Length, 0.6)
        .run(&[10.0, 250.0], &mut rng)
        .unwrap();

    // Averages can never exceed the number of references.
    assert!(result.fifo_faults()[0] <= 10);
    assert!(result.mfu_faults()[0] <= 10);
    assert!(result.fifo_faults()[1] <= 250);
    // With 3 frames and 10 pages, a 250-step trace cannot avoid faulting.
    assert!(result.fifo_faults()[1] > result.fifo_faults()[0]);
}

#[test]
fn test_frames_equal_to_page_range_equalizes_policies() {
    let mut rng = StdRng::seed_from_u64(8);

    let result = run(&[10.0], 0.6, ExperimentKind::Frames, 4, 10, &mut rng).unwrap();

    // Only compulsory faults remain, and both policies see the same traces.
    assert_eq!(result.fifo_faults(), result.mfu_faults());
    assert!(result.fifo_faults()[0] <= 10);
}

#[test]
fn test_high_locality_faults_less() {
    let mut rng = StdRng::seed_from_u64(99);

    let result = Experiment::new(ExperimentKind::Locality, 0.6)
        .with_repetitions(20)
        .run(&[0.0, 1.0], &mut rng)
        .unwrap();

    assert!(result.fifo_faults()[1] < result.fifo_faults()[0]);
    assert!(result.mfu_faults()[1] < result.mfu_faults()[0]);
}

#[test]
fn test_unknown_kind_fails_fast() {
    let err = "pages".parse::<ExperimentKind>().unwrap_err();
    assert_eq!(err, Error::UnknownExperimentKind("pages".to_string()));
}

#[test]
fn test_result_feeds_report() {
    let mut rng = StdRng::seed_from_u64(1);
    let kind = ExperimentKind::Frames;

    let result = run(&[2.0, 3.0], 0.6, kind, 1, 10, &mut rng).unwrap();
    let table = render_table("Frames", kind.label(), &result);

    assert_eq!(table.lines().count(), 2 + result.len());
    assert!(table.lines().nth(2).unwrap().starts_with("2 "));
}
