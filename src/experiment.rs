//! Parameter sweeps comparing the eviction policies.
//!
//! An experiment varies one dimension (trace length, frame count or
//! locality) across a list of values and holds the other two fixed. For
//! every value it runs a number of independent trials: a fresh trace, a
//! fresh engine per policy, the same trace fed to each. The reported figure
//! is each policy's fault count averaged over the trials.
//!
//! | kind       | trace length  | frames        | locality      |
//! |------------|---------------|---------------|---------------|
//! | `length`   | value         | 3             | `fixed_param` |
//! | `frames`   | 200           | value         | `fixed_param` |
//! | `locality` | 200           | 3             | value         |
//!
//! The locality sweep holds both other dimensions at their defaults and
//! ignores `fixed_param`.

use std::fmt;
use std::str::FromStr;

use log::{debug, trace};
use rand::Rng;

use crate::common::config::{
    DEFAULT_FRAMES, DEFAULT_PAGE_RANGE, DEFAULT_REPETITIONS, DEFAULT_TRACE_LENGTH,
    MAX_SWEEP_COUNT,
};
use crate::common::{Error, Result};
use crate::policy::{simulate, PolicyKind};
use crate::trace::{generate, validate_locality, validate_page_range};

/// The dimension an experiment sweeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExperimentKind {
    /// Vary the trace length; `fixed_param` is the locality.
    Length,
    /// Vary the number of frames; `fixed_param` is the locality.
    Frames,
    /// Vary the locality; `fixed_param` is unused.
    Locality,
}

impl ExperimentKind {
    pub const ALL: [ExperimentKind; 3] = [
        ExperimentKind::Length,
        ExperimentKind::Frames,
        ExperimentKind::Locality,
    ];

    /// The identifier accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperimentKind::Length => "length",
            ExperimentKind::Frames => "frames",
            ExperimentKind::Locality => "locality",
        }
    }

    /// Human-readable name of the swept dimension, for table headers.
    pub fn label(&self) -> &'static str {
        match self {
            ExperimentKind::Length => "Sequence length",
            ExperimentKind::Frames => "Frame count",
            ExperimentKind::Locality => "Locality",
        }
    }
}

impl fmt::Display for ExperimentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExperimentKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ExperimentKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::UnknownExperimentKind(s.to_string()))
    }
}

/// Averaged fault counts for one sweep.
///
/// The three sequences are parallel: entry `i` of each describes
/// `values()[i]`. A result is read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentResult {
    kind: ExperimentKind,
    values: Vec<f64>,
    fifo_faults: Vec<u64>,
    mfu_faults: Vec<u64>,
}

impl ExperimentResult {
    /// Assemble a result from already-averaged sequences.
    ///
    /// # Panics
    /// Panics if the three sequences differ in length.
    pub fn new(
        kind: ExperimentKind,
        values: Vec<f64>,
        fifo_faults: Vec<u64>,
        mfu_faults: Vec<u64>,
    ) -> Self {
        assert!(
            values.len() == fifo_faults.len() && values.len() == mfu_faults.len(),
            "result sequences must have equal length"
        );
        Self {
            kind,
            values,
            fifo_faults,
            mfu_faults,
        }
    }

    fn with_capacity(kind: ExperimentKind, n: usize) -> Self {
        Self {
            kind,
            values: Vec::with_capacity(n),
            fifo_faults: Vec::with_capacity(n),
            mfu_faults: Vec::with_capacity(n),
        }
    }

    fn push(&mut self, value: f64, fifo: u64, mfu: u64) {
        self.values.push(value);
        self.fifo_faults.push(fifo);
        self.mfu_faults.push(mfu);
    }

    pub fn kind(&self) -> ExperimentKind {
        self.kind
    }

    /// Swept values, in the order they were given.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn fifo_faults(&self) -> &[u64] {
        &self.fifo_faults
    }

    pub fn mfu_faults(&self) -> &[u64] {
        &self.mfu_faults
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Averaged faults of one policy, in sweep order.
    pub fn faults(&self, policy: PolicyKind) -> &[u64] {
        match policy {
            PolicyKind::Fifo => &self.fifo_faults,
            PolicyKind::Mfu => &self.mfu_faults,
        }
    }

    /// `(value, fifo_faults, mfu_faults)` rows in sweep order.
    pub fn rows(&self) -> impl Iterator<Item = (f64, u64, u64)> + '_ {
        self.values
            .iter()
            .zip(&self.fifo_faults)
            .zip(&self.mfu_faults)
            .map(|((&v, &fifo), &mfu)| (v, fifo, mfu))
    }
}

/// Concrete parameters of a single trial.
#[derive(Debug, Clone, Copy, PartialEq)]
struct TrialParams {
    length: usize,
    frames: usize,
    locality: f64,
}

/// A configured sweep.
///
/// # Example
/// ```
/// use pagesim::{Experiment, ExperimentKind};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let result = Experiment::new(ExperimentKind::Frames, 0.6)
///     .with_repetitions(2)
///     .run(&[2.0, 3.0, 4.0], &mut rng)
///     .unwrap();
///
/// assert_eq!(result.values(), &[2.0, 3.0, 4.0]);
/// assert_eq!(result.fifo_faults().len(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Experiment {
    kind: ExperimentKind,
    fixed_param: f64,
    repetitions: usize,
    page_range: u32,
}

impl Experiment {
    /// Sweep `kind` with the held dimension set to `fixed_param`, using the
    /// default repetition count and page range.
    pub fn new(kind: ExperimentKind, fixed_param: f64) -> Self {
        Self {
            kind,
            fixed_param,
            repetitions: DEFAULT_REPETITIONS,
            page_range: DEFAULT_PAGE_RANGE,
        }
    }

    pub fn with_repetitions(mut self, repetitions: usize) -> Self {
        self.repetitions = repetitions;
        self
    }

    pub fn with_page_range(mut self, page_range: u32) -> Self {
        self.page_range = page_range;
        self
    }

    pub fn kind(&self) -> ExperimentKind {
        self.kind
    }

    /// Run every trial for every value in `values`.
    ///
    /// All parameters are validated before the first trial, so an error
    /// never leaves a partial result behind.
    pub fn run<R>(&self, values: &[f64], rng: &mut R) -> Result<ExperimentResult>
    where
        R: Rng + ?Sized,
    {
        if self.repetitions == 0 {
            return Err(Error::ZeroRepetitions);
        }
        validate_page_range(self.page_range)?;
        let params = values
            .iter()
            .map(|&v| self.trial_params(v))
            .collect::<Result<Vec<_>>>()?;

        let mut result = ExperimentResult::with_capacity(self.kind, values.len());
        for (&value, params) in values.iter().zip(params) {
            let [fifo, mfu] = self.average_faults(params, rng)?;
            debug!(
                "{} = {}: avg faults FIFO {} MFU {} over {} trials",
                self.kind, value, fifo, mfu, self.repetitions
            );
            result.push(value, fifo, mfu);
        }
        Ok(result)
    }

    /// Per-policy fault totals over all repetitions, truncated to the mean.
    fn average_faults<R>(&self, params: TrialParams, rng: &mut R) -> Result<[u64; 2]>
    where
        R: Rng + ?Sized,
    {
        let mut totals = [0u64; 2];

        for rep in 0..self.repetitions {
            let trace = generate(rng, params.length, self.page_range, params.locality)?;

            for (total, kind) in totals.iter_mut().zip(PolicyKind::ALL) {
                let mut policy = kind.build(params.frames, self.page_range);
                let stats = simulate(policy.as_mut(), &trace);
                trace!("{:?} trial {}: {} {}", params, rep, kind, stats);
                *total += stats.faults;
            }
        }

        let reps = self.repetitions as u64;
        Ok(totals.map(|total| total / reps))
    }

    fn trial_params(&self, value: f64) -> Result<TrialParams> {
        let params = match self.kind {
            ExperimentKind::Length => TrialParams {
                length: whole_number(ExperimentKind::Length, value)?,
                frames: DEFAULT_FRAMES,
                locality: self.fixed_param,
            },
            ExperimentKind::Frames => TrialParams {
                length: DEFAULT_TRACE_LENGTH,
                frames: whole_number(ExperimentKind::Frames, value)?,
                locality: self.fixed_param,
            },
            ExperimentKind::Locality => TrialParams {
                length: DEFAULT_TRACE_LENGTH,
                frames: DEFAULT_FRAMES,
                locality: value,
            },
        };
        validate_locality(params.locality)?;
        Ok(params)
    }
}

/// Lengths and frame counts must be whole, non-negative and at most
/// [`MAX_SWEEP_COUNT`].
fn whole_number(kind: ExperimentKind, value: f64) -> Result<usize> {
    if value.is_finite()
        && (0.0..=MAX_SWEEP_COUNT as f64).contains(&value)
        && value.fract() == 0.0
    {
        Ok(value as usize)
    } else {
        Err(Error::InvalidSweepValue { kind, value })
    }
}

/// Run a sweep in one call.
///
/// Equivalent to building an [`Experiment`] with the given repetitions and
/// page range. Unknown kind strings are rejected by
/// [`ExperimentKind::from_str`] before a sweep can be built.
pub fn run<R>(
    values: &[f64],
    fixed_param: f64,
    kind: ExperimentKind,
    repetitions: usize,
    page_range: u32,
    rng: &mut R,
) -> Result<ExperimentResult>
where
    R: Rng + ?Sized,
{
    Experiment::new(kind, fixed_param)
        .with_repetitions(repetitions)
        .with_page_range(page_range)
        .run(values, rng)
}
