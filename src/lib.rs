//! pagesim - A page-replacement simulator comparing eviction policies.
//!
//! # Architecture
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                           pagesim                            │
//! ├──────────────────────────────────────────────────────────────┤
//! │  Experiment Runner (experiment/)                             │
//! │    sweep one of {length, frames, locality}, average faults   │
//! │                            ↓                                 │
//! │  Trace Generator (trace/)                                    │
//! │    biased random walk over [0, page_range)                   │
//! │                            ↓                                 │
//! │  Eviction Engines (policy/)                                  │
//! │    ┌──────────────────────────────────────────────────┐      │
//! │    │  ReplacementPolicy:  FIFO  |  MFU                │      │
//! │    └──────────────────────────────────────────────────┘      │
//! │    AccessStats (hits, faults, evictions)                     │
//! └──────────────────────────────────────────────────────────────┘
//!             ↓ ExperimentResult
//!        report/ (text tables, outside the core)
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, Error, defaults)
//! - [`policy`] - Eviction engines
//! - [`trace`] - Reference string generation
//! - [`experiment`] - Parameter sweeps
//! - [`report`] - Table rendering
//!
//! # Quick Start
//! ```
//! use pagesim::{simulate, FifoPolicy, MfuPolicy, Trace};
//!
//! let trace = Trace::from_pages([1, 2, 3, 4, 1, 2, 5, 1, 2, 3]);
//!
//! let fifo = simulate(&mut FifoPolicy::new(3), &trace);
//! let mfu = simulate(&mut MfuPolicy::new(3, 10), &trace);
//!
//! assert_eq!(fifo.faults, 8);
//! assert_eq!(mfu.faults, 10);
//! ```

pub mod common;
pub mod experiment;
pub mod policy;
pub mod report;
pub mod trace;

pub use common::{Error, PageId, Result};
pub use experiment::{Experiment, ExperimentKind, ExperimentResult};
pub use policy::{
    simulate, AccessOutcome, AccessStats, FifoPolicy, MfuPolicy, PolicyKind, ReplacementPolicy,
};
pub use trace::Trace;
