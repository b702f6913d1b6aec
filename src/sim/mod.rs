//! Simulation engine.
//!
//! # Components
//! - [`evaluate`] - Runs one policy over a reference sequence
//! - [`compare`] - Runs every policy and picks the most efficient
//! - [`Trace`] / [`TraceStep`] - Per-reference outcomes
//! - [`TraceStats`] - Aggregate counters

mod comparator;
mod evaluator;
mod stats;
mod trace;

pub use comparator::{compare, select_most_efficient, Comparison, Verdict};
pub use evaluator::{evaluate, Evaluation};
pub use stats::TraceStats;
pub use trace::{Outcome, Trace, TraceStep};
