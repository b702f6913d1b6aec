//! Per-step outcome traces.

use std::fmt;

use crate::common::{FrameId, PageId};
use crate::sim::TraceStats;

/// Whether a reference found its page resident.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Hit,
    Miss,
}

impl Outcome {
    #[inline]
    pub fn is_miss(&self) -> bool {
        matches!(self, Outcome::Miss)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Hit => f.write_str("Hit"),
            Outcome::Miss => f.write_str("Miss"),
        }
    }
}

/// One processed reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceStep {
    /// The referenced page.
    pub page: PageId,

    pub outcome: Outcome,

    /// Slot the page was loaded into. None on a hit.
    pub victim: Option<FrameId>,

    /// Resident page displaced by the load. None on a hit or when the
    /// victim slot was empty.
    pub evicted: Option<PageId>,

    /// Frame contents after this step, one entry per slot.
    pub frames: Vec<Option<PageId>>,
}

/// The ordered steps of one policy run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    steps: Vec<TraceStep>,
}

impl Trace {
    /// Create an empty trace with room for `references` steps.
    pub fn with_capacity(references: usize) -> Self {
        Self {
            steps: Vec::with_capacity(references),
        }
    }

    pub fn push(&mut self, step: TraceStep) {
        self.steps.push(step);
    }

    pub fn steps(&self) -> &[TraceStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of misses.
    pub fn fault_count(&self) -> usize {
        self.steps.iter().filter(|s| s.outcome.is_miss()).count()
    }

    /// Number of hits.
    pub fn hit_count(&self) -> usize {
        self.steps.len() - self.fault_count()
    }

    /// Misses and hits as an outcome string, e.g. `MMMH`.
    pub fn outcome_string(&self) -> String {
        self.steps
            .iter()
            .map(|s| if s.outcome.is_miss() { 'M' } else { 'H' })
            .collect()
    }

    /// Aggregate counters for this trace.
    pub fn stats(&self) -> TraceStats {
        let faults = self.fault_count();
        TraceStats {
            references: self.steps.len(),
            hits: self.steps.len() - faults,
            faults,
            evictions: self.steps.iter().filter(|s| s.evicted.is_some()).count(),
        }
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a TraceStep;
    type IntoIter = std::slice::Iter<'a, TraceStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
