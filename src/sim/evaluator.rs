//! The evaluation loop shared by every policy.

use log::debug;

use crate::common::{PageId, Result, SimConfig};
use crate::frames::FrameSet;
use crate::policy::{PolicyKind, ReplacementPolicy};
use crate::sim::{Outcome, Trace, TraceStats, TraceStep};

/// Result of running one policy over a reference sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub policy: PolicyKind,

    /// Frame count the policy ran with.
    pub frames_count: usize,

    pub trace: Trace,
}

impl Evaluation {
    /// Total page faults.
    pub fn fault_count(&self) -> usize {
        self.trace.fault_count()
    }

    /// Total hits.
    pub fn hit_count(&self) -> usize {
        self.trace.hit_count()
    }

    /// Number of references processed.
    pub fn references(&self) -> usize {
        self.trace.len()
    }

    pub fn stats(&self) -> TraceStats {
        self.trace.stats()
    }
}

/// Run `policy` over `sequence` with the frame count of `config`.
///
/// Each step checks residency; on a miss the policy picks a slot and the page
/// is loaded there. The frame set is allocated here and dropped with the run.
///
/// # Errors
/// - `Error::InvalidFrameCount` if the frame count is 0
/// - `Error::SequenceTooLong` if `sequence` exceeds the configured maximum
///
/// Both are checked before the first reference is processed.
pub fn evaluate(
    policy: &mut dyn ReplacementPolicy,
    sequence: &[PageId],
    config: &SimConfig,
) -> Result<Evaluation> {
    config.check_sequence(sequence.len())?;

    let kind = policy.kind();
    let mut frames = FrameSet::new(config.frames_count())?;
    let mut trace = Trace::with_capacity(sequence.len());

    for (position, &page) in sequence.iter().enumerate() {
        let step = if frames.contains(page) {
            TraceStep {
                page,
                outcome: Outcome::Hit,
                victim: None,
                evicted: None,
                frames: frames.snapshot(),
            }
        } else {
            let victim = policy.select_victim(&frames, sequence, position);
            let evicted = frames.load(victim, page);
            debug!(
                "{}: ref #{} {} -> {} (evicted {:?})",
                kind,
                position,
                page,
                victim,
                evicted.map(|p| p.0)
            );
            TraceStep {
                page,
                outcome: Outcome::Miss,
                victim: Some(victim),
                evicted,
                frames: frames.snapshot(),
            }
        };
        trace.push(step);
    }

    debug!("{}: {}", kind, trace.stats());

    Ok(Evaluation {
        policy: kind,
        frames_count: frames.capacity(),
        trace,
    })
}
