//! FIFO (First-In-First-Out) replacement policy.

use crate::common::{FrameId, PageId};
use crate::frames::FrameSet;
use crate::policy::{PolicyKind, ReplacementPolicy};

/// Evicts pages in the order they were loaded.
///
/// Keeps a write cursor that starts at slot 0 and advances by one slot,
/// wrapping around, on every miss. Hits never move it, so re-referencing a
/// page does not protect it from eviction.
#[derive(Debug, Default)]
pub struct FifoPolicy {
    cursor: usize,
}

impl FifoPolicy {
    /// Create a new FIFO policy with the cursor at slot 0.
    pub fn new() -> Self {
        Self { cursor: 0 }
    }
}

impl ReplacementPolicy for FifoPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Fifo
    }

    fn select_victim(
        &mut self,
        frames: &FrameSet,
        _sequence: &[PageId],
        _position: usize,
    ) -> FrameId {
        let victim = FrameId::new(self.cursor);
        self.cursor = (self.cursor + 1) % frames.capacity();
        victim
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{pages, SimConfig};
    use crate::sim::Outcome;

    #[test]
    fn test_fifo_cursor_wraps() {
        let frames = FrameSet::new(3).unwrap();
        let mut policy = FifoPolicy::new();

        let victims: Vec<_> = (0..5)
            .map(|pos| policy.select_victim(&frames, &[], pos).0)
            .collect();
        assert_eq!(victims, vec![0, 1, 2, 0, 1]);
    }

    #[test]
    fn test_fifo_reaccess_no_reorder() {
        // 1 is hit before 3 arrives, but is still the oldest and goes first
        let config = SimConfig::new(2).unwrap();
        let eval = PolicyKind::Fifo
            .evaluate(&pages(&[1, 2, 1, 3]), &config)
            .unwrap();

        let last = eval.trace.steps().last().unwrap();
        assert_eq!(last.outcome, Outcome::Miss);
        assert_eq!(last.evicted, Some(PageId::new(1)));
        assert_eq!(last.frames, vec![Some(PageId::new(3)), Some(PageId::new(2))]);
        assert_eq!(eval.fault_count(), 3);
    }

    #[test]
    fn test_fifo_single_frame() {
        let config = SimConfig::new(1).unwrap();
        let eval = PolicyKind::Fifo
            .evaluate(&pages(&[1, 1, 2, 1]), &config)
            .unwrap();
        assert_eq!(eval.fault_count(), 3);
        assert_eq!(eval.hit_count(), 1);
    }
}
