//! LRU (Least Recently Used) replacement policy.

use crate::common::{FrameId, PageId};
use crate::frames::FrameSet;
use crate::policy::{PolicyKind, ReplacementPolicy};

/// Evicts the resident page whose last reference is furthest in the past.
///
/// Recency is recomputed on every miss by scanning the already processed
/// references backwards, so the policy itself holds no state.
///
/// # Tie-breaking
/// Slots are visited in index order:
/// - The first slot with no earlier reference (an empty slot counts) is
///   taken immediately.
/// - Otherwise the slot with the smallest last-reference index wins. A later
///   slot only displaces the candidate on a strictly smaller index.
#[derive(Debug, Default)]
pub struct LruPolicy;

impl LruPolicy {
    /// Create a new LRU policy.
    pub fn new() -> Self {
        Self
    }
}

/// Index of the most recent reference to `page` in `history`.
fn last_use(history: &[PageId], page: PageId) -> Option<usize> {
    history.iter().rposition(|&p| p == page)
}

impl ReplacementPolicy for LruPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Lru
    }

    fn select_victim(
        &mut self,
        frames: &FrameSet,
        sequence: &[PageId],
        position: usize,
    ) -> FrameId {
        let history = &sequence[..position.min(sequence.len())];

        let mut victim = None;
        let mut oldest = position;
        for (frame, page) in frames.iter() {
            match page.and_then(|page| last_use(history, page)) {
                None => return frame,
                Some(idx) if idx < oldest => {
                    oldest = idx;
                    victim = Some(frame);
                }
                Some(_) => {}
            }
        }

        victim.unwrap_or(FrameId::new(0))
    }
}
