//! Optimal (clairvoyant) replacement policy.

use crate::common::{FrameId, PageId};
use crate::frames::FrameSet;
use crate::policy::{PolicyKind, ReplacementPolicy};

/// Evicts the resident page whose next reference is furthest in the future.
///
/// Needs the whole reference sequence up front. Decisions depend on what
/// comes later, so a run must be repeated from scratch whenever references
/// are appended: a page that looked dead may be referenced again.
///
/// # Tie-breaking
/// Slots are visited in index order:
/// - The first slot never referenced again (an empty slot counts) is taken
///   immediately, even if a later slot is empty.
/// - Otherwise the slot with the largest next-reference index wins. A later
///   slot only displaces the candidate on a strictly larger index.
#[derive(Debug, Default)]
pub struct OptimalPolicy;

impl OptimalPolicy {
    /// Create a new Optimal policy.
    pub fn new() -> Self {
        Self
    }
}

/// Index of the next reference to `page` after `position`.
fn next_use(sequence: &[PageId], position: usize, page: PageId) -> Option<usize> {
    sequence
        .get(position + 1..)?
        .iter()
        .position(|&p| p == page)
        .map(|offset| position + 1 + offset)
}

impl ReplacementPolicy for OptimalPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Optimal
    }

    fn select_victim(
        &mut self,
        frames: &FrameSet,
        sequence: &[PageId],
        position: usize,
    ) -> FrameId {
        let mut victim = None;
        let mut farthest = position;
        for (frame, page) in frames.iter() {
            match page.and_then(|page| next_use(sequence, position, page)) {
                None => return frame,
                Some(idx) if idx > farthest => {
                    farthest = idx;
                    victim = Some(frame);
                }
                Some(_) => {}
            }
        }

        victim.unwrap_or(FrameId::new(0))
    }
}
