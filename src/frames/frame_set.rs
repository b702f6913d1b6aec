//! FrameSet - the resident pages of one simulation run.
//!
//! A [`FrameSet`] is a fixed number of slots, each either empty or holding
//! one page. Every policy run allocates its own set.

use crate::common::{Error, FrameId, PageId, Result};

/// Fixed-capacity set of frames.
///
/// All slots start empty. A page is only ever loaded on a miss, so a page
/// occupies at most one slot.
///
/// # Example
/// ```
/// use pagesim::{FrameId, FrameSet, PageId};
///
/// let mut frames = FrameSet::new(2).unwrap();
/// assert!(!frames.contains(PageId::new(7)));
///
/// frames.load(FrameId::new(0), PageId::new(7));
/// assert!(frames.contains(PageId::new(7)));
/// assert_eq!(frames.snapshot(), vec![Some(PageId::new(7)), None]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSet {
    slots: Vec<Option<PageId>>,
}

impl FrameSet {
    /// Create a frame set with `capacity` empty slots.
    ///
    /// # Errors
    /// - `Error::InvalidFrameCount` if `capacity` is 0
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidFrameCount(capacity));
        }
        Ok(Self {
            slots: vec![None; capacity],
        })
    }

    /// Number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Check whether `page` occupies any slot.
    #[inline]
    pub fn contains(&self, page: PageId) -> bool {
        self.slots.contains(&Some(page))
    }

    /// Page held by `frame`, or None if the slot is empty or out of range.
    #[inline]
    pub fn get(&self, frame: FrameId) -> Option<PageId> {
        self.slots.get(frame.0).copied().flatten()
    }

    /// Iterate over slots in index order.
    pub fn iter(&self) -> impl Iterator<Item = (FrameId, Option<PageId>)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .map(|(idx, slot)| (FrameId::new(idx), *slot))
    }

    /// Put `page` into `frame`, returning the page it displaced.
    ///
    /// # Panics
    /// Panics if `frame` is not a slot of this set.
    pub fn load(&mut self, frame: FrameId, page: PageId) -> Option<PageId> {
        assert!(
            frame.0 < self.slots.len(),
            "{} out of range for {} frames",
            frame,
            self.slots.len()
        );
        self.slots[frame.0].replace(page)
    }

    /// Number of occupied slots.
    pub fn resident_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Slot contents in index order.
    #[inline]
    pub fn as_slice(&self) -> &[Option<PageId>] {
        &self.slots
    }

    /// Owned copy of the slot contents, recorded into traces.
    pub fn snapshot(&self) -> Vec<Option<PageId>> {
        self.slots.clone()
    }
}
