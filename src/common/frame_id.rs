//! Frame identifier type.

use std::fmt;

/// Index of a slot in a [`FrameSet`](crate::frames::FrameSet).
///
/// Slot order is significant: FIFO fills slots through a cursor and the LRU
/// and Optimal policies break ties toward the lowest slot.
///
/// # Example
/// ```
/// use pagesim::FrameId;
///
/// let frame_id = FrameId::new(0);
/// assert_eq!(frame_id.to_string(), "Frame1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(pub usize);

impl FrameId {
    /// Create a new FrameId.
    #[inline]
    pub fn new(id: usize) -> Self {
        FrameId(id)
    }
}

/// Frames are shown 1-based, matching the report column headers.
impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame{}", self.0 + 1)
    }
}
