//! Resident page frames.
//!
//! # Components
//! - [`FrameSet`] - Fixed-capacity slots holding the currently resident pages

mod frame_set;

pub use frame_set::FrameSet;
