//! Page replacement policies.
//!
//! Currently implements:
//! - [`FifoPolicy`] - Evicts in arrival order through a circular cursor
//! - [`LruPolicy`] - Evicts the page referenced furthest in the past
//! - [`OptimalPolicy`] - Evicts the page referenced furthest in the future
//!
//! A policy only decides *which slot* to overwrite on a miss. Hit detection,
//! loading and trace recording are shared by every policy and live in
//! [`crate::sim::evaluate`].

mod fifo;
mod lru;
mod optimal;

use std::fmt;
use std::str::FromStr;

use crate::common::{Error, FrameId, PageId, Result, SimConfig};
use crate::frames::FrameSet;
use crate::sim::{self, Evaluation};

pub use fifo::FifoPolicy;
pub use lru::LruPolicy;
pub use optimal::OptimalPolicy;

/// Victim selection for one simulation run.
///
/// A fresh policy is built for every run, so implementations can keep
/// per-run state (the FIFO cursor) without resetting it.
pub trait ReplacementPolicy {
    /// Which policy this is.
    fn kind(&self) -> PolicyKind;

    /// Choose the slot to overwrite for the miss at `sequence[position]`.
    ///
    /// Only called on a miss. `sequence` is the complete reference sequence
    /// of the run, so policies may look backwards (LRU) or forwards
    /// (Optimal) from `position`. The returned slot may be empty.
    fn select_victim(
        &mut self,
        frames: &FrameSet,
        sequence: &[PageId],
        position: usize,
    ) -> FrameId;
}

/// The available policies, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    Fifo,
    Lru,
    Optimal,
}

impl PolicyKind {
    /// Every policy, in the order they are run and reported.
    pub const ALL: [PolicyKind; 3] = [PolicyKind::Fifo, PolicyKind::Lru, PolicyKind::Optimal];

    /// Display name used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            PolicyKind::Fifo => "FIFO",
            PolicyKind::Lru => "LRU",
            PolicyKind::Optimal => "Optimal",
        }
    }

    /// Build a fresh policy instance.
    pub fn build(&self) -> Box<dyn ReplacementPolicy> {
        match self {
            PolicyKind::Fifo => Box::new(FifoPolicy::new()),
            PolicyKind::Lru => Box::new(LruPolicy::new()),
            PolicyKind::Optimal => Box::new(OptimalPolicy::new()),
        }
    }

    /// Run this policy over `sequence`.
    ///
    /// # Errors
    /// Configuration errors only; see [`sim::evaluate`].
    pub fn evaluate(&self, sequence: &[PageId], config: &SimConfig) -> Result<Evaluation> {
        let mut policy = self.build();
        sim::evaluate(policy.as_mut(), sequence, config)
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PolicyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(PolicyKind::Fifo),
            "lru" => Ok(PolicyKind::Lru),
            "optimal" | "opt" => Ok(PolicyKind::Optimal),
            _ => Err(Error::UnknownPolicy(s.to_string())),
        }
    }
}
