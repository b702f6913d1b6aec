//! pagesim - a page replacement simulator.
//!
//! Runs FIFO, LRU and Optimal replacement over the same page reference
//! sequence, records a per-reference trace for each, and picks the policy
//! with the fewest page faults.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │        Session Driver (session) + CLI (main.rs)          │   │
//! │  │   growing reference sequence, prompts, file input        │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                 ↓                              ↓                │
//! │  ┌───────────────────────────────┐  ┌──────────────────────┐   │
//! │  │   Comparator (sim/)           │→ │ Reporter (report)    │   │
//! │  │   FIFO + LRU + Optimal        │  │ ASCII trace tables   │   │
//! │  └───────────────────────────────┘  └──────────────────────┘   │
//! │                 ↓                                               │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │     Evaluation loop (sim/) + Policies (policy/)          │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │    Replacement Policies: FIFO | LRU | Optimal   │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                 ↓                                               │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │            FrameSet (frames/) + common/                  │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, FrameId, Error, config)
//! - [`frames`] - Resident page slots
//! - [`policy`] - Replacement policies
//! - [`sim`] - Evaluation loop, traces and comparison
//! - [`report`] - Text rendering of traces
//! - [`session`] - Growing sequences and the interactive driver
//!
//! # Quick Start
//! ```
//! use pagesim::{compare, pages, PolicyKind, SimConfig};
//!
//! let config = SimConfig::new(3).unwrap();
//! let sequence = pages(&[7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2]);
//!
//! let cmp = compare(&sequence, &config).unwrap();
//! assert_eq!(cmp.optimal.fault_count(), 7);
//! assert_eq!(cmp.most_efficient(), PolicyKind::Optimal);
//! ```

pub mod common;
pub mod frames;
pub mod policy;
pub mod report;
pub mod session;
pub mod sim;

// Re-export commonly used items at crate root for convenience
pub use common::config::MAX_REFERENCES;
pub use common::{pages, Error, FrameId, PageId, Result, SimConfig};

pub use frames::FrameSet;
pub use policy::{FifoPolicy, LruPolicy, OptimalPolicy, PolicyKind, ReplacementPolicy};
pub use report::{render_comparison, TraceReporter};
pub use session::{load_pages, parse_pages, run_interactive, Session, SessionOptions};
pub use sim::{
    compare, evaluate, select_most_efficient, Comparison, Evaluation, Outcome, Trace, TraceStats,
    TraceStep, Verdict,
};
