//! Efficiency comparison across all policies.

use log::info;

use crate::common::{PageId, Result, SimConfig};
use crate::policy::PolicyKind;
use crate::sim::Evaluation;

/// Which policy a comparison picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// All three policies faulted equally; Optimal is reported.
    AllEqual,
    /// One policy won under the precedence FIFO, then LRU, then Optimal.
    Best(PolicyKind),
}

impl Verdict {
    /// The policy reported as most efficient.
    pub fn policy(&self) -> PolicyKind {
        match self {
            Verdict::AllEqual => PolicyKind::Optimal,
            Verdict::Best(kind) => *kind,
        }
    }
}

/// Pick the most efficient policy from fault counts.
///
/// This is a fixed precedence, not a plain minimum:
/// 1. all three equal: Optimal
/// 2. FIFO no worse than both others: FIFO
/// 3. LRU no worse than both others: LRU
/// 4. otherwise Optimal
///
/// So a FIFO/LRU tie goes to FIFO and an LRU/Optimal tie goes to LRU.
///
/// # Example
/// ```
/// use pagesim::{select_most_efficient, PolicyKind, Verdict};
///
/// assert_eq!(select_most_efficient(3, 3, 3), Verdict::AllEqual);
/// assert_eq!(select_most_efficient(4, 4, 5), Verdict::Best(PolicyKind::Fifo));
/// assert_eq!(select_most_efficient(5, 4, 4), Verdict::Best(PolicyKind::Lru));
/// ```
pub fn select_most_efficient(fifo: usize, lru: usize, optimal: usize) -> Verdict {
    if fifo == lru && lru == optimal {
        Verdict::AllEqual
    } else if fifo <= lru && fifo <= optimal {
        Verdict::Best(PolicyKind::Fifo)
    } else if lru <= fifo && lru <= optimal {
        Verdict::Best(PolicyKind::Lru)
    } else {
        Verdict::Best(PolicyKind::Optimal)
    }
}

/// All three evaluations of one sequence plus the verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub fifo: Evaluation,
    pub lru: Evaluation,
    pub optimal: Evaluation,
    pub verdict: Verdict,
}

impl Comparison {
    /// Evaluation of `kind`.
    pub fn get(&self, kind: PolicyKind) -> &Evaluation {
        match kind {
            PolicyKind::Fifo => &self.fifo,
            PolicyKind::Lru => &self.lru,
            PolicyKind::Optimal => &self.optimal,
        }
    }

    /// Evaluations in report order (FIFO, LRU, Optimal).
    pub fn evaluations(&self) -> [&Evaluation; 3] {
        [&self.fifo, &self.lru, &self.optimal]
    }

    /// The policy reported as most efficient.
    pub fn most_efficient(&self) -> PolicyKind {
        self.verdict.policy()
    }

    /// Fault count of the most efficient policy.
    pub fn best_fault_count(&self) -> usize {
        self.get(self.most_efficient()).fault_count()
    }
}

/// Run FIFO, LRU and Optimal over the same sequence and pick the best.
///
/// Every policy starts from empty frames and sees the complete sequence.
///
/// # Errors
/// Configuration errors, raised before any policy runs.
///
/// # Example
/// ```
/// use pagesim::{compare, pages, PolicyKind, SimConfig};
///
/// let config = SimConfig::new(3).unwrap();
/// let cmp = compare(&pages(&[1, 2, 3, 1, 2, 3]), &config).unwrap();
/// assert_eq!(cmp.most_efficient(), PolicyKind::Optimal);
/// ```
pub fn compare(sequence: &[PageId], config: &SimConfig) -> Result<Comparison> {
    config.check_sequence(sequence.len())?;

    let fifo = PolicyKind::Fifo.evaluate(sequence, config)?;
    let lru = PolicyKind::Lru.evaluate(sequence, config)?;
    let optimal = PolicyKind::Optimal.evaluate(sequence, config)?;

    let verdict = select_most_efficient(
        fifo.fault_count(),
        lru.fault_count(),
        optimal.fault_count(),
    );
    info!(
        "faults over {} references with {} frames: FIFO={} LRU={} Optimal={}, best {}",
        sequence.len(),
        config.frames_count(),
        fifo.fault_count(),
        lru.fault_count(),
        optimal.fault_count(),
        verdict.policy()
    );

    Ok(Comparison {
        fifo,
        lru,
        optimal,
        verdict,
    })
}
