//! Trace statistics.

use std::fmt;

/// Aggregate counters of one policy run.
///
/// Always satisfies `hits + faults == references`.
///
/// # Example
/// ```
/// use pagesim::{pages, PolicyKind, SimConfig};
///
/// let config = SimConfig::new(3).unwrap();
/// let eval = PolicyKind::Fifo.evaluate(&pages(&[1, 2, 1]), &config).unwrap();
/// let stats = eval.stats();
/// assert_eq!(stats.faults, 2);
/// println!("{}", stats);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraceStats {
    /// Number of references processed.
    pub references: usize,

    /// References whose page was already resident.
    pub hits: usize,

    /// References that had to load their page.
    pub faults: usize,

    /// Faults that displaced a resident page (faults into empty slots are
    /// not evictions).
    pub evictions: usize,
}

impl TraceStats {
    /// Hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.hits as f64 / self.references as f64
        }
    }

    /// Fault rate (0.0 to 1.0).
    pub fn fault_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.faults as f64 / self.references as f64
        }
    }
}

impl fmt::Display for TraceStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ hits: {}, faults: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.hits,
            self.faults,
            self.evictions,
            self.hit_rate() * 100.0
        )
    }
}
