//! Trace reporting.
//!
//! Renders evaluations as ASCII tables, one row per reference, followed by
//! hit/miss totals and the efficiency verdict:
//!
//! ```text
//! FIFO Page Replacement Algorithm
//! +--------+-----------+--------+--------+
//! |  Page  |   Status  | Frame1 | Frame2 |
//! +--------+-----------+--------+--------+
//! |    1   | Miss      |   1    |   -    |
//! |    1   | Hit       |   1    |   -    |
//! +--------+-----------+--------+--------+
//! Total Page Hits: 1/2
//! Total Page Miss: 1/2
//! ```

use std::io::Write;

use crate::common::{PageId, Result};
use crate::sim::{Comparison, Evaluation, TraceStep, Verdict};

/// Writes evaluation reports to any `Write` sink.
#[derive(Debug)]
pub struct TraceReporter<W: Write> {
    out: W,
    tables: bool,
}

impl<W: Write> TraceReporter<W> {
    /// Create a reporter that prints full per-step tables.
    pub fn new(out: W) -> Self {
        Self { out, tables: true }
    }

    /// Only print totals and the verdict, no per-step tables.
    pub fn summary_only(mut self) -> Self {
        self.tables = false;
        self
    }

    /// Write one policy's trace and totals.
    ///
    /// In summary-only mode the table is replaced by hit/fault rates.
    pub fn write_evaluation(&mut self, eval: &Evaluation) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{} Page Replacement Algorithm", eval.policy)?;

        if self.tables {
            let frames_count = eval.frames_count;
            let width = column_width(eval);
            self.write_border(frames_count, width)?;
            write!(self.out, "|{:^width$}|   Status  |", "Page")?;
            for i in 0..frames_count {
                write!(self.out, "{:^width$}|", format!("Frame{}", i + 1))?;
            }
            writeln!(self.out)?;
            self.write_border(frames_count, width)?;

            for step in &eval.trace {
                self.write_row(step, width)?;
            }
            self.write_border(frames_count, width)?;
        }

        let total = eval.references();
        writeln!(self.out, "Total Page Hits: {}/{}", eval.hit_count(), total)?;
        writeln!(self.out, "Total Page Miss: {}/{}", eval.fault_count(), total)?;

        if !self.tables {
            let stats = eval.stats();
            writeln!(
                self.out,
                "Hit Rate: {:.2}%, Fault Rate: {:.2}%, Evictions: {}",
                stats.hit_rate() * 100.0,
                stats.fault_rate() * 100.0,
                stats.evictions
            )?;
        }
        Ok(())
    }

    /// Write the efficiency analysis of a comparison.
    pub fn write_verdict(&mut self, cmp: &Comparison) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "--- Efficiency Analysis ---")?;
        match cmp.verdict {
            Verdict::AllEqual => writeln!(
                self.out,
                "All methods have the same faults. Choosing Optimal as the most efficient."
            )?,
            Verdict::Best(kind) => writeln!(
                self.out,
                "Most Efficient Method: {} with {} page faults",
                kind,
                cmp.get(kind).fault_count()
            )?,
        }
        Ok(())
    }

    /// Write every evaluation of `cmp` followed by the verdict.
    pub fn write_comparison(&mut self, cmp: &Comparison) -> Result<()> {
        for eval in cmp.evaluations() {
            self.write_evaluation(eval)?;
        }
        self.write_verdict(cmp)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_border(&mut self, frames_count: usize, width: usize) -> Result<()> {
        let dashes = "-".repeat(width);
        write!(self.out, "+{}+-----------+", dashes)?;
        for _ in 0..frames_count {
            write!(self.out, "{}+", dashes)?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn write_row(&mut self, step: &TraceStep, width: usize) -> Result<()> {
        write!(
            self.out,
            "| {:>pad$}   | {:<9} |",
            step.page.0,
            step.outcome.to_string(),
            pad = width - 4
        )?;
        for slot in &step.frames {
            write!(self.out, "{:^width$}|", slot_label(*slot))?;
        }
        writeln!(self.out)?;
        Ok(())
    }
}

/// Width of the page and frame columns: 8, or wider when a page id or frame
/// label would not fit.
fn column_width(eval: &Evaluation) -> usize {
    let widest_page = eval
        .trace
        .steps()
        .iter()
        .map(|step| step.page.0.to_string().len())
        .max()
        .unwrap_or(0);
    let frame_label = format!("Frame{}", eval.frames_count).len();
    (widest_page + 4).max(frame_label + 2).max(8)
}

fn slot_label(slot: Option<PageId>) -> String {
    match slot {
        Some(page) => page.0.to_string(),
        None => "-".to_string(),
    }
}

/// Render a full comparison report to a string.
pub fn render_comparison(cmp: &Comparison) -> Result<String> {
    let mut reporter = TraceReporter::new(Vec::new());
    reporter.write_comparison(cmp)?;
    Ok(String::from_utf8_lossy(&reporter.into_inner()).into_owned())
}
