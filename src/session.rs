//! Session driver.
//!
//! A [`Session`] owns the reference sequence as it grows. Every comparison
//! re-runs all policies on the complete sequence so far; nothing from an
//! earlier run is reused.
//!
//! [`run_interactive`] drives a session from a prompt loop: it asks for the
//! frame count and the initial references, prints the report, then keeps
//! offering to append more references until the user answers `n`.

use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::path::Path;

use log::{debug, warn};

use crate::common::{Error, PageId, Result, SimConfig};
use crate::policy::PolicyKind;
use crate::report::TraceReporter;
use crate::sim::{compare, Comparison, Evaluation};

/// A growing reference sequence bound to one configuration.
#[derive(Debug, Clone)]
pub struct Session {
    config: SimConfig,
    sequence: Vec<PageId>,
}

impl Session {
    /// Start a session with an empty sequence.
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            sequence: Vec::new(),
        }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// The references appended so far.
    pub fn sequence(&self) -> &[PageId] {
        &self.sequence
    }

    /// Append references.
    ///
    /// # Errors
    /// - `Error::SequenceTooLong` if the result would exceed the configured
    ///   maximum. The sequence is left unchanged.
    pub fn extend(&mut self, pages: &[PageId]) -> Result<()> {
        self.config
            .check_sequence(self.sequence.len() + pages.len())?;
        self.sequence.extend_from_slice(pages);
        debug!(
            "appended {} references, sequence now {}",
            pages.len(),
            self.sequence.len()
        );
        Ok(())
    }

    /// Compare all policies over the current sequence.
    pub fn compare(&self) -> Result<Comparison> {
        compare(&self.sequence, &self.config)
    }

    /// Run a single policy over the current sequence.
    pub fn evaluate(&self, kind: PolicyKind) -> Result<Evaluation> {
        kind.evaluate(&self.sequence, &self.config)
    }
}

/// Parse a page list separated by whitespace and/or commas.
///
/// # Example
/// ```
/// use pagesim::{pages, parse_pages};
///
/// assert_eq!(parse_pages("7, 0 1,2").unwrap(), pages(&[7, 0, 1, 2]));
/// assert!(parse_pages("1 two 3").is_err());
/// ```
pub fn parse_pages(text: &str) -> Result<Vec<PageId>> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(str::parse::<PageId>)
        .collect()
}

/// Read a page list from a text file.
///
/// Anything after `#` on a line is a comment.
pub fn load_pages(path: impl AsRef<Path>) -> Result<Vec<PageId>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;

    let mut pages = Vec::new();
    for line in content.lines() {
        let line = line.split('#').next().unwrap_or_default();
        pages.extend(parse_pages(line)?);
    }
    debug!("loaded {} references from {}", pages.len(), path.display());
    Ok(pages)
}

/// Options for [`run_interactive`].
#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    /// Longest sequence the session accepts.
    pub max_references: usize,
    /// Print totals only, without per-step tables.
    pub summary_only: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            max_references: crate::common::config::MAX_REFERENCES,
            summary_only: false,
        }
    }
}

/// Whitespace-separated tokens read on demand, like `scanf`.
struct Prompter<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    fn prompt(&mut self, message: &str) -> Result<()> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;
        Ok(())
    }

    /// Next token, or None at end of input.
    fn next_token(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }

    fn expect_token(&mut self) -> Result<String> {
        self.next_token()?.ok_or(Error::UnexpectedEof)
    }

    fn read_count(&mut self) -> Result<usize> {
        let token = self.expect_token()?;
        token
            .parse()
            .map_err(|_| Error::InvalidInput(format!("expected a count, got {:?}", token)))
    }

    fn read_pages(&mut self, count: usize) -> Result<Vec<PageId>> {
        (0..count)
            .map(|_| -> Result<PageId> { self.expect_token()?.parse() })
            .collect()
    }

    fn report(&mut self, session: &Session, summary_only: bool) -> Result<()> {
        let cmp = session.compare()?;
        let mut reporter = TraceReporter::new(&mut self.output);
        if summary_only {
            reporter = reporter.summary_only();
        }
        reporter.write_comparison(&cmp)
    }
}

/// Run the interactive prompt loop and return the final session.
///
/// Appends that would push the sequence past the maximum are reported and
/// skipped; the loop keeps going with the previous sequence. End of input at
/// the "add more pages" prompt ends the session normally, anywhere else it is
/// `Error::UnexpectedEof`.
pub fn run_interactive<R: BufRead, W: Write>(
    input: R,
    output: W,
    options: SessionOptions,
) -> Result<Session> {
    let mut io = Prompter::new(input, output);

    io.prompt("Enter the number of frames: ")?;
    let frames_count = io.read_count()?;
    let config = SimConfig::new(frames_count)?.with_max_references(options.max_references);
    let mut session = Session::new(config);

    io.prompt("Enter the number of pages: ")?;
    let count = io.read_count()?;
    io.prompt("Enter the page reference sequence: ")?;
    let pages = io.read_pages(count)?;
    session.extend(&pages)?;
    io.report(&session, options.summary_only)?;

    loop {
        io.prompt("\nDo you want to add more pages? (y/n): ")?;
        let answer = match io.next_token()? {
            Some(answer) => answer,
            None => break,
        };
        if answer.starts_with(['n', 'N']) {
            break;
        }

        io.prompt("\nEnter the number of new pages: ")?;
        let count = io.read_count()?;
        io.prompt("Enter the new pages: ")?;
        let pages = io.read_pages(count)?;

        match session.extend(&pages) {
            Ok(()) => io.report(&session, options.summary_only)?,
            Err(err) if err.is_configuration() => {
                warn!("append rejected: {}", err);
                writeln!(io.output, "\n{}", err)?;
            }
            Err(err) => return Err(err),
        }
    }

    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::pages;

    #[test]
    fn test_parse_pages() {
        assert_eq!(parse_pages("").unwrap(), Vec::<PageId>::new());
        assert_eq!(parse_pages(" 1\t2\n3 ").unwrap(), pages(&[1, 2, 3]));
        assert_eq!(parse_pages("4,5,,6").unwrap(), pages(&[4, 5, 6]));
        assert!(matches!(parse_pages("1 -2"), Err(Error::InvalidPage(_))));
    }

    #[test]
    fn test_extend_rejects_overflow_unchanged() {
        let config = SimConfig::new(2).unwrap().with_max_references(3);
        let mut session = Session::new(config);

        session.extend(&pages(&[1, 2])).unwrap();
        assert!(matches!(
            session.extend(&pages(&[3, 4])),
            Err(Error::SequenceTooLong { len: 4, max: 3 })
        ));
        assert_eq!(session.sequence(), pages(&[1, 2]).as_slice());

        session.extend(&pages(&[3])).unwrap();
        assert_eq!(session.sequence().len(), 3);
    }

    #[test]
    fn test_prompter_tokens_span_lines() {
        let input = "3\n1 2\n\n 3 \n";
        let mut io = Prompter::new(input.as_bytes(), Vec::new());

        assert_eq!(io.read_count().unwrap(), 3);
        assert_eq!(io.read_pages(3).unwrap(), pages(&[1, 2, 3]));
        assert!(io.next_token().unwrap().is_none());
        assert!(matches!(io.expect_token(), Err(Error::UnexpectedEof)));
    }

    #[test]
    fn test_prompter_bad_count() {
        let mut io = Prompter::new("abc\n".as_bytes(), Vec::new());
        assert!(matches!(io.read_count(), Err(Error::InvalidInput(_))));
    }
}
