//! Error types for pagesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// Configuration errors are raised before any policy runs. Once a
/// configuration is accepted, evaluation itself cannot fail; the remaining
/// variants come from the session driver reading user input.
#[derive(Debug, Error)]
pub enum Error {
    /// A frame set needs at least one slot.
    #[error("Frame count must be at least 1, got {0}")]
    InvalidFrameCount(usize),

    /// The reference sequence is longer than the configured maximum.
    #[error("Reference sequence has {len} pages, exceeding the maximum of {max}")]
    SequenceTooLong { len: usize, max: usize },

    /// A page reference token is not a non-negative integer.
    #[error("Invalid page reference: {0:?}")]
    InvalidPage(String),

    /// Interactive input that is not a page list but still malformed
    /// (e.g. a non-numeric count).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Policy name that doesn't match FIFO, LRU or Optimal.
    #[error("Unknown replacement policy: {0:?}")]
    UnknownPolicy(String),

    /// Input ran out while a prompt was still waiting for a value.
    #[error("Input ended unexpectedly")]
    UnexpectedEof,

    /// I/O error from reading input or writing a report.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error rejects the simulation configuration itself
    /// (as opposed to malformed user input or I/O).
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::InvalidFrameCount(_) | Error::SequenceTooLong { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidFrameCount(0);
        assert_eq!(format!("{}", err), "Frame count must be at least 1, got 0");

        let err = Error::SequenceTooLong { len: 101, max: 100 };
        assert_eq!(
            format!("{}", err),
            "Reference sequence has 101 pages, exceeding the maximum of 100"
        );

        let err = Error::InvalidPage("-3".to_string());
        assert_eq!(format!("{}", err), "Invalid page reference: \"-3\"");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();

        match err {
            Error::Io(_) => {} // Success
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_is_configuration() {
        assert!(Error::InvalidFrameCount(0).is_configuration());
        assert!(Error::SequenceTooLong { len: 2, max: 1 }.is_configuration());
        assert!(!Error::UnexpectedEof.is_configuration());
        assert!(!Error::UnknownPolicy("mru".into()).is_configuration());
    }
}
