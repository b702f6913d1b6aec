//! Simulation configuration.

use log::warn;

use crate::common::{Error, Result};

/// Default upper bound on the length of a reference sequence.
///
/// The session driver grows the sequence between runs; once it reaches this
/// many references further appends are rejected.
pub const MAX_REFERENCES: usize = 100;

/// Smallest usable frame count.
pub const MIN_FRAMES: usize = 1;

/// Bounds for one simulation run.
///
/// A `SimConfig` is validated on construction, so holding one means the frame
/// count is usable. Sequence length is checked separately with
/// [`SimConfig::check_sequence`] because the sequence grows after the
/// configuration is fixed.
///
/// # Example
/// ```
/// use pagesim::SimConfig;
///
/// let config = SimConfig::new(3).unwrap();
/// assert_eq!(config.frames_count(), 3);
/// assert!(config.check_sequence(100).is_ok());
/// assert!(config.check_sequence(101).is_err());
/// assert!(SimConfig::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    frames_count: usize,
    max_references: usize,
}

impl SimConfig {
    /// Create a configuration with `frames_count` frames and the default
    /// sequence limit.
    ///
    /// # Errors
    /// - `Error::InvalidFrameCount` if `frames_count` is 0
    pub fn new(frames_count: usize) -> Result<Self> {
        let config = Self {
            frames_count,
            max_references: MAX_REFERENCES,
        };
        config.validate()?;
        Ok(config)
    }

    /// Replace the maximum sequence length.
    pub fn with_max_references(mut self, max_references: usize) -> Self {
        self.max_references = max_references;
        self
    }

    /// Number of frames each policy gets.
    #[inline]
    pub fn frames_count(&self) -> usize {
        self.frames_count
    }

    /// Longest reference sequence a run accepts.
    #[inline]
    pub fn max_references(&self) -> usize {
        self.max_references
    }

    /// Check the frame count.
    pub fn validate(&self) -> Result<()> {
        if self.frames_count < MIN_FRAMES {
            warn!("rejecting frame count {}", self.frames_count);
            return Err(Error::InvalidFrameCount(self.frames_count));
        }
        Ok(())
    }

    /// Check that a sequence of `len` references fits this configuration.
    pub fn check_sequence(&self, len: usize) -> Result<()> {
        self.validate()?;
        if len > self.max_references {
            warn!(
                "rejecting sequence of {} references (max {})",
                len, self.max_references
            );
            return Err(Error::SequenceTooLong {
                len,
                max: self.max_references,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_frames() {
        assert!(matches!(
            SimConfig::new(0),
            Err(Error::InvalidFrameCount(0))
        ));
        assert!(SimConfig::new(MIN_FRAMES).is_ok());
    }

    #[test]
    fn test_default_limit() {
        let config = SimConfig::new(4).unwrap();
        assert_eq!(config.max_references(), MAX_REFERENCES);
        assert!(config.check_sequence(0).is_ok());
        assert!(config.check_sequence(MAX_REFERENCES).is_ok());
    }

    #[test]
    fn test_check_sequence_too_long() {
        let config = SimConfig::new(2).unwrap().with_max_references(5);
        match config.check_sequence(6) {
            Err(Error::SequenceTooLong { len, max }) => {
                assert_eq!(len, 6);
                assert_eq!(max, 5);
            }
            other => panic!("Expected SequenceTooLong, got {:?}", other),
        }
    }
}
