//! Error types for repeatscan
//!
//! Configuration problems are reported before any input is read. Malformed
//! FASTA headers stop the scan. Nothing here terminates the process; the
//! binary decides on the exit status.

use std::io;
use thiserror::Error;

/// Result type alias for repeatscan operations
pub type Result<T> = std::result::Result<T, RepeatError>;

/// Error types that can occur while configuring or running a scan
#[derive(Debug, Error)]
pub enum RepeatError {
    /// I/O error (unreadable input, failed write)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Repeat period outside the supported range
    #[error("Repeat length must be in [1,4], got {period}")]
    InvalidPeriod {
        /// Requested period
        period: u32,
    },

    /// Minimum total length does not exceed the period
    #[error("Total length ({threshold}) must be greater than repeat length ({period})")]
    ThresholdTooShort {
        /// Requested minimum total length
        threshold: u32,
        /// Requested period
        period: u32,
    },

    /// FASTA header label longer than the supported bound
    #[error("Chromosome label '{label}...' exceeds {max} characters")]
    LabelTooLong {
        /// The first `max` bytes of the label
        label: String,
        /// Maximum supported label length
        max: usize,
    },

    /// FASTA header without a label
    #[error("Error when parsing chromosome header: segment {segment} has no label")]
    MissingLabel {
        /// 1-based index of the offending segment
        segment: usize,
    },

    /// Input contained no FASTA header
    #[error("No FASTA records found in input")]
    NoSequences,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let err: RepeatError = io::Error::new(io::ErrorKind::NotFound, "missing.fa").into();
        assert!(matches!(err, RepeatError::Io(_)));
        assert!(err.to_string().contains("missing.fa"));
    }

    #[test]
    fn test_config_error_messages() {
        let err = RepeatError::InvalidPeriod { period: 5 };
        assert_eq!(err.to_string(), "Repeat length must be in [1,4], got 5");

        let err = RepeatError::ThresholdTooShort { threshold: 2, period: 2 };
        assert!(err.to_string().contains("must be greater than"));
    }
}
