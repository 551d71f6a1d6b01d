//! Scan configuration
//!
//! Validation happens once, before any input is opened.

use crate::error::{RepeatError, Result};
use crate::repeats::{HomopolymerScanner, PeriodScanner, Scanner, UnitValidator};
use std::fmt;

/// Repeat unit length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    /// Single base (homopolymer)
    Homopolymer,
    /// Dinucleotide
    Di,
    /// Trinucleotide
    Tri,
    /// Tetranucleotide
    Tetra,
}

impl Period {
    /// Unit length in bases
    pub fn unit_len(self) -> usize {
        match self {
            Period::Homopolymer => 1,
            Period::Di => 2,
            Period::Tri => 3,
            Period::Tetra => 4,
        }
    }

    /// Degeneracy check for this period (`None` for homopolymers)
    pub fn validator(self) -> Option<UnitValidator> {
        UnitValidator::for_period(self.unit_len())
    }
}

impl TryFrom<u32> for Period {
    type Error = RepeatError;

    fn try_from(period: u32) -> Result<Self> {
        match period {
            1 => Ok(Period::Homopolymer),
            2 => Ok(Period::Di),
            3 => Ok(Period::Tri),
            4 => Ok(Period::Tetra),
            _ => Err(RepeatError::InvalidPeriod { period }),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.unit_len())
    }
}

/// Validated period and minimum total length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfig {
    period: Period,
    threshold: u32,
}

impl ScanConfig {
    /// Validate `period` (1-4) and `threshold` (> period)
    ///
    /// # Example
    ///
    /// ```
    /// use repeatscan::{RepeatError, ScanConfig};
    ///
    /// assert!(ScanConfig::new(3, 12).is_ok());
    /// assert!(matches!(ScanConfig::new(5, 12), Err(RepeatError::InvalidPeriod { period: 5 })));
    /// assert!(matches!(ScanConfig::new(4, 4), Err(RepeatError::ThresholdTooShort { .. })));
    /// ```
    pub fn new(period: u32, threshold: u32) -> Result<Self> {
        let unit = Period::try_from(period)?;
        if threshold <= period {
            return Err(RepeatError::ThresholdTooShort { threshold, period });
        }
        Ok(Self {
            period: unit,
            threshold,
        })
    }

    /// Repeat period
    pub fn period(&self) -> Period {
        self.period
    }

    /// Minimum reported run length
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Build the scanner for this period
    pub fn scanner(&self) -> Scanner {
        match self.period.validator() {
            Some(validator) => Scanner::Period(PeriodScanner::new(validator, self.threshold)),
            None => Scanner::Homopolymer(HomopolymerScanner::new(self.threshold)),
        }
    }
}
