//! Repeat scanning state machines
//!
//! Two independent single-pass scanners share the [`SegmentScanner`]
//! interface:
//!
//! - [`HomopolymerScanner`]: runs of one repeated base (period 1)
//! - [`PeriodScanner`]: tandem repeats of a 2-4 base unit, with degenerate
//!   units (lower-period repeats, homopolymers) filtered by [`UnitValidator`]
//!
//! [`Scanner`] picks one of them from the configured period. The choice is
//! fixed for the whole run.
//!
//! # Example
//!
//! ```
//! use repeatscan::repeats::{Repeat, SegmentScanner};
//! use repeatscan::ScanConfig;
//!
//! # fn main() -> repeatscan::Result<()> {
//! let config = ScanConfig::new(2, 4)?;
//! let mut scanner = config.scanner();
//! let mut records: Vec<Repeat> = Vec::new();
//!
//! scanner.begin_segment("chr1");
//! for &base in b"ATATATG" {
//!     scanner.push(base, &mut records)?;
//! }
//! scanner.finish(&mut records)?;
//!
//! assert_eq!(records.len(), 1);
//! assert_eq!((records[0].start, records[0].end), (0, 6));
//! # Ok(())
//! # }
//! ```

pub mod homopolymer;
pub mod period;
pub mod record;
pub mod ring;
pub mod unit;

pub use homopolymer::HomopolymerScanner;
pub use period::PeriodScanner;
pub use record::{RecordEmitter, RecordSink, Repeat, RepeatRecord};
pub use ring::{HistoryRing, MAX_PERIOD};
pub use unit::UnitValidator;

use crate::error::Result;

/// Unknown base; never part of a reported repeat
pub const TERMINATOR: u8 = b'N';

/// A scanner that consumes one segment's bases in order
pub trait SegmentScanner {
    /// Start a new segment: restart positions at 0 and drop any open run
    fn begin_segment(&mut self, label: &str);

    /// Consume the next base; returns whether a record was emitted
    fn push<S: RecordSink + ?Sized>(&mut self, symbol: u8, sink: &mut S) -> Result<bool>;

    /// End of segment: report the open run if long enough
    fn finish<S: RecordSink + ?Sized>(&mut self, sink: &mut S) -> Result<bool>;

    /// Bases consumed in the current segment
    fn position(&self) -> u64;
}

/// Scanner selected by period
#[derive(Debug, Clone)]
pub enum Scanner {
    /// Period 1
    Homopolymer(HomopolymerScanner),
    /// Periods 2-4
    Period(PeriodScanner),
}

impl SegmentScanner for Scanner {
    fn begin_segment(&mut self, label: &str) {
        match self {
            Scanner::Homopolymer(s) => s.begin_segment(label),
            Scanner::Period(s) => s.begin_segment(label),
        }
    }

    #[inline]
    fn push<S: RecordSink + ?Sized>(&mut self, symbol: u8, sink: &mut S) -> Result<bool> {
        match self {
            Scanner::Homopolymer(s) => s.push(symbol, sink),
            Scanner::Period(s) => s.push(symbol, sink),
        }
    }

    fn finish<S: RecordSink + ?Sized>(&mut self, sink: &mut S) -> Result<bool> {
        match self {
            Scanner::Homopolymer(s) => s.finish(sink),
            Scanner::Period(s) => s.finish(sink),
        }
    }

    fn position(&self) -> u64 {
        match self {
            Scanner::Homopolymer(s) => s.position(),
            Scanner::Period(s) => s.position(),
        }
    }
}
