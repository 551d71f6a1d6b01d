//! Tandem repeat scanner for periods 2-4
//!
//! # Algorithm
//!
//! The scanner keeps the last `r` bases in a [`HistoryRing`] and the length
//! `n` of the candidate repeat ending at the current position.
//!
//! - While `n < r - 1` the ring is being filled: write the base, `n += 1`.
//! - When `n == r - 1` the ring is complete after this write. The unit is
//!   checked once; a valid unit sets `n = r`, a degenerate one leaves
//!   `n = r - 1` so the window slides by one base and is checked again.
//! - When `n >= r` the base is compared with the one `r` positions back
//!   (the slot it would overwrite). A match extends the run without writing.
//!   A mismatch reports the run, then writes the base and re-checks the
//!   window, keeping the tail of the old run as the start of a new candidate.
//!
//! An `N` reports the current run and restarts from an empty ring. The ring
//! contents are stale until refilled, which the fill phase guarantees.

use super::record::{RecordEmitter, RecordSink};
use super::ring::{HistoryRing, MAX_PERIOD};
use super::unit::UnitValidator;
use super::{SegmentScanner, TERMINATOR};
use crate::error::Result;

/// Single-pass scanner for period 2, 3 or 4 repeats
#[derive(Debug, Clone)]
pub struct PeriodScanner {
    ring: HistoryRing,
    validator: UnitValidator,
    emitter: RecordEmitter,
    label: String,
    position: u64,
    run_length: u32,
    unit_buffer: [u8; MAX_PERIOD],
}

impl PeriodScanner {
    /// Scanner using `validator`'s period, reporting runs of at least
    /// `threshold` bases
    pub fn new(validator: UnitValidator, threshold: u32) -> Self {
        Self {
            ring: HistoryRing::new(validator.period()),
            validator,
            emitter: RecordEmitter::new(threshold),
            label: String::new(),
            position: 0,
            run_length: 0,
            unit_buffer: [0; MAX_PERIOD],
        }
    }

    /// Repeat period
    pub fn period(&self) -> usize {
        self.ring.capacity()
    }

    /// Length of the candidate run ending at the current position
    pub fn run_length(&self) -> u32 {
        self.run_length
    }

    /// Write `symbol` at `p` and check the completed window
    #[inline]
    fn next_run_length(&mut self, p: u64, symbol: u8) -> u32 {
        self.ring.write(p, symbol);
        let period = self.period() as u32;
        if self.validator.is_degenerate(self.ring.slots()) {
            period - 1
        } else {
            period
        }
    }

    /// Report the run ending at `end` if it meets the threshold
    fn emit_run<S: RecordSink + ?Sized>(&mut self, sink: &mut S, end: u64) -> Result<bool> {
        let n = self.run_length;
        if !self.emitter.accepts(n) {
            return Ok(false);
        }

        let period = self.period();
        let offset = (end - u64::from(n)) % period as u64;
        self.ring.unit_from(offset, &mut self.unit_buffer);

        self.emitter
            .emit(sink, &self.label, end, n, &self.unit_buffer[..period])
    }
}

impl SegmentScanner for PeriodScanner {
    fn begin_segment(&mut self, label: &str) {
        self.label.clear();
        self.label.push_str(label);
        self.position = 0;
        self.run_length = 0;
    }

    fn push<S: RecordSink + ?Sized>(&mut self, symbol: u8, sink: &mut S) -> Result<bool> {
        let p = self.position;
        let boundary = self.period() as u32 - 1;

        let emitted = if symbol == TERMINATOR {
            let emitted = self.emit_run(sink, p)?;
            self.run_length = 0;
            emitted
        } else if self.run_length < boundary {
            self.ring.write(p, symbol);
            self.run_length += 1;
            false
        } else if self.run_length == boundary {
            self.run_length = self.next_run_length(p, symbol);
            false
        } else if self.ring.read(p) == symbol {
            self.run_length += 1;
            false
        } else {
            let emitted = self.emit_run(sink, p)?;
            self.run_length = self.next_run_length(p, symbol);
            emitted
        };

        self.position += 1;
        Ok(emitted)
    }

    fn finish<S: RecordSink + ?Sized>(&mut self, sink: &mut S) -> Result<bool> {
        let emitted = self.emit_run(sink, self.position)?;
        self.run_length = 0;
        Ok(emitted)
    }

    fn position(&self) -> u64 {
        self.position
    }
}
