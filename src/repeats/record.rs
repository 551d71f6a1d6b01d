//! Repeat records and the threshold-gated emitter

use crate::error::Result;

/// A completed repeat run, borrowed from scanner state
///
/// Coordinates are 0-based over sequence symbols (delimiters excluded),
/// half-open: `start..end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepeatRecord<'a> {
    /// Segment (chromosome) label
    pub label: &'a str,
    /// First position of the run
    pub start: u64,
    /// One past the last position of the run
    pub end: u64,
    /// Total run length in bases
    pub length: u32,
    /// Repeating unit, in the phase the run started with
    pub unit: &'a [u8],
}

impl RepeatRecord<'_> {
    /// Owned copy of this record
    pub fn to_owned_repeat(&self) -> Repeat {
        Repeat {
            label: self.label.to_string(),
            start: self.start,
            end: self.end,
            length: self.length,
            unit: self.unit.to_vec(),
        }
    }
}

/// Owned form of [`RepeatRecord`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repeat {
    /// Segment (chromosome) label
    pub label: String,
    /// First position of the run
    pub start: u64,
    /// One past the last position of the run
    pub end: u64,
    /// Total run length in bases
    pub length: u32,
    /// Repeating unit
    pub unit: Vec<u8>,
}

impl Repeat {
    /// Unit as text (lossy for non-UTF-8 input)
    pub fn unit_str(&self) -> String {
        String::from_utf8_lossy(&self.unit).into_owned()
    }
}

/// Destination for emitted repeat records
pub trait RecordSink {
    /// Consume one record
    fn write_record(&mut self, record: &RepeatRecord<'_>) -> Result<()>;
}

impl RecordSink for Vec<Repeat> {
    fn write_record(&mut self, record: &RepeatRecord<'_>) -> Result<()> {
        self.push(record.to_owned_repeat());
        Ok(())
    }
}

impl<S: RecordSink + ?Sized> RecordSink for &mut S {
    fn write_record(&mut self, record: &RepeatRecord<'_>) -> Result<()> {
        (**self).write_record(record)
    }
}

/// Forwards runs of at least `threshold` bases to a sink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordEmitter {
    threshold: u32,
}

impl RecordEmitter {
    /// Emitter reporting runs of `threshold` bases or more
    pub fn new(threshold: u32) -> Self {
        Self { threshold }
    }

    /// Minimum reported run length
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Whether a run of `run_length` bases would be reported
    #[inline]
    pub fn accepts(&self, run_length: u32) -> bool {
        run_length >= self.threshold
    }

    /// Report the run ending at `end` if it is long enough
    ///
    /// Returns whether a record was written.
    pub fn emit<S: RecordSink + ?Sized>(
        &self,
        sink: &mut S,
        label: &str,
        end: u64,
        run_length: u32,
        unit: &[u8],
    ) -> Result<bool> {
        if !self.accepts(run_length) {
            return Ok(false);
        }

        let record = RepeatRecord {
            label,
            start: end - u64::from(run_length),
            end,
            length: run_length,
            unit,
        };
        sink.write_record(&record)?;
        Ok(true)
    }
}
