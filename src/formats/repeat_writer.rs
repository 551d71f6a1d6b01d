//! Tab-separated repeat record writer
//!
//! # Format
//!
//! Two summary lines, then one BED-like line per repeat with 0-based,
//! half-open coordinates:
//!
//! ```text
//! #repeat_length: 2
//! #total_length: 4
//! chr1	0	6	unit=AT
//! chr1	120	134	unit=CA
//! ```
//!
//! # Example
//!
//! ```
//! use repeatscan::formats::RepeatWriter;
//! use repeatscan::repeats::{RecordSink, RepeatRecord};
//! use repeatscan::ScanConfig;
//!
//! # fn main() -> repeatscan::Result<()> {
//! let config = ScanConfig::new(2, 4)?;
//! let mut writer = RepeatWriter::new(Vec::new());
//! writer.write_header(&config)?;
//! writer.write_record(&RepeatRecord {
//!     label: "chr1",
//!     start: 0,
//!     end: 6,
//!     length: 6,
//!     unit: b"AT",
//! })?;
//!
//! let text = String::from_utf8(writer.finish()?).unwrap();
//! assert_eq!(text, "#repeat_length: 2\n#total_length: 4\nchr1\t0\t6\tunit=AT\n");
//! # Ok(())
//! # }
//! ```

use crate::config::ScanConfig;
use crate::error::Result;
use crate::repeats::{RecordSink, RepeatRecord};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Streaming writer for repeat records
pub struct RepeatWriter<W: Write> {
    writer: BufWriter<W>,
    records_written: u64,
}

impl RepeatWriter<File> {
    /// Create a writer to a new file at `path`
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(File::create(path)?))
    }
}

impl RepeatWriter<io::Stdout> {
    /// Create a writer to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> RepeatWriter<W> {
    /// Wrap `inner` in a buffered record writer
    pub fn new(inner: W) -> Self {
        Self {
            writer: BufWriter::new(inner),
            records_written: 0,
        }
    }

    /// Write the period and minimum length summary lines
    pub fn write_header(&mut self, config: &ScanConfig) -> Result<()> {
        writeln!(self.writer, "#repeat_length: {}", config.period())?;
        writeln!(self.writer, "#total_length: {}", config.threshold())?;
        Ok(())
    }

    /// Number of records written so far
    pub fn records_written(&self) -> u64 {
        self.records_written
    }

    /// Flush buffered output and return the inner writer
    pub fn finish(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| e.into_error().into())
    }
}

impl<W: Write> RecordSink for RepeatWriter<W> {
    fn write_record(&mut self, record: &RepeatRecord<'_>) -> Result<()> {
        write!(
            self.writer,
            "{}\t{}\t{}\tunit=",
            record.label, record.start, record.end
        )?;
        self.writer.write_all(record.unit)?;
        self.writer.write_all(b"\n")?;
        self.records_written += 1;
        Ok(())
    }
}
