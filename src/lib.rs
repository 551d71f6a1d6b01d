//! repeatscan: streaming homopolymer and short tandem repeat detection
//!
//! Scans FASTA sequences in a single forward pass and reports maximal runs
//! that are either homopolymers (period 1) or tandem repeats of a 2-4 base
//! unit, at or above a minimum total length. Memory use per position is
//! constant: the period-N scanner keeps only the last `period` bases.
//!
//! Units that are really lower-period repeats (e.g. `ATAT` at period 4, or
//! `AA` at period 2) are filtered out so a repeat is reported once, at its
//! true period.
//!
//! # Example
//!
//! ```
//! use repeatscan::formats::RepeatWriter;
//! use repeatscan::{scan_fasta, ScanConfig};
//!
//! # fn main() -> repeatscan::Result<()> {
//! let config = ScanConfig::new(2, 4)?;
//! let mut writer = RepeatWriter::new(Vec::new());
//! writer.write_header(&config)?;
//! scan_fasta(&b">chr1\nATATATG\n"[..], &config, &mut writer)?;
//!
//! let text = String::from_utf8(writer.finish()?).unwrap();
//! assert!(text.ends_with("chr1\t0\t6\tunit=AT\n"));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod formats;
pub mod io;
pub mod repeats;
pub mod scan;

pub use config::{Period, ScanConfig};
pub use error::{RepeatError, Result};
pub use scan::{scan_fasta, scan_source, ScanSummary};
