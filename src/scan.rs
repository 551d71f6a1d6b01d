//! Scan driver: FASTA segments in, repeat records out

use crate::config::ScanConfig;
use crate::error::Result;
use crate::io::{DataSource, FastaSegments};
use crate::repeats::{RecordSink, SegmentScanner};
use std::io::BufRead;

/// Totals for one scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Segments (chromosomes) scanned
    pub segments: usize,
    /// Sequence bases consumed
    pub symbols: u64,
    /// Records emitted
    pub records: u64,
}

/// Scan every segment of FASTA `reader`, sending repeats to `sink`
///
/// Records arrive in increasing end position within a segment, and segments
/// in input order.
///
/// # Example
///
/// ```
/// use repeatscan::repeats::Repeat;
/// use repeatscan::{scan_fasta, ScanConfig};
///
/// # fn main() -> repeatscan::Result<()> {
/// let config = ScanConfig::new(1, 3)?;
/// let mut records: Vec<Repeat> = Vec::new();
/// let summary = scan_fasta(&b">chr1\nAAAANAAA\n"[..], &config, &mut records)?;
///
/// assert_eq!(summary.records, 2);
/// assert_eq!((records[0].start, records[0].end), (0, 4));
/// assert_eq!((records[1].start, records[1].end), (5, 8));
/// # Ok(())
/// # }
/// ```
pub fn scan_fasta<R, S>(reader: R, config: &ScanConfig, sink: &mut S) -> Result<ScanSummary>
where
    R: BufRead,
    S: RecordSink + ?Sized,
{
    let mut segments = FastaSegments::new(reader);
    let mut scanner = config.scanner();
    let mut summary = ScanSummary::default();

    while let Some(label) = segments.next_label()? {
        log::info!("Parsing chromosome {}", label);
        scanner.begin_segment(label);

        let mut records = 0u64;
        segments.for_each_symbol(|base| {
            if scanner.push(base, &mut *sink)? {
                records += 1;
            }
            Ok(())
        })?;
        if scanner.finish(&mut *sink)? {
            records += 1;
        }

        log::debug!(
            "Segment done: {} bases, {} repeats",
            scanner.position(),
            records
        );
        summary.segments += 1;
        summary.symbols += scanner.position();
        summary.records += records;
    }

    Ok(summary)
}

/// Open `source` and scan it
pub fn scan_source<S>(source: &DataSource, config: &ScanConfig, sink: &mut S) -> Result<ScanSummary>
where
    S: RecordSink + ?Sized,
{
    let reader = source.open()?;
    scan_fasta(reader, config, sink)
}
