//! Homopolymer (period 1) scanner
//!
//! Counts how long the current base keeps repeating. When the base changes,
//! the finished run is reported if it is long enough and is not a run of `N`.

use super::record::{RecordEmitter, RecordSink};
use super::{SegmentScanner, TERMINATOR};
use crate::error::Result;

/// Single-pass homopolymer scanner
#[derive(Debug, Clone)]
pub struct HomopolymerScanner {
    emitter: RecordEmitter,
    label: String,
    position: u64,
    run_length: u32,
    /// Base of the run in progress; `None` at segment start and inside `N` runs
    last_symbol: Option<u8>,
}

impl HomopolymerScanner {
    /// Scanner reporting homopolymers of at least `threshold` bases
    pub fn new(threshold: u32) -> Self {
        Self {
            emitter: RecordEmitter::new(threshold),
            label: String::new(),
            position: 0,
            run_length: 0,
            last_symbol: None,
        }
    }

    /// Length of the run ending at the current position
    pub fn run_length(&self) -> u32 {
        self.run_length
    }

    fn emit_run<S: RecordSink + ?Sized>(&self, sink: &mut S) -> Result<bool> {
        match self.last_symbol {
            Some(base) => {
                self.emitter
                    .emit(sink, &self.label, self.position, self.run_length, &[base])
            }
            None => Ok(false),
        }
    }
}

impl SegmentScanner for HomopolymerScanner {
    fn begin_segment(&mut self, label: &str) {
        self.label.clear();
        self.label.push_str(label);
        self.position = 0;
        self.run_length = 0;
        self.last_symbol = None;
    }

    fn push<S: RecordSink + ?Sized>(&mut self, symbol: u8, sink: &mut S) -> Result<bool> {
        let symbol = (symbol != TERMINATOR).then_some(symbol);

        let emitted = if symbol == self.last_symbol {
            self.run_length += 1;
            false
        } else {
            let emitted = self.emit_run(sink)?;
            self.last_symbol = symbol;
            self.run_length = 1;
            emitted
        };

        self.position += 1;
        Ok(emitted)
    }

    fn finish<S: RecordSink + ?Sized>(&mut self, sink: &mut S) -> Result<bool> {
        let emitted = self.emit_run(sink)?;
        self.last_symbol = None;
        self.run_length = 0;
        Ok(emitted)
    }

    fn position(&self) -> u64 {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repeats::Repeat;

    fn scan(threshold: u32, seq: &[u8]) -> Vec<Repeat> {
        let mut scanner = HomopolymerScanner::new(threshold);
        let mut out = Vec::new();
        scanner.begin_segment("chrM");
        for &b in seq {
            scanner.push(b, &mut out).unwrap();
        }
        scanner.finish(&mut out).unwrap();
        out
    }

    fn spans(records: &[Repeat]) -> Vec<(u64, u64, u32, String)> {
        records
            .iter()
            .map(|r| (r.start, r.end, r.length, r.unit_str()))
            .collect()
    }

    #[test]
    fn test_runs_split_by_terminator() {
        let out = scan(3, b"AAAANAAA");
        assert_eq!(
            spans(&out),
            vec![(0, 4, 4, "A".to_string()), (5, 8, 3, "A".to_string())]
        );
    }

    #[test]
    fn test_terminator_runs_never_reported() {
        assert!(scan(2, b"NNNNNNNN").is_empty());
        assert!(scan(2, b"ANNNNNC").is_empty());
    }

    #[test]
    fn test_maximal_runs() {
        let out = scan(3, b"GCCCCTTTAG");
        assert_eq!(
            spans(&out),
            vec![(1, 5, 4, "C".to_string()), (5, 8, 3, "T".to_string())]
        );
    }

    #[test]
    fn test_threshold_boundary() {
        assert!(scan(4, b"GAAAC").is_empty());
        assert_eq!(spans(&scan(3, b"GAAAC")), vec![(1, 4, 3, "A".to_string())]);
    }

    #[test]
    fn test_case_sensitive_bases() {
        // Soft-masked bases are distinct symbols
        let out = scan(3, b"AAaaa");
        assert_eq!(spans(&out), vec![(2, 5, 3, "a".to_string())]);
    }

    #[test]
    fn test_state_resets_between_segments() {
        let mut scanner = HomopolymerScanner::new(3);
        let mut out = Vec::new();

        scanner.begin_segment("chr1");
        for &b in b"TTT" {
            scanner.push(b, &mut out).unwrap();
        }
        assert!(scanner.finish(&mut out).unwrap());

        scanner.begin_segment("chr2");
        for &b in b"TTGGG" {
            scanner.push(b, &mut out).unwrap();
        }
        assert_eq!(scanner.run_length(), 3);
        scanner.finish(&mut out).unwrap();

        assert_eq!(out.len(), 2);
        assert_eq!((out[0].label.as_str(), out[0].start), ("chr1", 0));
        assert_eq!((out[1].label.as_str(), out[1].start, out[1].unit_str().as_str()), ("chr2", 2, "G"));
    }
}
