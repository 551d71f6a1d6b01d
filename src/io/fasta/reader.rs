//! Streaming FASTA segment reader
//!
//! Splits a FASTA byte stream into labeled segments and hands out sequence
//! bases one at a time, without holding a whole sequence in memory.
//!
//! # Format handling
//!
//! - Anything before the first `>` is skipped.
//! - The label is the first whitespace-delimited token of the header line,
//!   at most [`MAX_LABEL_LEN`] bytes. The rest of the header is ignored.
//! - Whitespace inside sequence lines (`\n`, `\r`, spaces, tabs) is dropped
//!   and does not count as a position.
//! - A `>` anywhere in the sequence starts the next header.
//!
//! # Example
//!
//! ```
//! use repeatscan::io::FastaSegments;
//!
//! # fn main() -> repeatscan::Result<()> {
//! let data = b">chr1 primary assembly\nACGT\nAC\n>chr2\nTT\n";
//! let mut segments = FastaSegments::new(&data[..]);
//!
//! let mut bases = Vec::new();
//! while let Some(label) = segments.next_label()? {
//!     let label = label.to_string();
//!     let mut seq = Vec::new();
//!     segments.for_each_symbol(|b| {
//!         seq.push(b);
//!         Ok(())
//!     })?;
//!     bases.push((label, seq));
//! }
//!
//! assert_eq!(bases[0], ("chr1".to_string(), b"ACGTAC".to_vec()));
//! assert_eq!(bases[1], ("chr2".to_string(), b"TT".to_vec()));
//! # Ok(())
//! # }
//! ```

use crate::error::{RepeatError, Result};
use std::io::BufRead;

/// FASTA header marker
pub const HEADER_PREFIX: u8 = b'>';

/// Longest accepted segment label in bytes
pub const MAX_LABEL_LEN: usize = 31;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Nothing read yet
    Start,
    /// Just past a `>`
    Header,
    /// Inside a segment's sequence lines
    Sequence,
    /// End of input
    Eof,
}

/// Reader yielding `(label, bases)` segments from FASTA input
pub struct FastaSegments<R: BufRead> {
    reader: R,
    state: State,
    label: String,
    segments: usize,
    symbols: u64,
}

impl<R: BufRead> FastaSegments<R> {
    /// Create a segment reader over buffered FASTA input
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            state: State::Start,
            label: String::with_capacity(MAX_LABEL_LEN),
            segments: 0,
            symbols: 0,
        }
    }

    /// Segments whose header has been parsed
    pub fn segments_read(&self) -> usize {
        self.segments
    }

    /// Sequence bases delivered so far, across all segments
    pub fn symbols_read(&self) -> u64 {
        self.symbols
    }

    /// Advance to the next header and return its label
    ///
    /// Unread bases of the current segment are skipped. Returns `None` at end
    /// of input.
    ///
    /// # Errors
    ///
    /// - [`RepeatError::NoSequences`] if the input has no header at all
    /// - [`RepeatError::LabelTooLong`] / [`RepeatError::MissingLabel`] for a
    ///   malformed header
    pub fn next_label(&mut self) -> Result<Option<&str>> {
        loop {
            match self.state {
                State::Start => {
                    if self.skip_past(HEADER_PREFIX)? {
                        self.state = State::Header;
                    } else {
                        self.state = State::Eof;
                        return Err(RepeatError::NoSequences);
                    }
                }
                State::Sequence => {
                    self.state = if self.skip_past(HEADER_PREFIX)? {
                        State::Header
                    } else {
                        State::Eof
                    };
                }
                State::Header => {
                    self.parse_header()?;
                    self.state = State::Sequence;
                    return Ok(Some(&self.label));
                }
                State::Eof => return Ok(None),
            }
        }
    }

    /// Feed the current segment's bases to `f`, in order
    ///
    /// Stops before the next header or at end of input. Returns the number of
    /// bases delivered. Does nothing unless a label was just returned by
    /// [`next_label`](Self::next_label).
    pub fn for_each_symbol<F>(&mut self, mut f: F) -> Result<u64>
    where
        F: FnMut(u8) -> Result<()>,
    {
        if self.state != State::Sequence {
            return Ok(0);
        }

        let mut delivered = 0u64;
        loop {
            let buf = self.reader.fill_buf()?;
            if buf.is_empty() {
                self.state = State::Eof;
                break;
            }

            let header_at = buf.iter().position(|&b| b == HEADER_PREFIX);
            let chunk = &buf[..header_at.unwrap_or(buf.len())];
            for &b in chunk {
                if !b.is_ascii_whitespace() {
                    f(b)?;
                    delivered += 1;
                }
            }

            match header_at {
                Some(i) => {
                    self.reader.consume(i + 1);
                    self.state = State::Header;
                    break;
                }
                None => {
                    let len = buf.len();
                    self.reader.consume(len);
                }
            }
        }

        self.symbols += delivered;
        Ok(delivered)
    }

    /// Parse the header line following a `>` into `self.label`
    fn parse_header(&mut self) -> Result<()> {
        self.segments += 1;
        self.label.clear();

        let mut bytes: Vec<u8> = Vec::with_capacity(MAX_LABEL_LEN);
        let mut in_label = false;
        let mut line_done = false;

        while let Some(b) = self.next_byte()? {
            if b == b'\n' {
                line_done = true;
                break;
            }
            if b == b' ' || b == b'\t' || b == b'\r' {
                if in_label {
                    break;
                }
                continue;
            }
            in_label = true;
            if bytes.len() == MAX_LABEL_LEN {
                return Err(RepeatError::LabelTooLong {
                    label: String::from_utf8_lossy(&bytes).into_owned(),
                    max: MAX_LABEL_LEN,
                });
            }
            bytes.push(b);
        }

        if bytes.is_empty() {
            return Err(RepeatError::MissingLabel {
                segment: self.segments,
            });
        }

        // Description text after the label
        if !line_done {
            self.skip_past(b'\n')?;
        }

        self.label.push_str(&String::from_utf8_lossy(&bytes));
        Ok(())
    }

    /// Consume input up to and including `target`; false if input ended first
    fn skip_past(&mut self, target: u8) -> Result<bool> {
        loop {
            let buf = self.reader.fill_buf()?;
            if buf.is_empty() {
                return Ok(false);
            }
            match buf.iter().position(|&b| b == target) {
                Some(i) => {
                    self.reader.consume(i + 1);
                    return Ok(true);
                }
                None => {
                    let len = buf.len();
                    self.reader.consume(len);
                }
            }
        }
    }

    fn next_byte(&mut self) -> Result<Option<u8>> {
        let byte = match self.reader.fill_buf()?.first() {
            Some(&b) => b,
            None => return Ok(None),
        };
        self.reader.consume(1);
        Ok(Some(byte))
    }
}
