//! I/O module: input sources and streaming FASTA framing
//!
//! Input is read in buffered chunks with constant memory regardless of
//! genome size.

pub mod compression;
pub mod fasta;

pub use compression::{maybe_decompress, DataSource, MMAP_THRESHOLD};
pub use fasta::{FastaSegments, HEADER_PREFIX, MAX_LABEL_LEN};
