//! FASTA input

pub mod reader;

pub use reader::{FastaSegments, HEADER_PREFIX, MAX_LABEL_LEN};
