//! Input sources with transparent gzip and memory mapping
//!
//! - Local files at or above [`MMAP_THRESHOLD`] are memory mapped, smaller
//!   files use buffered I/O.
//! - gzip input (including concatenated bgzip members) is detected by its
//!   magic bytes and decompressed while streaming.

use crate::error::Result;
use flate2::bufread::MultiGzDecoder;
use memmap2::Mmap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Memory-mapped file threshold (50 MB)
pub const MMAP_THRESHOLD: u64 = 50 * 1024 * 1024;

/// gzip member magic bytes
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Where the FASTA input comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Local file path
    Local(PathBuf),

    /// Standard input
    Stdin,
}

impl DataSource {
    /// Create a local file data source
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        DataSource::Local(path.as_ref().to_path_buf())
    }

    /// Interpret a command-line argument; `-` means stdin
    pub fn parse(arg: &str) -> Self {
        if arg == "-" {
            DataSource::Stdin
        } else {
            DataSource::from_path(arg)
        }
    }

    /// Open the source and return a buffered, decompressed reader
    pub fn open(&self) -> Result<Box<dyn BufRead + Send>> {
        let raw: Box<dyn BufRead + Send> = match self {
            DataSource::Local(path) => open_local_file(path)?,
            DataSource::Stdin => Box::new(BufReader::new(io::stdin())),
        };
        maybe_decompress(raw)
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataSource::Local(path) => write!(f, "{}", path.display()),
            DataSource::Stdin => write!(f, "<stdin>"),
        }
    }
}

/// Wrap `reader` in a gzip decoder if it starts with the gzip magic
pub fn maybe_decompress(mut reader: Box<dyn BufRead + Send>) -> Result<Box<dyn BufRead + Send>> {
    let is_gzip = {
        let head = reader.fill_buf()?;
        head.len() >= GZIP_MAGIC.len() && head[..GZIP_MAGIC.len()] == GZIP_MAGIC
    };

    if is_gzip {
        log::debug!("Detected gzip input");
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(reader))))
    } else {
        Ok(reader)
    }
}

/// Open a local file, choosing mmap or buffered I/O by size
fn open_local_file(path: &Path) -> Result<Box<dyn BufRead + Send>> {
    let metadata = std::fs::metadata(path)?;
    let file_size = metadata.len();

    if file_size >= MMAP_THRESHOLD {
        log::debug!("Memory mapping {} ({} bytes)", path.display(), file_size);
        open_mmap_file(path)
    } else {
        let file = File::open(path)?;
        Ok(Box::new(BufReader::new(file)))
    }
}

#[cfg(target_os = "macos")]
fn open_mmap_file(path: &Path) -> Result<Box<dyn BufRead + Send>> {
    use libc::{madvise, MADV_SEQUENTIAL, MADV_WILLNEED};

    let file = File::open(path)?;
    let mmap = unsafe { Mmap::map(&file)? };

    // Sequential access hints
    unsafe {
        madvise(
            mmap.as_ptr() as *mut _,
            mmap.len(),
            MADV_SEQUENTIAL | MADV_WILLNEED,
        );
    }

    Ok(Box::new(io::Cursor::new(mmap)))
}

#[cfg(not(target_os = "macos"))]
fn open_mmap_file(path: &Path) -> Result<Box<dyn BufRead + Send>> {
    let file = File::open(path)?;
    let mmap = unsafe { Mmap::map(&file)? };
    Ok(Box::new(io::Cursor::new(mmap)))
}
