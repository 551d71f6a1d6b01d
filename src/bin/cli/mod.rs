//! Command-line interface for repeatscan
//!
//! ```bash
//! # Homopolymers of at least 10 bases
//! repeatscan 1 10 genome.fa
//!
//! # Dinucleotide repeats of at least 12 bases, gzip input, to a file
//! repeatscan 2 12 genome.fa.gz -o di_repeats.tsv
//!
//! # From stdin
//! zcat genome.fa.gz | repeatscan 4 16 -
//! ```

use clap::{ArgAction, Parser};
use repeatscan::formats::RepeatWriter;
use repeatscan::io::DataSource;
use repeatscan::{scan_fasta, Period, Result, ScanConfig};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "repeatscan")]
#[command(version)]
#[command(about = "Find homopolymers and short tandem repeats in FASTA files", long_about = None)]
pub struct Cli {
    /// Repeat unit length (1 = homopolymer, 2-4 = tandem repeat)
    #[arg(value_name = "REPS")]
    pub period: u32,

    /// Minimum total repeat length in bases (must exceed REPS)
    #[arg(value_name = "LENGTH")]
    pub length: u32,

    /// FASTA input (plain or gzip), or '-' for stdin
    #[arg(value_name = "INFILE")]
    pub input: String,

    /// Write records to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// More log output on stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Log level implied by -v/-q
    pub fn log_level(&self) -> log::LevelFilter {
        if self.quiet {
            return log::LevelFilter::Error;
        }
        match self.verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

/// Initialize stderr logging; `RUST_LOG` overrides the flag-derived level
pub fn init_logging(level: log::LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .init();
}

/// Validate the configuration, then scan the input
pub fn run(cli: &Cli) -> Result<()> {
    // Configuration errors are reported before the input is touched
    let config = ScanConfig::new(cli.period, cli.length)?;

    match config.period() {
        Period::Homopolymer => log::info!("Finding homopolymers >={}bp", config.threshold()),
        period => log::info!(
            "Finding polynuc repeats >={}bp with unit size {}bp",
            config.threshold(),
            period
        ),
    }

    let source = DataSource::parse(&cli.input);
    let reader = source.open()?;

    let output: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };
    let mut writer = RepeatWriter::new(output);
    writer.write_header(&config)?;

    let summary = scan_fasta(reader, &config, &mut writer)?;
    writer.finish()?.flush()?;

    log::info!(
        "Scanned {} chromosome(s), {} bases from {}: {} repeats",
        summary.segments,
        summary.symbols,
        source,
        summary.records
    );
    Ok(())
}
