//! Output formats

pub mod repeat_writer;

pub use repeat_writer::RepeatWriter;
