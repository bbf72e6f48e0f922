//! Output formatting for command results.
//!
//! Handlers produce serializable values; a [`Formatter`] chosen from
//! `--output` turns them into JSON, YAML, or a key/value table.

mod error;
mod formatter;


pub use error::OutputError;
pub use formatter::Formatter;
