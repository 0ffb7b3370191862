//! Forgiving INI parser.
//!
//! Text is read line by line into sections of `key=value` pairs. Lines that
//! don't fit the format are skipped instead of failing the parse; the only
//! error is a source that can't be read.

pub mod error;
pub mod io;
pub mod parse;
pub mod store;

pub use error::Error;
pub use io::{FsProvider, LoadError, ReadProvider};
pub use parse::{ParseReport, SkippedLine, parse, parse_with_report};
pub use store::{IniStore, Section};

use std::path::Path;

/// Load an INI file from disk into a fresh store.
pub fn load(path: &Path) -> Result<IniStore, Error> {
    Ok(io::load(path)?)
}

/// Load INI text through a custom `ReadProvider`.
pub fn load_with(path: &Path, provider: &impl ReadProvider) -> Result<IniStore, Error> {
    Ok(io::load_with(path, provider)?)
}
