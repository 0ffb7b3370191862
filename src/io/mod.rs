mod error;
mod provider;

use std::path::Path;

use log::debug;

pub use error::LoadError;
pub use provider::{FsProvider, ReadProvider};

use crate::IniStore;

/// Load an INI file from disk.
pub fn load(path: &Path) -> Result<IniStore, LoadError> {
    load_with(path, &FsProvider)
}

/// Load INI text through `provider`. Fails only if the source can't be read.
pub fn load_with(path: &Path, provider: &impl ReadProvider) -> Result<IniStore, LoadError> {
    let content = provider
        .read_string(path)
        .map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
    let (store, report) = crate::parse::parse_with_report(&content);
    debug!(
        "loaded {} section(s) from {} ({} line(s) skipped)",
        store.len(),
        path.display(),
        report.skipped.len()
    );
    Ok(store)
}
