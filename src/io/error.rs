use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not open config file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    /// The source that failed to load.
    pub fn path(&self) -> &Path {
        match self {
            LoadError::Open { path, .. } => path,
        }
    }
}
