use thiserror::Error;

use crate::io::LoadError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] LoadError),
}
