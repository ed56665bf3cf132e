use std::error::Error as StdError;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The store file, or the directory holding it, could not be opened or created.
    #[error("store unavailable at {}: {source}", path.display())]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("timestamp {0} is out of range for a local date")]
    InvalidTimestamp(i64),
}

impl StoreError {
    pub fn unavailable(path: &Path, source: Box<dyn StdError + Send + Sync>) -> Self {
        StoreError::StorageUnavailable {
            path: path.to_path_buf(),
            source,
        }
    }
}
