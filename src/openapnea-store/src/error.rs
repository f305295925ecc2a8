use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("history file {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("history I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("malformed history data: {0}")]
    Csv(#[from] csv::Error),
}
