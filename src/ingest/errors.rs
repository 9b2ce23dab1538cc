use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Unable to read transactions at path [{}]: {source}", path.display())]
    Io {
        path: PathBuf,
        source: io::Error
    },
    #[error("Transactions document is not valid: {0}")]
    Json(#[from] serde_json::Error)
}
