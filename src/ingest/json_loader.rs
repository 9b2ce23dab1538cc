use crate::ingest::IngestError;
use crate::models::Transaction;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, info};

/// Loads every transaction from a JSON document holding an array of records.
///
/// The whole document is parsed before returning; a single malformed record fails the load.
pub fn load_transactions(path: impl AsRef<Path>) -> Result<Vec<Transaction>, IngestError> {
    let path = path.as_ref();

    debug!("Opening transactions document at path: {}", path.display());

    let file = File::open(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source
    })?;

    let transactions: Vec<Transaction> = serde_json::from_reader(BufReader::new(file))?;

    info!("Loaded {} transaction records from {}", transactions.len(), path.display());

    Ok(transactions)
}
