mod errors;
mod json_loader;

pub use errors::IngestError;
pub use json_loader::load_transactions;
