mod errors;
mod transaction_queries;

pub use errors::QueryError;
pub use transaction_queries::TransactionQueries;
