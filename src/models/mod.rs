#[cfg(test)]
mod tests;
mod transaction;

pub use transaction::Transaction;
