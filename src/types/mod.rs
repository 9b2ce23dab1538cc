mod amount;
mod errors;

pub use amount::Amount;
pub use errors::AmountError;

pub type TransactionNumber = u64;
pub type IssueId = u32;
pub type Age = u32;
