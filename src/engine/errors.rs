use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    /// The source collection cannot yield a meaningful aggregate (empty, or the sum overflows).
    #[error("Operation Not Supported")]
    OperationNotSupported
}
