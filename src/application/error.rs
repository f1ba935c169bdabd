use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Amount must be greater than zero")]
    InvalidAmount,

    #[error("User id is required")]
    MissingUserId,

    #[error("Transaction type must be \"deposit\" or \"debit\"")]
    InvalidType,

    #[error("No transactions found for this user")]
    NoTransactionsFound,

    /// Raised by the HTTP layer when a create request omits a field entirely.
    #[error("Required fields: type, amount, userId")]
    MissingFields,

    /// Raised by the HTTP layer when the body isn't valid JSON of the expected shape.
    #[error("Invalid request body: {0}")]
    MalformedBody(String),
}
