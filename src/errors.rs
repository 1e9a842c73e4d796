use thiserror::Error;

use crate::decimal::Money;
use crate::types::ReceiptId;

#[derive(Error, Debug)]
pub enum ReceiptError {
    #[error("nothing to extract: input text is empty")]
    EmptyInput,

    #[error("student name must not be empty")]
    EmptyStudentName,

    #[error("amount must not be negative: {amount}")]
    NegativeAmount { amount: Money },

    #[error("invalid session: expected YYYY/YYYY+1, got {value}")]
    InvalidSession { value: String },

    #[error("unrecognized term: {value}")]
    UnrecognizedTerm { value: String },

    #[error("invalid discount: {message}")]
    InvalidDiscount { message: String },

    #[error("line item quantity must be positive: {category}")]
    ZeroQuantity { category: String },

    #[error("receipt not found: {id}")]
    ReceiptNotFound { id: ReceiptId },
}

pub type Result<T> = std::result::Result<T, ReceiptError>;
