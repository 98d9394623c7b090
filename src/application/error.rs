use thiserror::Error;

use crate::domain::ValidationError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Unknown transaction type: {0} (expected income or expense)")]
    UnknownKind(String),
}
