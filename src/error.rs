use thiserror::Error;

pub type Result<T> = std::result::Result<T, FudaError>;

#[derive(Debug, Error)]
pub enum FudaError {
    #[error("Invalid list ID format: {0}")]
    InvalidListId(String),

    #[error("Invalid card ID format: {0}")]
    InvalidCardId(String),

    #[error("Card not found: {0}")]
    CardNotFound(String),
}
