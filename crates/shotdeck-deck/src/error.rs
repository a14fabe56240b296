//! Deck writer error types.

use thiserror::Error;

pub type DeckResult<T> = Result<T, DeckError>;

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
