use crate::domain::family::FamilyKey;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WalletError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Unknown wallet family: {0}")]
    UnknownFamily(FamilyKey),
}

pub type Result<T> = std::result::Result<T, WalletError>;
