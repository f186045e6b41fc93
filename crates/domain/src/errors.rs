use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No catalog row for date: {date}")]
    NotFound { date: String },

    #[error("Stored records are not valid JSON: {message}")]
    Parse { message: String },

    #[error("Catalog source error: {message}")]
    Upstream { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to {operation} {}: {message}", .path.display())]
    Io {
        operation: &'static str,
        path: PathBuf,
        message: String,
    },
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Upstream {
            message: err.to_string(),
        }
    }
}
