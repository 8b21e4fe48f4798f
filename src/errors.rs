//! Unified application error type.
//! All modules (core, cli, config, report) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Data access
    // ---------------------------
    #[error("Cannot load data from '{}': {reason}", path.display())]
    DataAccess { path: PathBuf, reason: String },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid city: {0}")]
    InvalidCity(String),

    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    #[error("Invalid day: {0}")]
    InvalidDay(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Report errors
    // ---------------------------
    #[error("Report serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn data_access(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        AppError::DataAccess {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
