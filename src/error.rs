//! Error types for Dmiq

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DmiqError {
    #[error("No dmidecode binary found in search path: {0}")]
    ToolNotFound(String),

    #[error("Failed to query keyword '{keyword}': {detail}")]
    Invocation { keyword: String, detail: String },

    #[error("Invalid SQL mode '{0}', expected INSERT or UPDATE")]
    InvalidMode(String),

    #[error("Unknown keyword: {0}")]
    UnknownKeyword(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("XML error: {0}")]
    XmlError(String),
}

pub type Result<T> = std::result::Result<T, DmiqError>;
