//! Error handling and custom error types
//!
//! Provides unified error handling across the probe using thiserror.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{var} not found in {env_file}")]
    MissingCredential { var: String, env_file: String },

    #[error("Gemini API error: {0}")]
    Gemini(String),
}

pub type Result<T> = std::result::Result<T, Error>;
