use duff_lib::{LoadError, StructuralInconsistency};
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DuffError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Load(#[from] LoadError),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Request not found: {0}")]
    RequestNotFound(String),
    #[error("{0}")]
    Inconsistent(#[from] StructuralInconsistency),
    #[error("Selection cancelled")]
    Cancelled,
    #[error("Prompt failed: {0}")]
    Prompt(String),
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("{0}")]
    Generic(String),
}

impl From<reqwest::Error> for DuffError {
    fn from(err: reqwest::Error) -> Self {
        DuffError::Http(err.to_string())
    }
}

impl From<dialoguer::Error> for DuffError {
    fn from(err: dialoguer::Error) -> Self {
        DuffError::Prompt(err.to_string())
    }
}

impl From<String> for DuffError {
    fn from(msg: String) -> Self {
        DuffError::Generic(msg)
    }
}

impl From<&str> for DuffError {
    fn from(msg: &str) -> Self {
        DuffError::Generic(msg.to_string())
    }
}
