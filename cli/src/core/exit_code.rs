use crate::core::error::DuffError;
use duff_lib::LoadError;

/// Exit codes for the duffman CLI
/// Following standard Unix/POSIX conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// General/unspecified error
    GeneralError = 1,
    /// Invalid command line usage (reported by clap)
    UsageError = 2,
    /// Collection or environment file could not be understood
    ConfigError = 3,
    /// File not found or IO error
    FileError = 4,
    /// Request not found in the collection
    NotFoundError = 5,
    /// Network or HTTP error
    NetworkError = 6,
    /// Collection tree is inconsistent
    StructureError = 7,
    /// Operator cancelled the selection
    Cancelled = 8,
}

impl ExitCode {
    pub fn code(&self) -> i32 {
        *self as i32
    }
}

impl From<&DuffError> for ExitCode {
    fn from(error: &DuffError) -> Self {
        match error {
            DuffError::Io(_) => ExitCode::FileError,
            DuffError::Load(LoadError::Io { .. }) => ExitCode::FileError,
            DuffError::Load(_) => ExitCode::ConfigError,
            DuffError::Validation(_) => ExitCode::ConfigError,
            DuffError::RequestNotFound(_) => ExitCode::NotFoundError,
            DuffError::Inconsistent(_) => ExitCode::StructureError,
            DuffError::Cancelled => ExitCode::Cancelled,
            DuffError::Http(_) => ExitCode::NetworkError,
            DuffError::Prompt(_) | DuffError::Generic(_) => ExitCode::GeneralError,
        }
    }
}

impl From<&Box<dyn std::error::Error>> for ExitCode {
    fn from(error: &Box<dyn std::error::Error>) -> Self {
        if let Some(duff_error) = error.downcast_ref::<DuffError>() {
            ExitCode::from(duff_error)
        } else if let Some(load_error) = error.downcast_ref::<LoadError>() {
            match load_error {
                LoadError::Io { .. } => ExitCode::FileError,
                _ => ExitCode::ConfigError,
            }
        } else if error.downcast_ref::<std::io::Error>().is_some() {
            ExitCode::FileError
        } else {
            ExitCode::GeneralError
        }
    }
}
