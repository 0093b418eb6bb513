pub mod error;
pub mod exit_code;
pub mod formatter;
pub mod json;
pub mod logger;
pub mod version;
