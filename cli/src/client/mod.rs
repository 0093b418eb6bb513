pub mod duff_client;
pub mod http;
pub mod models;

pub use duff_client::DuffClient;
pub use models::{DuffConfig, ExecutionResult};
