//! Request selection and materialization for API fuzzing.
//!
//! A [`Collection`] holds request templates in a folder tree. The
//! [`Navigator`] walks that tree until one request is chosen, and
//! [`materialize`] turns the chosen template into a concrete request without
//! touching the template itself.

pub mod endpoint;
pub mod error;
pub mod loader;
pub mod model;
pub mod navigator;
pub mod resolve;
pub mod template;

pub use endpoint::create_endpoint;
pub use error::{LoadError, StructuralInconsistency};
pub use loader::{load_collection, load_environment};
pub use model::{Collection, KeyValue, Node, NodeKind, NodeList, ParamMap, Parameters, Req, Schema};
pub use navigator::{NavEvent, NavState, Navigator, ROOT_LABEL};
pub use resolve::{resolve_vars, resolve_vars_with, unresolved_placeholders, KeyRewrite};
pub use template::{deep_copy_req, materialize, materialize_with};
