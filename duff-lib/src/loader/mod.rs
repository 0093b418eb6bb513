pub mod postman;

use crate::error::LoadError;
use crate::model::{Collection, KeyValue, Schema};
use lazy_static::lazy_static;
use postman::{PostmanCollection, PostmanEnvironment};
use regex::Regex;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

lazy_static! {
    static ref SCHEMA_VERSION_REGEX: Regex = Regex::new(r"/v(\d+\.\d+(?:\.\d+)?)/").unwrap();
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_schema(url: Option<&str>) -> Result<Schema, LoadError> {
    let Some(url) = url else {
        return Ok(Schema::default());
    };

    let version = SCHEMA_VERSION_REGEX
        .captures(url)
        .map(|c| c[1].to_string())
        .unwrap_or_default();
    if !version.is_empty() && !version.starts_with("2.") {
        return Err(LoadError::UnsupportedSchema(url.to_string()));
    }

    Ok(Schema {
        url: url.to_string(),
        version,
    })
}

/// Reads a Postman collection and, when given, an environment file.
pub fn load_collection(
    collection_path: &Path,
    environment_path: Option<&Path>,
) -> Result<Collection, LoadError> {
    let document: PostmanCollection = read_json(collection_path)?;
    let schema = parse_schema(document.info.schema.as_deref())?;

    let env = match environment_path {
        Some(path) => load_environment(path)?,
        None => Vec::new(),
    };

    let collection = Collection {
        name: document.info.name.clone(),
        variables: postman::map_variables(&document.variable),
        requests: postman::map_items(&document.item),
        env,
        schema,
    };

    tracing::debug!(
        name = %collection.name,
        requests = collection.request_count(),
        variables = collection.variables.len(),
        env = collection.env.len(),
        "collection loaded"
    );

    Ok(collection)
}

pub fn load_environment(path: &Path) -> Result<Vec<KeyValue>, LoadError> {
    let document: PostmanEnvironment = read_json(path)?;
    tracing::debug!(name = %document.name, "environment loaded");
    Ok(postman::map_environment(&document))
}
