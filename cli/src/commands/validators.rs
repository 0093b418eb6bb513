use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;

lazy_static! {
    static ref BRACES_REGEX: Regex = Regex::new(r"\{\{|\}\}").unwrap();
}

pub fn validate_path_exists(path: &str) -> Result<String, String> {
    if Path::new(path).exists() {
        Ok(path.to_string())
    } else {
        Err(format!("Path does not exist: {path}"))
    }
}

/// Variable names are free text as long as they cannot form a placeholder.
pub fn validate_name(name: &str) -> Result<String, String> {
    if name.trim().is_empty() {
        return Err("Name must not be empty".to_string());
    }
    if name.len() > 100 {
        return Err("Name must be 100 characters or less".to_string());
    }
    if BRACES_REGEX.is_match(name) {
        return Err("Name must not contain '{{' or '}}'".to_string());
    }
    Ok(name.to_string())
}

pub fn validate_variable(variable: &str) -> Result<String, String> {
    let Some((name, _)) = variable.split_once('=') else {
        return Err("Variable must be in format NAME=VALUE".to_string());
    };

    if let Err(e) = validate_name(name) {
        return Err(format!("Invalid variable name: {e}"));
    }

    Ok(variable.to_string())
}

/// A request is addressed by its folder names and its own name joined with `/`.
/// Names may contain `/` themselves; the walk resolves them against the tree.
pub fn validate_request_path(path: &str) -> Result<String, String> {
    if path.trim().is_empty() {
        return Err("Request path must look like Folder/Sub folder/Request".to_string());
    }
    Ok(path.to_string())
}
