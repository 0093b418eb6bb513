use crate::core::formatter::OutputFormat;
use duff_lib::ParamMap;
use serde::Serialize;
use std::collections::BTreeMap;

/// One row of `request list`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RequestInfo {
    pub path: String,
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub depth: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct VariableView {
    pub scope: String,
    pub key: String,
    pub value: String,
}

/// A materialized request as shown by `request show`.
#[derive(Debug, Clone, Serialize)]
pub struct RequestDetails {
    #[serde(rename = "Request")]
    pub name: String,
    #[serde(rename = "Method")]
    pub method: String,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "Headers", skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: ParamMap,
    #[serde(rename = "Body", skip_serializing_if = "String::is_empty")]
    pub body: String,
    #[serde(rename = "ContentType", skip_serializing_if = "String::is_empty")]
    pub content_type: String,
    #[serde(rename = "Form", skip_serializing_if = "BTreeMap::is_empty")]
    pub form: ParamMap,
    #[serde(rename = "Unresolved", skip_serializing_if = "Vec::is_empty")]
    pub unresolved: Vec<String>,
}

#[derive(Debug, Serialize, Clone)]
pub struct ExecutionResult {
    pub request_name: String,
    pub method: String,
    pub url: String,
    pub status: u16,
    pub elapsed_ms: u64,
    pub request_headers: BTreeMap<String, String>,
    pub response_headers: BTreeMap<String, String>,
    pub body: String,
}

pub struct DuffConfig {
    pub collection_path: String,
    pub environment_path: Option<String>,
    pub request_name: Option<String>,
    pub variables: Vec<String>,
    pub output_format: OutputFormat,
}
