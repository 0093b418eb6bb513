//! Postman collection and environment documents (v2.0 / v2.1).
//!
//! Only the parts that end up in a request template are modelled; everything
//! else in the document is ignored by serde.

use crate::model::{KeyValue, Node, ParamMap, Parameters, Req};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct PostmanCollection {
    pub info: PostmanInfo,
    #[serde(default)]
    pub item: Vec<PostmanItem>,
    #[serde(default)]
    pub variable: Vec<PostmanVariable>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostmanInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub schema: Option<String>,
}

/// A folder when `item` is present, a request when `request` is present.
#[derive(Debug, Clone, Deserialize)]
pub struct PostmanItem {
    pub name: String,
    #[serde(default)]
    pub item: Option<Vec<Self>>,
    #[serde(default)]
    pub request: Option<PostmanRequest>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostmanRequest {
    #[serde(default = "default_method")]
    pub method: String,
    #[serde(default)]
    pub url: PostmanUrl,
    #[serde(default)]
    pub header: Vec<PostmanKeyValue>,
    #[serde(default)]
    pub body: Option<PostmanBody>,
}

fn default_method() -> String {
    "GET".to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(untagged)]
pub enum PostmanUrl {
    #[default]
    Empty,
    Simple(String),
    Structured(PostmanUrlStructured),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostmanUrlStructured {
    #[serde(default)]
    pub raw: Option<String>,
    #[serde(default)]
    pub protocol: Option<String>,
    #[serde(default)]
    pub host: Vec<String>,
    #[serde(default)]
    pub port: Option<String>,
    #[serde(default)]
    pub path: Vec<String>,
    #[serde(default)]
    pub query: Vec<PostmanKeyValue>,
    #[serde(default)]
    pub variable: Vec<PostmanKeyValue>,
}

/// Shape shared by headers, query entries, path variables and form fields.
#[derive(Debug, Clone, Deserialize)]
pub struct PostmanKeyValue {
    pub key: String,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub disabled: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostmanBody {
    #[serde(default)]
    pub mode: String,
    #[serde(default)]
    pub raw: Option<String>,
    #[serde(default)]
    pub urlencoded: Vec<PostmanKeyValue>,
    #[serde(default)]
    pub formdata: Vec<PostmanKeyValue>,
    #[serde(default)]
    pub options: Option<PostmanBodyOptions>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostmanBodyOptions {
    #[serde(default)]
    pub raw: Option<PostmanRawOptions>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostmanRawOptions {
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostmanVariable {
    pub key: String,
    #[serde(default)]
    pub value: Option<serde_json::Value>,
    #[serde(default)]
    pub disabled: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostmanEnvironment {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub values: Vec<PostmanEnvValue>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostmanEnvValue {
    pub key: String,
    #[serde(default)]
    pub value: Option<serde_json::Value>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

/// Variable values may be any JSON scalar; strings are taken verbatim.
fn value_to_string(value: Option<&serde_json::Value>) -> String {
    match value {
        None | Some(serde_json::Value::Null) => String::new(),
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

pub fn map_variables(variables: &[PostmanVariable]) -> Vec<KeyValue> {
    variables
        .iter()
        .filter(|v| !v.disabled)
        .map(|v| KeyValue::new(v.key.clone(), value_to_string(v.value.as_ref())))
        .collect()
}

pub fn map_environment(env: &PostmanEnvironment) -> Vec<KeyValue> {
    env.values
        .iter()
        .filter(|v| v.enabled)
        .map(|v| KeyValue::new(v.key.clone(), value_to_string(v.value.as_ref())))
        .collect()
}

pub fn map_items(items: &[PostmanItem]) -> Vec<Node> {
    items.iter().map(map_item).collect()
}

fn map_item(item: &PostmanItem) -> Node {
    Node {
        name: item.name.clone(),
        req: item.request.as_ref().map(map_request),
        children: item.item.as_deref().map(map_items).unwrap_or_default(),
    }
}

fn enabled_entries(entries: &[PostmanKeyValue]) -> ParamMap {
    entries
        .iter()
        .filter(|e| !e.disabled && e.kind.as_deref() != Some("file"))
        .map(|e| (e.key.clone(), e.value.clone().unwrap_or_default()))
        .collect()
}

fn parse_query(query: &str) -> ParamMap {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((k, v)) => (k.to_string(), v.to_string()),
            None => (pair.to_string(), String::new()),
        })
        .collect()
}

fn strip_query(raw: &str) -> (&str, Option<&str>) {
    match raw.split_once('?') {
        Some((base, query)) => (base, Some(query)),
        None => (raw, None),
    }
}

/// Rebuilds a URL from its parts when the document carries no `raw` form.
fn assemble_url(url: &PostmanUrlStructured) -> String {
    let mut out = String::new();
    if let Some(protocol) = url.protocol.as_deref().filter(|p| !p.is_empty()) {
        out.push_str(protocol);
        out.push_str("://");
    }
    out.push_str(&url.host.join("."));
    if let Some(port) = url.port.as_deref().filter(|p| !p.is_empty()) {
        out.push(':');
        out.push_str(port);
    }
    out.push('/');
    out.push_str(&url.path.join("/"));
    out
}

pub fn map_request(request: &PostmanRequest) -> Req {
    let mut parameters = Parameters::default();

    let url = match &request.url {
        PostmanUrl::Empty => String::new(),
        PostmanUrl::Simple(raw) => {
            let (base, query) = strip_query(raw);
            if let Some(query) = query {
                parameters.get = parse_query(query);
            }
            base.to_string()
        }
        PostmanUrl::Structured(url) => {
            parameters.get = enabled_entries(&url.query);
            parameters.path = enabled_entries(&url.variable);
            match &url.raw {
                Some(raw) => strip_query(raw).0.to_string(),
                None => assemble_url(url),
            }
        }
    };

    let headers = enabled_entries(&request.header);

    let mut body = String::new();
    let mut body_type = None;
    if let Some(b) = &request.body {
        match b.mode.as_str() {
            "raw" => {
                body = b.raw.clone().unwrap_or_default();
                body_type = b
                    .options
                    .as_ref()
                    .and_then(|o| o.raw.as_ref())
                    .and_then(|r| r.language.as_deref())
                    .map(language_content_type);
            }
            "urlencoded" => {
                parameters.post = enabled_entries(&b.urlencoded);
                body_type = Some("application/x-www-form-urlencoded");
            }
            "formdata" => {
                parameters.post = enabled_entries(&b.formdata);
                body_type = Some("multipart/form-data");
            }
            other => tracing::debug!(mode = other, "body mode not supported, body ignored"),
        }
    }

    let content_type = headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("content-type"))
        .map(|(_, v)| v.clone())
        .or_else(|| body_type.map(str::to_string))
        .unwrap_or_default();

    Req {
        method: request.method.to_uppercase(),
        url,
        headers,
        body,
        content_type,
        parameters,
    }
}

fn language_content_type(language: &str) -> &'static str {
    match language {
        "json" => "application/json",
        "xml" => "application/xml",
        "html" => "text/html",
        "javascript" => "application/javascript",
        _ => "text/plain",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_url() {
        let json = r#"{
            "method": "get",
            "url": {
                "raw": "{{baseUrl}}/users/:id?page=1&debug=true",
                "host": ["{{baseUrl}}"],
                "path": ["users", ":id"],
                "query": [
                    {"key": "page", "value": "1"},
                    {"key": "debug", "value": "true", "disabled": true}
                ],
                "variable": [{"key": "id", "value": "{{userId}}"}]
            },
            "header": [
                {"key": "Accept", "value": "application/json"},
                {"key": "X-Off", "value": "1", "disabled": true}
            ]
        }"#;

        let request: PostmanRequest = serde_json::from_str(json).unwrap();
        let req = map_request(&request);

        assert_eq!(req.method, "GET");
        assert_eq!(req.url, "{{baseUrl}}/users/:id");
        assert_eq!(req.parameters.get.len(), 1);
        assert_eq!(req.parameters.get["page"], "1");
        assert_eq!(req.parameters.path["id"], "{{userId}}");
        assert_eq!(req.headers.len(), 1);
        assert_eq!(req.headers["Accept"], "application/json");
    }

    #[test]
    fn test_structured_url_without_raw() {
        let json = r#"{
            "method": "GET",
            "url": {
                "protocol": "https",
                "host": ["api", "example", "com"],
                "port": "8443",
                "path": ["v1", "users"]
            }
        }"#;
        let request: PostmanRequest = serde_json::from_str(json).unwrap();
        assert_eq!(map_request(&request).url, "https://api.example.com:8443/v1/users");

        let bare = r#"{"method": "GET", "url": {"host": ["{{baseUrl}}"], "path": ["health"]}}"#;
        let request: PostmanRequest = serde_json::from_str(bare).unwrap();
        assert_eq!(map_request(&request).url, "{{baseUrl}}/health");
    }

    #[test]
    fn test_simple_url_with_query() {
        let json = r#"{"method": "GET", "url": "http://localhost/search?q=rust&flag"}"#;
        let request: PostmanRequest = serde_json::from_str(json).unwrap();
        let req = map_request(&request);

        assert_eq!(req.url, "http://localhost/search");
        assert_eq!(req.parameters.get["q"], "rust");
        assert_eq!(req.parameters.get["flag"], "");
    }

    #[test]
    fn test_raw_json_body() {
        let json = r#"{
            "method": "POST",
            "url": "http://localhost/users",
            "body": {
                "mode": "raw",
                "raw": "{\"name\": \"{{user}}\"}",
                "options": {"raw": {"language": "json"}}
            }
        }"#;
        let request: PostmanRequest = serde_json::from_str(json).unwrap();
        let req = map_request(&request);

        assert_eq!(req.body, r#"{"name": "{{user}}"}"#);
        assert_eq!(req.content_type, "application/json");
    }

    #[test]
    fn test_urlencoded_body() {
        let json = r#"{
            "method": "POST",
            "url": "http://localhost/login",
            "header": [{"key": "Content-Type", "value": "application/x-www-form-urlencoded; charset=utf-8"}],
            "body": {
                "mode": "urlencoded",
                "urlencoded": [
                    {"key": "user", "value": "{{user}}"},
                    {"key": "pass", "value": "secret"}
                ]
            }
        }"#;
        let request: PostmanRequest = serde_json::from_str(json).unwrap();
        let req = map_request(&request);

        assert!(req.body.is_empty());
        assert_eq!(req.parameters.post["user"], "{{user}}");
        assert_eq!(req.parameters.post["pass"], "secret");
        assert_eq!(
            req.content_type,
            "application/x-www-form-urlencoded; charset=utf-8"
        );
    }

    #[test]
    fn test_items_keep_order_and_nesting() {
        let json = r#"[
            {"name": "z first", "request": {"method": "GET", "url": "/z"}},
            {"name": "folder", "item": [
                {"name": "inner", "request": {"method": "GET", "url": "/inner"}}
            ]},
            {"name": "a last", "request": {"method": "GET", "url": "/a"}}
        ]"#;
        let items: Vec<PostmanItem> = serde_json::from_str(json).unwrap();
        let nodes = map_items(&items);

        let names: Vec<&str> = nodes.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["z first", "folder", "a last"]);
        assert!(nodes[1].is_folder());
        assert!(nodes[1].req.is_none());
        assert_eq!(nodes[1].children[0].req.as_ref().unwrap().url, "/inner");
    }

    #[test]
    fn test_environment_values() {
        let json = r#"{
            "name": "local",
            "values": [
                {"key": "host", "value": "localhost", "enabled": true},
                {"key": "port", "value": 8080},
                {"key": "off", "value": "x", "enabled": false}
            ]
        }"#;
        let env: PostmanEnvironment = serde_json::from_str(json).unwrap();
        assert_eq!(
            map_environment(&env),
            vec![KeyValue::new("host", "localhost"), KeyValue::new("port", "8080")]
        );
    }
}
