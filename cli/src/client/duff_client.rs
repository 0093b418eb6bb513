use super::http;
use super::models::{DuffConfig, ExecutionResult, RequestDetails, RequestInfo, VariableView};
use crate::core::error::DuffError;
use crate::core::formatter::OutputFormat;
use crate::shell::{self, DEFAULT_STYLE};
use duff_lib::{
    load_collection, materialize, unresolved_placeholders, Collection, KeyValue, NavState,
    Navigator, Node, NodeKind, Req,
};
use std::path::Path;
use std::time::Instant;

/// A request template picked from the collection.
#[derive(Debug, Clone)]
pub struct Selection<'a> {
    /// Folder names and the request name, joined with `/`.
    pub name: String,
    pub req: &'a Req,
}

pub struct DuffClient {
    config: DuffConfig,
    collection: Collection,
}

impl DuffClient {
    pub fn load(config: DuffConfig) -> Result<Self, DuffError> {
        let collection = load_collection(
            Path::new(&config.collection_path),
            config.environment_path.as_deref().map(Path::new),
        )?;
        Ok(Self { config, collection })
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    fn cli_variables(&self) -> Result<Vec<KeyValue>, DuffError> {
        self.config
            .variables
            .iter()
            .map(|raw| {
                raw.split_once('=')
                    .map(|(k, v)| KeyValue::new(k, v))
                    .ok_or_else(|| {
                        DuffError::Validation(format!(
                            "Invalid variable '{raw}'. Expected NAME=VALUE"
                        ))
                    })
            })
            .collect()
    }

    /// Environment scope as used for resolution: the environment file
    /// followed by `-v` overrides.
    pub fn environment(&self) -> Result<Vec<KeyValue>, DuffError> {
        let mut env = self.collection.env.clone();
        env.extend(self.cli_variables()?);
        Ok(env)
    }

    pub fn list_requests(&self) -> Vec<RequestInfo> {
        fn visit(nodes: &[Node], prefix: &str, depth: usize, out: &mut Vec<RequestInfo>) {
            for node in nodes {
                let path = if prefix.is_empty() {
                    node.name.clone()
                } else {
                    format!("{prefix}/{}", node.name)
                };
                match node.kind() {
                    NodeKind::Leaf(req) => out.push(RequestInfo {
                        path,
                        kind: "request".to_string(),
                        method: Some(req.method.clone()),
                        url: Some(req.url.clone()),
                        depth,
                    }),
                    NodeKind::Folder(children) => {
                        out.push(RequestInfo {
                            path: path.clone(),
                            kind: "folder".to_string(),
                            method: None,
                            url: None,
                            depth,
                        });
                        visit(children, &path, depth + 1, out);
                    }
                    NodeKind::Malformed => {
                        tracing::warn!(entry = %path, "inconsistent collection entry");
                        out.push(RequestInfo {
                            path,
                            kind: "invalid".to_string(),
                            method: None,
                            url: None,
                            depth,
                        });
                    }
                }
            }
        }

        let mut requests = Vec::new();
        visit(&self.collection.requests, "", 0, &mut requests);
        requests
    }

    pub fn list_variables(&self) -> Result<Vec<VariableView>, DuffError> {
        let view = |scope: &str, kv: &KeyValue| VariableView {
            scope: scope.to_string(),
            key: kv.key.clone(),
            value: kv.value.clone(),
        };

        let mut variables: Vec<VariableView> = self
            .collection
            .variables
            .iter()
            .map(|kv| view("collection", kv))
            .collect();
        variables.extend(self.collection.env.iter().map(|kv| view("environment", kv)));
        variables.extend(self.cli_variables()?.iter().map(|kv| view("cli", kv)));
        Ok(variables)
    }

    /// Picks a request by its `-n` path, or interactively when none was given.
    pub fn select<'a>(&'a self, nav: &mut Navigator<'a>) -> Result<Selection<'a>, DuffError> {
        let state = match self.config.request_name.as_deref() {
            Some(name) => shell::walk(nav, name)?,
            None => shell::browse(nav, &DEFAULT_STYLE)?,
        };

        match state {
            NavState::Done(req) => {
                let leaf = nav.selected().map(|n| n.name.as_str()).unwrap_or_default();
                let name = nav
                    .path()
                    .iter()
                    .skip(1)
                    .map(String::as_str)
                    .chain(std::iter::once(leaf))
                    .collect::<Vec<_>>()
                    .join("/");
                tracing::debug!(request = %name, "request selected");
                Ok(Selection { name, req })
            }
            NavState::Cancelled => Err(DuffError::Cancelled),
            NavState::Inconsistent(inconsistency) => Err(inconsistency.into()),
            NavState::Browsing => Err(DuffError::Generic(
                "selection ended without a request".to_string(),
            )),
        }
    }

    pub fn materialize(&self, selection: &Selection<'_>) -> Result<Req, DuffError> {
        let env = self.environment()?;
        let req = materialize(selection.req, &env, &self.collection.variables);
        for name in unresolved_placeholders(&req) {
            tracing::warn!(variable = %name, "placeholder left unresolved");
        }
        Ok(req)
    }

    pub fn details(&self) -> Result<RequestDetails, DuffError> {
        let mut nav = Navigator::new(&self.collection.requests);
        let selection = self.select(&mut nav)?;
        let req = self.materialize(&selection)?;

        Ok(RequestDetails {
            name: selection.name,
            unresolved: unresolved_placeholders(&req),
            method: req.method,
            url: req.url,
            headers: req.headers,
            body: req.body,
            content_type: req.content_type,
            form: req.parameters.post,
        })
    }

    pub async fn run(&self) -> Result<ExecutionResult, DuffError> {
        let mut nav = Navigator::new(&self.collection.requests);
        let selection = self.select(&mut nav)?;
        let req = self.materialize(&selection)?;
        let name = selection.name;

        if self.config.output_format != OutputFormat::Json {
            println!("Request: \"{name}\" {} {}", req.method, req.url);
        }

        let start_time = Instant::now();
        let response = http::execute_request(&name, &req).await?;
        let elapsed = start_time.elapsed();

        Ok(ExecutionResult {
            request_name: name,
            method: req.method.clone(),
            url: req.url.clone(),
            status: response.status,
            elapsed_ms: elapsed.as_millis() as u64,
            request_headers: req.headers.clone(),
            response_headers: response.headers,
            body: response.body,
        })
    }
}
