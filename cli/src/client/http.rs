use crate::core::error::DuffError;
use crate::core::json;
use crate::core::version::user_agent;
use duff_lib::Req;
use reqwest::header::{HeaderName, HeaderValue, CONTENT_TYPE, USER_AGENT};
use reqwest::Method;
use std::collections::BTreeMap;

#[derive(Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

/// Sends a materialized request once and collects the response.
pub async fn execute_request(name: &str, req: &Req) -> Result<HttpResponse, DuffError> {
    tracing::debug!(request = name, method = %req.method, url = %req.url, "executing request");

    let method = Method::from_bytes(req.method.as_bytes())
        .map_err(|_| DuffError::Validation(format!("Invalid HTTP method '{}'", req.method)))?;

    let client = reqwest::Client::new();
    let mut req_builder = client
        .request(method, &req.url)
        .header(USER_AGENT, user_agent());

    let mut has_content_type = false;
    for (key, value) in &req.headers {
        let (Ok(name), Ok(value)) = (
            HeaderName::from_bytes(key.as_bytes()),
            HeaderValue::from_str(value),
        ) else {
            tracing::warn!(header = %key, "skipping header that is not valid HTTP");
            continue;
        };
        tracing::debug!(header = %name, "adding header");
        has_content_type |= name == CONTENT_TYPE;
        req_builder = req_builder.header(name, value);
    }

    if !req.body.is_empty() {
        if !has_content_type {
            if let Some(content_type) = json::content_type_for(req) {
                req_builder = req_builder.header(CONTENT_TYPE, content_type);
            }
        }
        req_builder = req_builder.body(req.body.clone());
    } else if !req.parameters.post.is_empty() {
        req_builder = req_builder.form(&req.parameters.post);
    }

    let response = req_builder.send().await?;
    let status = response.status().as_u16();

    let mut headers = BTreeMap::new();
    for (key, value) in response.headers() {
        if let Ok(value_str) = value.to_str() {
            headers.insert(key.to_string(), value_str.to_string());
        }
    }

    let body = response.text().await?;
    tracing::debug!(status, bytes = body.len(), "response received");

    Ok(HttpResponse {
        status,
        headers,
        body,
    })
}
