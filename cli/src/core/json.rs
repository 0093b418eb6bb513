use duff_lib::Req;

pub const CONTENT_TYPE: &str = "application/json";

pub fn is_json_content(content: &str) -> bool {
    let trimmed = content.trim();
    (trimmed.starts_with('{') && trimmed.ends_with('}'))
        || (trimmed.starts_with('[') && trimmed.ends_with(']'))
}

/// Declared content type of the request, or JSON when the body looks like JSON.
pub fn content_type_for(req: &Req) -> Option<String> {
    if !req.content_type.is_empty() {
        Some(req.content_type.clone())
    } else if is_json_content(&req.body) {
        Some(CONTENT_TYPE.to_string())
    } else {
        None
    }
}
