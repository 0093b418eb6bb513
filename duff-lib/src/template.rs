use crate::endpoint::create_endpoint;
use crate::model::{KeyValue, Req};
use crate::resolve::{resolve_vars_with, KeyRewrite};

/// Independent copy of a stored template. `None` stays `None`.
pub fn deep_copy_req(original: Option<&Req>) -> Option<Req> {
    original.cloned()
}

/// Copies `template`, resolves its variables and finalizes the URL.
///
/// The returned request owns all of its data; the template is only read.
pub fn materialize(template: &Req, env: &[KeyValue], vars: &[KeyValue]) -> Req {
    materialize_with(template, env, vars, KeyRewrite::default())
}

pub fn materialize_with(
    template: &Req,
    env: &[KeyValue],
    vars: &[KeyValue],
    mode: KeyRewrite,
) -> Req {
    let mut req = template.clone();
    resolve_vars_with(env, vars, &mut req, mode);
    req.url = create_endpoint(&req.url, &req.parameters.get, &req.parameters.path);
    tracing::debug!(method = %req.method, url = %req.url, "materialized request");
    req
}
