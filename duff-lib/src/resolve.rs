use crate::model::{KeyValue, ParamMap, Req};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeSet;

lazy_static! {
    static ref PLACEHOLDER_REGEX: Regex = Regex::new(r"\{\{([^{}]+)\}\}").unwrap();
}

/// How a placeholder inside a header or parameter name is rewritten.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyRewrite {
    /// The substituted name is inserted next to the original one, which keeps
    /// its value from before the pass. Both names end up in the map.
    #[default]
    Keep,
    /// The original name is removed once the substituted one is inserted.
    Move,
}

/// Substitutes every `{{key}}` token of `req` in place.
///
/// Collection variables come first and environment variables after them. When a
/// key is defined more than once the last definition wins, so the environment
/// overrides the collection. Tokens without a matching variable are left as
/// they are.
pub fn resolve_vars(env: &[KeyValue], vars: &[KeyValue], req: &mut Req) {
    resolve_vars_with(env, vars, req, KeyRewrite::default());
}

pub fn resolve_vars_with(env: &[KeyValue], vars: &[KeyValue], req: &mut Req, mode: KeyRewrite) {
    for var in combine(vars, env) {
        let token = format!("{{{{{}}}}}", var.key);
        tracing::trace!(token = %token, "applying variable");

        req.url = req.url.replace(&token, &var.value);
        req.body = req.body.replace(&token, &var.value);

        rewrite_map(&mut req.headers, &token, &var.value, mode);
        rewrite_map(&mut req.parameters.get, &token, &var.value, mode);
        rewrite_map(&mut req.parameters.post, &token, &var.value, mode);
        rewrite_map(&mut req.parameters.path, &token, &var.value, mode);
    }
}

/// Concatenates both scopes. A repeated key is applied once, at the position
/// of its last definition, so values referencing it are expanded before it.
fn combine<'a>(vars: &'a [KeyValue], env: &'a [KeyValue]) -> Vec<&'a KeyValue> {
    let mut combined: Vec<&KeyValue> = Vec::with_capacity(vars.len() + env.len());
    for var in vars.iter().chain(env.iter()) {
        combined.retain(|c| c.key != var.key);
        combined.push(var);
    }
    combined
}

fn rewrite_map(map: &mut ParamMap, token: &str, value: &str, mode: KeyRewrite) {
    let touched: Vec<(String, String)> = map
        .iter()
        .filter(|(k, v)| k.contains(token) || v.contains(token))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();

    for (key, val) in touched {
        let new_key = key.replace(token, value);
        let new_val = val.replace(token, value);
        if mode == KeyRewrite::Move && new_key != key {
            map.remove(&key);
        }
        map.insert(new_key, new_val);
    }
}

/// Names of the `{{...}}` tokens still present anywhere in `req`, sorted and deduplicated.
pub fn unresolved_placeholders(req: &Req) -> Vec<String> {
    let mut found = BTreeSet::new();
    let mut scan = |text: &str| {
        for cap in PLACEHOLDER_REGEX.captures_iter(text) {
            found.insert(cap[1].to_string());
        }
    };

    scan(&req.url);
    scan(&req.body);
    for map in [
        &req.headers,
        &req.parameters.get,
        &req.parameters.post,
        &req.parameters.path,
    ] {
        for (k, v) in map {
            scan(k);
            scan(v);
        }
    }

    found.into_iter().collect()
}
