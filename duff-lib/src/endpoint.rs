use crate::model::ParamMap;

/// Builds the request-line URL from a resolved URL template.
///
/// Every `:name` token is replaced by its path parameter, then `?` and one
/// `name=value&` pair per query parameter are appended. The separators are
/// always emitted, so an empty query leaves a bare `?` and a non-empty one a
/// trailing `&`. Values are inserted without URL encoding.
pub fn create_endpoint(url: &str, get_params: &ParamMap, path_params: &ParamMap) -> String {
    let mut endpoint = url.to_string();
    for (name, value) in path_params {
        endpoint = endpoint.replace(&format!(":{name}"), value);
    }

    endpoint.push('?');
    for (name, value) in get_params {
        endpoint.push_str(name);
        endpoint.push('=');
        endpoint.push_str(value);
        endpoint.push('&');
    }

    endpoint
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> ParamMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_path_substitution() {
        let endpoint = create_endpoint("/users/:id", &ParamMap::new(), &params(&[("id", "42")]));
        assert_eq!(endpoint, "/users/42?");
    }

    #[test]
    fn test_path_substitution_is_exhaustive() {
        let endpoint = create_endpoint(
            "/a/:id/b/:id",
            &ParamMap::new(),
            &params(&[("id", "7")]),
        );
        assert_eq!(endpoint, "/a/7/b/7?");
    }

    #[test]
    fn test_query_assembly() {
        let endpoint = create_endpoint("/x", &params(&[("a", "1"), ("b", "2")]), &ParamMap::new());
        assert!(endpoint.starts_with("/x?"));
        assert_eq!(endpoint.matches("a=1&").count(), 1);
        assert_eq!(endpoint.matches("b=2&").count(), 1);
        assert_eq!(endpoint, "/x?a=1&b=2&");
    }

    #[test]
    fn test_values_not_encoded() {
        let endpoint = create_endpoint(
            "/search/:term",
            &params(&[("q", "a b&c")]),
            &params(&[("term", "x/y")]),
        );
        assert_eq!(endpoint, "/search/x/y?q=a b&c&");
    }

    #[test]
    fn test_unknown_path_token_left_alone() {
        let endpoint = create_endpoint("/users/:id", &ParamMap::new(), &params(&[("other", "1")]));
        assert_eq!(endpoint, "/users/:id?");
    }
}
