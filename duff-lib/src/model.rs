use serde::Serialize;
use std::collections::BTreeMap;

pub type ParamMap = BTreeMap<String, String>;
pub type NodeList = Vec<Node>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyValue {
    pub key: String,
    pub value: String,
}

impl KeyValue {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters {
    pub get: ParamMap,
    pub post: ParamMap,
    pub path: ParamMap,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Req {
    #[serde(rename = "Method")]
    pub method: String,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "Headers")]
    pub headers: ParamMap,
    #[serde(rename = "Body")]
    pub body: String,
    #[serde(rename = "ContentType")]
    pub content_type: String,
    /// Auxiliary data derived by the loader; never part of the serialized request.
    #[serde(skip)]
    pub parameters: Parameters,
}

impl Req {
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            ..Self::default()
        }
    }
}

/// One entry of the collection tree. A leaf carries a request and no children,
/// a folder carries children and no request. The loader is expected to uphold
/// this; the navigator checks it through [`Node::kind`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    pub name: String,
    pub req: Option<Req>,
    pub children: NodeList,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind<'a> {
    Leaf(&'a Req),
    Folder(&'a [Node]),
    /// Neither a proper leaf nor a proper folder.
    Malformed,
}

impl Node {
    pub fn leaf(name: impl Into<String>, req: Req) -> Self {
        Self {
            name: name.into(),
            req: Some(req),
            children: Vec::new(),
        }
    }

    pub fn folder(name: impl Into<String>, children: NodeList) -> Self {
        Self {
            name: name.into(),
            req: None,
            children,
        }
    }

    pub fn kind(&self) -> NodeKind<'_> {
        match (&self.req, self.children.is_empty()) {
            (Some(req), true) => NodeKind::Leaf(req),
            (None, false) => NodeKind::Folder(&self.children),
            _ => NodeKind::Malformed,
        }
    }

    pub fn is_folder(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Format marker of the source document. Opaque to resolution and navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Schema {
    pub url: String,
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    pub name: String,
    pub variables: Vec<KeyValue>,
    pub requests: NodeList,
    pub env: Vec<KeyValue>,
    pub schema: Schema,
}

impl Collection {
    /// Counts leaves at every depth.
    pub fn request_count(&self) -> usize {
        fn count(nodes: &[Node]) -> usize {
            nodes
                .iter()
                .map(|n| if n.is_folder() { count(&n.children) } else { 1 })
                .sum()
        }
        count(&self.requests)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_kind() {
        let leaf = Node::leaf("get user", Req::new("GET", "/users"));
        assert!(matches!(leaf.kind(), NodeKind::Leaf(r) if r.url == "/users"));

        let folder = Node::folder("users", vec![leaf.clone()]);
        assert!(matches!(folder.kind(), NodeKind::Folder(c) if c.len() == 1));

        let empty_folder = Node::folder("empty", Vec::new());
        assert_eq!(empty_folder.kind(), NodeKind::Malformed);

        let mut leaf_with_children = leaf.clone();
        leaf_with_children.children.push(leaf);
        assert_eq!(leaf_with_children.kind(), NodeKind::Malformed);
    }

    #[test]
    fn test_request_count() {
        let collection = Collection {
            requests: vec![
                Node::leaf("a", Req::new("GET", "/a")),
                Node::folder(
                    "f",
                    vec![
                        Node::leaf("b", Req::new("GET", "/b")),
                        Node::folder("g", vec![Node::leaf("c", Req::new("GET", "/c"))]),
                    ],
                ),
            ],
            ..Collection::default()
        };
        assert_eq!(collection.request_count(), 3);
    }

    #[test]
    fn test_parameters_not_serialized() {
        let mut req = Req::new("POST", "/login");
        req.parameters.post.insert("user".to_string(), "admin".to_string());
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["Method"], "POST");
        assert!(json.get("parameters").is_none());
        assert!(json.get("Parameters").is_none());
    }
}
