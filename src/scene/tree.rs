use serde::Serialize;
use std::collections::BTreeMap;

/// One node of the path tree built from a scene file.
///
/// Children are keyed by path segment. A node only carries a `value` when a
/// line assigned to its path directly; it may have children at the same time
/// (e.g. `/fx/1 HALL` next to `/fx/1/source INS INS`).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TreeNode {
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub children: BTreeMap<String, TreeNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Vec<String>>,
}

impl TreeNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Walks `segments` from this node, creating missing children, and stores
    /// `value` on the final node. A later insert on the same path replaces the
    /// earlier value.
    pub fn insert<S: AsRef<str>>(&mut self, segments: &[S], value: Vec<String>) {
        let mut current = self;
        for segment in segments {
            current = current
                .children
                .entry(segment.as_ref().to_string())
                .or_default();
        }
        current.value = Some(value);
    }

    pub fn child(&self, segment: &str) -> Option<&TreeNode> {
        self.children.get(segment)
    }

    /// Looks up a node by a slash-separated path relative to this node.
    /// A leading slash is ignored, so `"/ch/01"` and `"ch/01"` are equivalent.
    pub fn get(&self, path: &str) -> Option<&TreeNode> {
        let path = path.strip_prefix('/').unwrap_or(path);
        if path.is_empty() {
            return Some(self);
        }
        path.split('/')
            .try_fold(self, |node, segment| node.child(segment))
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}
