//! # Scene Parser
//!
//! Turns the text of a console scene dump into a [`SceneDocument`]: the
//! header fields plus a [`TreeNode`] keyed by the slash-delimited paths of
//! every data line.
//!
//! ## Parsing Process
//!
//! 1. **Tokenize**: every line is split into quote-aware tokens ([`tokenizer`])
//! 2. **Header detection**: a first line that does not start with `/` is a
//!    header record carrying the version tag and scene name
//! 3. **Tree insertion**: each `/`-rooted line stores its remaining tokens at
//!    its path, creating nodes as needed ([`tree`])
//!
//! Input is trusted firmware output. Nothing here fails: lines that do not
//! look like data are skipped and missing fields only surface when a caller
//! asks for them.

pub mod tokenizer;
pub mod tree;

use serde::Serialize;

use crate::error::SceneError;
use crate::{debug_fn, trace_fn};

pub use tokenizer::{tokenize, tokenize_line};
pub use tree::TreeNode;

/// Version tag given to files that start straight away with data lines.
pub const HEADERLESS_VERSION: &str = "X-Air";

/// Scene name used when the file does not provide one.
pub const DEFAULT_SCENE_NAME: &str = "Unnamed scene";

const PATH_SEPARATOR: char = '/';

/// A parsed scene file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneDocument {
    /// Hardware/firmware tag from the header, or [`HEADERLESS_VERSION`]
    pub version: String,
    /// Scene display name, or [`DEFAULT_SCENE_NAME`]
    pub name: String,
    /// All tokens of the header line (empty for headerless files)
    pub header: Vec<String>,
    pub root: TreeNode,
}

impl SceneDocument {
    /// Parses the full text of a scene file.
    pub fn parse(content: &str) -> Self {
        let mut lines = tokenize(content).into_iter().peekable();

        let is_header = lines
            .peek()
            .and_then(|tokens| tokens.first())
            .map_or(false, |first| !first.starts_with(PATH_SEPARATOR));

        let mut document = if is_header {
            let header = lines.next().unwrap_or_default();
            let version = header.first().cloned().unwrap_or_default();
            let name = header
                .get(1)
                .cloned()
                .unwrap_or_else(|| DEFAULT_SCENE_NAME.to_string());
            debug_fn!("parse", "Header line: version={:?} name={:?}", version, name);
            SceneDocument {
                version,
                name,
                header,
                root: TreeNode::new(),
            }
        } else {
            debug_fn!("parse", "No header line, assuming {}", HEADERLESS_VERSION);
            SceneDocument {
                version: HEADERLESS_VERSION.to_string(),
                name: DEFAULT_SCENE_NAME.to_string(),
                header: Vec::new(),
                root: TreeNode::new(),
            }
        };

        let mut inserted = 0usize;
        for (index, tokens) in lines.enumerate() {
            if document.insert_line(tokens) {
                inserted += 1;
            } else {
                trace_fn!("parse", "Skipping line {}", index + 1);
            }
        }
        debug_fn!(
            "parse",
            "Inserted {} lines, {} top-level sections",
            inserted,
            document.root.len()
        );

        document
    }

    /// Inserts one tokenized data line. Returns `false` when the line is not
    /// a `/`-rooted data record and was skipped.
    fn insert_line(&mut self, mut tokens: Vec<String>) -> bool {
        let is_data = tokens
            .first()
            .map_or(false, |first| first.starts_with(PATH_SEPARATOR));
        if !is_data {
            return false;
        }

        let value = tokens.split_off(1);
        let path = &tokens[0];
        let segments: Vec<&str> = path.split(PATH_SEPARATOR).skip(1).collect();
        self.root.insert(&segments, value);
        true
    }

    pub fn is_headerless(&self) -> bool {
        self.header.is_empty() && self.version == HEADERLESS_VERSION
    }

    /// The free-text note stored after the name in the header, if any.
    pub fn note(&self) -> Option<&str> {
        self.header
            .get(2)
            .map(String::as_str)
            .filter(|note| !note.is_empty())
    }

    /// Returns the node at `path`, or a `MissingField` error.
    pub fn node(&self, path: &str) -> Result<&TreeNode, SceneError> {
        self.root
            .get(path)
            .ok_or_else(|| SceneError::MissingField(path.to_string()))
    }

    /// Returns the value tokens assigned to `path`.
    pub fn values(&self, path: &str) -> Result<&[String], SceneError> {
        self.node(path)?
            .value
            .as_deref()
            .ok_or_else(|| SceneError::MissingField(path.to_string()))
    }

    /// Returns the value token at `index` of `path`.
    pub fn value_at(&self, path: &str, index: usize) -> Result<&str, SceneError> {
        self.values(path)?
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| SceneError::MissingField(format!("{}[{}]", path, index)))
    }

    /// Number of children under `path` (0 when the path is absent).
    pub fn count(&self, path: &str) -> usize {
        self.root.get(path).map_or(0, TreeNode::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_line_is_consumed() {
        let doc = SceneDocument::parse("#4.0# \"Sunday\" \"band\" %000000000 1\n/ch/01/mix ON -10");
        assert_eq!(doc.version, "#4.0#");
        assert_eq!(doc.name, "Sunday");
        assert_eq!(doc.note(), Some("band"));
        assert_eq!(doc.root.len(), 1);
        assert_eq!(doc.values("ch/01/mix").unwrap(), &["ON", "-10"]);
    }

    #[test]
    fn test_headerless_defaults() {
        let doc = SceneDocument::parse("/ch/01/mix ON -10\n/ch/02/mix OFF -oo\n");
        assert_eq!(doc.version, HEADERLESS_VERSION);
        assert_eq!(doc.name, DEFAULT_SCENE_NAME);
        assert!(doc.is_headerless());
        assert_eq!(doc.count("ch"), 2);
    }

    #[test]
    fn test_header_without_name() {
        let doc = SceneDocument::parse("#2.1#\n/a 1");
        assert_eq!(doc.version, "#2.1#");
        assert_eq!(doc.name, DEFAULT_SCENE_NAME);
        assert_eq!(doc.note(), None);
    }

    #[test]
    fn test_empty_input() {
        let doc = SceneDocument::parse("");
        assert_eq!(doc.version, HEADERLESS_VERSION);
        assert!(doc.root.is_empty());
    }

    #[test]
    fn test_non_path_lines_are_skipped() {
        let doc = SceneDocument::parse("#4.0# \"S\"\n\nstray words\n\"\" /x 1\n/ok 1");
        assert_eq!(doc.root.len(), 1);
        assert!(doc.root.value.is_none());
        assert!(doc.node("ok").is_ok());
    }

    #[test]
    fn test_trailing_slash_keeps_empty_segment() {
        let doc = SceneDocument::parse(r#"/-show/name/ "My Scene Name" extra"#);
        let node = doc.node("-show/name").unwrap();
        assert_eq!(
            node.child("").and_then(|n| n.value.clone()),
            Some(vec!["My Scene Name".to_string(), "extra".to_string()])
        );
    }

    #[test]
    fn test_missing_field_errors() {
        let doc = SceneDocument::parse("/ch/01/config \"Kick\" 1 RD 1");
        assert!(matches!(doc.node("ch/02"), Err(SceneError::MissingField(_))));
        assert!(matches!(doc.values("ch/01"), Err(SceneError::MissingField(_))));
        assert_eq!(doc.value_at("ch/01/config", 3).unwrap(), "1");
        match doc.value_at("ch/01/config", 9) {
            Err(SceneError::MissingField(path)) => assert_eq!(path, "ch/01/config[9]"),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
