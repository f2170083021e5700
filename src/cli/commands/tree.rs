use crate::cli::commands::{CliCommand, CliContext};
use crate::cli::output::{create_table, TableDisplay};
use crate::cli::{CliError, OutputFormat};
use crate::scene::{SceneDocument, TreeNode};
use comfy_table::Table;
use serde::Serialize;
use std::path::PathBuf;

/// Prints the parsed path tree of a scene file.
///
/// JSON output is the nested document itself; table and CSV output list one
/// row per assigned path.
pub struct TreeCommand {
    pub file: PathBuf,
}

#[async_trait::async_trait]
impl CliCommand for TreeCommand {
    async fn execute(&self, ctx: &CliContext) -> Result<(), CliError> {
        let scene = ctx.load_scene(&self.file).await?;
        match ctx.output.format() {
            OutputFormat::Json => ctx.output.print(&TreeDump(&scene)),
            _ => ctx.output.print(&TreeListing::from_scene(&scene)),
        }
    }
}

#[derive(Serialize)]
#[serde(transparent)]
struct TreeDump<'a>(&'a SceneDocument);

// Only ever printed as JSON
impl TableDisplay for TreeDump<'_> {
    fn to_tables(&self, color: bool) -> Vec<(Option<String>, Table)> {
        TreeListing::from_scene(self.0).to_tables(color)
    }

    fn to_csv<W: std::io::Write>(&self, writer: &mut csv::Writer<W>) -> Result<(), CliError> {
        TreeListing::from_scene(self.0).to_csv(writer)
    }
}

/// Flat `path -> value` view of a scene tree.
#[derive(Debug, Serialize)]
pub struct TreeListing {
    pub version: String,
    pub name: String,
    pub entries: Vec<TreeEntry>,
}

#[derive(Debug, Serialize)]
pub struct TreeEntry {
    pub path: String,
    pub value: Vec<String>,
}

impl TreeListing {
    pub fn from_scene(scene: &SceneDocument) -> Self {
        let mut entries = Vec::new();
        collect_entries(&scene.root, String::new(), &mut entries);
        Self {
            version: scene.version.clone(),
            name: scene.name.clone(),
            entries,
        }
    }
}

/// Depth-first walk in key order, emitting every node that holds a value.
fn collect_entries(node: &TreeNode, path: String, entries: &mut Vec<TreeEntry>) {
    if let Some(value) = &node.value {
        entries.push(TreeEntry {
            path: if path.is_empty() { "/".to_string() } else { path.clone() },
            value: value.clone(),
        });
    }
    for (segment, child) in &node.children {
        collect_entries(child, format!("{}/{}", path, segment), entries);
    }
}

impl TableDisplay for TreeListing {
    fn to_tables(&self, _color: bool) -> Vec<(Option<String>, Table)> {
        let mut table = create_table(&["path".to_string(), "value".to_string()]);
        for entry in &self.entries {
            table.add_row(vec![entry.path.clone(), format_value(&entry.value)]);
        }
        vec![(Some(format!("{} ({})", self.name, self.version)), table)]
    }

    fn to_csv<W: std::io::Write>(&self, writer: &mut csv::Writer<W>) -> Result<(), CliError> {
        for entry in &self.entries {
            let mut record = vec![entry.path.as_str()];
            record.extend(entry.value.iter().map(String::as_str));
            writer.write_record(&record)?;
        }
        Ok(())
    }
}

/// Joins value tokens, re-quoting the ones that contain whitespace or are empty.
fn format_value(value: &[String]) -> String {
    value
        .iter()
        .map(|token| {
            if token.is_empty() || token.chars().any(char::is_whitespace) {
                format!("\"{}\"", token)
            } else {
                token.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_paths() {
        let scene = SceneDocument::parse("/fx/1 HALL\n/fx/1/source INS INS\n/ch/01/config \"Lead Vox\" 1 RD 1");
        let listing = TreeListing::from_scene(&scene);
        let paths: Vec<&str> = listing.entries.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["/ch/01/config", "/fx/1", "/fx/1/source"]);
        assert_eq!(format_value(&listing.entries[0].value), "\"Lead Vox\" 1 RD 1");
    }
}
