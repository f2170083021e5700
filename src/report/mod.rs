//! # Scene Report
//!
//! Column-store view of a parsed scene: for every section (channels, buses,
//! matrices, ...) the rows `1..N` with the fields worth printing. Cells are
//! either a flag (printed as a check mark or blank) or verbatim text.
//!
//! The report knows nothing about terminals; see `cli::output` for rendering.

pub mod tables;

use serde::{Serialize, Serializer};

use crate::error::SceneError;
use crate::routing::FamilyProfile;
use crate::scene::SceneDocument;

pub use tables::ReportBuilder;

/// Glyph printed for a set flag.
pub const CHECK_MARK: &str = "\u{2713}";

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Flag(bool),
    Text {
        text: String,
        /// Scene colour code (e.g. `RD`, `GNi`) attached to name cells
        color: Option<String>,
    },
}

impl Cell {
    pub fn text(text: impl Into<String>) -> Self {
        Cell::Text {
            text: text.into(),
            color: None,
        }
    }

    pub fn colored(text: impl Into<String>, color: Option<String>) -> Self {
        Cell::Text {
            text: text.into(),
            color,
        }
    }

    /// Text shown for this cell in tables and CSV.
    pub fn display(&self) -> &str {
        match self {
            Cell::Flag(true) => CHECK_MARK,
            Cell::Flag(false) => "",
            Cell::Text { text, .. } => text,
        }
    }

    pub fn color(&self) -> Option<&str> {
        match self {
            Cell::Text { color, .. } => color.as_deref(),
            Cell::Flag(_) => None,
        }
    }
}

impl From<bool> for Cell {
    fn from(flag: bool) -> Self {
        Cell::Flag(flag)
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Cell::text(text)
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell::text(text)
    }
}

// JSON keeps flags as booleans and text as plain strings
impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Cell::Flag(flag) => serializer.serialize_bool(*flag),
            Cell::Text { text, .. } => serializer.serialize_str(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportTable {
    pub title: String,
    pub header: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl ReportTable {
    pub fn new(title: &str, header: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            header: header.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        debug_assert_eq!(row.len(), self.header.len());
        self.rows.push(row);
    }

    /// Cell of row `row` in the column named `column`.
    pub fn cell(&self, row: usize, column: &str) -> Option<&Cell> {
        let index = self.header.iter().position(|h| h == column)?;
        self.rows.get(row)?.get(index)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneReport {
    pub title: String,
    pub version: String,
    pub profile: String,
    pub tables: Vec<ReportTable>,
}

impl SceneReport {
    pub fn table(&self, title: &str) -> Option<&ReportTable> {
        self.tables.iter().find(|t| t.title == title)
    }
}

/// Builds the full report for a scene under the given profile.
pub fn build_report(
    scene: &SceneDocument,
    profile: &FamilyProfile,
) -> Result<SceneReport, SceneError> {
    ReportBuilder::new(scene, profile).build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_display() {
        assert_eq!(Cell::Flag(true).display(), CHECK_MARK);
        assert_eq!(Cell::Flag(false).display(), "");
        assert_eq!(Cell::from("Kick").display(), "Kick");
        assert_eq!(Cell::colored("Kick", Some("RD".into())).color(), Some("RD"));
    }

    #[test]
    fn test_cell_serializes_as_scalar() {
        let row = vec![Cell::Flag(true), Cell::colored("Vox", Some("YE".into()))];
        assert_eq!(serde_json::to_string(&row).unwrap(), r#"[true,"Vox"]"#);
    }

    #[test]
    fn test_table_cell_lookup() {
        let mut table = ReportTable::new("Bus", &["ch", "name"]);
        table.push_row(vec!["01".into(), "Mon".into()]);
        assert_eq!(table.cell(0, "name").map(Cell::display), Some("Mon"));
        assert!(table.cell(0, "insert").is_none());
        assert!(table.cell(1, "name").is_none());
    }
}
