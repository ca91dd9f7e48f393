//! Notebook cells - the unit of editable content
//!
//! A cell owns its content and a `selected` flag. Selection is managed by
//! the [`Document`](super::Document); nothing here enforces the
//! at-most-one-selected rule on its own.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable, unique cell identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CellId(pub u64);

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cell#{}", self.0)
    }
}

/// The content kind of a cell, which also selects the editor's language mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellType {
    #[default]
    Javascript,
    Markdown,
    Css,
    Raw,
}

impl CellType {
    /// Editor language mode name for this cell type
    pub fn editor_mode(self) -> &'static str {
        match self {
            CellType::Javascript => "javascript",
            CellType::Markdown => "markdown",
            CellType::Css => "css",
            CellType::Raw => "text/plain",
        }
    }
}

/// A single notebook cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub id: CellId,
    pub cell_type: CellType,
    pub content: String,
    pub selected: bool,
}

impl Cell {
    pub fn new(id: CellId, cell_type: CellType, content: impl Into<String>) -> Self {
        Self {
            id,
            cell_type,
            content: content.into(),
            selected: false,
        }
    }
}

/// Derived per-cell read model consumed by rendering layers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellView {
    pub id: CellId,
    pub selected: bool,
    pub cell_type: CellType,
    pub content: String,
    pub read_only: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cell_is_unselected() {
        let cell = Cell::new(CellId(3), CellType::Markdown, "# hi");
        assert!(!cell.selected);
        assert_eq!(cell.content, "# hi");
    }

    #[test]
    fn cell_type_serializes_lowercase() {
        let json = serde_json::to_string(&CellType::Markdown).unwrap();
        assert_eq!(json, "\"markdown\"");
        let parsed: CellType = serde_json::from_str("\"css\"").unwrap();
        assert_eq!(parsed, CellType::Css);
    }

    #[test]
    fn raw_cells_use_plain_text_mode() {
        assert_eq!(CellType::Raw.editor_mode(), "text/plain");
        assert_eq!(CellType::Javascript.editor_mode(), "javascript");
    }
}
