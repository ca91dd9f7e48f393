//! Document state store - the single source of truth for mode and selection
//!
//! All mutators are synchronous and expect a single writer. `set_mode` is a
//! raw state write; transition rules live in `update::mode`.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::cell::{Cell, CellId, CellType, CellView};

/// Document-level interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    #[default]
    Command,
    Edit,
    TitleEdit,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Command => write!(f, "command"),
            Mode::Edit => write!(f, "edit"),
            Mode::TitleEdit => write!(f, "title-edit"),
        }
    }
}

/// Display mode of the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Editor,
    Presentation,
}

impl ViewMode {
    pub fn is_presentation(self) -> bool {
        self == ViewMode::Presentation
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Editor => write!(f, "editor"),
            ViewMode::Presentation => write!(f, "presentation"),
        }
    }
}

/// Errors raised by the document store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// No cell with this id exists
    NotFound(CellId),
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentError::NotFound(id) => write!(f, "{} not found", id),
        }
    }
}

impl std::error::Error for DocumentError {}

/// Derived per-document read model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentView {
    pub mode: Mode,
    pub view_mode: ViewMode,
    pub title: Option<String>,
}

/// The notebook document: cells plus the shared interaction state
#[derive(Debug, Clone, Default)]
pub struct Document {
    mode: Mode,
    view_mode: ViewMode,
    title: Option<String>,
    /// Only meaningful while `mode == TitleEdit`
    previous_mode: Mode,
    cells: Vec<Cell>,
    next_cell_id: u64,
}

impl Document {
    pub fn new(view_mode: ViewMode) -> Self {
        Self {
            view_mode,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn previous_mode(&self) -> Mode {
        self.previous_mode
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Look up a cell by id
    pub fn cell(&self, id: CellId) -> Result<&Cell, DocumentError> {
        self.cells
            .iter()
            .find(|c| c.id == id)
            .ok_or(DocumentError::NotFound(id))
    }

    fn cell_mut(&mut self, id: CellId) -> Result<&mut Cell, DocumentError> {
        self.cells
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(DocumentError::NotFound(id))
    }

    pub fn selected_cell_id(&self) -> Option<CellId> {
        self.cells.iter().find(|c| c.selected).map(|c| c.id)
    }

    pub fn is_selected(&self, id: CellId) -> bool {
        self.cell(id).map(|c| c.selected).unwrap_or(false)
    }

    /// Raw mode write; performs no transition validation
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub(crate) fn set_previous_mode(&mut self, mode: Mode) {
        self.previous_mode = mode;
    }

    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        self.view_mode = view_mode;
    }

    /// Select `id`, clearing the flag on every other cell
    ///
    /// Unknown ids fail without touching the current selection.
    pub fn select_cell(&mut self, id: CellId) -> Result<(), DocumentError> {
        self.cell(id)?;
        for cell in &mut self.cells {
            cell.selected = cell.id == id;
        }
        Ok(())
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Replace a cell's content. Never touches mode or selection.
    pub fn update_cell_content(
        &mut self,
        id: CellId,
        content: impl Into<String>,
    ) -> Result<(), DocumentError> {
        self.cell_mut(id)?.content = content.into();
        Ok(())
    }

    /// Append a new, unselected cell and return its id
    pub fn insert_cell(&mut self, cell_type: CellType, content: impl Into<String>) -> CellId {
        let id = CellId(self.next_cell_id);
        self.next_cell_id += 1;
        self.cells.push(Cell::new(id, cell_type, content));
        id
    }

    /// Remove a cell. Removing the selected cell while editing drops back to
    /// command mode, since edit mode needs a selected target.
    pub fn remove_cell(&mut self, id: CellId) -> Result<Cell, DocumentError> {
        let pos = self
            .cells
            .iter()
            .position(|c| c.id == id)
            .ok_or(DocumentError::NotFound(id))?;
        let removed = self.cells.remove(pos);
        if removed.selected && self.mode == Mode::Edit {
            self.mode = Mode::Command;
        }
        Ok(removed)
    }

    pub fn view(&self) -> DocumentView {
        DocumentView {
            mode: self.mode,
            view_mode: self.view_mode,
            title: self.title.clone(),
        }
    }

    pub fn cell_view(&self, id: CellId) -> Result<CellView, DocumentError> {
        let cell = self.cell(id)?;
        Ok(CellView {
            id: cell.id,
            selected: cell.selected,
            cell_type: cell.cell_type,
            content: cell.content.clone(),
            read_only: self.view_mode.is_presentation(),
        })
    }

    pub fn cell_views(&self) -> Vec<CellView> {
        let read_only = self.view_mode.is_presentation();
        self.cells
            .iter()
            .map(|cell| CellView {
                id: cell.id,
                selected: cell.selected,
                cell_type: cell.cell_type,
                content: cell.content.clone(),
                read_only,
            })
            .collect()
    }
}
