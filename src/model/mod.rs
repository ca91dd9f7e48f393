//! Notebook model - the complete state of the focus/mode core
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod cell;
pub mod document;
pub mod surface;

pub use cell::{Cell, CellId, CellType, CellView};
pub use document::{Document, DocumentError, DocumentView, Mode, ViewMode};
pub use surface::{SurfaceBinding, SurfaceId, SurfaceRegistry};

use crate::config::NotebookConfig;
use crate::widget::WidgetOptions;

/// The complete notebook model
#[derive(Debug, Clone)]
pub struct NotebookModel {
    /// Document state: cells, mode, view mode, title
    pub document: Document,
    /// Mounted surfaces in mount order
    pub surfaces: SurfaceRegistry,
    /// Editor configuration
    pub config: NotebookConfig,
}

impl NotebookModel {
    /// Create an empty notebook using the configured default view mode
    pub fn new(config: NotebookConfig) -> Self {
        Self {
            document: Document::new(config.default_view_mode),
            surfaces: SurfaceRegistry::new(),
            config,
        }
    }

    /// Create a notebook around an existing document
    pub fn with_document(document: Document, config: NotebookConfig) -> Self {
        Self {
            document,
            surfaces: SurfaceRegistry::new(),
            config,
        }
    }

    /// Widget configuration for a cell's editor surface
    pub fn widget_options(&self, id: CellId) -> Result<WidgetOptions, DocumentError> {
        let cell = self.document.cell(id)?;
        Ok(WidgetOptions::for_cell(
            cell.cell_type,
            self.document.view_mode(),
            &self.config,
        ))
    }

    /// Debug-only consistency check of the document invariants
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self, context: &str) {
        let selected = self.document.cells().iter().filter(|c| c.selected).count();
        debug_assert!(
            selected <= 1,
            "[{}] {} cells selected, expected at most one",
            context,
            selected
        );
    }
}

impl Default for NotebookModel {
    fn default() -> Self {
        Self::new(NotebookConfig::default())
    }
}
