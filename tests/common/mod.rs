//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use cellsync::config::NotebookConfig;
use cellsync::model::{CellId, CellType, Document, SurfaceId, ViewMode};
use cellsync::runtime::Notebook;
use cellsync::widget::{CallLog, RecordingWidget, WidgetCall};

/// A notebook whose cells and title are all mounted with recording widgets
pub struct Harness {
    pub notebook: Notebook,
    pub log: CallLog,
    pub cells: Vec<CellId>,
}

impl Harness {
    /// Calls recorded since the last drain
    pub fn drain(&self) -> Vec<WidgetCall> {
        self.log.take()
    }

    pub fn mount(&mut self, surface: SurfaceId) {
        let widget = RecordingWidget::new(surface, &self.log);
        self.notebook.mount(surface, Box::new(widget)).unwrap();
    }
}

/// Document with `count` javascript cells, nothing selected
pub fn test_document(count: usize, view_mode: ViewMode) -> (Document, Vec<CellId>) {
    let mut document = Document::new(view_mode);
    let cells = (0..count)
        .map(|i| document.insert_cell(CellType::Javascript, format!("cell {}", i)))
        .collect();
    (document, cells)
}

/// Notebook with `count` cells and the title field, all mounted (cells first)
pub fn harness(count: usize) -> Harness {
    harness_in(count, ViewMode::Editor)
}

pub fn harness_in(count: usize, view_mode: ViewMode) -> Harness {
    let (document, cells) = test_document(count, view_mode);
    let mut harness = Harness {
        notebook: Notebook::with_document(document, NotebookConfig::default()),
        log: CallLog::new(),
        cells,
    };
    for id in harness.cells.clone() {
        harness.mount(SurfaceId::Cell(id));
    }
    harness.mount(SurfaceId::Title);
    harness
}

/// Harness in edit mode on the first cell, with the log drained
pub fn editing_first_cell(count: usize) -> Harness {
    let mut h = harness(count);
    let first = h.cells[0];
    h.notebook.request_enter_edit(first).unwrap();
    h.drain();
    h
}

pub fn cell(id: CellId) -> SurfaceId {
    SurfaceId::Cell(id)
}

pub fn focus(id: CellId) -> WidgetCall {
    WidgetCall::Focus(SurfaceId::Cell(id))
}

pub fn blur(id: CellId) -> WidgetCall {
    WidgetCall::Blur(SurfaceId::Cell(id))
}
