//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::model::{CellId, CellType, Mode, SurfaceId, ViewMode};

/// Document store mutations (the action dispatch surface)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentMsg {
    /// Select a cell, deselecting every other cell
    SelectCell(CellId),
    /// Raw mode write, bypassing transition rules
    ///
    /// Writing `TitleEdit` still records the interrupted mode so leaving
    /// title editing can restore it.
    ChangeMode(Mode),
    /// Switch between editor and presentation display
    SetViewMode(ViewMode),
    /// Replace the page title text
    ChangePageTitle(String),
    /// Replace a cell's content
    UpdateInputContent { id: CellId, content: String },
    /// Append a new cell
    InsertCell {
        cell_type: CellType,
        content: String,
    },
    /// Remove a cell
    RemoveCell(CellId),
}

/// Requests to the mode controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeMsg {
    /// Enter title editing, remembering the current mode
    EnterTitleEdit,
    /// Leave title editing, restoring the remembered mode
    LeaveTitleEdit,
    /// Enter edit mode on a cell, selecting it first if needed
    EnterEdit(CellId),
    /// Return to command mode
    EnterCommand,
}

/// Inbound notifications from mounted widgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceMsg {
    /// The widget gained or lost focus through user interaction
    FocusChanged { surface: SurfaceId, focused: bool },
    /// The widget's content changed
    ContentChanged { id: CellId, content: String },
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Document(DocumentMsg),
    Mode(ModeMsg),
    Surface(SurfaceMsg),
}
