//! Mode controller - legal transitions between command, edit and title-edit
//!
//! ```text
//!             cell focus (editor view)
//!   command ───────────────────────────▶ edit
//!      ▲  ◀─────────────────────────────  │
//!      │        cell blur                 │
//!      │                                  │
//!      └──── title-edit ◀─────────────────┘
//!         (any mode enters title-edit; leaving restores the mode it came from)
//! ```

use std::fmt;

use crate::commands::Cmd;
use crate::messages::ModeMsg;
use crate::model::{CellId, Document, DocumentError, Mode, NotebookModel, ViewMode};

use super::focus::reconcile;

/// A mode transition refused because of the current view mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeDenied {
    pub requested: Mode,
    pub view_mode: ViewMode,
}

impl fmt::Display for ModeDenied {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot enter {} mode in {} view",
            self.requested, self.view_mode
        )
    }
}

impl std::error::Error for ModeDenied {}

/// Handle mode controller requests, then reconcile focus
pub fn update_mode(model: &mut NotebookModel, msg: ModeMsg) -> Result<Option<Cmd>, DocumentError> {
    let document = &mut model.document;
    match msg {
        ModeMsg::EnterTitleEdit => request_enter_title_edit(document),
        ModeMsg::LeaveTitleEdit => request_leave_title_edit(document),
        ModeMsg::EnterEdit(id) => request_enter_edit(document, id)?,
        ModeMsg::EnterCommand => request_enter_command(document),
    }
    Ok(reconcile(model))
}

/// Enter title editing, remembering the mode to return to
pub fn request_enter_title_edit(document: &mut Document) {
    let current = document.mode();
    if current == Mode::TitleEdit {
        return;
    }
    document.set_previous_mode(current);
    document.set_mode(Mode::TitleEdit);
    tracing::debug!(target: "mode", previous = %current, "entered title-edit");
}

/// Leave title editing, restoring the remembered mode. No-op outside title-edit.
pub fn request_leave_title_edit(document: &mut Document) {
    if document.mode() != Mode::TitleEdit {
        return;
    }
    let restored = document.previous_mode();
    document.set_mode(restored);
    tracing::debug!(target: "mode", %restored, "left title-edit");
}

/// Check whether edit mode may be entered in the current view mode
pub fn check_edit_allowed(document: &Document) -> Result<(), ModeDenied> {
    match document.view_mode() {
        ViewMode::Editor => Ok(()),
        view_mode => Err(ModeDenied {
            requested: Mode::Edit,
            view_mode,
        }),
    }
}

/// Enter edit mode on `id`, selecting it first if it is not already selected
///
/// A [`ModeDenied`] refusal is swallowed here and leaves the document
/// untouched. Unknown cells are reported to the caller.
pub fn request_enter_edit(document: &mut Document, id: CellId) -> Result<(), DocumentError> {
    if let Err(denied) = check_edit_allowed(document) {
        tracing::debug!(target: "mode", cell = %id, "{}", denied);
        return Ok(());
    }

    if !document.cell(id)?.selected {
        document.select_cell(id)?;
    }
    if document.mode() != Mode::Edit {
        document.set_mode(Mode::Edit);
        tracing::debug!(target: "mode", cell = %id, "entered edit");
    }
    Ok(())
}

/// Return to command mode. Always legal.
pub fn request_enter_command(document: &mut Document) {
    if document.mode() != Mode::Command {
        tracing::debug!(target: "mode", from = %document.mode(), "entered command");
    }
    document.set_mode(Mode::Command);
}
