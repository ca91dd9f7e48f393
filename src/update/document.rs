//! Document message handlers (selection, raw mode writes, view mode, content)

use crate::commands::Cmd;
use crate::messages::DocumentMsg;
use crate::model::{DocumentError, Mode, NotebookModel};

use super::focus::reconcile;
use super::mode::request_enter_title_edit;

/// Handle document store mutations
///
/// Selection, mode and view-mode changes reconcile focus afterwards.
/// Content and title edits do not.
pub fn update_document(
    model: &mut NotebookModel,
    msg: DocumentMsg,
) -> Result<Option<Cmd>, DocumentError> {
    match msg {
        DocumentMsg::SelectCell(id) => {
            model.document.select_cell(id)?;
            Ok(reconcile(model))
        }

        // Title editing always remembers the mode it interrupted
        DocumentMsg::ChangeMode(Mode::TitleEdit) => {
            request_enter_title_edit(&mut model.document);
            Ok(reconcile(model))
        }

        DocumentMsg::ChangeMode(mode) => {
            model.document.set_mode(mode);
            Ok(reconcile(model))
        }

        DocumentMsg::SetViewMode(view_mode) => {
            model.document.set_view_mode(view_mode);
            Ok(reconcile(model))
        }

        DocumentMsg::ChangePageTitle(title) => {
            model.document.set_title(title);
            Ok(None)
        }

        DocumentMsg::UpdateInputContent { id, content } => {
            model.document.update_cell_content(id, content)?;
            Ok(None)
        }

        DocumentMsg::InsertCell { cell_type, content } => {
            let id = model.document.insert_cell(cell_type, content);
            tracing::debug!(cell = %id, ?cell_type, "inserted cell");
            Ok(None)
        }

        DocumentMsg::RemoveCell(id) => {
            model.document.remove_cell(id)?;
            tracing::debug!(cell = %id, "removed cell");
            Ok(reconcile(model))
        }
    }
}
