//! Surface handlers - widget notifications and mount lifecycle
//!
//! Focus reports route into the mode controller; content reports go straight
//! to the document store and never touch mode or selection.

use crate::commands::Cmd;
use crate::messages::SurfaceMsg;
use crate::model::{DocumentError, Mode, NotebookModel, SurfaceId};

use super::focus::{reconcile, reconcile_surface, should_have_focus};
use super::mode;

/// Handle inbound widget notifications
pub fn update_surface(
    model: &mut NotebookModel,
    msg: SurfaceMsg,
) -> Result<Option<Cmd>, DocumentError> {
    match msg {
        SurfaceMsg::FocusChanged { surface, focused } => focus_changed(model, surface, focused),
        SurfaceMsg::ContentChanged { id, content } => {
            model.document.update_cell_content(id, content)?;
            Ok(None)
        }
    }
}

/// A widget reported a focus change it was not asked for
///
/// The reported state becomes the binding's last-known state before the
/// mode transition runs, so reconciliation only corrects what the document
/// disagrees with.
fn focus_changed(
    model: &mut NotebookModel,
    surface: SurfaceId,
    focused: bool,
) -> Result<Option<Cmd>, DocumentError> {
    if let SurfaceId::Cell(id) = surface {
        model.document.cell(id)?;
    }
    model.surfaces.set_focused(surface, focused);

    let document = &mut model.document;
    match (surface, focused) {
        (SurfaceId::Cell(id), true) => mode::request_enter_edit(document, id)?,
        (SurfaceId::Cell(id), false) => {
            if document.mode() == Mode::Edit && document.selected_cell_id() == Some(id) {
                mode::request_enter_command(document);
            }
        }
        (SurfaceId::Title, true) => mode::request_enter_title_edit(document),
        (SurfaceId::Title, false) => mode::request_leave_title_edit(document),
    }

    Ok(reconcile(model))
}

/// Register a newly mounted surface and bring it in line with the document
pub fn mount(model: &mut NotebookModel, surface: SurfaceId) -> Result<Option<Cmd>, DocumentError> {
    if let SurfaceId::Cell(id) = surface {
        model.document.cell(id)?;
    }
    model.surfaces.mount(surface);
    tracing::debug!(target: "focus", %surface, "mounted");

    let desired = should_have_focus(&model.document, surface);
    let cmd = reconcile_surface(surface, false, desired);
    if cmd.is_some() {
        model.surfaces.set_focused(surface, desired);
    }
    Ok(cmd)
}

/// Drop a surface from reconciliation. Issues no compensating focus.
pub fn unmount(model: &mut NotebookModel, surface: SurfaceId) -> bool {
    let removed = model.surfaces.unmount(surface).is_some();
    if removed {
        tracing::debug!(target: "focus", %surface, "unmounted");
    }
    removed
}

