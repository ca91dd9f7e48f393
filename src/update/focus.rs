//! Focus synchronizer - reconciles widget focus with document state
//!
//! Each surface has a derived "should have focus" bit computed from the
//! document. Reconciliation compares it with the last-known focus bit of the
//! surface's binding and emits one `Focus`/`Blur` command per change.
//!
//! Ordering: every `Blur` is emitted before any `Focus`, and within each
//! group surfaces are visited in mount order. Focus therefore never lands on
//! a new surface while the old one still holds it.

use crate::commands::Cmd;
use crate::model::{Document, Mode, NotebookModel, SurfaceId, ViewMode};

/// Whether `surface` should hold keyboard focus in the current document state
///
/// Presentation view suppresses focus on every surface.
pub fn should_have_focus(document: &Document, surface: SurfaceId) -> bool {
    if document.view_mode() != ViewMode::Editor {
        return false;
    }
    match surface {
        SurfaceId::Cell(id) => document.mode() == Mode::Edit && document.is_selected(id),
        SurfaceId::Title => document.mode() == Mode::TitleEdit,
    }
}

/// Effect needed to move one surface from its last-known focus state to the desired one
pub fn reconcile_surface(surface: SurfaceId, last: bool, desired: bool) -> Option<Cmd> {
    match (last, desired) {
        (false, true) => Some(Cmd::Focus(surface)),
        (true, false) => Some(Cmd::Blur(surface)),
        _ => None,
    }
}

/// Order a set of per-surface effects: blurs first, then focuses, each in input order
pub fn order_effects(effects: impl IntoIterator<Item = Cmd>) -> Vec<Cmd> {
    let (blurs, focuses): (Vec<Cmd>, Vec<Cmd>) = effects
        .into_iter()
        .filter(|c| !c.is_none())
        .partition(|c| matches!(c, Cmd::Blur(_)));
    blurs.into_iter().chain(focuses).collect()
}

/// Reconcile every mounted surface against the document
///
/// Updates each binding's last-known focus bit to the derived value and
/// returns the ordered effects, or `None` when nothing changed.
pub fn reconcile(model: &mut NotebookModel) -> Option<Cmd> {
    let document = &model.document;
    let mut effects = Vec::new();

    for binding in model.surfaces.iter_mut() {
        let desired = should_have_focus(document, binding.id);
        if let Some(cmd) = reconcile_surface(binding.id, binding.focused, desired) {
            tracing::trace!(target: "focus", surface = %binding.id, ?cmd, "reconcile");
            effects.push(cmd);
            binding.focused = desired;
        }
    }

    let cmd = Cmd::batch(order_effects(effects));
    if cmd.is_none() {
        None
    } else {
        Some(cmd)
    }
}
