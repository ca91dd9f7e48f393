//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod document;
pub mod focus;
pub mod mode;
pub mod surface;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::{DocumentError, NotebookModel};

#[cfg(debug_assertions)]
use crate::tracing::ModeSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use document::update_document;
pub use focus::{reconcile, should_have_focus};
pub use mode::{update_mode, ModeDenied};
pub use surface::{mount, unmount, update_surface};

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut NotebookModel, msg: Msg) -> Result<Option<Cmd>, DocumentError> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut NotebookModel, msg: Msg) -> Result<Option<Cmd>, DocumentError> {
    match msg {
        Msg::Document(m) => update_document(model, m),
        Msg::Mode(m) => update_mode(model, m),
        Msg::Surface(m) => update_surface(model, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after mode state and logs diffs for debugging.
/// Content notifications are too frequent to log individually.
#[cfg(debug_assertions)]
fn update_traced(model: &mut NotebookModel, msg: Msg) -> Result<Option<Cmd>, DocumentError> {
    use crate::messages::SurfaceMsg;

    let is_noisy = matches!(&msg, Msg::Surface(SurfaceMsg::ContentChanged { .. }));

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = ModeSnapshot::from_document(&model.document);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    let after = ModeSnapshot::from_document(&model.document);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "mode", %diff, "state changed");
    }
    if let Err(ref e) = result {
        debug!(target: "message", msg = %msg_name, error = %e, "rejected");
    }

    model.assert_invariants(&msg_name);

    result
}

/// Get a display name for a message type
///
/// Example outputs:
/// - `Document::SelectCell(CellId(2))`
/// - `Mode::EnterTitleEdit`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Document(m) => format!("Document::{:?}", m),
        Msg::Mode(m) => format!("Mode::{:?}", m),
        Msg::Surface(m) => format!("Surface::{:?}", m),
    }
}
