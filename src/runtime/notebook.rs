use std::collections::HashMap;

use crate::commands::Cmd;
use crate::config::NotebookConfig;
use crate::messages::{DocumentMsg, ModeMsg, Msg, SurfaceMsg};
use crate::model::{CellId, Document, DocumentError, NotebookModel, SurfaceId};
use crate::update::{self, update};
use crate::widget::{Widget, WidgetOptions};

/// Owns the notebook model and the live widget handles of every mounted surface
///
/// Messages are applied synchronously and the resulting commands run to
/// completion before `dispatch` returns.
pub struct Notebook {
    model: NotebookModel,
    widgets: HashMap<SurfaceId, Box<dyn Widget>>,
}

impl Notebook {
    pub fn new(config: NotebookConfig) -> Self {
        Self {
            model: NotebookModel::new(config),
            widgets: HashMap::new(),
        }
    }

    pub fn with_document(document: Document, config: NotebookConfig) -> Self {
        Self {
            model: NotebookModel::with_document(document, config),
            widgets: HashMap::new(),
        }
    }

    pub fn model(&self) -> &NotebookModel {
        &self.model
    }

    pub fn document(&self) -> &Document {
        &self.model.document
    }

    /// Apply a message and execute the resulting widget calls
    pub fn dispatch(&mut self, msg: Msg) -> Result<(), DocumentError> {
        if let Some(cmd) = update(&mut self.model, msg)? {
            self.process_cmd(cmd);
        }
        Ok(())
    }

    /// Bind a widget to a surface and reconcile it
    ///
    /// Mounting an already-mounted surface replaces (and drops) its old widget.
    pub fn mount(
        &mut self,
        surface: SurfaceId,
        widget: Box<dyn Widget>,
    ) -> Result<(), DocumentError> {
        let cmd = update::mount(&mut self.model, surface)?;
        self.widgets.insert(surface, widget);
        if let Some(cmd) = cmd {
            self.process_cmd(cmd);
        }
        Ok(())
    }

    /// Release a surface's widget. No other surface is focused in its place.
    pub fn unmount(&mut self, surface: SurfaceId) -> Option<Box<dyn Widget>> {
        update::unmount(&mut self.model, surface);
        self.widgets.remove(&surface)
    }

    /// Inbound `onFocusChange` from a widget
    pub fn focus_changed(&mut self, surface: SurfaceId, focused: bool) -> Result<(), DocumentError> {
        self.dispatch(Msg::Surface(SurfaceMsg::FocusChanged { surface, focused }))
    }

    /// Inbound `onChange` from a cell widget
    pub fn content_changed(
        &mut self,
        id: CellId,
        content: impl Into<String>,
    ) -> Result<(), DocumentError> {
        self.dispatch(Msg::Surface(SurfaceMsg::ContentChanged {
            id,
            content: content.into(),
        }))
    }

    pub fn select_cell(&mut self, id: CellId) -> Result<(), DocumentError> {
        self.dispatch(Msg::Document(DocumentMsg::SelectCell(id)))
    }

    pub fn request_enter_edit(&mut self, id: CellId) -> Result<(), DocumentError> {
        self.dispatch(Msg::Mode(ModeMsg::EnterEdit(id)))
    }

    pub fn request_enter_command(&mut self) -> Result<(), DocumentError> {
        self.dispatch(Msg::Mode(ModeMsg::EnterCommand))
    }

    pub fn request_enter_title_edit(&mut self) -> Result<(), DocumentError> {
        self.dispatch(Msg::Mode(ModeMsg::EnterTitleEdit))
    }

    pub fn request_leave_title_edit(&mut self) -> Result<(), DocumentError> {
        self.dispatch(Msg::Mode(ModeMsg::LeaveTitleEdit))
    }

    /// Widget configuration for a cell's editor
    pub fn widget_options(&self, id: CellId) -> Result<WidgetOptions, DocumentError> {
        self.model.widget_options(id)
    }

    /// Read a mounted widget's current value
    pub fn widget_value(&self, surface: SurfaceId) -> Option<String> {
        self.widgets.get(&surface).map(|w| w.value())
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None => {}
            Cmd::Focus(surface) => match self.widgets.get_mut(&surface) {
                Some(widget) => widget.focus(),
                None => tracing::trace!(target: "focus", %surface, "focus on unmounted surface"),
            },
            Cmd::Blur(surface) => match self.widgets.get_mut(&surface) {
                Some(widget) => widget.blur(),
                None => tracing::trace!(target: "focus", %surface, "blur on unmounted surface"),
            },
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
        }
    }
}

impl Default for Notebook {
    fn default() -> Self {
        Self::new(NotebookConfig::default())
    }
}
