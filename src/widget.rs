//! Widget handles - the imperative side of an editing surface
//!
//! The text-editing widget itself is external. The core only needs to move
//! keyboard focus in and out of it and read back its value; focus and
//! change notifications travel the other way as messages.

use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;

use crate::config::NotebookConfig;
use crate::model::{CellType, SurfaceId, ViewMode};

/// Imperative handle to a mounted editing widget
pub trait Widget {
    fn focus(&mut self);
    fn blur(&mut self);
    fn value(&self) -> String;
}

/// Configuration flags a cell's widget is created with
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetOptions {
    pub read_only: bool,
    pub mode: CellType,
    pub line_numbers: bool,
    pub line_wrapping: bool,
    pub match_brackets: bool,
    pub auto_close_brackets: bool,
    pub theme: String,
}

impl WidgetOptions {
    pub fn for_cell(cell_type: CellType, view_mode: ViewMode, config: &NotebookConfig) -> Self {
        Self {
            read_only: view_mode.is_presentation(),
            mode: cell_type,
            line_numbers: config.line_numbers,
            line_wrapping: config.line_wrapping,
            match_brackets: config.match_brackets,
            auto_close_brackets: config.auto_close_brackets,
            theme: config.theme.clone(),
        }
    }
}

/// One imperative call made on a widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "call", content = "surface", rename_all = "lowercase")]
pub enum WidgetCall {
    Focus(SurfaceId),
    Blur(SurfaceId),
}

/// Shared, ordered log of widget calls across every recording widget
#[derive(Debug, Clone, Default)]
pub struct CallLog(Rc<RefCell<Vec<WidgetCall>>>);

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, call: WidgetCall) {
        self.0.borrow_mut().push(call);
    }

    /// Return and clear the recorded calls
    pub fn take(&self) -> Vec<WidgetCall> {
        std::mem::take(&mut *self.0.borrow_mut())
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }
}

/// Headless widget that records every imperative call into a [`CallLog`]
#[derive(Debug)]
pub struct RecordingWidget {
    surface: SurfaceId,
    log: CallLog,
    value: String,
    focused: bool,
}

impl RecordingWidget {
    pub fn new(surface: SurfaceId, log: &CallLog) -> Self {
        Self {
            surface,
            log: log.clone(),
            value: String::new(),
            focused: false,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }
}

impl Widget for RecordingWidget {
    fn focus(&mut self) {
        self.focused = true;
        self.log.push(WidgetCall::Focus(self.surface));
    }

    fn blur(&mut self) {
        self.focused = false;
        self.log.push(WidgetCall::Blur(self.surface));
    }

    fn value(&self) -> String {
        self.value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CellId;

    #[test]
    fn recording_widgets_share_one_log() {
        let log = CallLog::new();
        let mut a = RecordingWidget::new(SurfaceId::Cell(CellId(0)), &log);
        let mut title = RecordingWidget::new(SurfaceId::Title, &log);

        a.focus();
        title.focus();
        a.blur();

        assert_eq!(
            log.take(),
            vec![
                WidgetCall::Focus(SurfaceId::Cell(CellId(0))),
                WidgetCall::Focus(SurfaceId::Title),
                WidgetCall::Blur(SurfaceId::Cell(CellId(0))),
            ]
        );
        assert!(log.is_empty());
        assert!(title.is_focused());
        assert!(!a.is_focused());
    }

    #[test]
    fn presentation_options_are_read_only() {
        let config = NotebookConfig::default();
        let options = WidgetOptions::for_cell(CellType::Css, ViewMode::Presentation, &config);
        assert!(options.read_only);
        assert_eq!(options.mode, CellType::Css);
        assert_eq!(options.theme, "eclipse");

        let options = WidgetOptions::for_cell(CellType::Css, ViewMode::Editor, &config);
        assert!(!options.read_only);
    }
}
