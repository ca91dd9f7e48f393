//! Headless replay of widget and document events
//!
//! A script describes an initial document and a sequence of steps. Every
//! surface is backed by a [`RecordingWidget`], so the replay produces the
//! exact list of `focus()`/`blur()` calls each step caused.
//!
//! ```yaml
//! title: scratch
//! cells:
//!   - type: javascript
//!     content: "1 + 1"
//!     selected: true
//!   - type: markdown
//! steps:
//!   - mount: {cell: 0}
//!   - mount: title
//!   - focus: {cell: 0}
//!   - focus: title
//!   - blur: title
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::NotebookConfig;
use crate::messages::{DocumentMsg, Msg};
use crate::model::{
    CellId, CellType, CellView, Document, DocumentError, DocumentView, Mode, SurfaceId, ViewMode,
};
use crate::runtime::Notebook;
use crate::widget::{CallLog, RecordingWidget, WidgetCall};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Script {
    pub title: Option<String>,
    pub view_mode: Option<ViewMode>,
    pub cells: Vec<ScriptCell>,
    /// Data-carrying steps are written as single-key maps (`mount: {cell: 0}`)
    #[serde(with = "serde_yaml::with::singleton_map_recursive")]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScriptCell {
    #[serde(rename = "type")]
    pub cell_type: Option<CellType>,
    pub content: String,
    pub selected: bool,
}

/// One replayed event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Mount(SurfaceId),
    Unmount(SurfaceId),
    /// Widget reports it gained focus
    Focus(SurfaceId),
    /// Widget reports it lost focus
    Blur(SurfaceId),
    Change { cell: CellId, content: String },
    Select(CellId),
    EnterEdit(CellId),
    EnterCommand,
    EnterTitleEdit,
    LeaveTitleEdit,
    ViewMode(ViewMode),
    Mode(Mode),
    Title(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct StepRecord {
    pub index: usize,
    pub step: Step,
    pub calls: Vec<WidgetCall>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReplayOutcome {
    pub steps: Vec<StepRecord>,
    pub document: DocumentView,
    pub cells: Vec<CellView>,
}

impl Script {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid script {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    fn build_document(&self, config: &NotebookConfig) -> Result<Document, DocumentError> {
        let mut document = Document::new(self.view_mode.unwrap_or(config.default_view_mode));
        if let Some(title) = &self.title {
            document.set_title(title.clone());
        }
        for cell in &self.cells {
            let id = document.insert_cell(
                cell.cell_type.unwrap_or(config.default_cell_type),
                cell.content.clone(),
            );
            if cell.selected {
                document.select_cell(id)?;
            }
        }
        Ok(document)
    }

    /// Run every step against recording widgets
    ///
    /// Step failures are recorded and the replay continues. Only a script
    /// whose initial document cannot be built fails outright.
    pub fn run(&self, config: NotebookConfig) -> Result<ReplayOutcome> {
        let document = self.build_document(&config)?;
        let mut notebook = Notebook::with_document(document, config);
        let log = CallLog::new();

        let mut steps = Vec::with_capacity(self.steps.len());
        for (index, step) in self.steps.iter().enumerate() {
            let result = apply_step(&mut notebook, &log, step);
            if let Err(ref e) = result {
                tracing::warn!(index, ?step, error = %e, "script step failed");
            }
            steps.push(StepRecord {
                index,
                step: step.clone(),
                calls: log.take(),
                error: result.err().map(|e| e.to_string()),
            });
        }

        Ok(ReplayOutcome {
            steps,
            document: notebook.document().view(),
            cells: notebook.document().cell_views(),
        })
    }
}

fn apply_step(notebook: &mut Notebook, log: &CallLog, step: &Step) -> Result<()> {
    match step {
        Step::Mount(surface) => {
            let value = match surface {
                SurfaceId::Cell(id) => notebook.document().cell(*id)?.content.clone(),
                SurfaceId::Title => notebook.document().title().unwrap_or_default().to_string(),
            };
            let widget = RecordingWidget::new(*surface, log).with_value(value);
            notebook.mount(*surface, Box::new(widget))?;
        }
        Step::Unmount(surface) => {
            notebook.unmount(*surface);
        }
        Step::Focus(surface) => notebook.focus_changed(*surface, true)?,
        Step::Blur(surface) => notebook.focus_changed(*surface, false)?,
        Step::Change { cell, content } => notebook.content_changed(*cell, content.clone())?,
        Step::Select(id) => notebook.select_cell(*id)?,
        Step::EnterEdit(id) => notebook.request_enter_edit(*id)?,
        Step::EnterCommand => notebook.request_enter_command()?,
        Step::EnterTitleEdit => notebook.request_enter_title_edit()?,
        Step::LeaveTitleEdit => notebook.request_leave_title_edit()?,
        Step::ViewMode(view_mode) => {
            notebook.dispatch(Msg::Document(DocumentMsg::SetViewMode(*view_mode)))?
        }
        Step::Mode(mode) => notebook.dispatch(Msg::Document(DocumentMsg::ChangeMode(*mode)))?,
        Step::Title(title) => {
            notebook.dispatch(Msg::Document(DocumentMsg::ChangePageTitle(title.clone())))?
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCRIPT: &str = r##"
title: scratch
cells:
  - type: javascript
    content: "1 + 1"
    selected: true
  - type: markdown
    content: "# notes"
steps:
  - mount: {cell: 0}
  - mount: {cell: 1}
  - mount: title
  - focus: {cell: 0}
  - focus: title
  - blur: title
  - select: 1
  - change: {cell: 1, content: "# edited"}
  - select: 9
"##;

    #[test]
    fn parses_steps() {
        let script = Script::parse(SCRIPT).unwrap();
        assert_eq!(script.cells.len(), 2);
        assert_eq!(script.steps[2], Step::Mount(SurfaceId::Title));
        assert_eq!(script.steps[3], Step::Focus(SurfaceId::Cell(CellId(0))));
    }

    #[test]
    fn unit_steps_parse_from_plain_strings() {
        let script = Script::parse("steps:\n  - enter_title_edit\n  - enter_command\n").unwrap();
        assert_eq!(script.steps, vec![Step::EnterTitleEdit, Step::EnterCommand]);
    }

    #[test]
    fn replay_records_calls_per_step() {
        let script = Script::parse(SCRIPT).unwrap();
        let outcome = script.run(NotebookConfig::default()).unwrap();

        let a = SurfaceId::Cell(CellId(0));
        let b = SurfaceId::Cell(CellId(1));
        let calls: Vec<_> = outcome.steps.iter().map(|s| s.calls.clone()).collect();

        // Clicking into the selected cell needs no imperative focus
        assert!(calls[3].is_empty());
        // Title takes over: the cell is blurred
        assert_eq!(calls[4], vec![WidgetCall::Blur(a)]);
        // Leaving the title restores edit mode on cell 0
        assert_eq!(calls[5], vec![WidgetCall::Focus(a)]);
        // Selection moves while editing
        assert_eq!(calls[6], vec![WidgetCall::Blur(a), WidgetCall::Focus(b)]);
        assert!(calls[7].is_empty());

        assert!(outcome.steps[8].error.is_some());
        assert_eq!(outcome.document.mode, Mode::Edit);
        assert_eq!(outcome.document.title.as_deref(), Some("scratch"));
        assert_eq!(outcome.cells[1].content, "# edited");
        assert!(outcome.cells[1].selected);
    }

    #[test]
    fn struct_and_nested_steps_parse_from_single_key_maps() {
        let script = Script::parse(SCRIPT).unwrap();
        assert_eq!(script.steps[0], Step::Mount(SurfaceId::Cell(CellId(0))));
        assert_eq!(script.steps[6], Step::Select(CellId(1)));
        assert_eq!(
            script.steps[7],
            Step::Change {
                cell: CellId(1),
                content: "# edited".to_string(),
            }
        );
    }

    #[test]
    fn bundled_sample_replays_cleanly() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("samples/title_round_trip.yaml");
        let script = Script::load(&path).unwrap();
        assert_eq!(script.steps[2], Step::Mount(SurfaceId::Title));
        assert_eq!(script.steps[5], Step::Title("Answer notebook".to_string()));
        assert_eq!(script.steps[9], Step::ViewMode(ViewMode::Presentation));

        let outcome = script.run(NotebookConfig::default()).unwrap();
        assert!(outcome.steps.iter().all(|s| s.error.is_none()));
        assert_eq!(outcome.document.title.as_deref(), Some("Answer notebook"));
        assert_eq!(outcome.document.mode, Mode::Edit);
        assert_eq!(outcome.document.view_mode, ViewMode::Editor);
        assert!(outcome.cells[1].selected);
        assert_eq!(outcome.cells[1].content, "# Results\n42");
    }

    #[test]
    fn several_selected_cells_keep_the_last() {
        let script = Script::parse(
            "cells:\n  - selected: true\n  - selected: true\n  - content: x\n",
        )
        .unwrap();
        let outcome = script.run(NotebookConfig::default()).unwrap();
        let selected: Vec<_> = outcome.cells.iter().map(|c| c.selected).collect();
        assert_eq!(selected, vec![false, true, false]);
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Script::load(&dir.path().join("nope.yaml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read script"));
    }
}
