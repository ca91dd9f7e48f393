//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! mode transitions and focus reconciliation.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=mode=debug,focus=trace` - scoped filtering
//! - `RUST_LOG=cellsync::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/cellsync/logs/cellsync.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{CellId, Document, Mode, ViewMode};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG env var for filtering.
/// File logging writes to `~/.config/cellsync/logs/cellsync.log` with daily rotation.
/// Calling this more than once is harmless; later calls are ignored.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "cellsync.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();
}

/// Lightweight snapshot of the interaction state for diffing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeSnapshot {
    pub mode: Mode,
    pub previous_mode: Mode,
    pub view_mode: ViewMode,
    pub selected: Option<CellId>,
}

impl ModeSnapshot {
    pub fn from_document(document: &Document) -> Self {
        Self {
            mode: document.mode(),
            previous_mode: document.previous_mode(),
            view_mode: document.view_mode(),
            selected: document.selected_cell_id(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &ModeSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.mode != other.mode {
            changes.push(format!("mode: {} → {}", self.mode, other.mode));
        }
        // Previous mode is only meaningful while in title-edit
        if other.mode == Mode::TitleEdit && self.previous_mode != other.previous_mode {
            changes.push(format!(
                "previous: {} → {}",
                self.previous_mode, other.previous_mode
            ));
        }
        if self.view_mode != other.view_mode {
            changes.push(format!("view: {} → {}", self.view_mode, other.view_mode));
        }
        if self.selected != other.selected {
            changes.push(format!(
                "selected: {} → {}",
                describe(self.selected),
                describe(other.selected)
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

fn describe(id: Option<CellId>) -> String {
    id.map(|id| id.to_string())
        .unwrap_or_else(|| "none".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CellType;

    #[test]
    fn identical_snapshots_have_no_diff() {
        let doc = Document::default();
        let snap = ModeSnapshot::from_document(&doc);
        assert_eq!(snap.diff(&snap), None);
    }

    #[test]
    fn diff_reports_mode_and_selection() {
        let mut doc = Document::default();
        let a = doc.insert_cell(CellType::Javascript, "");
        let before = ModeSnapshot::from_document(&doc);

        doc.select_cell(a).unwrap();
        doc.set_mode(Mode::Edit);
        let after = ModeSnapshot::from_document(&doc);

        assert_eq!(
            before.diff(&after).as_deref(),
            Some("mode: command → edit; selected: none → cell#0")
        );
    }
}
