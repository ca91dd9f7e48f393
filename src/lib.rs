//! cellsync - focus and mode synchronization for notebook cell editors
//!
//! Keeps exactly one editing surface (a cell body or the title field)
//! holding keyboard focus, consistent with the document's interaction mode
//! and view mode. Built on the Elm Architecture: messages update the model,
//! and the update returns the widget focus/blur commands to execute.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod file_source;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod script;
pub mod tracing;
pub mod update;
pub mod widget;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::NotebookConfig;
pub use messages::Msg;
pub use model::NotebookModel;
pub use runtime::Notebook;
