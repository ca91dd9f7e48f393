//! Runtime module - executes commands against live widgets
//!
//! - `notebook` - owns the model and widget handles, dispatches messages

pub mod notebook;

pub use notebook::Notebook;
