//! Command-line argument parsing for the replay tool

use clap::Parser;
use std::path::PathBuf;

use crate::model::ViewMode;

/// Replay notebook focus events headlessly and print the widget calls they cause
#[derive(Parser, Debug)]
#[command(name = "cellsync", version, about = "Replay notebook focus events")]
pub struct CliArgs {
    /// YAML script to replay
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,

    /// Print the full outcome (calls and final read model) as JSON
    #[arg(long)]
    pub json: bool,

    /// Override the script's starting view mode
    #[arg(long, value_name = "MODE", value_parser = parse_view_mode)]
    pub view_mode: Option<ViewMode>,

    /// Use this config file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

fn parse_view_mode(value: &str) -> Result<ViewMode, String> {
    match value.to_ascii_lowercase().as_str() {
        "editor" => Ok(ViewMode::Editor),
        "presentation" => Ok(ViewMode::Presentation),
        other => Err(format!(
            "unknown view mode `{}`; expected editor|presentation",
            other
        )),
    }
}
