use anyhow::Result;
use clap::Parser;

use cellsync::cli::CliArgs;
use cellsync::config::NotebookConfig;
use cellsync::script::Script;
use cellsync::widget::WidgetCall;

fn main() -> Result<()> {
    cellsync::tracing::init();

    let args = CliArgs::parse();
    let config = match &args.config {
        Some(path) => NotebookConfig::load_from(path),
        None => NotebookConfig::load(),
    };

    let mut script = Script::load(&args.script)?;
    if args.view_mode.is_some() {
        script.view_mode = args.view_mode;
    }
    tracing::info!(
        script = %args.script.display(),
        steps = script.steps.len(),
        "replaying"
    );

    let outcome = script.run(config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    for record in &outcome.steps {
        println!("#{} {:?}", record.index, record.step);
        for call in &record.calls {
            match call {
                WidgetCall::Focus(surface) => println!("    focus {}", surface),
                WidgetCall::Blur(surface) => println!("    blur  {}", surface),
            }
        }
        if let Some(error) = &record.error {
            println!("    error: {}", error);
        }
    }
    println!(
        "mode={} view={} title={}",
        outcome.document.mode,
        outcome.document.view_mode,
        outcome.document.title.as_deref().unwrap_or("<unset>")
    );
    Ok(())
}
