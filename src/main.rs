use anyhow::{Context, Result};
use clap::Parser;
use sketchpad::{
    Config, export,
    input::InputState,
    script::{self, Script, ScriptedHost},
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sketchpad")]
#[command(version, about = "Vector drawing canvas with scripted input replay")]
struct Cli {
    /// Replay the input events in this TOML script
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Write the final canvas to this PNG after replay
    #[arg(long, short = 'o', value_name = "PNG", requires = "script")]
    output: Option<PathBuf>,

    /// Use this config file instead of ~/.config/sketchpad/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let Some(script_path) = cli.script else {
        // No script: show usage
        println!("sketchpad: Vector drawing canvas with scripted input replay");
        println!();
        println!("Usage:");
        println!("  sketchpad --script <FILE>                  Replay a script of input events");
        println!("  sketchpad --script <FILE> --output <PNG>   Replay and save the final canvas");
        println!("  sketchpad --help                           Show help");
        println!();
        println!("Configuration is read from ~/.config/sketchpad/config.toml");
        println!("(override with --config <FILE>).");
        return Ok(());
    };

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let script = Script::load(&script_path)?;
    log::info!(
        "Replaying {} event(s) from {}",
        script.events.len(),
        script_path.display()
    );

    let mut state = InputState::from_config(&config)?;
    let mut host = ScriptedHost::new(&script.answers, config.export.clone())?;
    script::replay(&mut state, &mut host, &script.events)
        .with_context(|| format!("Replay of {} failed", script_path.display()))?;

    log::info!(
        "Replay finished: {} shape(s), {} repaint(s)",
        state.canvas.len(),
        host.repaints
    );
    for outcome in &host.outcomes {
        if outcome.is_saved() {
            println!("{outcome}");
        } else {
            eprintln!("{outcome}");
        }
    }

    if let Some(output) = cli.output {
        let written = export::export_png(&state, &output)
            .with_context(|| format!("Failed to write {}", output.display()))?;
        println!("Canvas written to {}", written.display());
    }

    Ok(())
}
