#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that boots the reverse_brainrot focus widget.

mod simulation;

use std::{fs::File, path::PathBuf, sync::Mutex};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use reverse_brainrot_core::WINDOW_TITLE;
use reverse_brainrot_rendering::{Presentation, RenderingBackend};
use reverse_brainrot_rendering_terminal::TerminalBackend;
use tracing::info;
use tracing_subscriber::EnvFilter;

use self::simulation::Simulation;

/// Rewards focused time with experience, coins, and collectible badges.
#[derive(Debug, Parser)]
#[command(name = "reverse-brainrot", version)]
struct CliArgs {
    /// Raises log verbosity: `-v` for debug, `-vv` for trace. `RUST_LOG` overrides it.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
    /// Writes logs to the given file. The terminal is reserved for the widget,
    /// so nothing is logged without it.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

/// Entry point for the reverse_brainrot command-line interface.
fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(&args)?;

    let mut simulation = Simulation::new();
    let presentation = Presentation::new(WINDOW_TITLE, simulation.scene()?);
    info!("widget started");

    TerminalBackend::new().run(presentation, |dt, input, scene| {
        simulation.advance(dt, input, scene)
    })?;

    let report = simulation.report();
    info!(
        focused_seconds = report.focused_seconds,
        unfocused_seconds = report.unfocused_seconds,
        badges_claimed = report.badges_claimed,
        peak_level = report.peak_level.get(),
        "session finished"
    );
    println!("{report}");
    Ok(())
}

fn init_logging(args: &CliArgs) -> Result<()> {
    let Some(path) = &args.log_file else {
        return Ok(());
    };

    let default_directive = match args.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
