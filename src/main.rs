//! Tick Overlay - Entry Point
//!
//! Replays a recorded scenario through the debug overlay and writes one
//! snapshot image per tick.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use tick_overlay::core::config::OverlayConfig;
use tick_overlay::core::error::Result;
use tick_overlay::render::Overlay;
use tick_overlay::scenario::{replay, Scenario};

/// Render per-tick overlay snapshots from a recorded run
#[derive(Parser, Debug)]
#[command(name = "tick-overlay")]
#[command(about = "Replay a recorded simulation run into per-tick overlay snapshots")]
struct Args {
    /// Overlay config (TOML). Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Recorded scenario (JSON)
    #[arg(long)]
    scenario: PathBuf,

    /// Output directory, overriding the config
    #[arg(long)]
    out: Option<PathBuf>,

    /// Turn the master switch on regardless of config
    #[arg(long)]
    force: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    match run(Args::parse()) {
        Ok(failed) if failed == 0 => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(2),
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns the number of ticks whose snapshot could not be written
fn run(args: Args) -> Result<usize> {
    let mut config = match &args.config {
        Some(path) => OverlayConfig::load(path)?,
        None => OverlayConfig::default(),
    };
    if let Some(out) = args.out {
        config.snapshots.dir = out;
    }
    if args.force {
        config.enabled = true;
    }

    let scenario = Scenario::load(&args.scenario)?;
    tracing::info!(
        "Replaying {} ticks of process {} ({}x{} world)",
        scenario.ticks.len(),
        scenario.process_id,
        scenario.width,
        scenario.height
    );

    if !config.enabled {
        tracing::warn!("Overlay disabled in config - nothing will be written (use --force)");
    } else {
        fs::create_dir_all(&config.snapshots.dir)?;
    }

    let Some(first) = scenario.ticks.first() else {
        tracing::warn!("Scenario has no ticks");
        return Ok(0);
    };
    let world = scenario.world_at(first);
    let mut overlay = Overlay::with_raster(&config, &world)?;
    let summary = replay(&scenario, &mut overlay);

    println!(
        "{} snapshots written to {:?}, {} failed",
        summary.written, config.snapshots.dir, summary.failed
    );
    Ok(summary.failed)
}
