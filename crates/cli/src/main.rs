//! Headless match runner.
//!
//! Plays one match between two teams of reflex agents and prints the final
//! score.
//!
//! # Examples
//!
//! ```bash
//! # Bundled layout, tournament roles on both sides
//! cargo run -p capture-cli
//!
//! # Custom layout, seeded, with per-move logs
//! RUST_LOG=capture_runtime=debug cargo run -p capture-cli -- \
//!     --layout maps/tight.lay --blue baseline,sentinel --seed 7
//! ```

mod args;
mod logging;
mod match_runner;

use anyhow::Result;
use clap::Parser;

use args::Args;
use match_runner::MatchRunner;

fn main() -> Result<()> {
    // .env may carry RUST_LOG and CAPTURE_* overrides
    dotenvy::dotenv().ok();
    logging::setup_logging();

    let args = Args::parse();
    let layout = args.load_layout()?;
    let config = args.load_config()?;

    tracing::info!(
        "Starting match on {}x{} layout: red={} blue={}",
        layout.width(),
        layout.height(),
        args.red,
        args.blue
    );
    tracing::debug!("Agent config: {:?}", config);

    let outcome = MatchRunner::new(layout, &config, &args.red, &args.blue)?
        .with_max_ticks(args.max_ticks)
        .run()?;

    println!("{outcome}");
    Ok(())
}
