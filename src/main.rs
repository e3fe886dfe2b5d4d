//! `skin_automaton` — generates an animal-skin pattern with an
//! activator–inhibitor cellular automaton and writes it as `<ID>.pgm`.
//!
//! **Usage:**
//! ```text
//! skin_automaton [--seed <SEED>] [h J1 J2 R1 R2 [maxSteps] ID]
//! ```

mod cli;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use skin_core::automaton::{export, Simulation, GRID_SIZE};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Generate an animal-skin pattern with an activator-inhibitor automaton.
#[derive(Parser)]
#[command(
    name = "skin_automaton",
    about = "Generate an animal-skin pattern with an activator-inhibitor automaton",
    override_usage = "skin_automaton [--seed <SEED>] [h J1 J2 R1 R2 [maxSteps] ID]"
)]
struct Args {
    /// Seed for the initial grid and the sweep order. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Parameters: h J1 J2 R1 R2 [maxSteps] ID
    #[arg(value_name = "PARAM", allow_negative_numbers = true)]
    params: Vec<String>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    let params = match cli::params_from_positionals(&args.params) {
        Ok(params) => params,
        Err(e) => Args::command().error(e.kind(), e).exit(),
    };

    init_logging();

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, "initializing grid");

    let output_id = params.output_id.clone();
    let mut sim = Simulation::seeded(params, GRID_SIZE, seed);
    let summary = sim.run();
    info!(
        steps = summary.steps,
        changes = summary.last_change_count,
        reason = ?summary.reason,
        "simulation stopped"
    );

    let path = export(sim.grid(), &output_id)
        .with_context(|| format!("Failed to create PGM image for '{}'", output_id))?;

    info!(path = %path.display(), "done");
    Ok(())
}
