use arenasim::{Scenario, ScenarioConfig};
use arenasim::{bench_pairwise_gravity, bench_step};

use anyhow::{Context, Result};
use clap::Parser;

use std::path::{Path, PathBuf};
use std::time::Instant;

/// Headless driver: loads a scenario and steps it frame by frame
#[derive(Parser, Debug)]
struct Args {
    /// Scenario file; looked up under ./scenarios when not found as given
    #[arg(short, default_value = "three_body.yaml")]
    file_name: PathBuf,

    /// Number of frames to run (overrides the scenario)
    #[arg(long)]
    frames: Option<usize>,

    /// Fixed step in seconds (overrides the scenario)
    #[arg(long)]
    dt: Option<f32>,

    /// Take dt from the wall clock instead of a fixed step
    #[arg(long)]
    realtime: bool,

    /// RNG seed for particle placement (overrides the scenario)
    #[arg(long)]
    seed: Option<u64>,

    /// Run the timing benchmarks and exit
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario(file_name: &Path, seed: Option<u64>) -> Result<Scenario> {
    let config_path = if file_name.exists() {
        file_name.to_path_buf()
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
    };

    let mut cfg = ScenarioConfig::from_path(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))?;

    if let Some(seed) = seed {
        if !cfg.override_seed(seed) {
            tracing::warn!(seed, "scenario seeds no particles, --seed ignored");
        }
    }

    Scenario::build_scenario(cfg)
        .with_context(|| format!("failed to build scenario {}", config_path.display()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    if args.bench {
        bench_pairwise_gravity();
        bench_step();
        return Ok(());
    }

    let mut scenario = load_scenario(&args.file_name, args.seed)?;
    let frames = args.frames.unwrap_or(scenario.parameters.frames);
    let fixed_dt = args.dt.unwrap_or(scenario.parameters.dt);

    tracing::info!(frames, bodies = scenario.system.len(), "starting simulation loop");

    let mut last = Instant::now();
    for frame in 0..frames {
        let dt = if args.realtime {
            let now = Instant::now();
            let dt = now.duration_since(last).as_secs_f32();
            last = now;
            dt
        } else {
            fixed_dt
        };

        let stats = scenario.advance(dt);

        if frame % 60 == 0 {
            tracing::info!(
                frame,
                t = scenario.system.t,
                contacts = stats.contacts,
                wall_hits = stats.wall_hits,
                kinetic = scenario.system.kinetic_energy(),
                "frame"
            );
        }
    }

    for (i, view) in scenario.views().enumerate() {
        tracing::debug!(i, x = view.position.x, y = view.position.y, r = view.radius, "final body");
    }
    tracing::info!(t = scenario.system.t, "simulation loop finished");

    Ok(())
}
