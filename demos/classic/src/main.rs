//! classic — batch driver for the agora segregation-dynamics engine.
//!
//! Runs the classic 50×50 board for a fixed number of ticks and writes CSV
//! output (tick metrics every tick, agent snapshots and interaction edges at
//! the snapshot interval).  The interactive cadence of a UI driver is
//! replaced by a tight loop; the engine itself is identical.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;

use agora_core::{EngineConfig, Hyperparams};
use agora_engine::SimulationEngine;
use agora_output::{CsvWriter, EngineOutputObserver};

// ── CLI ───────────────────────────────────────────────────────────────────────

/// Command line arguments for the batch run.
#[derive(Parser, Debug)]
#[command(name = "classic")]
#[command(about = "Schelling/synthesis segregation dynamics, batch mode")]
struct Args {
    /// Random seed for reproducibility
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Grid width in cells
    #[arg(long, default_value_t = 50)]
    width: u32,

    /// Grid height in cells
    #[arg(long, default_value_t = 50)]
    height: u32,

    /// Number of ticks to simulate
    #[arg(long, default_value_t = 500)]
    ticks: u64,

    /// Interval between agent/edge snapshots (in ticks, 0 = never)
    #[arg(long, default_value_t = 10)]
    snapshot_interval: u64,

    /// Percentage of cells to populate, 10-90
    #[arg(long, default_value_t = 30.0)]
    density: f64,

    /// Synthesis effort cost, 0-100
    #[arg(long, default_value_t = 50.0)]
    synthesis_cost: f64,

    /// Status reward scale, 0-100
    #[arg(long, default_value_t = 50.0)]
    status_incentive: f64,

    /// Identity veil strength, 0-100
    #[arg(long, default_value_t = 0.0)]
    anonymity: f64,

    /// Resistance to ideological movement, 0-100
    #[arg(long, default_value_t = 50.0)]
    stiffness: f64,

    /// Load hyperparameters from a TOML tuning file instead of the flags above
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// Directory for CSV output
    #[arg(long, default_value = "output/classic")]
    output_dir: PathBuf,
}

// ── Tuning file ───────────────────────────────────────────────────────────────

/// On-disk tuning file: a single `[hyperparams]` table.
#[derive(Debug, Deserialize)]
struct TuningFile {
    hyperparams: Hyperparams,
}

fn load_tuning(path: &PathBuf) -> Result<Hyperparams> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading tuning file {}", path.display()))?;
    let file: TuningFile = toml::from_str(&text)
        .with_context(|| format!("parsing tuning file {}", path.display()))?;
    Ok(file.hyperparams)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    tracing::info!("classic batch driver starting");

    let hyperparams = match &args.tuning {
        Some(path) => load_tuning(path)?,
        None => Hyperparams {
            synthesis_cost:        args.synthesis_cost,
            status_incentive:      args.status_incentive,
            anonymity_level:       args.anonymity,
            ideological_stiffness: args.stiffness,
            population_density:    args.density,
        },
    };

    let config = EngineConfig {
        width:                   args.width,
        height:                  args.height,
        seed:                    args.seed,
        snapshot_interval_ticks: args.snapshot_interval,
    };

    println!("=== classic — agora segregation dynamics ===");
    println!(
        "Grid: {}x{}  |  Density: {}%  |  Ticks: {}  |  Seed: {}",
        config.width, config.height, hyperparams.population_density, args.ticks, config.seed
    );
    println!();

    // 1. Build and populate the engine.
    let mut engine = SimulationEngine::new(config);
    engine.initialize(&hyperparams);
    println!("Placed {} agents", engine.agents().len());

    // 2. Set up CSV output.
    std::fs::create_dir_all(&args.output_dir)?;
    let writer = CsvWriter::new(&args.output_dir)?;
    let mut obs = EngineOutputObserver::new(writer);

    // 3. Run.
    let t0 = Instant::now();
    engine.run_ticks(args.ticks, &hyperparams, &mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    // 4. Summary.
    let metrics = engine.metrics();
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  schelling_index          : {:.4}", metrics.schelling_index);
    println!("  steelmanning_rate        : {:.2}%", metrics.steelmanning_rate);
    println!("  avg_ideological_distance : {:.4}", metrics.avg_ideological_distance);
    println!("  forced_mobility (last)   : {}", metrics.forced_mobility);
    println!();

    // 5. Top agents by status.
    let mut snapshots = engine.agents().snapshots();
    snapshots.sort_by(|a, b| b.status.total_cmp(&a.status));

    println!("{:<8} {:<10} {:<10} {:<12} {:<10}", "Agent", "Ideology", "Status", "Syntheses", "Cell");
    println!("{}", "-".repeat(52));
    for snap in snapshots.iter().take(10) {
        println!(
            "{:<8} {:<10.3} {:<10.2} {:<12} {:<10}",
            snap.id.0,
            snap.ideology,
            snap.status,
            snap.success_alike + snap.success_counter,
            format!("({}, {})", snap.x, snap.y),
        );
    }

    Ok(())
}
