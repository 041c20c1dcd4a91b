//! Outbreak - Entry Point
//!
//! Parses the command line into a simulation config, runs the
//! day-by-day loop with a live terminal view, and writes the per-day
//! counter series to CSV when the run ends.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use crossterm::terminal;

use outbreak::core::config::SimulationConfig;
use outbreak::core::error::{OutbreakError, Result};
use outbreak::core::types::{PatientZero, Topology};
use outbreak::output::Recorder;
use outbreak::render::{raster, terminal as term_view};
use outbreak::simulation::Simulation;

/// Grid epidemic simulator
#[derive(Parser, Debug)]
#[command(name = "outbreak")]
#[command(about = "Simulate an epidemic spreading across a populated grid")]
struct Args {
    /// Number of simulation days
    #[arg(short = 't', long, default_value_t = 300)]
    days: u32,

    /// Number of cells on one side of the grid
    #[arg(short = 'w', long, default_value_t = 60)]
    side: usize,

    /// How likely infection happens
    #[arg(short = 'r', long, default_value_t = 0.15)]
    rate: f64,

    /// Days before an infected cell becomes infectious
    #[arg(short = 'n', long, default_value_t = 3)]
    incubation: u32,

    /// Days a cell remains infectious
    #[arg(short = 'd', long, default_value_t = 4)]
    duration: u32,

    /// Probability of fatality
    #[arg(short = 'f', long, default_value_t = 0.02)]
    fatality: f64,

    /// Immunity against re-infection after recovery
    #[arg(short = 'i', long, default_value_t = 0.5)]
    immunity: f64,

    /// Fraction of the grid that is populated
    #[arg(short = 'c', long, default_value_t = 0.7)]
    density: f64,

    /// Day when medicine is introduced (default: never)
    #[arg(short = 'm', long)]
    med_introduced: Option<u32>,

    /// Effectiveness of medicine
    #[arg(short = 'e', long, default_value_t = 0.0)]
    med_effectiveness: f64,

    /// Day when quarantine starts (default: never)
    #[arg(short = 'q', long)]
    quarantine_introduced: Option<u32>,

    /// Effectiveness of quarantine
    #[arg(short = 'g', long, default_value_t = 0.0)]
    quarantine_effectiveness: f64,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Neighbor adjacency: orthogonal or moore
    #[arg(long, default_value = "orthogonal")]
    topology: String,

    /// Patient zero placement: center or random
    #[arg(long, default_value = "center")]
    patient_zero: String,

    /// Stop as soon as nobody is infected anymore
    #[arg(long)]
    stop_when_clear: bool,

    /// Base name of the CSV data file
    #[arg(long, default_value = "data")]
    name: String,

    /// Save a PNG frame per day under frames/
    #[arg(long)]
    save_frames: bool,

    /// Run without the terminal view
    #[arg(long)]
    headless: bool,
}

/// Pixel pitch of the raster frames
const CELL_SIZE: u32 = 10;

fn parse_topology(s: &str) -> Result<Topology> {
    match s {
        "orthogonal" => Ok(Topology::Orthogonal),
        "moore" => Ok(Topology::Moore),
        other => Err(OutbreakError::Config(format!(
            "unknown topology '{}', expected orthogonal or moore",
            other
        ))),
    }
}

fn parse_patient_zero(s: &str) -> Result<PatientZero> {
    match s {
        "center" => Ok(PatientZero::Center),
        "random" => Ok(PatientZero::Random),
        other => Err(OutbreakError::Config(format!(
            "unknown patient-zero strategy '{}', expected center or random",
            other
        ))),
    }
}

fn config_from_args(args: &Args) -> Result<SimulationConfig> {
    Ok(SimulationConfig {
        side: args.side,
        density: args.density,
        rate: args.rate,
        incubation: args.incubation,
        duration: args.duration,
        fatality: args.fatality,
        immunity: args.immunity,
        med_introduced: args.med_introduced.unwrap_or(args.days),
        med_effectiveness: args.med_effectiveness,
        quarantine_introduced: args.quarantine_introduced.unwrap_or(args.days),
        quarantine_effectiveness: args.quarantine_effectiveness,
        days: args.days,
        stop_when_clear: args.stop_when_clear,
        topology: parse_topology(&args.topology)?,
        patient_zero: parse_patient_zero(&args.patient_zero)?,
        seed: args.seed.unwrap_or_else(rand::random),
    })
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("outbreak=info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = config_from_args(&args)?;
    let seed = config.seed;

    let mut sim = Simulation::new(config)?;
    let mut recorder = Recorder::new();
    let mut cancelled = false;

    let frames_dir = PathBuf::from("frames");
    if args.save_frames {
        std::fs::create_dir_all(&frames_dir)?;
    }

    if !args.headless {
        terminal::enable_raw_mode()?;
    }
    let run_result = run_loop(&args, &mut sim, &mut recorder, &mut cancelled, &frames_dir);
    if !args.headless {
        terminal::disable_raw_mode()?;
    }
    run_result?;

    let csv_path = PathBuf::from(format!("epidemic-{}.csv", args.name));
    recorder.save_csv(&csv_path)?;
    tracing::info!(path = %csv_path.display(), days = recorder.len(), "data saved");

    println!("\nDATA");
    for line in term_view::report_lines(&sim, &sim.summary()) {
        println!("{}", line);
    }
    println!("\nSeed: {} (pass --seed {} to reproduce)", seed, seed);
    if cancelled {
        println!("Run cancelled early by keypress.");
    }

    Ok(())
}

fn run_loop(
    args: &Args,
    sim: &mut Simulation,
    recorder: &mut Recorder,
    cancelled: &mut bool,
    frames_dir: &std::path::Path,
) -> Result<()> {
    let mut stdout = io::stdout();

    while !sim.finished() {
        // Cancellation is honored between days, never mid-sweep
        if !args.headless && term_view::poll_cancel()? {
            *cancelled = true;
            break;
        }

        let summary = sim.advance_day();
        recorder.record(&summary);

        // Display and persistence failures must not kill the run
        if !args.headless {
            if let Err(e) = term_view::draw_frame(&mut stdout, sim, &summary) {
                tracing::warn!(error = %e, day = summary.day, "frame rendering failed");
            }
        }
        if args.save_frames {
            let img = raster::render(sim.cells(), sim.config().side, CELL_SIZE);
            let path = frames_dir.join(format!("day-{:04}.png", summary.day));
            if let Err(e) = raster::save_png(&img, &path) {
                tracing::warn!(error = %e, day = summary.day, "frame save failed");
            }
        }
    }
    stdout.flush()?;
    Ok(())
}
