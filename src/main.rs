//! CLI for computing per-atom accessible surface areas.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::time::Instant;

use clap::{ArgAction, Parser};
use log::info;
use rupley::input::parse_xyzr;
use rupley::{AsaCalculator, AsaParams, Ball};
use serde::Serialize;

/// JSON output: per-atom results plus totals.
#[derive(Serialize)]
struct JsonOutput {
    /// Accessible surface area per atom; `null` for ignored atoms.
    areas: Vec<Option<f64>>,
    /// Accessible sample point count per atom; `null` for ignored atoms.
    accessible_points: Vec<Option<usize>>,
    total_area: f64,
    atom_count: usize,
    ignored_count: usize,
    probe: f64,
    sample_points: usize,
}

#[derive(Parser)]
#[command(name = "rupley")]
#[command(about = "Compute per-atom accessible surface area of atomic balls")]
#[command(
    long_about = "Computes solvent-accessible surface area per atom with the \
    Shrake-Rupley algorithm: deterministic golden-spiral sample points on each \
    probe-expanded sphere, occluded points removed by overlapping neighbors \
    found through a spatial hash grid.\n\n\
    Input is XYZR (one `x y z r` line per atom); a negative radius marks an \
    atom as ignored."
)]
struct Cli {
    /// Rolling probe radius
    #[arg(long, default_value_t = 1.4)]
    probe: f64,

    /// Number of sample points per sphere
    #[arg(long, default_value_t = 960)]
    sample_points: usize,

    /// Spatial grid cell size
    #[arg(long, default_value_t = 7.0)]
    cell_size: f64,

    /// Grid lookup margin, in cells per axis
    #[arg(long, default_value_t = 1)]
    margin: u32,

    /// Input XYZR file. Reads from stdin if not specified
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output JSON file. Writes to stdout if not specified
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Increase verbosity (-v: debug, -vv: trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Reduce verbosity to warnings only
    #[arg(short, long)]
    quiet: bool,

    /// Maximum number of threads to use (default: all available)
    #[arg(long)]
    processors: Option<usize>,

    /// Measure and output running time to stderr
    #[arg(long)]
    measure_running_time: bool,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = if cli.quiet {
        "warn"
    } else {
        match cli.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Configure thread pool if --processors specified
    if let Some(num_threads) = cli.processors {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .map_err(io::Error::other)?;
        info!("Using {num_threads} threads");
    }

    let balls: Vec<Ball> = if let Some(path) = &cli.input {
        parse_xyzr(BufReader::new(File::open(path)?))?
    } else {
        let stdin = io::stdin();
        parse_xyzr(stdin.lock())?
    };
    info!("Read {} atoms", balls.len());

    let params = AsaParams {
        probe: cli.probe,
        sample_count: cli.sample_points,
        cell_size: cli.cell_size,
        margin: cli.margin,
    };

    let start = Instant::now();
    let calc = AsaCalculator::new(balls, &params)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;
    let areas = calc.accessible_surface_areas();
    let accessible_points = calc.all_accessible_points();
    let elapsed = start.elapsed();

    if cli.measure_running_time {
        eprintln!("running time: {:.6} s", elapsed.as_secs_f64());
    }

    let output = JsonOutput {
        total_area: areas.iter().flatten().sum(),
        atom_count: areas.len(),
        ignored_count: areas.iter().filter(|a| a.is_none()).count(),
        probe: cli.probe,
        sample_points: cli.sample_points,
        areas,
        accessible_points,
    };

    let json = serde_json::to_string_pretty(&output).map_err(io::Error::other)?;
    match &cli.output {
        Some(path) => {
            File::create(path)?.write_all(json.as_bytes())?;
            info!("Wrote results to {}", path.display());
        }
        None => {
            println!("{json}");
        }
    }

    Ok(())
}
