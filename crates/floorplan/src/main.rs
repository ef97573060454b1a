//! Floor plan chair counter
//!
//! Main entry point: reads one or more ASCII floor plans and prints the
//! chairs found in each room.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use fp_core::config::DEFAULT_WALL_SEPARATORS;
use fp_core::{ChairKind, FloorPlanParser, PlanConfig, PlanError, Report, load_plan};

/// Plan read when no path is given
const DEFAULT_PLAN: &str = "floor-plans/rooms.txt";

/// Count chairs per room in an ASCII floor plan
#[derive(Parser, Debug)]
#[command(name = "floorplan")]
#[command(author, version, about = "Count chairs per room in an ASCII floor plan", long_about = None)]
struct Args {
    /// Floor plan files (default: floor-plans/rooms.txt)
    paths: Vec<PathBuf>,

    /// Wall characters, comma-separated
    #[arg(long = "separators", value_delimiter = ',', default_values_t = DEFAULT_WALL_SEPARATORS)]
    separators: Vec<char>,

    /// Chair characters in report order, comma-separated
    #[arg(long = "chairs", alias = "chair_chars", value_delimiter = ',', default_values_t = ChairKind::symbols())]
    chairs: Vec<char>,

    /// Log level, overridden by RUST_LOG
    #[arg(long = "log-level", alias = "logging", value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    /// Print reports as JSON
    #[arg(long = "json")]
    json: bool,

    /// Keep asking for more plans after the given ones
    #[arg(short = 'i', long = "interactive")]
    interactive: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.log_level);

    let config = PlanConfig::new()
        .with_wall_separators(args.separators.iter().copied())
        .with_chair_kinds(args.chairs.iter().copied());
    if let Err(err) = config.validate() {
        error!("{}", err);
        return ExitCode::FAILURE;
    }

    let paths = if args.paths.is_empty() {
        vec![PathBuf::from(DEFAULT_PLAN)]
    } else {
        args.paths.clone()
    };

    let mut failed = false;
    for path in &paths {
        failed |= !process(path, &config, args.json);
    }

    if args.interactive {
        failed |= !prompt_loop(&config, args.json);
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

/// Log to stderr, honouring RUST_LOG when it is set
fn init_logging(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Load, parse and print one plan. Returns false if it failed.
fn process(path: &Path, config: &PlanConfig, json: bool) -> bool {
    match run(path, config, json) {
        Ok(()) => true,
        Err(err) => {
            error!("Failed to process floor plan: {}", err);
            false
        }
    }
}

fn run(path: &Path, config: &PlanConfig, json: bool) -> Result<(), PlanError> {
    info!("Processing floor plan '{}'", path.display());
    let grid = load_plan(path)?;
    let registry = FloorPlanParser::new(&grid, config).parse();
    let report = Report::from_registry(&registry, &config.chair_kinds);

    print!("{}", render(&report, json)?);
    Ok(())
}

/// Report text as printed, JSON or plain
fn render(report: &Report, json: bool) -> Result<String, PlanError> {
    if json {
        Ok(format!("{}\n", report.to_json()?))
    } else {
        Ok(report.to_string())
    }
}

/// Ask for further plans until the user declines or input ends
fn prompt_loop(config: &PlanConfig, json: bool) -> bool {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut ok = true;

    loop {
        let Some(choice) = ask(&mut lines, "Do you want to process another floor plan? (yes/no): ")
        else {
            break;
        };
        if !choice.trim().eq_ignore_ascii_case("yes") {
            println!("Exiting...");
            break;
        }
        let Some(path) = ask(&mut lines, "Enter the path to the floor plan file: ") else {
            break;
        };
        ok &= process(Path::new(path.trim()), config, json);
    }

    ok
}

fn ask(lines: &mut impl Iterator<Item = io::Result<String>>, prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok();
    lines.next()?.ok()
}
