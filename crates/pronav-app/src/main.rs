//! `pronav` command-line driver.

use std::process;

use tracing_subscriber::EnvFilter;

use pronav_app::cli::{self, CliArgs};
use pronav_app::config::{self, AppError};
use pronav_app::runner;
use pronav_core::config::SimulationConfig;
use pronav_core::state::StepResult;
use pronav_sim::Simulation;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let parsed = match cli::parse_args(&args) {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("{err}\n");
            eprint!("{}", cli::USAGE);
            process::exit(2);
        }
    };
    if parsed.help {
        eprint!("{}", cli::USAGE);
        return;
    }

    match run(&parsed) {
        Ok(result) => print_json(&result),
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    }
}

fn run(args: &CliArgs) -> Result<StepResult, AppError> {
    let config = match &args.config {
        Some(path) => config::load_config(path)?,
        None => SimulationConfig::default(),
    };
    let mut sim = Simulation::new(config)?;

    let trace = args.trace;
    let on_step = |step: &StepResult| {
        if trace {
            print_json(step);
        }
    };

    if args.realtime {
        runner::run_realtime(sim, args.max_time, args.tick_rate, on_step)
    } else {
        Ok(runner::run_batch(&mut sim, args.max_time, on_step))
    }
}

fn print_json(step: &StepResult) {
    match serde_json::to_string(step) {
        Ok(line) => println!("{line}"),
        Err(err) => eprintln!("failed to serialize step: {err}"),
    }
}
