//! Scheduling simulator CLI.
//!
//! Reads a workload (file or seeded random generation), runs FCFS,
//! SRT, and round-robin in sequence — each on its own copy of the
//! workload — and prints a results table and Gantt chart per policy,
//! or a single JSON document with `--json`.
//!
//! # Exit codes
//! - `0`: simulation completed.
//! - `2`: invalid usage, unreadable input, or validation failure.

use std::env;
use std::num::NonZeroU64;
use std::path::PathBuf;
use std::process::ExitCode;

use log::{info, warn};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Serialize;

use schedsim::gen::{random_workload, GenParams};
use schedsim::input::Workload;
use schedsim::metrics::ScheduleKpi;
use schedsim::models::{ProcessSpec, Schedule};
use schedsim::policy::{self, fcfs::is_arrival_sorted};
use schedsim::report;
use schedsim::validation::validate_workload;

const DEFAULT_QUANTUM: u64 = 2;

#[derive(Debug, Default)]
struct Args {
    input: Option<PathBuf>,
    quantum: Option<u64>,
    random: Option<usize>,
    seed: u64,
    json: bool,
    help: bool,
}

/// One policy's run plus its aggregates, for `--json` output.
#[derive(Serialize)]
struct PolicyRun {
    schedule: Schedule,
    kpi: ScheduleKpi,
}

fn print_usage(exe: &str) {
    eprintln!(
        "usage: {exe} [OPTIONS] [<workload-file>]

Workload file format: N Q, then N `arrival burst` pairs (whitespace-
separated). Exactly one of <workload-file> or --random is required.

OPTIONS:
    --quantum=<N>   Round-robin time slice (overrides the file's Q)
    --random=<N>    Generate a random workload of N processes
    --seed=<N>      Seed for --random (default: 0)
    --json          Emit machine-readable JSON instead of tables
    --help          Show this help"
    );
}

fn parse_args(raw: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut args = Args::default();
    for arg in raw {
        if let Some(value) = arg.strip_prefix("--quantum=") {
            let q: u64 = value
                .parse()
                .map_err(|_| format!("invalid --quantum value '{value}'"))?;
            args.quantum = Some(q);
        } else if let Some(value) = arg.strip_prefix("--random=") {
            let n: usize = value
                .parse()
                .map_err(|_| format!("invalid --random value '{value}'"))?;
            args.random = Some(n);
        } else if let Some(value) = arg.strip_prefix("--seed=") {
            args.seed = value
                .parse()
                .map_err(|_| format!("invalid --seed value '{value}'"))?;
        } else if arg == "--json" {
            args.json = true;
        } else if arg == "--help" || arg == "-h" {
            args.help = true;
        } else if arg.starts_with('-') {
            return Err(format!("unknown option '{arg}'"));
        } else if args.input.is_none() {
            args.input = Some(PathBuf::from(arg));
        } else {
            return Err(format!("unexpected extra argument '{arg}'"));
        }
    }
    Ok(args)
}

/// Resolves the workload and RR quantum from the parsed arguments.
fn load_workload(args: &Args) -> Result<(Vec<ProcessSpec>, NonZeroU64), String> {
    let cli_quantum = match args.quantum {
        Some(q) => Some(NonZeroU64::new(q).ok_or("--quantum must be positive")?),
        None => None,
    };

    if let Some(count) = args.random {
        if args.input.is_some() {
            return Err("give either a workload file or --random, not both".into());
        }
        let mut rng = SmallRng::seed_from_u64(args.seed);
        let processes = random_workload(&mut rng, GenParams::new(count));
        let quantum = cli_quantum
            .unwrap_or_else(|| NonZeroU64::new(DEFAULT_QUANTUM).unwrap_or(NonZeroU64::MIN));
        return Ok((processes, quantum));
    }

    let path = args.input.as_ref().ok_or("no workload file given")?;
    let workload = Workload::from_file(path).map_err(|e| e.to_string())?;
    Ok((workload.processes, cli_quantum.unwrap_or(workload.quantum)))
}

fn main() -> ExitCode {
    env_logger::init();

    let mut raw = env::args();
    let exe = raw.next().unwrap_or_else(|| "schedsim".into());
    let args = match parse_args(raw) {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{exe}: {msg}");
            print_usage(&exe);
            return ExitCode::from(2);
        }
    };
    if args.help {
        print_usage(&exe);
        return ExitCode::SUCCESS;
    }

    let (processes, quantum) = match load_workload(&args) {
        Ok(loaded) => loaded,
        Err(msg) => {
            eprintln!("{exe}: {msg}");
            print_usage(&exe);
            return ExitCode::from(2);
        }
    };

    if let Err(errors) = validate_workload(&processes) {
        for e in &errors {
            eprintln!("{exe}: invalid workload: {}", e.message);
        }
        return ExitCode::from(2);
    }
    if !is_arrival_sorted(&processes) {
        warn!("workload is not sorted by arrival; FCFS trusts input order");
    }
    info!(
        "simulating {} processes, quantum {}",
        processes.len(),
        quantum
    );

    let runs = vec![
        policy::fcfs::run(&processes),
        policy::srt::run(&processes),
        policy::rr::run(&processes, quantum),
    ];

    if args.json {
        let report: Vec<PolicyRun> = runs
            .into_iter()
            .map(|schedule| PolicyRun {
                kpi: ScheduleKpi::calculate(&schedule),
                schedule,
            })
            .collect();
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("{exe}: could not serialize report: {e}");
                return ExitCode::from(2);
            }
        }
    } else {
        for schedule in &runs {
            info!(
                "{}: makespan {} ticks",
                schedule.policy,
                schedule.makespan()
            );
            print!("{}", report::results_table(schedule));
            print!("{}", report::gantt_chart(schedule));
        }
    }
    ExitCode::SUCCESS
}
