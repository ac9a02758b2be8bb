//! Evaluate every plan in a CSV file
//!
//! Reads plan requests (see data/sample_plans.csv for the columns), runs them
//! in parallel, and writes one summary row per request. Failed rows carry the
//! error message instead of results.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use financial_planning::runner::{load_requests, summarize, write_summary};
use financial_planning::{PlanRunner, PlannerConfig};

#[derive(Debug, Parser)]
#[command(name = "run_batch", about = "Evaluate a CSV of plan requests", version)]
struct Args {
    /// Plan requests CSV
    #[arg(value_name = "input")]
    input: PathBuf,

    /// Summary CSV path; stdout when omitted
    #[arg(long, short, value_name = "path")]
    output: Option<PathBuf>,

    /// Planner config file (JSON); PLANNER_* environment variables still apply
    #[arg(long, value_name = "path")]
    config: Option<PathBuf>,

    /// Write full reports (with balance schedules) as JSON instead of the summary
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let start = Instant::now();

    let requests = load_requests(&args.input)
        .with_context(|| format!("failed to load plans from {}", args.input.display()))?;

    let config = PlannerConfig::load(args.config.as_deref()).context("failed to load planner config")?;
    let runner = PlanRunner::new(config).with_detailed_output(args.json);
    let outcomes = runner.run_batch(&requests);

    let out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("unable to create {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    if args.json {
        let reports: Vec<_> = outcomes
            .iter()
            .map(|o| match o {
                Ok(report) => serde_json::to_value(report),
                Err(e) => Ok(serde_json::json!({ "error": e.to_string() })),
            })
            .collect::<Result<_, _>>()?;
        let mut out = out;
        serde_json::to_writer_pretty(&mut out, &reports)?;
        writeln!(out)?;
    } else {
        write_summary(out, &summarize(&requests, &outcomes))?;
    }

    log::info!(
        "processed {} plans in {:?}",
        requests.len(),
        start.elapsed()
    );
    Ok(())
}
