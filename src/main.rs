//! Financial Planner CLI
//!
//! Command-line front end for the planning calculators. Inputs are read as raw
//! text the same way the calculator page reads its fields, so blank, zero, or
//! unparsable values fall back to each calculator's default.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

use financial_planning::{
    allocation::allocation_for_age,
    format::time_frame_label,
    growth::{dca, growth_schedule, project_growth},
    inputs::{parse_field, resolve, DEFAULT_CONTRIBUTION_YEARS, DEFAULT_MONTHLY_CONTRIBUTION},
    recommend_for_goal,
    retirement::size_for_lifestyle,
    size_retirement, GrowthScenario, Lifestyle, PlannerConfig, TIME_BANDS,
};

#[derive(Debug, Parser)]
#[command(
    name = "financial-planner",
    about = "Retirement, growth, and savings-goal calculators",
    version
)]
struct Cli {
    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Planner config file (JSON); PLANNER_* environment variables still apply
    #[arg(long, global = true, value_name = "path")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Size a retirement fund from monthly expenses (four-percent rule)
    Retirement {
        /// Monthly expenses
        #[arg(long, value_name = "amount")]
        expenses: Option<String>,

        /// Use a preset lifestyle instead (basic, moderate, comfortable, affluent)
        #[arg(long, conflicts_with = "expenses")]
        lifestyle: Option<Lifestyle>,
    },
    /// Project a monthly contribution under each return scenario
    Growth {
        /// Monthly contribution
        #[arg(long, value_name = "amount")]
        contribution: Option<String>,

        /// Contribution period in years
        #[arg(long, value_name = "years")]
        years: Option<String>,

        /// Also print the yearly balance schedule for each scenario
        #[arg(long)]
        schedule: bool,
    },
    /// Recommend monthly savings and a vehicle for a goal
    Goal {
        /// Target amount
        #[arg(long, value_name = "amount")]
        amount: Option<String>,

        /// Years until the money is needed
        #[arg(long, value_name = "years")]
        years: Option<String>,

        /// Goal label
        #[arg(long)]
        name: Option<String>,
    },
    /// Suggest a stock/bond split for an age
    Allocation {
        #[arg(long)]
        age: u32,
    },
    /// Show the dollar-cost averaging illustration
    Dca,
}

fn field(raw: &Option<String>) -> Option<f64> {
    raw.as_deref().and_then(parse_field)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = PlannerConfig::load(cli.config.as_deref()).context("failed to load planner config")?;
    let money = &config.currency;

    match &cli.command {
        Command::Retirement { expenses, lifestyle } => {
            let projection = match lifestyle {
                Some(l) => size_for_lifestyle(*l),
                None => size_retirement(field(expenses)),
            };
            if cli.json {
                return print_json(&projection);
            }
            println!("Retirement Target (4% rule)");
            println!("===========================");
            println!("  Monthly Expenses:   {}", money.format(projection.monthly_expenses));
            println!("  Annual Expenses:    {}", money.format(projection.annual_expenses));
            println!("  Target Fund (25x):  {}", money.format(projection.target_fund));
            println!("  Monthly Withdrawal: {}", money.format(projection.monthly_withdrawal));
        }

        Command::Growth { contribution, years, schedule } => {
            let results = project_growth(field(contribution), field(years))
                .context("growth projection failed")?;

            let schedules = if *schedule {
                let contribution = resolve(field(contribution), DEFAULT_MONTHLY_CONTRIBUTION);
                let years = resolve(field(years), DEFAULT_CONTRIBUTION_YEARS);
                GrowthScenario::ALL
                    .iter()
                    .map(|&s| growth_schedule(contribution, years, s, config.schedule_step_years))
                    .collect::<Result<Vec<_>, _>>()?
            } else {
                Vec::new()
            };

            if cli.json {
                return print_json(&serde_json::json!({
                    "results": results,
                    "schedules": schedules,
                }));
            }

            println!("{:<20} {:>16} {:>16} {:>16}", "Scenario", "Invested", "Final Value", "Gain");
            println!("{}", "-".repeat(71));
            for r in &results {
                println!(
                    "{:<20} {:>16} {:>16} {:>16}",
                    r.scenario.to_string(),
                    money.format(r.total_invested),
                    money.format(r.final_value),
                    money.format_gain(r.total_gain),
                );
            }

            for (scenario, points) in GrowthScenario::ALL.iter().zip(&schedules) {
                println!("\n{} schedule:", scenario);
                for p in points {
                    println!(
                        "  Year {:>6}: invested {:>16}  balance {:>16}",
                        p.year,
                        money.format(p.total_invested),
                        money.format(p.balance)
                    );
                }
            }
        }

        Command::Goal { amount, years, name } => {
            let rec = recommend_for_goal(field(amount), field(years), name.as_deref())
                .context("goal recommendation failed")?;
            if cli.json {
                return print_json(&rec);
            }
            println!("Goal: {}", rec.name);
            println!("  Target:          {}", money.format(rec.target_amount));
            println!("  Time Frame:      {}", time_frame_label(rec.years));
            println!("  Monthly Saving:  {}", money.format(rec.monthly_saving));
            println!("  Recommended:     {}", rec.vehicle);
            println!("  Why:             {}", rec.reason);
            println!();
            for band in TIME_BANDS.iter() {
                let marker = if band.index == rec.active_band_index { ">" } else { " " };
                let upper = band
                    .max_years
                    .map_or_else(|| "+".to_string(), |m| format!("-{}", m));
                println!("  {} {}{} yrs  {}", marker, band.min_years, upper, band.vehicle);
            }
        }

        Command::Allocation { age } => {
            let allocation = allocation_for_age(*age);
            if cli.json {
                return print_json(&allocation);
            }
            println!("Age {}: {}% stocks / {}% bonds", allocation.age, allocation.stocks_pct, allocation.bonds_pct);
            println!("  {}", allocation.explanation);
        }

        Command::Dca => {
            let summary = dca::sample_illustration();
            if cli.json {
                return print_json(&summary);
            }
            println!("{:>5} {:>10} {:>10}", "Month", "Price", "Shares");
            for p in &summary.purchases {
                println!("{:>5} {:>10.2} {:>10.2}", p.label, p.price, p.shares);
            }
            println!("\n  Total Invested: {}", money.format(summary.total_invested));
            println!("  Total Shares:   {:.2}", summary.total_shares);
            println!("  Average Cost:   {:.2}", summary.average_cost);
            println!("  Average Price:  {:.2}", summary.average_price);
        }
    }

    Ok(())
}
