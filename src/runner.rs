//! Plan runner for single and batch evaluations
//!
//! Holds the display/config settings once, then evaluates any number of
//! plan requests. Batches run in parallel and keep the input order.

use rayon::prelude::*;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::allocation::allocation_for_age;
use crate::config::PlannerConfig;
use crate::error::PlanningError;
use crate::goal::recommend_for_goal;
use crate::growth::{growth_schedule, project_growth, GrowthScenario};
use crate::inputs::{resolve, DEFAULT_CONTRIBUTION_YEARS, DEFAULT_MONTHLY_CONTRIBUTION};
use crate::plan::{PlanReport, PlanRequest, PlanSummaryRow, ScenarioSchedule};
use crate::retirement::size_retirement;

/// Evaluates plan requests against a fixed configuration
///
/// # Example
/// ```ignore
/// let runner = PlanRunner::new(PlannerConfig::default());
/// let requests = load_requests("data/sample_plans.csv")?;
/// for outcome in runner.run_batch(&requests) {
///     println!("{:?}", outcome);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct PlanRunner {
    config: PlannerConfig,
    detailed_output: bool,
}

impl PlanRunner {
    pub fn new(config: PlannerConfig) -> Self {
        Self {
            config,
            detailed_output: false,
        }
    }

    /// Include per-scenario balance schedules in every report
    pub fn with_detailed_output(mut self, detailed: bool) -> Self {
        self.detailed_output = detailed;
        self
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Evaluate one request
    pub fn run(&self, request: &PlanRequest) -> Result<PlanReport, PlanningError> {
        let retirement = size_retirement(request.expenses());
        let growth = project_growth(request.monthly_contribution, request.contribution_years)?;
        let goal = recommend_for_goal(
            request.goal_amount,
            request.goal_years,
            request.name.as_deref(),
        )?;
        let allocation = request.age.map(allocation_for_age);

        let schedules = if self.detailed_output {
            self.schedules(request)?
        } else {
            Vec::new()
        };

        Ok(PlanReport {
            id: request.id,
            retirement,
            growth,
            schedules,
            goal,
            allocation,
        })
    }

    /// Evaluate many requests in parallel; one failure does not stop the rest
    pub fn run_batch(&self, requests: &[PlanRequest]) -> Vec<Result<PlanReport, PlanningError>> {
        let results: Vec<_> = requests.par_iter().map(|r| self.run(r)).collect();

        let failed = results.iter().filter(|r| r.is_err()).count();
        if failed > 0 {
            log::warn!("{} of {} plan requests failed", failed, requests.len());
        } else {
            log::info!("evaluated {} plan requests", requests.len());
        }

        results
    }

    fn schedules(&self, request: &PlanRequest) -> Result<Vec<ScenarioSchedule>, PlanningError> {
        let contribution = resolve(request.monthly_contribution, DEFAULT_MONTHLY_CONTRIBUTION);
        let years = resolve(request.contribution_years, DEFAULT_CONTRIBUTION_YEARS);

        GrowthScenario::ALL
            .iter()
            .map(|&scenario| {
                growth_schedule(contribution, years, scenario, self.config.schedule_step_years)
                    .map(|points| ScenarioSchedule { scenario, points })
            })
            .collect()
    }
}

impl Default for PlanRunner {
    fn default() -> Self {
        Self::new(PlannerConfig::default())
    }
}

/// Load plan requests from a CSV file with a header row
pub fn load_requests<P: AsRef<Path>>(path: P) -> Result<Vec<PlanRequest>, PlanningError> {
    let file = File::open(path.as_ref())?;
    let requests = load_requests_from_reader(file)?;
    log::info!(
        "loaded {} plan requests from {}",
        requests.len(),
        path.as_ref().display()
    );
    Ok(requests)
}

/// Load plan requests from any CSV reader
pub fn load_requests_from_reader<R: Read>(reader: R) -> Result<Vec<PlanRequest>, PlanningError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut requests = Vec::new();
    for row in csv_reader.deserialize() {
        requests.push(row?);
    }
    Ok(requests)
}

/// Flatten batch outcomes into summary rows, failures included
pub fn summarize(
    requests: &[PlanRequest],
    outcomes: &[Result<PlanReport, PlanningError>],
) -> Vec<PlanSummaryRow> {
    requests
        .iter()
        .zip(outcomes)
        .map(|(request, outcome)| match outcome {
            Ok(report) => PlanSummaryRow::from(report),
            Err(e) => PlanSummaryRow::failed(request.id, e),
        })
        .collect()
}

/// Write summary rows as CSV
pub fn write_summary<W: Write>(writer: W, rows: &[PlanSummaryRow]) -> Result<(), PlanningError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::retirement::Lifestyle;

    const SAMPLE: &str = "\
id,name,monthly_expenses,lifestyle,monthly_contribution,contribution_years,goal_amount,goal_years,age
1,House Deposit,20000,,1000,30,120000,2,35
2,,,Affluent,abc,,,,
3,Bad,15000,,500,10,50000,-1,60
";

    #[test]
    fn test_load_requests_with_blank_and_invalid_cells() {
        let requests = load_requests_from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(requests.len(), 3);

        assert_eq!(requests[0].name.as_deref(), Some("House Deposit"));
        assert_eq!(requests[0].goal_years, Some(2.0));
        assert_eq!(requests[0].age, Some(35));

        assert_eq!(requests[1].name, None);
        assert_eq!(requests[1].lifestyle, Some(Lifestyle::Affluent));
        assert_eq!(requests[1].monthly_contribution, None);
        assert_eq!(requests[1].age, None);
    }

    #[test]
    fn test_run_single_request() {
        let requests = load_requests_from_reader(SAMPLE.as_bytes()).unwrap();
        let report = PlanRunner::default().run(&requests[0]).unwrap();

        assert_eq!(report.retirement.target_fund, 6_000_000.0);
        assert_eq!(report.growth.len(), 3);
        assert_eq!(report.goal.monthly_saving, 5_000.0);
        assert_eq!(report.goal.vehicle, "Cash Savings Account");
        assert_eq!(report.allocation.as_ref().map(|a| a.stocks_pct), Some(75));
        assert!(report.schedules.is_empty());
    }

    #[test]
    fn test_defaults_fill_missing_cells() {
        let requests = load_requests_from_reader(SAMPLE.as_bytes()).unwrap();
        let report = PlanRunner::default().run(&requests[1]).unwrap();

        assert_eq!(report.retirement.monthly_expenses, 39_000.0);
        assert_eq!(report.growth[0].total_invested, 360_000.0);
        assert_eq!(report.goal.name, "Your Goal");
        assert_eq!(report.goal.years, 3.0);
        assert!(report.allocation.is_none());
    }

    #[test]
    fn test_batch_keeps_order_and_isolates_failures() {
        let requests = load_requests_from_reader(SAMPLE.as_bytes()).unwrap();
        let outcomes = PlanRunner::default().run_batch(&requests);

        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes[0].as_ref().unwrap().id, 1);
        assert_eq!(outcomes[1].as_ref().unwrap().id, 2);
        assert!(matches!(outcomes[2], Err(PlanningError::NegativeHorizon { .. })));

        let rows = summarize(&requests, &outcomes);
        assert_eq!(rows[2].id, 3);
        assert!(rows[2].error.is_some());
        assert_eq!(rows[0].goal_vehicle, "Cash Savings Account");
    }

    #[test]
    fn test_detailed_output_adds_schedules() {
        let request = PlanRequest {
            id: 9,
            monthly_contribution: Some(2000.0),
            contribution_years: Some(5.0),
            ..Default::default()
        };
        let report = PlanRunner::default()
            .with_detailed_output(true)
            .run(&request)
            .unwrap();

        assert_eq!(report.schedules.len(), 3);
        for (schedule, result) in report.schedules.iter().zip(&report.growth) {
            assert_eq!(schedule.scenario, result.scenario);
            assert_eq!(schedule.points.len(), 6);
            assert_eq!(schedule.points.last().unwrap().balance, result.final_value);
        }
    }

    #[test]
    fn test_schedule_step_follows_config() {
        let config = PlannerConfig {
            schedule_step_years: 5,
            ..Default::default()
        };
        let request = PlanRequest {
            id: 4,
            contribution_years: Some(12.0),
            ..Default::default()
        };
        let report = PlanRunner::new(config)
            .with_detailed_output(true)
            .run(&request)
            .unwrap();

        let years: Vec<f64> = report.schedules[0].points.iter().map(|p| p.year).collect();
        assert_eq!(years, vec![0.0, 5.0, 10.0, 12.0]);
    }

    #[test]
    fn test_lifestyle_cells_accept_short_and_full_names() {
        let csv = "\
id,lifestyle
1,basic
2,Basic Lifestyle
3, Basic
4,lavish
5,
";
        let requests = load_requests_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(requests.len(), 5);
        for req in &requests[..3] {
            assert_eq!(req.lifestyle, Some(Lifestyle::Basic));
            assert_eq!(req.expenses(), Some(11_000.0));
        }
        assert_eq!(requests[3].lifestyle, None);
        assert_eq!(requests[4].lifestyle, None);

        let report = PlanRunner::default().run(&requests[1]).unwrap();
        assert_eq!(report.retirement.target_fund, 3_300_000.0);
    }

    #[test]
    fn test_sample_plans_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/sample_plans.csv");
        let requests = load_requests(&path).unwrap();
        assert_eq!(requests.len(), 6);

        let outcomes = PlanRunner::default().run_batch(&requests);
        assert!(outcomes.iter().all(|o| o.is_ok()));

        let vehicles: Vec<&str> = outcomes
            .iter()
            .map(|o| o.as_ref().unwrap().goal.vehicle)
            .collect();
        assert_eq!(
            vehicles,
            vec![
                "High-Yield Savings Account",
                "Cash Savings Account",
                "Bond Funds",
                "Balanced Portfolio (Stocks + Bonds)",
                "Bond Funds",
                "Bond Funds",
            ]
        );
    }

    #[test]
    fn test_write_summary() {
        let requests = load_requests_from_reader(SAMPLE.as_bytes()).unwrap();
        let outcomes = PlanRunner::default().run_batch(&requests);
        let rows = summarize(&requests, &outcomes);

        let mut buf = Vec::new();
        write_summary(&mut buf, &rows).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let mut lines = text.lines();
        assert!(lines.next().unwrap().starts_with("id,goal_name,target_fund"));
        assert_eq!(text.lines().count(), 4);
    }
}
