//! Plan requests and the combined report produced for each one

use serde::{Deserialize, Deserializer, Serialize};

use crate::allocation::Allocation;
use crate::goal::GoalRecommendation;
use crate::growth::{GrowthResult, GrowthScenario, SchedulePoint};
use crate::retirement::{Lifestyle, RetirementProjection};

/// Raw inputs for every calculator, one row of a batch file.
///
/// Blank or unparsable cells load as `None` and later resolve to the
/// calculator defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub id: u32,

    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub name: Option<String>,

    /// Takes precedence over `lifestyle`
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub monthly_expenses: Option<f64>,

    /// Short name or card heading ("basic", "Basic Lifestyle")
    #[serde(default, deserialize_with = "lifestyle_cell")]
    pub lifestyle: Option<Lifestyle>,

    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub monthly_contribution: Option<f64>,

    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub contribution_years: Option<f64>,

    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub goal_amount: Option<f64>,

    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub goal_years: Option<f64>,

    /// Allocation guidance is only produced when an age is given
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub age: Option<u32>,
}

/// Read a lifestyle cell through `Lifestyle::from_str`.
///
/// Blank cells are `None`; unknown names are logged and also load as `None`.
fn lifestyle_cell<'de, D>(deserializer: D) -> Result<Option<Lifestyle>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(name) => match name.parse::<Lifestyle>() {
            Ok(lifestyle) => Ok(Some(lifestyle)),
            Err(e) => {
                log::warn!("{}; using default expenses", e);
                Ok(None)
            }
        },
    }
}

impl PlanRequest {
    /// Expense figure for the retirement sizer
    pub fn expenses(&self) -> Option<f64> {
        self.monthly_expenses
            .or_else(|| self.lifestyle.map(Lifestyle::monthly_expenses))
    }
}

/// Balance curve for one scenario
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioSchedule {
    pub scenario: GrowthScenario,
    pub points: Vec<SchedulePoint>,
}

/// Everything computed for a single request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanReport {
    pub id: u32,
    pub retirement: RetirementProjection,
    pub growth: Vec<GrowthResult>,

    /// Only filled for detailed runs
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub schedules: Vec<ScenarioSchedule>,

    pub goal: GoalRecommendation,
    pub allocation: Option<Allocation>,
}

impl PlanReport {
    pub fn growth_for(&self, scenario: GrowthScenario) -> Option<&GrowthResult> {
        self.growth.iter().find(|g| g.scenario == scenario)
    }
}

/// Flat per-request row for CSV output
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlanSummaryRow {
    pub id: u32,
    pub goal_name: String,
    pub target_fund: f64,
    pub monthly_withdrawal: f64,
    pub conservative_final: f64,
    pub moderate_final: f64,
    pub optimistic_final: f64,
    pub goal_monthly_saving: f64,
    pub goal_vehicle: String,
    pub stocks_pct: Option<u32>,
    pub error: Option<String>,
}

impl From<&PlanReport> for PlanSummaryRow {
    fn from(report: &PlanReport) -> Self {
        let final_value = |s| report.growth_for(s).map_or(0.0, |g| g.final_value);
        Self {
            id: report.id,
            goal_name: report.goal.name.clone(),
            target_fund: report.retirement.target_fund,
            monthly_withdrawal: report.retirement.monthly_withdrawal,
            conservative_final: final_value(GrowthScenario::Conservative),
            moderate_final: final_value(GrowthScenario::Moderate),
            optimistic_final: final_value(GrowthScenario::Optimistic),
            goal_monthly_saving: report.goal.monthly_saving,
            goal_vehicle: report.goal.vehicle.to_string(),
            stocks_pct: report.allocation.as_ref().map(|a| a.stocks_pct),
            error: None,
        }
    }
}

impl PlanSummaryRow {
    /// Row for a request that could not be evaluated
    pub fn failed(id: u32, error: impl ToString) -> Self {
        Self {
            id,
            error: Some(error.to_string()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expenses_precedence() {
        let mut req = PlanRequest {
            lifestyle: Some(Lifestyle::Basic),
            ..Default::default()
        };
        assert_eq!(req.expenses(), Some(11_000.0));

        req.monthly_expenses = Some(18_000.0);
        assert_eq!(req.expenses(), Some(18_000.0));

        assert_eq!(PlanRequest::default().expenses(), None);
    }

    #[test]
    fn test_failed_row() {
        let row = PlanSummaryRow::failed(7, "bad horizon");
        assert_eq!(row.id, 7);
        assert_eq!(row.error.as_deref(), Some("bad horizon"));
        assert!(row.goal_vehicle.is_empty());
    }
}
