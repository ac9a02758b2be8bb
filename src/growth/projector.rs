//! Future value of a level monthly contribution under each growth scenario

use serde::{Deserialize, Serialize};

use super::scenario::GrowthScenario;
use crate::error::{check_horizon, PlanningError};
use crate::inputs::{resolve, DEFAULT_CONTRIBUTION_YEARS, DEFAULT_MONTHLY_CONTRIBUTION};

/// Ending position of a contribution plan under one scenario
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthResult {
    pub scenario: GrowthScenario,

    /// Number of monthly contributions (years x 12, not rounded)
    pub months: f64,

    /// Monthly contribution x months
    pub total_invested: f64,

    /// Balance after the last contribution
    pub final_value: f64,

    /// Final value - total invested
    pub total_gain: f64,
}

/// Accumulated balance of a contribution stream at an arbitrary annual rate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Accumulation {
    pub months: f64,
    pub total_invested: f64,
    pub final_value: f64,
    pub total_gain: f64,
}

/// Future value of an ordinary annuity
///
/// Payments of `contribution` at the end of each month for `months` months,
/// compounded at `monthly_rate`. `months` may be fractional; the growth factor
/// uses real exponentiation. A zero rate reduces to plain principal.
pub fn future_value_of_annuity(
    contribution: f64,
    monthly_rate: f64,
    months: f64,
) -> Result<f64, PlanningError> {
    check_horizon(months / 12.0)?;
    if monthly_rate <= -1.0 || monthly_rate.is_nan() {
        return Err(PlanningError::RateOutOfRange { monthly_rate });
    }

    if monthly_rate == 0.0 {
        return Ok(contribution * months);
    }

    Ok(contribution * ((1.0 + monthly_rate).powf(months) - 1.0) / monthly_rate)
}

/// Accumulate `contribution` per month for `years` at `annual_rate` (compounded monthly)
pub fn accumulate(
    contribution: f64,
    years: f64,
    annual_rate: f64,
) -> Result<Accumulation, PlanningError> {
    check_horizon(years)?;

    let months = years * 12.0;
    let monthly_rate = annual_rate / 12.0;
    let total_invested = contribution * months;
    let final_value = future_value_of_annuity(contribution, monthly_rate, months)?;

    Ok(Accumulation {
        months,
        total_invested,
        final_value,
        total_gain: final_value - total_invested,
    })
}

/// Project a contribution plan under a single scenario
pub fn project_scenario(
    contribution: f64,
    years: f64,
    scenario: GrowthScenario,
) -> Result<GrowthResult, PlanningError> {
    let acc = accumulate(contribution, years, scenario.annual_rate())?;

    Ok(GrowthResult {
        scenario,
        months: acc.months,
        total_invested: acc.total_invested,
        final_value: acc.final_value,
        total_gain: acc.total_gain,
    })
}

/// Project a monthly contribution plan under every scenario.
///
/// Missing or non-numeric inputs resolve to 1,000 per month over 30 years.
/// Results come back in conservative, moderate, optimistic order.
pub fn project_growth(
    monthly_contribution: Option<f64>,
    years: Option<f64>,
) -> Result<Vec<GrowthResult>, PlanningError> {
    let contribution = resolve(monthly_contribution, DEFAULT_MONTHLY_CONTRIBUTION);
    let years = resolve(years, DEFAULT_CONTRIBUTION_YEARS);

    let results = GrowthScenario::ALL
        .iter()
        .map(|&scenario| project_scenario(contribution, years, scenario))
        .collect::<Result<Vec<_>, _>>()?;

    for r in &results {
        log::debug!(
            "projected {}: invested={} final={} gain={}",
            r.scenario,
            r.total_invested,
            r.final_value,
            r.total_gain
        );
    }

    Ok(results)
}

/// One point on a scenario's balance curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SchedulePoint {
    /// Elapsed years (the last point may be fractional)
    pub year: f64,
    pub months: f64,
    pub total_invested: f64,
    pub balance: f64,
}

/// Longest horizon, in years, a balance schedule will cover
pub const MAX_SCHEDULE_YEARS: f64 = 1_000.0;

/// Balance curve for charting: a point at year 0, every `step_years`, and at the horizon.
///
/// The horizon point always matches `project_scenario` for the same inputs.
/// Horizons above `MAX_SCHEDULE_YEARS` are rejected.
pub fn growth_schedule(
    contribution: f64,
    years: f64,
    scenario: GrowthScenario,
    step_years: u32,
) -> Result<Vec<SchedulePoint>, PlanningError> {
    check_horizon(years)?;
    if years > MAX_SCHEDULE_YEARS {
        return Err(PlanningError::HorizonTooLong {
            years,
            max_years: MAX_SCHEDULE_YEARS,
        });
    }
    if step_years == 0 {
        return Err(PlanningError::Config("schedule step must be at least one year".into()));
    }

    let point = |year: f64| -> Result<SchedulePoint, PlanningError> {
        let acc = accumulate(contribution, year, scenario.annual_rate())?;
        Ok(SchedulePoint {
            year,
            months: acc.months,
            total_invested: acc.total_invested,
            balance: acc.final_value,
        })
    };

    let mut points = vec![point(0.0)?];
    let step = step_years as f64;
    let steps = (years / step).ceil() as u32;
    for k in 1..steps {
        points.push(point(k as f64 * step)?);
    }
    if years > 0.0 {
        points.push(point(years)?);
    }

    Ok(points)
}
