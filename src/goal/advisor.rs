//! Monthly savings pacing and vehicle recommendation for a savings goal

use serde::Serialize;

use super::bands::{band_for_years, Emphasis, TimeBand};
use crate::error::{check_horizon, PlanningError};
use crate::inputs::{resolve, resolve_name, DEFAULT_GOAL_AMOUNT, DEFAULT_GOAL_YEARS};

/// Savings recommendation for one goal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalRecommendation {
    pub name: String,
    pub target_amount: f64,
    pub years: f64,
    pub months: f64,

    /// Target / months, ignoring any investment growth
    pub monthly_saving: f64,

    pub vehicle: &'static str,
    pub reason: &'static str,
    pub emphasis: Emphasis,

    /// Index into `TIME_BANDS` of the band that matched
    pub active_band_index: usize,
    pub band_min_years: f64,
    pub band_max_years: Option<f64>,
}

impl GoalRecommendation {
    /// The matched band, for highlighting
    pub fn band(&self) -> &'static TimeBand {
        band_for_years(self.years)
    }
}

/// Recommend a monthly saving amount and a vehicle for a goal.
///
/// Missing or non-numeric inputs resolve to 100,000 over 3 years; a blank
/// name becomes "Your Goal". Negative and zero horizons are rejected.
pub fn recommend_for_goal(
    target_amount: Option<f64>,
    years: Option<f64>,
    name: Option<&str>,
) -> Result<GoalRecommendation, PlanningError> {
    let target_amount = resolve(target_amount, DEFAULT_GOAL_AMOUNT);
    let years = resolve(years, DEFAULT_GOAL_YEARS);
    let name = resolve_name(name);

    check_horizon(years)?;
    if years == 0.0 {
        return Err(PlanningError::ZeroHorizon);
    }

    let months = years * 12.0;
    let monthly_saving = target_amount / months;
    let band = band_for_years(years);

    log::debug!(
        "goal '{}': {} over {} years -> {}/month in {}",
        name,
        target_amount,
        years,
        monthly_saving,
        band.vehicle
    );

    Ok(GoalRecommendation {
        name,
        target_amount,
        years,
        months,
        monthly_saving,
        vehicle: band.vehicle,
        reason: band.reason,
        emphasis: band.emphasis,
        active_band_index: band.index,
        band_min_years: band.min_years,
        band_max_years: band.max_years,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goal::TIME_BANDS;
    use approx::assert_relative_eq;

    fn vehicle(years: f64) -> &'static str {
        recommend_for_goal(Some(100_000.0), Some(years), None)
            .unwrap()
            .vehicle
    }

    #[test]
    fn test_vehicle_by_horizon() {
        assert_eq!(vehicle(1.0), "High-Yield Savings Account");
        assert_eq!(vehicle(2.0), "Cash Savings Account");
        assert_eq!(vehicle(4.0), "Bond Funds");
        assert_eq!(vehicle(10.0), "Balanced Portfolio (Stocks + Bonds)");
    }

    #[test]
    fn test_boundaries_take_upper_band() {
        assert_eq!(vehicle(3.0), "Bond Funds");
        assert_eq!(vehicle(5.0), "Balanced Portfolio (Stocks + Bonds)");
        assert_eq!(vehicle(2.999), "Cash Savings Account");
    }

    #[test]
    fn test_monthly_saving_is_linear() {
        let rec = recommend_for_goal(Some(120_000.0), Some(2.0), Some("Deposit")).unwrap();
        assert_eq!(rec.monthly_saving, 5_000.0);
        assert_eq!(rec.months, 24.0);
        assert_eq!(rec.name, "Deposit");
    }

    #[test]
    fn test_defaults() {
        let rec = recommend_for_goal(None, None, Some("")).unwrap();
        assert_eq!(rec.name, "Your Goal");
        assert_eq!(rec.target_amount, 100_000.0);
        assert_eq!(rec.years, 3.0);
        assert_relative_eq!(rec.monthly_saving, 100_000.0 / 36.0);
        assert_eq!(rec.vehicle, "Bond Funds");
    }

    #[test]
    fn test_band_bounds_exposed_for_highlighting() {
        let rec = recommend_for_goal(Some(50_000.0), Some(2.5), None).unwrap();
        assert_eq!(rec.active_band_index, 1);
        assert_eq!(rec.band_min_years, 2.0);
        assert_eq!(rec.band_max_years, Some(3.0));
        let highlighted: Vec<usize> = TIME_BANDS
            .iter()
            .filter(|b| b.contains(rec.years))
            .map(|b| b.index)
            .collect();
        assert_eq!(highlighted, vec![rec.active_band_index]);
        assert_eq!(rec.band().vehicle, rec.vehicle);
    }

    #[test]
    fn test_degenerate_horizons_rejected() {
        assert!(matches!(
            recommend_for_goal(Some(1000.0), Some(0.0), None),
            Err(PlanningError::ZeroHorizon)
        ));
        assert!(matches!(
            recommend_for_goal(Some(1000.0), Some(-2.0), None),
            Err(PlanningError::NegativeHorizon { .. })
        ));
    }

    #[test]
    fn test_idempotent() {
        let a = recommend_for_goal(Some(77_777.0), Some(4.25), Some("Trip")).unwrap();
        let b = recommend_for_goal(Some(77_777.0), Some(4.25), Some("Trip")).unwrap();
        assert_eq!(a, b);
    }
}
