//! Retirement fund sizing under the four-percent rule

mod lifestyle;

pub use lifestyle::Lifestyle;

use serde::{Deserialize, Serialize};

use crate::inputs::{resolve, DEFAULT_MONTHLY_EXPENSES};

/// Fund size as a multiple of annual expenses
pub const FUND_MULTIPLE: f64 = 25.0;

/// Annual withdrawal rate considered sustainable
pub const SAFE_WITHDRAWAL_RATE: f64 = 0.04;

/// Retirement target derived from a monthly expense figure
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetirementProjection {
    /// Expense figure the projection was sized from (after default resolution)
    pub monthly_expenses: f64,

    /// Monthly expenses x 12
    pub annual_expenses: f64,

    /// Annual expenses x 25
    pub target_fund: f64,

    /// Target fund x 4% / 12
    pub monthly_withdrawal: f64,
}

/// Size a retirement fund from monthly expenses.
///
/// A missing or non-numeric figure is replaced by 20,000. Negative figures are
/// not validated and produce negative outputs.
pub fn size_retirement(monthly_expenses: Option<f64>) -> RetirementProjection {
    let monthly_expenses = resolve(monthly_expenses, DEFAULT_MONTHLY_EXPENSES);

    let annual_expenses = monthly_expenses * 12.0;
    let target_fund = annual_expenses * FUND_MULTIPLE;
    let monthly_withdrawal = target_fund * SAFE_WITHDRAWAL_RATE / 12.0;

    log::debug!(
        "sized retirement: monthly={} annual={} fund={} withdrawal={}",
        monthly_expenses,
        annual_expenses,
        target_fund,
        monthly_withdrawal
    );

    RetirementProjection {
        monthly_expenses,
        annual_expenses,
        target_fund,
        monthly_withdrawal,
    }
}

/// Size a retirement fund from one of the preset lifestyles
pub fn size_for_lifestyle(lifestyle: Lifestyle) -> RetirementProjection {
    size_retirement(Some(lifestyle.monthly_expenses()))
}
