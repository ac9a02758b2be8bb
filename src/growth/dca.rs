//! Dollar-cost averaging illustration
//!
//! A fixed amount buys fractional shares each period, so more shares are
//! bought when the price is low. The average cost per share ends up at the
//! harmonic mean of the prices, never above their arithmetic mean.

use serde::{Deserialize, Serialize};

use crate::error::PlanningError;

/// Amount invested each period in the sample illustration
pub const SAMPLE_PERIOD_AMOUNT: f64 = 1_000.0;

/// Sample share prices, January through June
pub const SAMPLE_PRICES: [(&str, f64); 6] = [
    ("Jan", 100.0),
    ("Feb", 90.0),
    ("Mar", 110.0),
    ("Apr", 85.0),
    ("May", 95.0),
    ("Jun", 105.0),
];

/// One periodic purchase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Purchase {
    pub label: String,
    pub price: f64,
    pub amount: f64,
    pub shares: f64,
}

/// Outcome of investing a level amount across a price series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DcaSummary {
    pub purchases: Vec<Purchase>,
    pub total_invested: f64,
    pub total_shares: f64,
    /// Total invested / total shares; zero when nothing was bought
    pub average_cost: f64,
    /// Plain average of the prices, for comparison
    pub average_price: f64,
}

/// Invest `amount` at each labelled price
pub fn dollar_cost_average(
    amount: f64,
    prices: &[(&str, f64)],
) -> Result<DcaSummary, PlanningError> {
    for (index, &(_, price)) in prices.iter().enumerate() {
        if !(price > 0.0) {
            return Err(PlanningError::InvalidPrice { index, price });
        }
    }
    Ok(summarize(amount, prices))
}

/// The six-month illustration shown next to the growth calculator
pub fn sample_illustration() -> DcaSummary {
    summarize(SAMPLE_PERIOD_AMOUNT, &SAMPLE_PRICES)
}

/// Prices must already be known positive
fn summarize(amount: f64, prices: &[(&str, f64)]) -> DcaSummary {
    let purchases: Vec<Purchase> = prices
        .iter()
        .map(|&(label, price)| Purchase {
            label: label.to_string(),
            price,
            amount,
            shares: amount / price,
        })
        .collect();

    let total_invested: f64 = purchases.iter().map(|p| p.amount).sum();
    let total_shares: f64 = purchases.iter().map(|p| p.shares).sum();
    let average_cost = if total_shares != 0.0 {
        total_invested / total_shares
    } else {
        0.0
    };
    let average_price = if purchases.is_empty() {
        0.0
    } else {
        purchases.iter().map(|p| p.price).sum::<f64>() / purchases.len() as f64
    };

    log::debug!(
        "dollar-cost average over {} periods: shares={} avg_cost={}",
        purchases.len(),
        total_shares,
        average_cost
    );

    DcaSummary {
        purchases,
        total_invested,
        total_shares,
        average_cost,
        average_price,
    }
}
