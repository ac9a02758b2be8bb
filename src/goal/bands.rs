//! Time-horizon bands mapping a goal's horizon to a savings vehicle

use serde::Serialize;

/// Visual tone the presentation layer uses for a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Emphasis {
    Info,
    Success,
    Warning,
}

/// Half-open interval of years `[min_years, max_years)` with its recommendation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeBand {
    /// Position in `TIME_BANDS`
    pub index: usize,
    pub min_years: f64,
    /// `None` for the open-ended top band
    pub max_years: Option<f64>,
    pub vehicle: &'static str,
    pub reason: &'static str,
    pub emphasis: Emphasis,
}

impl TimeBand {
    /// Lower-inclusive, upper-exclusive membership test
    pub fn contains(&self, years: f64) -> bool {
        years >= self.min_years && self.max_years.map_or(true, |max| years < max)
    }
}

/// Bands in priority order; together they cover `[0, inf)` without overlap
pub static TIME_BANDS: [TimeBand; 4] = [
    TimeBand {
        index: 0,
        min_years: 0.0,
        max_years: Some(2.0),
        vehicle: "High-Yield Savings Account",
        reason: "For goals under 2 years, keep money in cash to avoid market volatility. Your capital is guaranteed.",
        emphasis: Emphasis::Info,
    },
    TimeBand {
        index: 1,
        min_years: 2.0,
        max_years: Some(3.0),
        vehicle: "Cash Savings Account",
        reason: "For 2-3 year goals, cash remains safest. Market fluctuations could hurt your goal if you need the money soon.",
        emphasis: Emphasis::Info,
    },
    TimeBand {
        index: 2,
        min_years: 3.0,
        max_years: Some(5.0),
        vehicle: "Bond Funds",
        reason: "For 3-5 year goals, bonds provide better returns than cash while remaining relatively safe. They have time to recover from short-term dips.",
        emphasis: Emphasis::Success,
    },
    TimeBand {
        index: 3,
        min_years: 5.0,
        max_years: None,
        vehicle: "Balanced Portfolio (Stocks + Bonds)",
        reason: "For 5+ year goals, use a mix of stocks and bonds. You have enough time to ride out market volatility and benefit from higher stock returns.",
        emphasis: Emphasis::Warning,
    },
];

/// Band for a horizon, first match wins.
///
/// Horizons outside every band (negative or NaN, which the advisor rejects
/// earlier) fall back to the first band, so the lookup is total.
pub fn band_for_years(years: f64) -> &'static TimeBand {
    TIME_BANDS
        .iter()
        .find(|b| b.contains(years))
        .unwrap_or(&TIME_BANDS[0])
}
