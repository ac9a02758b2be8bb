//! Fixed return-rate scenarios

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named fixed annual return assumption
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrowthScenario {
    Conservative,
    Moderate,
    Optimistic,
}

impl GrowthScenario {
    /// Every scenario, in reporting order
    pub const ALL: [GrowthScenario; 3] = [
        GrowthScenario::Conservative,
        GrowthScenario::Moderate,
        GrowthScenario::Optimistic,
    ];

    /// Annual rate, compounded monthly
    pub fn annual_rate(self) -> f64 {
        match self {
            GrowthScenario::Conservative => 0.03,
            GrowthScenario::Moderate => 0.06,
            GrowthScenario::Optimistic => 0.10,
        }
    }

    /// Annual rate / 12
    pub fn monthly_rate(self) -> f64 {
        self.annual_rate() / 12.0
    }

    pub fn name(self) -> &'static str {
        match self {
            GrowthScenario::Conservative => "conservative",
            GrowthScenario::Moderate => "moderate",
            GrowthScenario::Optimistic => "optimistic",
        }
    }
}

impl fmt::Display for GrowthScenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.0}%)", self.name(), self.annual_rate() * 100.0)
    }
}
