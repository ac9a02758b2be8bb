//! Planner configuration: display currency and chart resolution
//!
//! Calculation constants (scenario rates, time bands, input defaults) are
//! fixed and not configurable here.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs::File;
use std::path::Path;

use crate::error::PlanningError;
use crate::format::CurrencyFormat;

/// Environment variable overriding the currency label
pub const CURRENCY_ENV: &str = "PLANNER_CURRENCY";

/// Environment variable overriding the schedule step in years
pub const SCHEDULE_STEP_ENV: &str = "PLANNER_SCHEDULE_STEP";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// How monetary amounts are rendered
    pub currency: CurrencyFormat,

    /// Years between points on growth schedules
    pub schedule_step_years: u32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            currency: CurrencyFormat::default(),
            schedule_step_years: 1,
        }
    }
}

impl PlannerConfig {
    /// Load from a JSON file; missing keys keep their defaults
    pub fn from_json_path(path: &Path) -> Result<Self, PlanningError> {
        let file = File::open(path)?;
        let config: Self = serde_json::from_reader(file)?;
        config.validate()?;
        log::info!("loaded planner config from {}", path.display());
        Ok(config)
    }

    /// Config for a binary: the JSON file when given, else defaults, then env overrides
    pub fn load(path: Option<&Path>) -> Result<Self, PlanningError> {
        let config = match path {
            Some(p) => Self::from_json_path(p)?,
            None => Self::default(),
        };
        config.with_env_overrides()
    }

    /// Apply `PLANNER_CURRENCY` and `PLANNER_SCHEDULE_STEP` when set
    pub fn with_env_overrides(self) -> Result<Self, PlanningError> {
        self.with_overrides(
            env::var(CURRENCY_ENV).ok(),
            env::var(SCHEDULE_STEP_ENV).ok(),
        )
    }

    fn with_overrides(
        mut self,
        currency: Option<String>,
        step: Option<String>,
    ) -> Result<Self, PlanningError> {
        if let Some(label) = currency {
            self.currency.label = label;
        }
        if let Some(raw) = step {
            self.schedule_step_years = raw.trim().parse().map_err(|_| {
                PlanningError::Config(format!("{} must be a whole number, got '{}'", SCHEDULE_STEP_ENV, raw))
            })?;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), PlanningError> {
        if self.schedule_step_years == 0 {
            return Err(PlanningError::Config(
                "schedule_step_years must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
