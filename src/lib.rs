//! Financial Planning - projection engine behind a personal-finance calculator page
//!
//! This library provides:
//! - Retirement fund sizing under the four-percent rule
//! - Monthly contribution growth under fixed return scenarios
//! - Goal-based savings pacing with time-horizon vehicle recommendations
//! - Age-based allocation guidance and a dollar-cost averaging illustration
//! - Batch evaluation of plan requests from CSV

pub mod error;
pub mod inputs;
pub mod retirement;
pub mod growth;
pub mod goal;
pub mod allocation;
pub mod format;
pub mod config;
pub mod plan;
pub mod runner;

// Re-export commonly used types
pub use error::PlanningError;
pub use retirement::{size_retirement, Lifestyle, RetirementProjection};
pub use growth::{project_growth, GrowthResult, GrowthScenario};
pub use goal::{recommend_for_goal, GoalRecommendation, TimeBand, TIME_BANDS};
pub use config::PlannerConfig;
pub use format::CurrencyFormat;
pub use plan::{PlanReport, PlanRequest};
pub use runner::PlanRunner;
