//! Contribution growth projections across fixed return scenarios

mod scenario;
mod projector;
pub mod dca;

pub use scenario::GrowthScenario;
pub use projector::{
    accumulate, future_value_of_annuity, growth_schedule, project_growth, project_scenario,
    Accumulation, GrowthResult, SchedulePoint, MAX_SCHEDULE_YEARS,
};
pub use dca::{dollar_cost_average, DcaSummary, Purchase};
