//! Goal-based savings recommendations

mod bands;
mod advisor;

pub use bands::{band_for_years, Emphasis, TimeBand, TIME_BANDS};
pub use advisor::{recommend_for_goal, GoalRecommendation};
