pub mod comparison;
pub mod dashboard;
pub mod simulation;

pub use comparison::{ComparisonState, ComparisonView};
pub use dashboard::DashboardView;
pub use simulation::{Action, Quarter, SimulationState, SimulationView};

/// Round to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Convert a probability (0.0–1.0) to a percentage rounded to one decimal.
pub fn percent(prob: f64) -> f64 {
    round1(prob * 100.0)
}
