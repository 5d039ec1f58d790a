//! The five independent health factors, each scoring one slice of a goal
//! on a 0–100 scale. Absent data never errors; every factor degrades to a
//! documented neutral or maximal default.

pub mod check_in_frequency;
pub mod confidence_trend;
pub mod milestone_completion;
pub mod progress_velocity;
pub mod risk_severity;
