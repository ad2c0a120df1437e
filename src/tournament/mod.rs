//! Tournament orchestration: controller, scoring, display configuration.

pub mod controller;
pub mod display;
pub mod scoring;

pub use controller::{Phase, Tournament};
pub use display::{DisplayConfig, DEFAULT_TABLES_PER_ROW};
pub use scoring::{points_for, score, BASE_POINTS, WINNER_POINTS};
