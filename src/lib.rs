//! fitgen - Customized workout plan generator
//!
//! Rule-based workout synthesis with an optional LLM provider in front.

pub mod db;
pub mod exercises;
pub mod llm;
pub mod params;
pub mod prompt;
pub mod service;
pub mod tips;
pub mod tui;
pub mod workout;

pub use db::Database;
pub use service::{GenerateError, WorkoutResponse, WorkoutService};
pub use workout::synthesize;
