//! Test fixtures for haul-planner.
//!
//! Provides mission sets over the built-in Stanton map:
//! - the two-mission hauling scenario
//! - a larger six-mission contract board

pub mod stanton_missions;

pub use stanton_missions::*;
