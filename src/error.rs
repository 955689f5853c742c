//! Error type shared by the planner.

use std::fmt;

/// Errors returned by the planner.
#[derive(Debug, Clone, PartialEq)]
pub enum PlannerError {
    /// A GA parameter is outside its documented bounds.
    InvalidParameter { name: &'static str, reason: String },
    /// A location name is not present in the location table.
    UnknownLocation(String),
    /// Two locations share the same name.
    DuplicateLocation(String),
    /// There is nothing to plan.
    EmptyMissions,
    /// A mission failed validation at creation time.
    InvalidMission(String),
}

impl fmt::Display for PlannerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlannerError::InvalidParameter { name, reason } => {
                write!(f, "invalid parameter `{}`: {}", name, reason)
            }
            PlannerError::UnknownLocation(name) => write!(f, "unknown location: {}", name),
            PlannerError::DuplicateLocation(name) => write!(f, "duplicate location: {}", name),
            PlannerError::EmptyMissions => write!(f, "no missions to plan"),
            PlannerError::InvalidMission(reason) => write!(f, "invalid mission: {}", reason),
        }
    }
}

impl std::error::Error for PlannerError {}
