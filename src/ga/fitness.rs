//! Route scoring.

use std::collections::HashSet;

use crate::error::PlannerError;
use crate::euclidean::DistanceMap;
use crate::events::{Event, EventId};

/// Distance added for every dropoff visited before its pickup.
pub const INVALID_DROPOFF_PENALTY: f64 = 10_000.0;

/// Score of one route; higher is better.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fitness {
    /// `1 / (stops * distance)`; higher is better.
    pub score: f64,
    /// Travel distance plus precedence penalties.
    pub total_distance: f64,
    /// Distinct locations visited.
    pub total_stops: usize,
}

/// Scores `route` walked from `start`.
///
/// A zero denominator (empty route, or every event at the start location)
/// scores `f64::MAX` instead of dividing by zero.
pub fn evaluate(route: &[&Event], start: &str, distances: &DistanceMap, penalty: f64) -> Result<Fitness, PlannerError> {
    let mut total_distance = 0.0;
    let mut current = start;
    let mut visited: HashSet<&str> = HashSet::new();
    let mut picked: HashSet<EventId> = HashSet::new();

    for event in route {
        total_distance += distances.distance(current, &event.location)?;
        visited.insert(&event.location);

        match event.required_pickup() {
            Some(pickup) if !picked.contains(&pickup) => total_distance += penalty,
            Some(_) => {}
            None => {
                picked.insert(event.id);
            }
        }
        current = &event.location;
    }

    let total_stops = visited.len();
    let denominator = total_stops as f64 * total_distance;
    let score = if denominator > 0.0 { 1.0 / denominator } else { f64::MAX };

    Ok(Fitness {
        score,
        total_distance,
        total_stops,
    })
}
