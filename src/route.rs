//! Routes: ordered sequences of borrowed events.

use std::collections::HashSet;

use crate::error::PlannerError;
use crate::euclidean::DistanceMap;
use crate::events::{Event, EventId};

/// A candidate route (chromosome). Events are borrowed from the session pool.
pub type Route<'a> = Vec<&'a Event>;

/// True when every dropoff in `route` comes strictly after its pickup.
pub fn is_precedence_valid(route: &[&Event]) -> bool {
    let mut picked: HashSet<EventId> = HashSet::with_capacity(route.len());
    for event in route {
        match event.required_pickup() {
            Some(pickup) if !picked.contains(&pickup) => return false,
            Some(_) => {}
            None => {
                picked.insert(event.id);
            }
        }
    }
    true
}

/// True when the event at `position` is not a dropoff whose pickup is missing
/// from the part of the route before it.
pub(crate) fn satisfied_at(route: &[&Event], position: usize) -> bool {
    match route[position].required_pickup() {
        Some(pickup) => route[..position].iter().any(|e| e.id == pickup),
        None => true,
    }
}

/// Plain travel distance from `start` through every event location, in order.
pub fn total_distance(route: &[&Event], start: &str, distances: &DistanceMap) -> Result<f64, PlannerError> {
    let mut total = 0.0;
    let mut current = start;
    for event in route {
        total += distances.distance(current, &event.location)?;
        current = &event.location;
    }
    Ok(total)
}
