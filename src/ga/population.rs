//! Random initial population.

use std::collections::HashMap;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::events::{Event, EventId};
use crate::route::Route;

/// Creates `size` random routes, each valid by construction.
pub fn initialize<'a, R: Rng>(size: usize, events: &'a [Event], rng: &mut R) -> Vec<Route<'a>> {
    let by_id: HashMap<EventId, &'a Event> = events.iter().map(|e| (e.id, e)).collect();
    (0..size).map(|_| build_route(events, &by_id, rng)).collect()
}

/// Shuffled pickups, each followed right away by its dropoff.
fn build_route<'a, R: Rng>(events: &'a [Event], by_id: &HashMap<EventId, &'a Event>, rng: &mut R) -> Route<'a> {
    let mut pickups: Vec<&'a Event> = events.iter().filter(|e| e.is_pickup()).collect();
    pickups.shuffle(rng);

    let mut route = Vec::with_capacity(events.len());
    for pickup in pickups {
        route.push(pickup);
        if let Some(dropoff) = pickup.paired_dropoff().and_then(|id| by_id.get(&id)) {
            route.push(*dropoff);
        }
    }
    route
}
