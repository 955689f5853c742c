//! Route repair.

use std::collections::{HashMap, HashSet};

use crate::events::{Event, EventId};
use crate::route::Route;

/// Rebuilds `route` so that no dropoff precedes its pickup.
///
/// Every event is kept at its first occurrence only. A dropoff whose pickup
/// has not been emitted yet is held back and appended after the pass, grouped
/// by pickup in pickup order. Dropoffs whose pickup never shows up are dropped.
pub fn repair<'a>(route: &[&'a Event]) -> Route<'a> {
    let mut repaired = Vec::with_capacity(route.len());
    let mut seen: HashSet<EventId> = HashSet::new();
    let mut emitted: HashSet<EventId> = HashSet::new();
    let mut pickup_order: Vec<EventId> = Vec::new();
    let mut pending: HashMap<EventId, Vec<&'a Event>> = HashMap::new();

    for &event in route {
        if !seen.insert(event.id) {
            continue;
        }
        match event.required_pickup() {
            None => {
                emitted.insert(event.id);
                pickup_order.push(event.id);
                repaired.push(event);
            }
            Some(pickup) if emitted.contains(&pickup) => repaired.push(event),
            Some(pickup) => pending.entry(pickup).or_default().push(event),
        }
    }

    for pickup in &pickup_order {
        if let Some(held) = pending.remove(pickup) {
            repaired.extend(held);
        }
    }

    if !pending.is_empty() {
        let dropped: usize = pending.values().map(Vec::len).sum();
        tracing::trace!(dropped, "repair dropped dropoffs without a pickup");
    }
    repaired
}
