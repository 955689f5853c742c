//! Precedence-Preserving Crossover (PPX).
//!
//! A child takes its event set from one parent and the relative order of
//! those events from the other. Children may still break precedence, so they
//! must be repaired afterwards.

use std::collections::{HashMap, HashSet};

use crate::events::{Event, EventId};
use crate::route::Route;

/// Recombines consecutive pairs of `parents`. An odd last parent is cloned.
pub fn crossover_population<'a>(parents: &[Route<'a>]) -> Vec<Route<'a>> {
    let mut offspring = Vec::with_capacity(parents.len());
    let mut pairs = parents.chunks_exact(2);
    for pair in &mut pairs {
        let (child1, child2) = crossover(&pair[0], &pair[1]);
        offspring.push(child1);
        offspring.push(child2);
    }
    if let [last] = pairs.remainder() {
        offspring.push(last.clone());
    }
    offspring
}

/// Produces `(ppx(p1, p2), ppx(p2, p1))`.
pub fn crossover<'a>(p1: &[&'a Event], p2: &[&'a Event]) -> (Route<'a>, Route<'a>) {
    (ppx(p1, p2), ppx(p2, p1))
}

/// Orders the distinct events of `source` by their first position in `order`.
///
/// Events that `order` lacks go after the rest, keeping their `source` order.
pub fn ppx<'a>(source: &[&'a Event], order: &[&'a Event]) -> Route<'a> {
    let mut rank: HashMap<EventId, usize> = HashMap::with_capacity(order.len());
    for (position, event) in order.iter().enumerate() {
        rank.entry(event.id).or_insert(position);
    }

    let mut seen: HashSet<EventId> = HashSet::with_capacity(source.len());
    let mut child: Route<'a> = source.iter().copied().filter(|e| seen.insert(e.id)).collect();
    // stable: unranked events keep their source order
    child.sort_by_key(|e| rank.get(&e.id).copied().unwrap_or(usize::MAX));
    child
}
