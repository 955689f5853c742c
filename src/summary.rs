//! Human-readable views of a planned route.
//!
//! Everything here is derived from the route alone and can be recomputed by
//! any renderer.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::events::{Event, EventKind, MissionId};

/// One line per event, in route order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStep {
    /// 1-based.
    pub stop: usize,
    pub location: String,
    pub action: String,
}

/// One numbered, human-readable step per event.
pub fn route_summary(route: &[&Event]) -> Vec<SummaryStep> {
    route
        .iter()
        .enumerate()
        .map(|(i, event)| SummaryStep {
            stop: i + 1,
            location: event.location.clone(),
            action: describe(event),
        })
        .collect()
}

/// e.g. `Pick Up 3 SCU of Waste (Destination: Port Tressler) (Mission ID: 1)`
pub fn describe(event: &Event) -> String {
    let (verb, direction) = match event.kind {
        EventKind::Pickup { .. } => ("Pick Up", "Destination"),
        EventKind::Dropoff { .. } => ("Drop Off", "Origin"),
    };
    format!(
        "{} {} SCU of {} ({}: {}) (Mission ID: {})",
        verb, event.cargo.quantity, event.cargo.cargo_type, direction, event.cargo.counterpart, event.mission
    )
}

/// Cargo handled at a stop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CargoMove {
    pub mission: MissionId,
    pub cargo_type: String,
    pub quantity: f64,
    /// Destination of a pickup, origin of a dropoff.
    pub counterpart: String,
}

impl From<&Event> for CargoMove {
    fn from(event: &Event) -> Self {
        Self {
            mission: event.mission,
            cargo_type: event.cargo.cargo_type.clone(),
            quantity: event.cargo.quantity,
            counterpart: event.cargo.counterpart.clone(),
        }
    }
}

/// Consecutive events at one location merged into a single stop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopSummary {
    pub location: String,
    /// How many separate times this location has been visited, this one included.
    pub visit: usize,
    pub pickups: Vec<CargoMove>,
    pub dropoffs: Vec<CargoMove>,
}

impl StopSummary {
    /// Picked-up quantity per cargo type.
    pub fn pickup_totals(&self) -> BTreeMap<&str, f64> {
        totals(&self.pickups)
    }

    /// Dropped-off quantity per cargo type.
    pub fn dropoff_totals(&self) -> BTreeMap<&str, f64> {
        totals(&self.dropoffs)
    }
}

fn totals(moves: &[CargoMove]) -> BTreeMap<&str, f64> {
    let mut totals = BTreeMap::new();
    for cargo in moves {
        *totals.entry(cargo.cargo_type.as_str()).or_insert(0.0) += cargo.quantity;
    }
    totals
}

/// Groups the route into stops.
pub fn condense(route: &[&Event]) -> Vec<StopSummary> {
    let mut stops: Vec<StopSummary> = Vec::new();
    let mut visits: BTreeMap<&str, usize> = BTreeMap::new();

    for &event in route {
        let same_stop = stops.last().is_some_and(|stop| stop.location == event.location);
        if !same_stop {
            let visit = visits.entry(event.location.as_str()).or_insert(0);
            *visit += 1;
            stops.push(StopSummary {
                location: event.location.clone(),
                visit: *visit,
                pickups: Vec::new(),
                dropoffs: Vec::new(),
            });
        }

        if let Some(stop) = stops.last_mut() {
            match event.kind {
                EventKind::Pickup { .. } => stop.pickups.push(event.into()),
                EventKind::Dropoff { .. } => stop.dropoffs.push(event.into()),
            }
        }
    }
    stops
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{CargoEntry, MissionBook, MissionKind};

    fn book() -> MissionBook {
        let mut book = MissionBook::new();
        book.add_mission(
            MissionKind::MultiplePickUp,
            10_000.0,
            vec![
                CargoEntry::new("Waste", 3.0, "MIC-L5", "Port Tressler"),
                CargoEntry::new("Scrap", 3.0, "MIC-L5", "Port Tressler"),
            ],
        )
        .unwrap();
        book.add_mission(
            MissionKind::Direct,
            5_000.0,
            vec![CargoEntry::new("Ice", 15.0, "Port Tressler", "Seraphim Station")],
        )
        .unwrap();
        book
    }

    #[test]
    fn test_action_text() {
        let book = book();
        let e = book.events();
        assert_eq!(
            describe(&e[0]),
            "Pick Up 3 SCU of Waste (Destination: Port Tressler) (Mission ID: 1)"
        );
        assert_eq!(
            describe(&e[5]),
            "Drop Off 15 SCU of Ice (Origin: Port Tressler) (Mission ID: 2)"
        );
    }

    #[test]
    fn test_steps_are_numbered() {
        let book = book();
        let e = book.events();
        let steps = route_summary(&[&e[4], &e[0], &e[1]]);
        assert_eq!(steps.iter().map(|s| s.stop).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(steps[0].location, "Port Tressler");
        assert_eq!(steps[1].location, "MIC-L5");
    }

    #[test]
    fn test_condense_merges_and_counts_visits() {
        let book = book();
        let e = book.events();
        // Port Tressler, MIC-L5 x2, Port Tressler x2, Seraphim Station
        let route = [&e[4], &e[0], &e[2], &e[1], &e[3], &e[5]];
        let stops = condense(&route);

        let shape: Vec<(&str, usize, usize, usize)> = stops
            .iter()
            .map(|s| (s.location.as_str(), s.visit, s.pickups.len(), s.dropoffs.len()))
            .collect();
        assert_eq!(
            shape,
            vec![
                ("Port Tressler", 1, 1, 0),
                ("MIC-L5", 1, 2, 0),
                ("Port Tressler", 2, 0, 2),
                ("Seraphim Station", 1, 0, 1),
            ]
        );
        assert_eq!(stops[1].pickup_totals().get("Waste"), Some(&3.0));
        assert_eq!(stops[2].dropoff_totals().len(), 2);
    }
}
