//! Route geometry for plotting.
//!
//! A planned route drawn on the map is the start position followed by the
//! position of every event, joined by straight legs.

use serde::{Deserialize, Serialize};

use crate::error::PlannerError;
use crate::events::Event;
use crate::map::LocationTable;

/// Ordered planar points of a route, start first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<(f64, f64)>,
}

impl Polyline {
    /// Wraps already resolved points.
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// Resolves `start` and each event location against `locations`.
    pub fn for_route(route: &[&Event], start: &str, locations: &LocationTable) -> Result<Self, PlannerError> {
        let position = |name: &str| {
            locations
                .get(name)
                .map(|l| l.position())
                .ok_or_else(|| PlannerError::UnknownLocation(name.to_string()))
        };

        let mut points = Vec::with_capacity(route.len() + 1);
        points.push(position(start)?);
        for event in route {
            points.push(position(&event.location)?);
        }
        Ok(Self { points })
    }

    /// Points in travel order.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Consecutive (from, to) pairs. Legs between identical points are kept.
    pub fn legs(&self) -> impl Iterator<Item = ((f64, f64), (f64, f64))> + '_ {
        self.points.windows(2).map(|pair| (pair[0], pair[1]))
    }

    pub fn into_points(self) -> Vec<(f64, f64)> {
        self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{CargoEntry, MissionBook, MissionKind};
    use crate::map::{Location, LocationCategory};

    fn map() -> LocationTable {
        LocationTable::new(vec![
            Location::new("A", 0.0, 0.0, LocationCategory::Station),
            Location::new("B", 1.0, 2.0, LocationCategory::Moon),
        ])
        .unwrap()
    }

    #[test]
    fn test_route_points() {
        let mut book = MissionBook::new();
        book.add_mission(MissionKind::Direct, 1.0, vec![CargoEntry::new("Ice", 1.0, "B", "A")])
            .unwrap();
        let e = book.events();

        let polyline = Polyline::for_route(&[&e[0], &e[1]], "A", &map()).unwrap();
        assert_eq!(polyline.points(), &[(0.0, 0.0), (1.0, 2.0), (0.0, 0.0)]);
        assert_eq!(polyline.legs().count(), 2);
    }

    #[test]
    fn test_unknown_start() {
        let result = Polyline::for_route(&[], "Z", &map());
        assert_eq!(result, Err(PlannerError::UnknownLocation("Z".into())));
    }

    #[test]
    fn test_into_points() {
        let points = vec![(0.0, 0.0), (-12.5, 30.0), (4.0, 4.0)];
        let owned = Polyline::new(points.clone()).into_points();
        assert_eq!(owned, points);
    }
}
