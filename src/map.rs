//! Static map data: named locations on a shared 2D plane.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::PlannerError;

/// Kind of location. Display-only; the optimizer never looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocationCategory {
    Planet,
    Moon,
    Station,
    LagrangePoint,
    JumpPoint,
    Star,
}

/// A named point on the map plane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub category: LocationCategory,
}

impl Location {
    pub fn new(name: impl Into<String>, x: f64, y: f64, category: LocationCategory) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            category,
        }
    }

    /// Builds a location from polar coordinates around the system star.
    pub fn polar(name: impl Into<String>, angle_deg: f64, distance: f64, category: LocationCategory) -> Self {
        let (x, y) = polar_to_cartesian(angle_deg, distance);
        Self::new(name, x, y, category)
    }

    /// Planar `(x, y)` position.
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

/// Converts an (angle in degrees, distance) pair into planar coordinates.
pub fn polar_to_cartesian(angle_deg: f64, distance: f64) -> (f64, f64) {
    let angle = angle_deg.to_radians();
    (distance * angle.cos(), distance * angle.sin())
}

/// Immutable, ordered location table with a by-name index.
#[derive(Debug, Clone)]
pub struct LocationTable {
    locations: Vec<Location>,
    index: HashMap<String, usize>,
}

impl LocationTable {
    /// Builds the table, rejecting duplicate names.
    pub fn new(locations: Vec<Location>) -> Result<Self, PlannerError> {
        let mut index = HashMap::with_capacity(locations.len());
        for (i, location) in locations.iter().enumerate() {
            if index.insert(location.name.clone(), i).is_some() {
                return Err(PlannerError::DuplicateLocation(location.name.clone()));
            }
        }
        Ok(Self { locations, index })
    }

    /// Looks up a location by exact name.
    pub fn get(&self, name: &str) -> Option<&Location> {
        self.index.get(name).map(|&i| &self.locations[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Locations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter()
    }

    pub fn as_slice(&self) -> &[Location] {
        &self.locations
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

// ============================================================================
// Stanton system
// ============================================================================

/// Polar placement of a single body: (name, angle in degrees, distance).
type Body = (&'static str, f64, f64);

struct PlanetarySystem {
    planet: Body,
    station: Body,
    lagrange: [Body; 5],
    moons: &'static [Body],
}

const STANTON_SYSTEMS: &[PlanetarySystem] = &[
    PlanetarySystem {
        planet: ("Hurston", 0.0, 12.85),
        station: ("Everus Harbour", 0.0, 12.850459),
        lagrange: [
            ("HUR-L1", 0.0, 11.56),
            ("HUR-L2", 0.0, 14.13),
            ("HUR-L3", -179.99, 12.85),
            ("HUR-L4", 60.0, 12.85),
            ("HUR-L5", -60.0, 12.85),
        ],
        moons: &[
            ("Arial", -0.13, 12.89),
            ("Aberdeen", 0.18, 12.9),
            ("Magda", -0.33, 12.79),
            ("Ita", 0.51, 12.83),
        ],
    },
    PlanetarySystem {
        planet: ("Crusader", -171.99, 19.14),
        station: ("Seraphim Station", -171.98, 19.15),
        lagrange: [
            ("CRU-L1", -171.99, 17.23),
            ("CRU-L2", -171.99, 21.06),
            ("CRU-L3", 8.0, 19.14),
            ("CRU-L4", -112.0, 19.14),
            ("CRU-L5", 127.99, 19.14),
        ],
        moons: &[
            ("Cellin", -171.88, 19.17),
            ("Daymar", -172.14, 19.1),
            ("Yela", -172.17, 19.2),
        ],
    },
    PlanetarySystem {
        planet: ("ArcCorp", -50.0, 28.91),
        station: ("Baijini Point", -50.0, 28.910459),
        lagrange: [
            ("ARC-L1", -49.99, 26.09),
            ("ARC-L2", -49.99, 31.8),
            ("ARC-L3", 149.99, 28.91),
            ("ARC-L4", -9.99, 28.91),
            ("ARC-L5", -109.99, 28.91),
        ],
        moons: &[("Lyria", -49.78, 28.96), ("Wala", -50.12, 28.66)],
    },
    PlanetarySystem {
        planet: ("microTech", 58.86, 43.44),
        station: ("Port Tressler", 58.86, 43.440459),
        lagrange: [
            ("MIC-L1", 58.86, 39.9),
            ("MIC-L2", 58.86, 47.78),
            ("MIC-L3", -121.12, 43.44),
            ("MIC-L4", 118.86, 43.44),
            ("MIC-L5", -1.12, 43.44),
        ],
        moons: &[
            ("Calliope", 58.92, 43.39),
            ("Clio", 58.78, 43.36),
            ("Euterpe", 58.76, 43.37),
        ],
    },
];

const STANTON_JUMP_POINTS: &[Body] = &[
    ("Stanton-Pyro", -83.25, 28.3),
    ("Stanton-Terra", -5.88, 51.57),
    ("Stanton-Magnus", 159.35, 69.55),
];

/// The Stanton system: planets, orbital stations, Lagrange points, moons and
/// jump points. The central star is not a routable location.
pub fn stanton() -> LocationTable {
    let mut locations = Vec::new();
    let body = |(name, angle, distance): Body, category| Location::polar(name, angle, distance, category);

    for system in STANTON_SYSTEMS {
        locations.push(body(system.planet, LocationCategory::Planet));
        locations.push(body(system.station, LocationCategory::Station));
        for &lagrange in &system.lagrange {
            locations.push(body(lagrange, LocationCategory::LagrangePoint));
        }
        for &moon in system.moons {
            locations.push(body(moon, LocationCategory::Moon));
        }
    }
    for &jump in STANTON_JUMP_POINTS {
        locations.push(body(jump, LocationCategory::JumpPoint));
    }

    let index = locations
        .iter()
        .enumerate()
        .map(|(i, location)| (location.name.clone(), i))
        .collect();
    LocationTable { locations, index }
}
