//! Missions, cargo entries and the pickup/dropoff events derived from them.
//!
//! Every cargo entry turns into exactly one pickup and one dropoff, created
//! together and linked to each other by ID. Event IDs are the only identity
//! the optimizer uses.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::PlannerError;

/// Session-unique mission number, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MissionId(pub u32);

/// Session-unique event number, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EventId(pub u32);

impl fmt::Display for MissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Mission kind. Informational only: every kind reduces to cargo entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissionKind {
    Direct,
    MultiplePickUp,
    MultipleDropOff,
}

impl MissionKind {
    /// Human-readable name, e.g. "Multiple Pick Up".
    pub fn label(&self) -> &'static str {
        match self {
            MissionKind::Direct => "Direct",
            MissionKind::MultiplePickUp => "Multiple Pick Up",
            MissionKind::MultipleDropOff => "Multiple Drop Off",
        }
    }
}

/// One cargo line of a mission: move `quantity` SCU of `cargo_type` from `from` to `to`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CargoEntry {
    pub cargo_type: String,
    /// Quantity in SCU.
    pub quantity: f64,
    pub from: String,
    pub to: String,
}

impl CargoEntry {
    pub fn new(cargo_type: impl Into<String>, quantity: f64, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            cargo_type: cargo_type.into(),
            quantity,
            from: from.into(),
            to: to.into(),
        }
    }

    fn validate(&self) -> Result<(), PlannerError> {
        if self.cargo_type.trim().is_empty() {
            return Err(PlannerError::InvalidMission("cargo type is empty".into()));
        }
        if !self.quantity.is_finite() || self.quantity <= 0.0 {
            return Err(PlannerError::InvalidMission(format!(
                "quantity of {} must be positive, got {}",
                self.cargo_type, self.quantity
            )));
        }
        if self.from.is_empty() || self.to.is_empty() {
            return Err(PlannerError::InvalidMission(format!(
                "{} is missing an origin or destination",
                self.cargo_type
            )));
        }
        Ok(())
    }
}

/// A contract accepted by the hauler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    pub id: MissionId,
    pub kind: MissionKind,
    pub reward: f64,
    pub cargo: Vec<CargoEntry>,
}

impl Mission {
    /// Validates the mission and assigns it the next mission ID.
    pub fn new(
        ids: &mut IdAllocator,
        kind: MissionKind,
        reward: f64,
        cargo: Vec<CargoEntry>,
    ) -> Result<Self, PlannerError> {
        if !reward.is_finite() || reward < 0.0 {
            return Err(PlannerError::InvalidMission(format!("reward must be non-negative, got {}", reward)));
        }
        if cargo.is_empty() {
            return Err(PlannerError::InvalidMission("mission has no cargo entries".into()));
        }
        for entry in &cargo {
            entry.validate()?;
        }

        Ok(Self {
            id: ids.next_mission(),
            kind,
            reward,
            cargo,
        })
    }
}

/// Pickup or dropoff, each pointing at its partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    Pickup { dropoff: EventId },
    Dropoff { pickup: EventId },
}

/// Cargo carried by an event. `counterpart` is the destination for a pickup
/// and the origin for a dropoff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cargo {
    pub cargo_type: String,
    pub quantity: f64,
    pub counterpart: String,
}

/// A single pickup or dropoff stop derived from a cargo entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub kind: EventKind,
    pub location: String,
    pub cargo: Cargo,
    pub mission: MissionId,
}

impl Event {
    pub fn is_pickup(&self) -> bool {
        matches!(self.kind, EventKind::Pickup { .. })
    }

    pub fn is_dropoff(&self) -> bool {
        matches!(self.kind, EventKind::Dropoff { .. })
    }

    /// The pickup this dropoff depends on, if this is a dropoff.
    pub fn required_pickup(&self) -> Option<EventId> {
        match self.kind {
            EventKind::Dropoff { pickup } => Some(pickup),
            EventKind::Pickup { .. } => None,
        }
    }

    /// The dropoff paired with this pickup, if this is a pickup.
    pub fn paired_dropoff(&self) -> Option<EventId> {
        match self.kind {
            EventKind::Pickup { dropoff } => Some(dropoff),
            EventKind::Dropoff { .. } => None,
        }
    }
}

/// Session-scoped ID source for missions and events.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next_mission: u32,
    next_event: u32,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self {
            next_mission: 1,
            next_event: 1,
        }
    }
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hands out the next mission ID.
    pub fn next_mission(&mut self) -> MissionId {
        let id = MissionId(self.next_mission);
        self.next_mission += 1;
        id
    }

    /// Hands out the next event ID.
    pub fn next_event(&mut self) -> EventId {
        let id = EventId(self.next_event);
        self.next_event += 1;
        id
    }
}

/// Derives the pickup/dropoff pair of every cargo entry, in mission then
/// entry order.
pub fn derive_events(missions: &[Mission], ids: &mut IdAllocator) -> Vec<Event> {
    let mut events = Vec::with_capacity(missions.iter().map(|m| m.cargo.len() * 2).sum());
    for mission in missions {
        events.extend(events_for(mission, ids));
    }
    events
}

fn events_for(mission: &Mission, ids: &mut IdAllocator) -> Vec<Event> {
    let mut events = Vec::with_capacity(mission.cargo.len() * 2);
    for entry in &mission.cargo {
        let pickup_id = ids.next_event();
        let dropoff_id = ids.next_event();

        events.push(Event {
            id: pickup_id,
            kind: EventKind::Pickup { dropoff: dropoff_id },
            location: entry.from.clone(),
            cargo: Cargo {
                cargo_type: entry.cargo_type.clone(),
                quantity: entry.quantity,
                counterpart: entry.to.clone(),
            },
            mission: mission.id,
        });
        events.push(Event {
            id: dropoff_id,
            kind: EventKind::Dropoff { pickup: pickup_id },
            location: entry.to.clone(),
            cargo: Cargo {
                cargo_type: entry.cargo_type.clone(),
                quantity: entry.quantity,
                counterpart: entry.from.clone(),
            },
            mission: mission.id,
        });
    }
    events
}

/// Sum of all mission rewards.
pub fn total_reward(missions: &[Mission]) -> f64 {
    missions.iter().map(|m| m.reward).sum()
}

/// A planning session: missions in creation order and their events.
#[derive(Debug, Clone, Default)]
pub struct MissionBook {
    ids: IdAllocator,
    missions: Vec<Mission>,
    events: Vec<Event>,
}

impl MissionBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and records a mission, deriving its events right away.
    pub fn add_mission(
        &mut self,
        kind: MissionKind,
        reward: f64,
        cargo: Vec<CargoEntry>,
    ) -> Result<MissionId, PlannerError> {
        let mission = Mission::new(&mut self.ids, kind, reward, cargo)?;
        let events = events_for(&mission, &mut self.ids);
        tracing::debug!(mission = mission.id.0, events = events.len(), "mission added");

        let id = mission.id;
        self.events.extend(events);
        self.missions.push(mission);
        Ok(id)
    }

    /// Missions in the order they were added.
    pub fn missions(&self) -> &[Mission] {
        &self.missions
    }

    /// All derived events, each pickup directly followed by its dropoff.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Sum of every mission reward.
    pub fn total_reward(&self) -> f64 {
        total_reward(&self.missions)
    }
}
