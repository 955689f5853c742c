//! Mission sets over the Stanton map.

use haul_planner::events::{CargoEntry, MissionBook, MissionKind};

/// Waste from MIC-L5 to Port Tressler, and Ice from Port Tressler to
/// Seraphim Station.
pub fn two_missions() -> MissionBook {
    let mut book = MissionBook::new();
    book.add_mission(
        MissionKind::MultiplePickUp,
        10_000.0,
        vec![CargoEntry::new("Waste", 3.0, "MIC-L5", "Port Tressler")],
    )
    .unwrap();
    book.add_mission(
        MissionKind::Direct,
        10_200.0,
        vec![CargoEntry::new("Ice", 15.0, "Port Tressler", "Seraphim Station")],
    )
    .unwrap();
    book
}

/// A single entry whose origin and destination are the same station.
pub fn same_station_mission() -> MissionBook {
    let mut book = MissionBook::new();
    book.add_mission(
        MissionKind::Direct,
        500.0,
        vec![CargoEntry::new("Stims", 2.0, "Baijini Point", "Baijini Point")],
    )
    .unwrap();
    book
}

/// Six missions, fourteen cargo entries.
pub fn contract_board() -> MissionBook {
    let mut book = MissionBook::new();
    book.add_mission(
        MissionKind::MultiplePickUp,
        10_000.0,
        vec![
            CargoEntry::new("Waste", 3.0, "MIC-L5", "Port Tressler"),
            CargoEntry::new("Scrap", 3.0, "MIC-L5", "Port Tressler"),
            CargoEntry::new("Waste", 2.0, "MIC-L1", "Port Tressler"),
            CargoEntry::new("Scrap", 3.0, "MIC-L1", "Port Tressler"),
        ],
    )
    .unwrap();
    book.add_mission(
        MissionKind::MultipleDropOff,
        10_100.0,
        vec![
            CargoEntry::new("Ice", 6.0, "Port Tressler", "MIC-L4"),
            CargoEntry::new("Food", 4.0, "Port Tressler", "MIC-L4"),
            CargoEntry::new("Ice", 3.0, "Port Tressler", "MIC-L2"),
            CargoEntry::new("Food", 3.0, "Port Tressler", "MIC-L2"),
        ],
    )
    .unwrap();
    book.add_mission(
        MissionKind::Direct,
        10_200.0,
        vec![CargoEntry::new("Ice", 15.0, "Port Tressler", "Seraphim Station")],
    )
    .unwrap();
    book.add_mission(
        MissionKind::Direct,
        10_300.0,
        vec![
            CargoEntry::new("Waste", 7.0, "MIC-L2", "Port Tressler"),
            CargoEntry::new("Scrap", 6.0, "MIC-L2", "Port Tressler"),
        ],
    )
    .unwrap();
    book.add_mission(
        MissionKind::Direct,
        10_400.0,
        vec![CargoEntry::new("Stims", 13.0, "Port Tressler", "MIC-L1")],
    )
    .unwrap();
    book.add_mission(
        MissionKind::MultiplePickUp,
        10_500.0,
        vec![
            CargoEntry::new("Agri", 7.0, "Seraphim Station", "Everus Harbour"),
            CargoEntry::new("Agri", 7.0, "CRU-L5", "Everus Harbour"),
        ],
    )
    .unwrap();
    book
}
