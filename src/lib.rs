//! haul-planner core
//!
//! Plans multi-stop cargo hauling routes over a fixed map of named locations
//! using a precedence-aware genetic algorithm.

pub mod error;
pub mod traits;
pub mod map;
pub mod euclidean;
pub mod events;
pub mod route;
pub mod ga;
pub mod solver;
pub mod summary;
pub mod polyline;
