//! Genetic operators for precedence-constrained pickup/dropoff routes.
//!
//! A route is a permutation of events in which every dropoff must follow its
//! pickup. Initial routes are valid by construction; crossover and mutation
//! may disturb the order, so offspring always pass through [`repair`].
//!
//! # Submodules
//!
//! - [`population`]: random valid initial routes
//! - [`fitness`]: distance/stop scoring with a soft precedence penalty
//! - [`selection`]: elitism plus truncation
//! - [`crossover`]: Precedence-Preserving Crossover (PPX)
//! - [`mutation`]: pairwise swap that reverts when it breaks precedence
//! - [`repair`]: defers out-of-order dropoffs

pub mod crossover;
pub mod fitness;
pub mod mutation;
pub mod population;
pub mod repair;
pub mod selection;

pub use crossover::{crossover, crossover_population, ppx};
pub use fitness::{evaluate, Fitness, INVALID_DROPOFF_PENALTY};
pub use mutation::mutate;
pub use population::initialize;
pub use repair::repair;
pub use selection::select;
