//! Seams between the planner core and its host.
//!
//! The core only computes; how distances are produced and how progress is
//! shown are decided by whoever drives it.

use crate::events::Event;

/// Provides a distance matrix for a set of planar positions.
///
/// The matrix is indexed by the provided position order.
pub trait DistanceMatrixProvider {
    fn matrix_for(&self, positions: &[(f64, f64)]) -> Vec<Vec<f64>>;
}

/// Snapshot handed to a [`ProgressObserver`] whenever the best route improves.
#[derive(Debug, Clone, Copy)]
pub struct Progress<'r, 'a> {
    /// Share of the generation budget consumed, in `[0, 100]`.
    pub percent: f64,
    pub best_route: &'r [&'a Event],
    pub start: &'r str,
    /// 1-based generation index.
    pub generation: usize,
    pub best_distance: f64,
}

/// Receives improvement ticks from the evolution loop.
///
/// `yield_now` is the single cooperative suspension point of a run. It is
/// called once right after every `on_improvement`, so a host can repaint or
/// pump its own event loop. Headless callers leave it as a no-op.
pub trait ProgressObserver {
    fn on_improvement(&mut self, progress: &Progress<'_, '_>);

    fn yield_now(&mut self) {}
}

impl<F> ProgressObserver for F
where
    F: FnMut(&Progress<'_, '_>),
{
    fn on_improvement(&mut self, progress: &Progress<'_, '_>) {
        self(progress)
    }
}

/// Observer that ignores every tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl ProgressObserver for Silent {
    fn on_improvement(&mut self, _progress: &Progress<'_, '_>) {}
}
