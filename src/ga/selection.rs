//! Elitist truncation selection.

use crate::route::Route;

/// Keeps the fitter half of a population sorted best-first.
///
/// The top `elite_count` routes are kept unconditionally; the next
/// `len / 2 - elite_count` follow as breeding stock. With `elite_count`
/// below `len / 2` the result is exactly `len / 2` routes long.
pub fn select<'a>(sorted: &[Route<'a>], elite_count: usize) -> Vec<Route<'a>> {
    let elite_count = elite_count.min(sorted.len());
    let breeding = (sorted.len() / 2).saturating_sub(elite_count);

    sorted[..elite_count]
        .iter()
        .chain(sorted[elite_count..].iter().take(breeding))
        .cloned()
        .collect()
}
