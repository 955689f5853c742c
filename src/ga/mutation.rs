//! Swap mutation that never leaves a swapped dropoff ahead of its pickup.

use rand::Rng;

use crate::events::Event;
use crate::route::{Route, satisfied_at};

/// With probability `rate`, swaps two distinct random positions.
///
/// The swap is undone entirely if any position from the first to the second
/// swapped index ends up holding a dropoff whose pickup is not earlier in the
/// route. Moving a pickup later can strand its dropoff between the two
/// positions. Routes shorter than two events are returned as they are.
pub fn mutate<'a, R: Rng>(route: &[&'a Event], rate: f64, rng: &mut R) -> Route<'a> {
    let mut mutated = route.to_vec();
    let len = mutated.len();
    if len < 2 || !rng.gen_bool(rate.clamp(0.0, 1.0)) {
        return mutated;
    }

    let i = rng.gen_range(0..len);
    let mut j = rng.gen_range(0..len - 1);
    if j >= i {
        j += 1;
    }

    mutated.swap(i, j);
    let (lo, hi) = (i.min(j), i.max(j));
    if !(lo..=hi).all(|position| satisfied_at(&mutated, position)) {
        mutated.swap(i, j);
    }
    mutated
}
