//! Properties every genetic operator must hold on realistic mission sets.

mod fixtures;

use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use haul_planner::euclidean::{DistanceMap, EuclideanMatrix};
use haul_planner::events::{Event, EventId};
use haul_planner::ga::{self, INVALID_DROPOFF_PENALTY};
use haul_planner::map;
use haul_planner::route::is_precedence_valid;

fn id_set(route: &[&Event]) -> HashSet<EventId> {
    route.iter().map(|e| e.id).collect()
}

fn ids(route: &[&Event]) -> Vec<EventId> {
    route.iter().map(|e| e.id).collect()
}

#[test]
fn test_initial_population_respects_precedence() {
    let book = fixtures::contract_board();
    let mut rng = SmallRng::seed_from_u64(1);
    for route in ga::initialize(100, book.events(), &mut rng) {
        assert!(is_precedence_valid(&route));
        assert_eq!(route.len(), book.events().len());
    }
}

#[test]
fn test_crossover_children_keep_parent_event_sets() {
    let book = fixtures::contract_board();
    let mut rng = SmallRng::seed_from_u64(2);
    let population = ga::initialize(40, book.events(), &mut rng);

    for pair in population.chunks_exact(2) {
        let (child1, child2) = ga::crossover(&pair[0], &pair[1]);
        assert_eq!(child1.len(), pair[0].len());
        assert_eq!(child2.len(), pair[1].len());
        assert_eq!(id_set(&child1), id_set(&pair[0]));
        assert_eq!(id_set(&child2), id_set(&pair[1]));
    }
}

#[test]
fn test_crossover_between_valid_parents_stays_valid() {
    // Both parents order every pickup before its dropoff, and each child
    // copies one parent's order.
    let book = fixtures::contract_board();
    let mut rng = SmallRng::seed_from_u64(3);
    let population = ga::initialize(40, book.events(), &mut rng);

    for child in ga::crossover_population(&population) {
        assert!(is_precedence_valid(&child));
    }
}

#[test]
fn test_mutation_then_repair_is_valid() {
    let book = fixtures::contract_board();
    let mut rng = SmallRng::seed_from_u64(4);
    let population = ga::initialize(100, book.events(), &mut rng);

    for route in &population {
        let mutated = ga::mutate(route, 1.0, &mut rng);
        assert!(is_precedence_valid(&mutated));
        assert_eq!(id_set(&mutated), id_set(route));
        assert!(is_precedence_valid(&ga::repair(&mutated)));
    }
}

#[test]
fn test_repair_is_idempotent_on_scrambled_routes() {
    let book = fixtures::contract_board();
    let mut rng = SmallRng::seed_from_u64(5);
    let all: Vec<&Event> = book.events().iter().collect();

    for _ in 0..200 {
        let mut scrambled = all.clone();
        scrambled.shuffle(&mut rng);
        // a partial route too
        scrambled.truncate(rng_len(&mut rng, all.len()));

        let once = ga::repair(&scrambled);
        assert!(is_precedence_valid(&once));
        assert_eq!(ids(&ga::repair(&once)), ids(&once));
    }
}

#[test]
fn test_repair_keeps_each_event_once() {
    let book = fixtures::contract_board();
    let mut rng = SmallRng::seed_from_u64(8);
    let all: Vec<&Event> = book.events().iter().collect();

    for _ in 0..100 {
        let mut doubled: Vec<&Event> = all.iter().chain(all.iter()).copied().collect();
        doubled.shuffle(&mut rng);

        let repaired = ga::repair(&doubled);
        assert!(is_precedence_valid(&repaired));
        assert_eq!(repaired.len(), all.len());
        assert_eq!(id_set(&repaired).len(), all.len());
    }
}

fn rng_len(rng: &mut SmallRng, max: usize) -> usize {
    use rand::Rng;
    rng.gen_range(1..=max)
}

#[test]
fn test_selection_keeps_half() {
    let book = fixtures::contract_board();
    let mut rng = SmallRng::seed_from_u64(6);
    for size in [10, 15, 100, 101] {
        let population = ga::initialize(size, book.events(), &mut rng);
        assert_eq!(ga::select(&population, size / 10).len(), size / 2);
    }
}

#[test]
fn test_fitness_prefers_shorter_valid_routes() {
    let map = map::stanton();
    let distances = DistanceMap::build(&map, &EuclideanMatrix);
    let book = fixtures::two_missions();
    let e = book.events();

    // e0: pick Waste @ MIC-L5, e1: drop @ Port Tressler
    // e2: pick Ice @ Port Tressler, e3: drop @ Seraphim Station
    let in_order = [&e[0], &e[1], &e[2], &e[3]];
    let doubling_back = [&e[2], &e[0], &e[1], &e[3]];
    let invalid = [&e[1], &e[0], &e[2], &e[3]];

    let score = |route: &[&Event]| {
        ga::evaluate(route, "MIC-L5", &distances, INVALID_DROPOFF_PENALTY)
            .unwrap()
            .total_distance
    };
    assert!(score(&in_order[..]) < score(&doubling_back[..]));
    assert!(score(&invalid[..]) > INVALID_DROPOFF_PENALTY);
}

#[test]
fn test_stanton_distances_are_symmetric() {
    let map = map::stanton();
    let distances = DistanceMap::build(&map, &EuclideanMatrix);
    for a in map.iter() {
        assert_eq!(distances.distance(&a.name, &a.name).unwrap(), 0.0);
        for b in map.iter() {
            assert_eq!(
                distances.distance(&a.name, &b.name).unwrap(),
                distances.distance(&b.name, &a.name).unwrap()
            );
        }
    }
}
