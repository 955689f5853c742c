//! Route planner driver: a generational GA over pickup/dropoff routes.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::PlannerError;
use crate::euclidean::{DistanceMap, EuclideanMatrix};
use crate::events::Event;
use crate::ga::{self, Fitness, INVALID_DROPOFF_PENALTY};
use crate::map::LocationTable;
use crate::route::{self, Route};
use crate::traits::{Progress, ProgressObserver};

/// Smallest accepted `GaParams::population_size`.
pub const MIN_POPULATION_SIZE: usize = 10;
/// Smallest accepted `GaParams::generations`.
pub const MIN_GENERATIONS: usize = 10;

/// Tuning knobs for one planning run. Missing fields take their defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaParams {
    pub population_size: usize,
    pub generations: usize,
    /// Chance that an offspring gets one swap mutation per generation.
    pub mutation_rate: f64,
    /// Share of the population carried over unconditionally.
    pub elite_fraction: f64,
    /// Distance penalty per dropoff visited before its pickup.
    pub invalid_dropoff_penalty: f64,
    /// Fixed seed for reproducible runs; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for GaParams {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 200,
            mutation_rate: 0.1,
            elite_fraction: 0.1,
            invalid_dropoff_penalty: INVALID_DROPOFF_PENALTY,
            seed: None,
        }
    }
}

impl GaParams {
    /// Checks every field against its bounds, reporting the first violation.
    pub fn validate(&self) -> Result<(), PlannerError> {
        if self.population_size < MIN_POPULATION_SIZE {
            return Err(invalid("population_size", format!("must be at least {}", MIN_POPULATION_SIZE)));
        }
        if self.generations < MIN_GENERATIONS {
            return Err(invalid("generations", format!("must be at least {}", MIN_GENERATIONS)));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(invalid("mutation_rate", format!("must be within [0, 1], got {}", self.mutation_rate)));
        }
        if !(0.0..0.5).contains(&self.elite_fraction) {
            return Err(invalid("elite_fraction", format!("must be within [0, 0.5), got {}", self.elite_fraction)));
        }
        if !self.invalid_dropoff_penalty.is_finite() || self.invalid_dropoff_penalty < 0.0 {
            return Err(invalid(
                "invalid_dropoff_penalty",
                format!("must be finite and non-negative, got {}", self.invalid_dropoff_penalty),
            ));
        }
        Ok(())
    }

    /// Number of routes carried over unchanged each generation.
    pub fn elite_count(&self) -> usize {
        (self.population_size as f64 * self.elite_fraction).floor() as usize
    }

    fn rng(&self) -> SmallRng {
        match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        }
    }
}

fn invalid(name: &'static str, reason: String) -> PlannerError {
    PlannerError::InvalidParameter { name, reason }
}

/// Cooperative cancellation flag, checked once per generation.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation. The run stops before its next generation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Lifecycle of an [`Evolution`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    /// Working on 1-based generation `generation` of `of`.
    Running { generation: usize, of: usize },
    Completed,
    Cancelled,
}

/// Best route observed so far and where it came from.
#[derive(Debug, Clone)]
pub struct BestRoute<'a> {
    pub route: Route<'a>,
    pub fitness: Fitness,
    /// 1-based generation in which it was found.
    pub generation: usize,
}

/// GA state for one planning run.
pub struct Evolution<'a, R: Rng = SmallRng> {
    start: &'a str,
    distances: DistanceMap,
    params: GaParams,
    rng: R,
    population: Vec<Route<'a>>,
    best: Option<BestRoute<'a>>,
    history: Vec<f64>,
    generation: usize,
    state: RunState,
}

impl<'a, R: Rng> Evolution<'a, R> {
    /// Seeds a random valid population. Parameters are taken as already validated.
    pub fn new(events: &'a [Event], start: &'a str, distances: DistanceMap, params: GaParams, mut rng: R) -> Self {
        let population = ga::initialize(params.population_size, events, &mut rng);
        Self {
            start,
            distances,
            params,
            rng,
            population,
            best: None,
            history: Vec::new(),
            generation: 0,
            state: RunState::Idle,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Best route seen so far, if any generation has run.
    pub fn best(&self) -> Option<&BestRoute<'a>> {
        self.best.as_ref()
    }

    /// Best distance after every improvement, oldest first.
    pub fn history(&self) -> &[f64] {
        &self.history
    }

    /// Routes that the next generation will start from.
    pub fn population(&self) -> &[Route<'a>] {
        &self.population
    }

    /// Distance lookup used for scoring.
    pub fn distances(&self) -> &DistanceMap {
        &self.distances
    }

    /// Number of completed generations.
    pub fn generations_run(&self) -> usize {
        self.generation
    }

    fn is_finished(&self) -> bool {
        matches!(self.state, RunState::Completed | RunState::Cancelled) || self.generation >= self.params.generations
    }

    /// Runs one generation. Returns whether the best route improved.
    pub fn step<O: ProgressObserver>(&mut self, observer: &mut O) -> Result<bool, PlannerError> {
        if self.is_finished() {
            return Ok(false);
        }
        let generation = self.generation + 1;
        self.state = RunState::Running {
            generation,
            of: self.params.generations,
        };

        let mut scored = Vec::with_capacity(self.population.len());
        for route in self.population.drain(..) {
            let fitness = ga::evaluate(&route, self.start, &self.distances, self.params.invalid_dropoff_penalty)?;
            scored.push((route, fitness));
        }
        scored.sort_by(|a, b| b.1.score.total_cmp(&a.1.score));

        let improved = match (scored.first(), &self.best) {
            (Some((_, leader)), Some(best)) => leader.score > best.fitness.score,
            (Some(_), None) => true,
            (None, _) => false,
        };
        if improved {
            let (route, fitness) = &scored[0];
            self.record_improvement(route.clone(), *fitness, generation, observer);
        }

        let sorted: Vec<Route<'a>> = scored.into_iter().map(|(route, _)| route).collect();
        let selected = ga::select(&sorted, self.params.elite_count());
        let offspring: Vec<Route<'a>> = ga::crossover_population(&selected)
            .iter()
            .map(|child| ga::mutate(child, self.params.mutation_rate, &mut self.rng))
            .map(|child| ga::repair(&child))
            .collect();

        let mut next = selected;
        next.extend(offspring);
        next.truncate(self.params.population_size);
        self.population = next;

        self.generation = generation;
        if self.generation >= self.params.generations {
            self.state = RunState::Completed;
        }
        Ok(improved)
    }

    fn record_improvement<O: ProgressObserver>(
        &mut self,
        route: Route<'a>,
        fitness: Fitness,
        generation: usize,
        observer: &mut O,
    ) {
        tracing::debug!(
            generation,
            distance = fitness.total_distance,
            stops = fitness.total_stops,
            "best route improved"
        );
        self.history.push(fitness.total_distance);

        let progress = Progress {
            percent: generation as f64 / self.params.generations as f64 * 100.0,
            best_route: &route,
            start: self.start,
            generation,
            best_distance: fitness.total_distance,
        };
        observer.on_improvement(&progress);
        observer.yield_now();

        self.best = Some(BestRoute {
            route,
            fitness,
            generation,
        });
    }

    /// Runs the remaining generations, stopping early once `cancel` is set.
    pub fn run<O: ProgressObserver>(&mut self, observer: &mut O, cancel: &CancelToken) -> Result<RunState, PlannerError> {
        while !self.is_finished() {
            if cancel.is_cancelled() {
                tracing::warn!(generation = self.generation, "route planning cancelled");
                self.state = RunState::Cancelled;
                break;
            }
            self.step(observer)?;
        }
        Ok(self.state)
    }

    fn into_parts(self) -> (Option<BestRoute<'a>>, Vec<f64>, DistanceMap, usize, RunState) {
        (self.best, self.history, self.distances, self.generation, self.state)
    }
}

/// Finished plan.
#[derive(Debug, Clone)]
pub struct PlanResult<'a> {
    pub route: Route<'a>,
    /// Plain travel distance of `route`, without penalties.
    pub total_distance: f64,
    pub fitness: Fitness,
    /// 1-based generation that produced `route`.
    pub found_in_generation: usize,
    pub distances: DistanceMap,
    pub locations: &'a LocationTable,
    pub history: Vec<f64>,
    pub generations_run: usize,
    pub cancelled: bool,
}

/// Result of [`plan_route`].
#[derive(Debug, Clone)]
pub enum PlanOutcome<'a> {
    Solved(PlanResult<'a>),
    /// The search finished without any non-empty route.
    NoSolution {
        history: Vec<f64>,
        generations_run: usize,
        cancelled: bool,
    },
}

impl<'a> PlanOutcome<'a> {
    /// The plan, when a route was found.
    pub fn solved(&self) -> Option<&PlanResult<'a>> {
        match self {
            PlanOutcome::Solved(result) => Some(result),
            PlanOutcome::NoSolution { .. } => None,
        }
    }
}

/// Searches for a short, precedence-valid route through `events` from `start`.
///
/// Inputs are checked before any search starts: parameters, a non-empty event
/// list, and that `start` and every event location exist in `locations`.
pub fn plan_route<'a, O: ProgressObserver>(
    locations: &'a LocationTable,
    events: &'a [Event],
    start: &'a str,
    params: GaParams,
    observer: &mut O,
    cancel: &CancelToken,
) -> Result<PlanOutcome<'a>, PlannerError> {
    params.validate()?;
    if events.is_empty() {
        return Err(PlannerError::EmptyMissions);
    }
    if !locations.contains(start) {
        return Err(PlannerError::UnknownLocation(start.to_string()));
    }
    if let Some(event) = events.iter().find(|e| !locations.contains(&e.location)) {
        return Err(PlannerError::UnknownLocation(event.location.clone()));
    }

    tracing::info!(
        start,
        events = events.len(),
        population = params.population_size,
        generations = params.generations,
        "planning route"
    );

    let distances = DistanceMap::build(locations, &EuclideanMatrix);
    let rng = params.rng();
    let mut evolution = Evolution::new(events, start, distances, params, rng);
    evolution.run(observer, cancel)?;

    let (best, history, distances, generations_run, state) = evolution.into_parts();
    let cancelled = state == RunState::Cancelled;

    let best = match best {
        Some(best) if !best.route.is_empty() => best,
        _ => {
            tracing::warn!(generations_run, "no route found");
            return Ok(PlanOutcome::NoSolution {
                history,
                generations_run,
                cancelled,
            });
        }
    };

    let total_distance = route::total_distance(&best.route, start, &distances)?;
    tracing::info!(
        distance = total_distance,
        stops = best.fitness.total_stops,
        generation = best.generation,
        "route planned"
    );

    Ok(PlanOutcome::Solved(PlanResult {
        route: best.route,
        total_distance,
        fitness: best.fitness,
        found_in_generation: best.generation,
        distances,
        locations,
        history,
        generations_run,
        cancelled,
    }))
}
