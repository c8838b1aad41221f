use tracing::trace;

use super::Policy;
use crate::distance::haversine_km;
use crate::domain::Candidate;
use crate::env::ForagingEnv;

struct Scored {
    index: usize,
    travel_km: f64,
    score: f64,
}

/// Pick the highest-scoring unvisited candidate, preferring ones the remaining
/// budget can still reach. Ties go to the lower index.
fn pick_best<F>(env: &ForagingEnv, score: F) -> Option<usize>
where
    F: Fn(&Candidate, f64) -> f64,
{
    let current = env.current();
    let remaining = env.remaining_km();

    let scored: Vec<Scored> = env
        .unvisited()
        .map(|(index, c)| {
            let travel_km = haversine_km(current, c.location);
            Scored {
                index,
                travel_km,
                score: score(c, travel_km),
            }
        })
        .collect();

    let reachable = best_of(scored.iter().filter(|s| s.travel_km <= remaining));
    let chosen = reachable.or_else(|| best_of(scored.iter()));
    trace!("{} unvisited, chose {:?}", scored.len(), chosen);
    chosen
}

// `min_by` keeps the first of equal elements, so reversing the comparison
// yields the first maximum.
fn best_of<'a>(pool: impl Iterator<Item = &'a Scored>) -> Option<usize> {
    pool.min_by(|a, b| b.score.total_cmp(&a.score)).map(|s| s.index)
}

/// Closest unvisited candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestNeighbour;

impl Policy for NearestNeighbour {
    fn name(&self) -> &'static str {
        "nearest_neighbour"
    }

    fn choose(&mut self, env: &ForagingEnv) -> Option<usize> {
        pick_best(env, |_, travel_km| -travel_km)
    }
}

/// Most important unvisited candidate, regardless of distance.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyImportance;

impl Policy for GreedyImportance {
    fn name(&self) -> &'static str {
        "greedy_importance"
    }

    fn choose(&mut self, env: &ForagingEnv) -> Option<usize> {
        pick_best(env, |c, _| c.importance)
    }
}

/// Best importance per km travelled.
#[derive(Debug, Clone, Copy)]
pub struct ImportanceRatio {
    /// Floor on the distance so co-located candidates don't divide by zero.
    pub min_distance_km: f64,
}

impl Default for ImportanceRatio {
    fn default() -> Self {
        ImportanceRatio {
            min_distance_km: 1e-3,
        }
    }
}

impl Policy for ImportanceRatio {
    fn name(&self) -> &'static str {
        "importance_ratio"
    }

    fn choose(&mut self, env: &ForagingEnv) -> Option<usize> {
        let floor = self.min_distance_km;
        pick_best(env, move |c, travel_km| c.importance / travel_km.max(floor))
    }
}
