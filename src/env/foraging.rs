use tracing::{debug, info, trace};

use crate::config::constant::DEFAULT_BUDGET_KM;
use crate::distance::haversine_km;
use crate::domain::{
    Candidate, CustomerRecord, EpisodeStatus, ForageError, GeoPoint, HubRecord, Observation,
    Result, StepInfo, StepResult, MSG_ALREADY_VISITED, MSG_BUDGET_EXHAUSTED, MSG_OK,
};

/// Single-vehicle foraging episode over a fixed candidate list.
///
/// The candidate list and hub are fixed at construction. `reset` restores the
/// episode state and `step` is the only operation that mutates it.
#[derive(Debug, Clone)]
pub struct ForagingEnv {
    candidates: Vec<Candidate>,
    hub: GeoPoint,
    budget_km: f64,
    distance_col: Option<String>,

    current: GeoPoint,
    remaining_km: f64,
    total_reward: f64,
    total_distance: f64,
    visited: Vec<bool>,
    path: Vec<usize>,
    status: EpisodeStatus,
}

impl ForagingEnv {
    pub fn new(candidates: Vec<Candidate>, hub: GeoPoint, budget_km: f64) -> Self {
        let n = candidates.len();
        let mut env = ForagingEnv {
            candidates,
            hub,
            budget_km,
            distance_col: None,
            current: hub,
            remaining_km: budget_km,
            total_reward: 0.0,
            total_distance: 0.0,
            visited: vec![false; n],
            path: Vec::with_capacity(n),
            status: EpisodeStatus::Active,
        };
        env.reset();
        env
    }

    pub fn with_default_budget(candidates: Vec<Candidate>, hub: GeoPoint) -> Self {
        Self::new(candidates, hub, DEFAULT_BUDGET_KM)
    }

    /// Build an environment for `hub_id`, copying that hub's customers in table order.
    ///
    /// `distance_col` is kept for a precomputed-distance lookup; `step` always
    /// recomputes distances live.
    pub fn from_records(
        customers: &[CustomerRecord],
        hubs: &[HubRecord],
        hub_id: &str,
        distance_col: &str,
        budget_km: f64,
    ) -> Result<Self> {
        let hub = hubs
            .iter()
            .find(|h| h.hub_id == hub_id)
            .ok_or_else(|| ForageError::HubNotFound(hub_id.to_string()))?;

        let candidates: Vec<Candidate> = customers
            .iter()
            .filter(|c| c.assigned_hub == hub_id)
            .map(|c| Candidate::new(c.lat, c.lon, c.importance).with_id(&c.customer_id))
            .collect();

        info!(
            "Hub {} at ({:.4}, {:.4}): {} of {} customers, budget {:.1} km",
            hub_id,
            hub.lat,
            hub.lon,
            candidates.len(),
            customers.len(),
            budget_km
        );

        let mut env = Self::new(candidates, GeoPoint::new(hub.lat, hub.lon), budget_km);
        env.distance_col = Some(distance_col.to_string());
        Ok(env)
    }

    pub fn reset(&mut self) -> Observation {
        self.current = self.hub;
        self.remaining_km = self.budget_km;
        self.total_reward = 0.0;
        self.total_distance = 0.0;
        self.visited.iter_mut().for_each(|v| *v = false);
        self.path.clear();
        // nothing to visit means every candidate is already visited
        self.status = if self.candidates.is_empty() {
            EpisodeStatus::Complete
        } else {
            EpisodeStatus::Active
        };

        debug!(
            "Episode reset: {} candidates, budget {:.2} km",
            self.candidates.len(),
            self.budget_km
        );
        self.observation()
    }

    /// Visit candidate `index`.
    ///
    /// Revisits and unaffordable moves leave the state untouched and are
    /// reported through `done` and `info`. An out-of-range index is a fault.
    pub fn step(&mut self, index: usize) -> Result<StepResult> {
        let candidate = self
            .candidates
            .get(index)
            .ok_or(ForageError::CandidateOutOfRange {
                index,
                len: self.candidates.len(),
            })?;

        if self.visited[index] {
            debug!("Candidate {} already visited", index);
            return Ok(self.unchanged(false, MSG_ALREADY_VISITED));
        }

        let travel_km = haversine_km(self.current, candidate.location);
        trace!(
            "Travel to {}: {:.3} km, remaining {:.3} km",
            index,
            travel_km,
            self.remaining_km
        );

        if travel_km > self.remaining_km {
            debug!(
                "Budget exhausted: {:.3} km needed, {:.3} km left",
                travel_km, self.remaining_km
            );
            self.status = EpisodeStatus::Exhausted;
            return Ok(self.unchanged(true, MSG_BUDGET_EXHAUSTED));
        }

        let reward = candidate.importance;
        self.current = candidate.location;
        self.remaining_km -= travel_km;
        self.total_distance += travel_km;
        self.total_reward += reward;
        self.visited[index] = true;
        self.path.push(index);

        let done = self.visited.iter().all(|&v| v);
        self.status = if done {
            EpisodeStatus::Complete
        } else {
            EpisodeStatus::Active
        };
        if done {
            info!(
                "All {} candidates visited, reward {:.2}, distance {:.2} km",
                self.candidates.len(),
                self.total_reward,
                self.total_distance
            );
        }

        debug!(
            "Visited {} (+{:.2}), remaining {:.2} km",
            index, reward, self.remaining_km
        );

        Ok(StepResult {
            observation: self.observation(),
            reward,
            done,
            info: StepInfo {
                message: MSG_OK,
                travel_km: Some(travel_km),
            },
        })
    }

    fn unchanged(&self, done: bool, message: &'static str) -> StepResult {
        StepResult {
            observation: self.observation(),
            reward: 0.0,
            done,
            info: StepInfo {
                message,
                travel_km: None,
            },
        }
    }

    pub fn observation(&self) -> Observation {
        Observation {
            current_lat: self.current.lat,
            current_lon: self.current.lon,
            remaining_km: self.remaining_km,
            total_reward: self.total_reward,
            total_distance: self.total_distance,
        }
    }

    pub fn path(&self) -> &[usize] {
        &self.path
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn hub(&self) -> GeoPoint {
        self.hub
    }

    pub fn current(&self) -> GeoPoint {
        self.current
    }

    pub fn budget_km(&self) -> f64 {
        self.budget_km
    }

    pub fn remaining_km(&self) -> f64 {
        self.remaining_km
    }

    pub fn status(&self) -> EpisodeStatus {
        self.status
    }

    pub fn distance_col(&self) -> Option<&str> {
        self.distance_col.as_deref()
    }

    /// `None` when `index` is out of range.
    pub fn is_visited(&self, index: usize) -> Option<bool> {
        self.visited.get(index).copied()
    }

    pub fn unvisited(&self) -> impl Iterator<Item = (usize, &Candidate)> + '_ {
        self.candidates
            .iter()
            .enumerate()
            .filter(move |(i, _)| !self.visited[*i])
    }
}
