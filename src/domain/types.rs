use serde::{Deserialize, Serialize};

/// Latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        GeoPoint { lat, lon }
    }
}

/// A visitable customer. Visited state lives in the environment, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Source customer id, when the candidate came from a customer table.
    pub id: Option<String>,
    pub location: GeoPoint,
    pub importance: f64,
}

impl Candidate {
    pub fn new(lat: f64, lon: f64, importance: f64) -> Self {
        Candidate {
            id: None,
            location: GeoPoint::new(lat, lon),
            importance,
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    /// Customer id, or the candidate's index when it has none.
    pub fn label(&self, index: usize) -> String {
        self.id.clone().unwrap_or_else(|| index.to_string())
    }
}

/// One row of the customer table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    #[serde(rename = "CUSTOMER_ID")]
    pub customer_id: String,
    #[serde(rename = "LATTUD")]
    pub lat: f64,
    #[serde(rename = "LNGTUD")]
    pub lon: f64,
    #[serde(rename = "w_importance")]
    pub importance: f64,
    pub assigned_hub: String,
}

/// One row of the hub table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HubRecord {
    #[serde(rename = "HUB_ID")]
    pub hub_id: String,
    #[serde(rename = "LATTUD")]
    pub lat: f64,
    #[serde(rename = "LNGTUD")]
    pub lon: f64,
}

/// Snapshot returned by `reset` and `step`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Observation {
    pub current_lat: f64,
    pub current_lon: f64,
    pub remaining_km: f64,
    pub total_reward: f64,
    pub total_distance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EpisodeStatus {
    Active,
    Exhausted,
    Complete,
}

impl EpisodeStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, EpisodeStatus::Active)
    }
}

impl std::fmt::Display for EpisodeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            EpisodeStatus::Active => "active",
            EpisodeStatus::Exhausted => "exhausted",
            EpisodeStatus::Complete => "complete",
        };
        write!(f, "{}", s)
    }
}

pub const MSG_OK: &str = "ok";
pub const MSG_ALREADY_VISITED: &str = "already visited";
pub const MSG_BUDGET_EXHAUSTED: &str = "budget exhausted";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepInfo {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub travel_km: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    pub observation: Observation,
    pub reward: f64,
    pub done: bool,
    pub info: StepInfo,
}

impl StepResult {
    /// `(observation, reward, done, info)` for callers that want the gym-style tuple.
    pub fn into_tuple(self) -> (Observation, f64, bool, StepInfo) {
        (self.observation, self.reward, self.done, self.info)
    }
}
