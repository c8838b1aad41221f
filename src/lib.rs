pub mod config;
pub mod distance;
pub mod domain;
pub mod env;
pub mod evaluation;
pub mod fixtures;
pub mod harness;
pub mod policy;

pub use distance::{haversine_km, haversine_km_batch};
pub use domain::{
    Candidate, EpisodeStatus, ForageError, GeoPoint, Observation, Result, StepInfo, StepResult,
};
pub use env::ForagingEnv;
