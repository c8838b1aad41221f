pub mod report;
pub mod runner;

pub use runner::{compare_policies, run_episode, EpisodeSummary};
