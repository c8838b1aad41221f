use serde::Serialize;
use tracing::{debug, info, span, warn, Level};

use crate::domain::{EpisodeStatus, Result};
use crate::env::ForagingEnv;
use crate::policy::Policy;

/// Outcome of one policy-driven episode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EpisodeSummary {
    pub policy: String,
    pub hub_id: String,
    pub steps: usize,
    pub visited: usize,
    pub total_reward: f64,
    pub total_distance: f64,
    pub remaining_km: f64,
    pub status: EpisodeStatus,
    pub path: Vec<usize>,
    /// Customer ids in visiting order.
    pub route: Vec<String>,
}

/// Reset `env` and let `policy` drive it until the episode ends, the policy
/// has nothing left to choose, or `max_steps` is hit.
pub fn run_episode(
    env: &mut ForagingEnv,
    policy: &mut dyn Policy,
    hub_id: &str,
    max_steps: usize,
) -> Result<EpisodeSummary> {
    let episode_span = span!(Level::DEBUG, "episode", policy = policy.name());
    let _guard = episode_span.enter();

    env.reset();
    let mut steps = 0;

    while steps < max_steps {
        let Some(index) = policy.choose(env) else {
            debug!("Policy has no candidate left");
            break;
        };

        let result = env.step(index)?;
        steps += 1;
        debug!(
            "step {}: {} -> {} (reward {:.2})",
            steps, index, result.info.message, result.reward
        );

        if result.done {
            break;
        }
    }

    if steps == max_steps && !env.status().is_terminal() {
        warn!("{} hit the {} step cap", policy.name(), max_steps);
    }

    let obs = env.observation();
    let summary = EpisodeSummary {
        policy: policy.name().to_string(),
        hub_id: hub_id.to_string(),
        steps,
        visited: env.path().len(),
        total_reward: obs.total_reward,
        total_distance: obs.total_distance,
        remaining_km: obs.remaining_km,
        status: env.status(),
        path: env.path().to_vec(),
        route: env
            .path()
            .iter()
            .map(|&i| env.candidates()[i].label(i))
            .collect(),
    };

    info!(
        "{}: visited {}/{}, reward {:.2}, distance {:.2} km, {}",
        summary.policy,
        summary.visited,
        env.candidates().len(),
        summary.total_reward,
        summary.total_distance,
        summary.status
    );

    Ok(summary)
}

/// Run every policy on the same environment, one fresh episode each.
pub fn compare_policies(
    env: &mut ForagingEnv,
    policies: &mut [Box<dyn Policy>],
    hub_id: &str,
    max_steps: usize,
) -> Result<Vec<EpisodeSummary>> {
    policies
        .iter_mut()
        .map(|policy| run_episode(env, policy.as_mut(), hub_id, max_steps))
        .collect()
}
