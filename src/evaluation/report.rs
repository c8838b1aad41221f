use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use colored::*;
use csv::Writer;
use itertools::Itertools;

use super::runner::EpisodeSummary;
use crate::domain::{EpisodeStatus, Result};

pub fn save_to_csv(summaries: &[EpisodeSummary], filename: impl AsRef<Path>) -> Result<()> {
    let mut wtr = Writer::from_path(filename)?;

    wtr.write_record([
        "policy",
        "hub_id",
        "steps",
        "visited",
        "total_reward",
        "total_distance",
        "remaining_km",
        "status",
        "path",
        "route",
    ])?;

    for s in summaries {
        wtr.write_record(&[
            s.policy.clone(),
            s.hub_id.clone(),
            s.steps.to_string(),
            s.visited.to_string(),
            format!("{:.4}", s.total_reward),
            format!("{:.4}", s.total_distance),
            format!("{:.4}", s.remaining_km),
            s.status.to_string(),
            s.path.iter().join(" "),
            s.route.join(" "),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn save_to_json(summaries: &[EpisodeSummary], filename: impl AsRef<Path>) -> Result<()> {
    let writer = BufWriter::new(File::create(filename)?);
    serde_json::to_writer_pretty(writer, summaries)?;
    Ok(())
}

/// Render the comparison table; the best reward is highlighted.
pub fn format_summary(summaries: &[EpisodeSummary]) -> String {
    let best = summaries
        .iter()
        .map(|s| s.total_reward)
        .fold(f64::NEG_INFINITY, f64::max);

    let mut out = format!(
        "{:<20} {:>8} {:>12} {:>14} {:>12}  {}\n",
        "policy", "visited", "reward", "distance_km", "left_km", "status"
    );
    for s in summaries {
        let reward = format!("{:>12.2}", s.total_reward);
        let reward = if s.total_reward == best {
            reward.green().bold()
        } else {
            reward.normal()
        };
        let status = match s.status {
            EpisodeStatus::Complete => s.status.to_string().green(),
            EpisodeStatus::Exhausted => s.status.to_string().yellow(),
            EpisodeStatus::Active => s.status.to_string().red(),
        };
        out.push_str(&format!(
            "{:<20} {:>8} {} {:>14.2} {:>12.2}  {}\n",
            s.policy, s.visited, reward, s.total_distance, s.remaining_km, status
        ));
    }
    out
}
