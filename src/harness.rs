use std::env;
use std::error::Error;
use std::path::Path;

use dotenv::dotenv;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::constant::{
    CUSTOMER_CSV_PATH, DEFAULT_BUDGET_KM, DEFAULT_HUB_ID, DISTANCE_COL, HUB_CSV_PATH, MAX_STEPS,
    REPORT_CSV_PATH, REPORT_JSON_PATH,
};
use crate::distance::matrix::distances_from;
use crate::env::ForagingEnv;
use crate::evaluation::compare_policies;
use crate::evaluation::report::{format_summary, save_to_csv, save_to_json};
use crate::fixtures::records::load_or_generate;
use crate::policy::default_policies;

/// Run settings, from `.env` / the environment with compiled-in defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub customers_csv: String,
    pub hubs_csv: String,
    pub hub_id: String,
    pub budget_km: f64,
    pub report_csv: String,
    pub report_json: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            customers_csv: CUSTOMER_CSV_PATH.to_string(),
            hubs_csv: HUB_CSV_PATH.to_string(),
            hub_id: DEFAULT_HUB_ID.to_string(),
            budget_km: DEFAULT_BUDGET_KM,
            report_csv: REPORT_CSV_PATH.to_string(),
            report_json: REPORT_JSON_PATH.to_string(),
        }
    }
}

impl Settings {
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Settings::default();
        let budget_km = match lookup("FORAGE_BUDGET_KM") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!("FORAGE_BUDGET_KM '{}' is not a number, using {}", raw, DEFAULT_BUDGET_KM);
                DEFAULT_BUDGET_KM
            }),
            None => defaults.budget_km,
        };

        Settings {
            customers_csv: lookup("FORAGE_CUSTOMERS_CSV").unwrap_or(defaults.customers_csv),
            hubs_csv: lookup("FORAGE_HUBS_CSV").unwrap_or(defaults.hubs_csv),
            hub_id: lookup("FORAGE_HUB_ID").unwrap_or(defaults.hub_id),
            budget_km,
            report_csv: lookup("FORAGE_REPORT_CSV").unwrap_or(defaults.report_csv),
            report_json: lookup("FORAGE_REPORT_JSON").unwrap_or(defaults.report_json),
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }
}

/// Load `.env` (or `env_file`) and only then read `RUST_LOG`, so the file can set it.
fn env_filter(env_file: Option<&Path>) -> EnvFilter {
    match env_file {
        Some(path) => {
            dotenv::from_path(path).ok();
        }
        None => {
            dotenv().ok();
        }
    }
    EnvFilter::from_default_env()
}

/// Initialize tracing and environment
fn init_tracing_and_env() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(env_filter(None))
        .with(fmt::layer().with_target(false))
        .try_init()?;

    Ok(())
}

pub fn run() -> Result<(), Box<dyn Error>> {
    init_tracing_and_env()?;

    let settings = Settings::from_env();
    info!("Settings: {:?}", settings);

    let (customers, hubs) =
        load_or_generate(&settings.customers_csv, &settings.hubs_csv, &settings.hub_id);

    let mut env = ForagingEnv::from_records(
        &customers,
        &hubs,
        &settings.hub_id,
        DISTANCE_COL,
        settings.budget_km,
    )?;

    let points: Vec<_> = env.candidates().iter().map(|c| c.location).collect();
    let to_hub = distances_from(env.hub(), &points)?;
    let round_trip = to_hub.iter().filter(|d| **d * 2.0 <= settings.budget_km).count();
    info!(
        "{} of {} candidates are within a round trip of the hub",
        round_trip,
        to_hub.len()
    );
    if round_trip == 0 && !to_hub.is_empty() {
        warn!("No candidate can be reached and returned from on this budget");
    }

    let mut policies = default_policies();
    let summaries = compare_policies(&mut env, &mut policies, &settings.hub_id, MAX_STEPS)?;

    println!("{}", format_summary(&summaries));

    save_to_csv(&summaries, &settings.report_csv)?;
    save_to_json(&summaries, &settings.report_json)?;
    info!(
        "Wrote {} summaries to {} and {}",
        summaries.len(),
        settings.report_csv,
        settings.report_json
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_when_nothing_set() {
        assert_eq!(Settings::from_lookup(|_| None), Settings::default());
    }

    #[test]
    fn overrides_from_lookup() {
        let vars: HashMap<&str, &str> = [
            ("FORAGE_HUB_ID", "HUB_7"),
            ("FORAGE_BUDGET_KM", " 250.5 "),
            ("FORAGE_CUSTOMERS_CSV", "c.csv"),
        ]
        .into_iter()
        .collect();
        let s = Settings::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(s.hub_id, "HUB_7");
        assert_eq!(s.budget_km, 250.5);
        assert_eq!(s.customers_csv, "c.csv");
        assert_eq!(s.hubs_csv, HUB_CSV_PATH);
    }

    #[test]
    fn log_filter_is_read_from_env_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "RUST_LOG=forage=trace\n").unwrap();

        env::remove_var("RUST_LOG");
        let filter = env_filter(Some(&path));
        env::remove_var("RUST_LOG");

        assert!(filter.to_string().contains("forage=trace"), "got {}", filter);
    }

    #[test]
    fn bad_budget_falls_back() {
        let s = Settings::from_lookup(|k| (k == "FORAGE_BUDGET_KM").then(|| "lots".to_string()));
        assert_eq!(s.budget_km, DEFAULT_BUDGET_KM);
    }
}
