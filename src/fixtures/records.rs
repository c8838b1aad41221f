use std::path::Path;

use csv::ReaderBuilder;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::config::constant::{
    SEED, SYNTHETIC_CUSTOMER_COUNT, SYNTHETIC_HUB, SYNTHETIC_MAX_IMPORTANCE, SYNTHETIC_SPREAD_DEG,
};
use crate::domain::{CustomerRecord, HubRecord, Result};

fn read_records<T: DeserializeOwned>(csv_path: &Path) -> Result<Vec<T>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(csv_path)?;

    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}

/// Reads the customer table. Needs `CUSTOMER_ID, LATTUD, LNGTUD, w_importance, assigned_hub`.
pub fn read_customers_from_csv(csv_path: impl AsRef<Path>) -> Result<Vec<CustomerRecord>> {
    let customers: Vec<CustomerRecord> = read_records(csv_path.as_ref())?;
    info!(
        "Loaded {} customers from {}",
        customers.len(),
        csv_path.as_ref().display()
    );
    Ok(customers)
}

/// Reads the hub table. Needs `HUB_ID, LATTUD, LNGTUD`.
pub fn read_hubs_from_csv(csv_path: impl AsRef<Path>) -> Result<Vec<HubRecord>> {
    let hubs: Vec<HubRecord> = read_records(csv_path.as_ref())?;
    info!("Loaded {} hubs from {}", hubs.len(), csv_path.as_ref().display());
    Ok(hubs)
}

/// Seeded synthetic data set: one hub with `count` customers scattered around it.
pub fn generate_synthetic(hub_id: &str, count: usize, seed: u64) -> (Vec<CustomerRecord>, Vec<HubRecord>) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let (hub_lat, hub_lon) = SYNTHETIC_HUB;

    let customers = (0..count)
        .map(|i| CustomerRecord {
            customer_id: format!("C{:04}", i),
            lat: hub_lat + rng.gen_range(-SYNTHETIC_SPREAD_DEG..SYNTHETIC_SPREAD_DEG),
            lon: hub_lon + rng.gen_range(-SYNTHETIC_SPREAD_DEG..SYNTHETIC_SPREAD_DEG),
            importance: rng.gen_range(0.0..SYNTHETIC_MAX_IMPORTANCE),
            assigned_hub: hub_id.to_string(),
        })
        .collect();

    let hubs = vec![HubRecord {
        hub_id: hub_id.to_string(),
        lat: hub_lat,
        lon: hub_lon,
    }];

    (customers, hubs)
}

/// Load both tables, falling back to synthetic data when either file can't be read.
pub fn load_or_generate(
    customer_csv: &str,
    hub_csv: &str,
    hub_id: &str,
) -> (Vec<CustomerRecord>, Vec<HubRecord>) {
    match (read_customers_from_csv(customer_csv), read_hubs_from_csv(hub_csv)) {
        (Ok(customers), Ok(hubs)) => (customers, hubs),
        (Err(err), _) | (_, Err(err)) => {
            warn!(
                "Failed to read {} / {}: {}. Falling back to synthetic data.",
                customer_csv, hub_csv, err
            );
            generate_synthetic(hub_id, SYNTHETIC_CUSTOMER_COUNT, SEED)
        }
    }
}
