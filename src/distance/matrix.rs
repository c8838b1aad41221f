use tracing::{debug, info};

use super::haversine::haversine_km_batch;
use crate::domain::{GeoPoint, Result};

/// Build a full haversine distance matrix for `points`, row by row.
pub fn create_dm(points: &[GeoPoint]) -> Result<Vec<Vec<f64>>> {
    info!("Creating haversine distance matrix for {} points", points.len());

    let lats: Vec<f64> = points.iter().map(|p| p.lat).collect();
    let lons: Vec<f64> = points.iter().map(|p| p.lon).collect();

    let mut dm = Vec::with_capacity(points.len());
    for origin in points {
        let origin_lats = vec![origin.lat; points.len()];
        let origin_lons = vec![origin.lon; points.len()];
        dm.push(haversine_km_batch(&origin_lats, &origin_lons, &lats, &lons)?);
    }

    Ok(dm)
}

/// Distances from `origin` to every point, e.g. a customer's distance to its hub.
pub fn distances_from(origin: GeoPoint, points: &[GeoPoint]) -> Result<Vec<f64>> {
    let lats: Vec<f64> = points.iter().map(|p| p.lat).collect();
    let lons: Vec<f64> = points.iter().map(|p| p.lon).collect();
    haversine_km_batch(&vec![origin.lat; points.len()], &vec![origin.lon; points.len()], &lats, &lons)
}

// Print distance matrix for debugging
pub fn print_dist_matrix(dist_m: &[Vec<f64>]) {
    debug!("Distance matrix:");
    for row in dist_m {
        debug!("{:?}", row);
    }
}
