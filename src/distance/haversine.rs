use tracing::trace;

use crate::config::constant::EARTH_RADIUS_KM;
use crate::domain::{ForageError, GeoPoint, Result};

/// Great-circle distance in km between two points given in degrees.
pub fn haversine_km(from: GeoPoint, to: GeoPoint) -> f64 {
    haversine_raw(from.lat, from.lon, to.lat, to.lon)
}

fn haversine_raw(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1 = lat1.to_radians();
    let lon1 = lon1.to_radians();
    let lat2 = lat2.to_radians();
    let lon2 = lon2.to_radians();

    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Element-wise haversine over four equal-length slices.
pub fn haversine_km_batch(lat1: &[f64], lon1: &[f64], lat2: &[f64], lon2: &[f64]) -> Result<Vec<f64>> {
    let expected = lat1.len();
    for found in [lon1.len(), lat2.len(), lon2.len()] {
        if found != expected {
            return Err(ForageError::ShapeMismatch { expected, found });
        }
    }

    trace!("Computing {} haversine distances", expected);

    Ok((0..expected)
        .map(|i| haversine_raw(lat1[i], lon1[i], lat2[i], lon2[i]))
        .collect())
}
