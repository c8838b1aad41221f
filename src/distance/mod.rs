pub mod haversine;
pub mod matrix;

pub use haversine::{haversine_km, haversine_km_batch};
