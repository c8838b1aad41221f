pub mod constant {
    pub const DEFAULT_BUDGET_KM: f64 = 400.0;
    pub const EARTH_RADIUS_KM: f64 = 6371.0;
    pub const SEED: u64 = 64;
    pub const MAX_STEPS: usize = 10_000;

    pub const CUSTOMER_CSV_PATH: &str = "data/customers.csv";
    pub const HUB_CSV_PATH: &str = "data/hubs.csv";
    pub const REPORT_CSV_PATH: &str = "policy_comparison.csv";
    pub const REPORT_JSON_PATH: &str = "policy_comparison.json";
    pub const DEFAULT_HUB_ID: &str = "HUB_1";
    pub const DISTANCE_COL: &str = "dist_to_hub_km";

    // Synthetic fallback, centred on Piura in northern Peru
    pub const SYNTHETIC_CUSTOMER_COUNT: usize = 60;
    pub const SYNTHETIC_HUB: (f64, f64) = (-5.1945, -80.6328);
    pub const SYNTHETIC_SPREAD_DEG: f64 = 0.6;
    pub const SYNTHETIC_MAX_IMPORTANCE: f64 = 10.0;
}
