//! Compile-time application settings.
//!
//! There is no runtime configuration file: the dashboard runs entirely in the
//! browser against the bundled mock dataset.

pub struct AppConfig;

impl AppConfig {
    /// localStorage key of the signed-in user record
    pub const SESSION_STORAGE_KEY: &'static str = "fmcg_auth_user";

    /// Simulated upload round-trip
    pub const UPLOAD_DELAY_MS: u32 = 2000;

    pub const ALERT_FEED_SIZE: usize = 5;

    /// Outlets and SKUs shown in the penetration heatmap
    pub const PENETRATION_GRID: usize = 6;

    /// Trailing points of a series that carry a forecast value
    pub const FORECAST_POINTS: usize = 7;

    pub const ANALYTICS_WINDOW_DAYS: u64 = 60;

    /// Longest custom range, counted in days with both ends included
    pub const MAX_WINDOW_DAYS: u64 = 366;

    /// Average pack price used to derive quantity from revenue
    pub const AVERAGE_UNIT_PRICE: f64 = 45.0;

    /// Lowest achievement that still counts as "near target"
    pub const NEAR_TARGET_PERCENT: i64 = 80;
}
