//! Application constants and configuration

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";
pub const LOCATIONS_PATH: &str = "/get_location_names";
pub const PREDICT_PRICE_PATH: &str = "/predict_home_price";
pub const PREDICT_FUTURE_PATH: &str = "/predict_future_price";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "House Price Estimator";

/// Horizon sent when the months field is left blank
pub const DEFAULT_HORIZON_MONTHS: i64 = 12;

/// Number of options in the BHK and bath radio groups
pub const BHK_CHOICES: usize = 5;
pub const BATH_CHOICES: usize = 5;

/// Unit suffix for current price estimates (1 Lakh = 100,000)
pub const PRICE_UNIT: &str = "Lakh";
