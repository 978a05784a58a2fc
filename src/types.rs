//! Common types and data structures

use serde::{Deserialize, Serialize};

/// Property attributes sent with every estimate request.
///
/// `bhk` and `bath` carry the radio group index (1-based), or -1 when
/// nothing is selected. `total_sqft` is NaN when the field did not parse.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyQuery {
    pub total_sqft: f64,
    pub bhk: i32,
    pub bath: i32,
    pub location: String,
}

/// Future price request body (JSON)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FuturePriceQuery {
    #[serde(flatten)]
    pub property: PropertyQuery,
    /// `None` serializes as `null` when the horizon field held no integer
    pub horizon_months: Option<i64>,
}

/// Location list from `/get_location_names`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocationCatalog {
    #[serde(default)]
    pub locations: Option<Vec<String>>,
}

impl LocationCatalog {
    /// Names to show, or `None` when the payload carried nothing usable
    pub fn into_names(self) -> Option<Vec<String>> {
        self.locations.filter(|names| !names.is_empty())
    }
}

/// Response from `/predict_home_price`, price in Lakh
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CurrentPriceEstimate {
    pub estimated_price: f64,
}

/// Response from `/predict_future_price`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FutureProjection {
    pub current_price: f64,
    pub future_price: f64,
    pub risk: String,
    pub expected_growth_percent: f64,
    pub recommendation: String,
}

/// Result of one background request, delivered to the UI thread
#[derive(Debug)]
pub enum Completion {
    Locations(anyhow::Result<LocationCatalog>),
    CurrentPrice(anyhow::Result<CurrentPriceEstimate>),
    FuturePrice {
        /// Horizon text as shown in the "In N months" line
        horizon: String,
        result: anyhow::Result<FutureProjection>,
    },
}
