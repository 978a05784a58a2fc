//! HTTP client for the price prediction service

use crate::constants::{LOCATIONS_PATH, PREDICT_FUTURE_PATH, PREDICT_PRICE_PATH};
use crate::types::{
    CurrentPriceEstimate, FuturePriceQuery, FutureProjection, LocationCatalog, PropertyQuery,
};
use crate::utils::{endpoint_url, format_number};
use anyhow::{bail, Context, Result};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

/// Error body the service returns alongside a 500
#[derive(Deserialize)]
struct ServiceError {
    error: String,
}

/// Client for the three prediction service endpoints.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Clone)]
pub struct PredictionClient {
    http_client: Client,
    base_url: String,
}

impl PredictionClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let http_client = Client::builder()
            .user_agent(concat!("house-price-estimator/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default();
        Self {
            http_client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the names accepted in the `location` field.
    pub async fn get_location_names(&self) -> Result<LocationCatalog> {
        let url = endpoint_url(&self.base_url, LOCATIONS_PATH);
        debug!(url = %url, "Fetching location names");
        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .context("Failed to send get_location_names request")?;

        let response = check_response_status(response).await?;
        response
            .json::<LocationCatalog>()
            .await
            .context("Failed to parse location names response")
    }

    /// Current price estimate. The query goes out form-encoded.
    pub async fn predict_home_price(&self, query: &PropertyQuery) -> Result<CurrentPriceEstimate> {
        let url = endpoint_url(&self.base_url, PREDICT_PRICE_PATH);
        debug!(url = %url, ?query, "Requesting current price");
        let response = self
            .http_client
            .post(&url)
            .form(&form_fields(query))
            .send()
            .await
            .context("Failed to send predict_home_price request")?;

        let response = check_response_status(response).await?;
        response
            .json::<CurrentPriceEstimate>()
            .await
            .context("Failed to parse predict_home_price response")
    }

    /// Future price projection. The query goes out as JSON.
    pub async fn predict_future_price(&self, query: &FuturePriceQuery) -> Result<FutureProjection> {
        let url = endpoint_url(&self.base_url, PREDICT_FUTURE_PATH);
        debug!(url = %url, ?query, "Requesting future price");
        let response = self
            .http_client
            .post(&url)
            .json(query)
            .send()
            .await
            .context("Failed to send predict_future_price request")?;

        let response = check_response_status(response).await?;
        response
            .json::<FutureProjection>()
            .await
            .context("Failed to parse predict_future_price response")
    }
}

/// Form pairs for `/predict_home_price`. Numbers use their display form,
/// so an unparsed square footage goes out as `NaN`.
fn form_fields(query: &PropertyQuery) -> [(&'static str, String); 4] {
    [
        ("total_sqft", format_number(query.total_sqft)),
        ("bhk", query.bhk.to_string()),
        ("bath", query.bath.to_string()),
        ("location", query.location.clone()),
    ]
}

/// Turn non-2xx responses into errors, using the service's `error` field when present.
async fn check_response_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    match serde_json::from_str::<ServiceError>(&body) {
        Ok(err) => bail!("Prediction service error ({}): {}", status, err.error),
        Err(_) => bail!("Prediction service error: {}", status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    fn query() -> PropertyQuery {
        PropertyQuery {
            total_sqft: 1200.0,
            bhk: 2,
            bath: 1,
            location: "Indira Nagar".to_string(),
        }
    }

    #[tokio::test]
    async fn test_get_location_names() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/get_location_names")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"locations": ["1st phase jp nagar", "indira nagar", "whitefield"]}"#)
            .create_async()
            .await;

        let client = PredictionClient::new(server.url());
        let catalog = client.get_location_names().await.unwrap();

        assert_eq!(
            catalog.into_names().unwrap(),
            ["1st phase jp nagar", "indira nagar", "whitefield"]
        );
    }

    #[tokio::test]
    async fn test_predict_home_price_sends_form() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/predict_home_price")
            .match_header("content-type", "application/x-www-form-urlencoded")
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded("total_sqft".into(), "1200".into()),
                Matcher::UrlEncoded("bhk".into(), "2".into()),
                Matcher::UrlEncoded("bath".into(), "1".into()),
                Matcher::UrlEncoded("location".into(), "Indira Nagar".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"estimated_price": 83.5}"#)
            .create_async()
            .await;

        let client = PredictionClient::new(server.url());
        let estimate = client.predict_home_price(&query()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(estimate.estimated_price, 83.5);
    }

    #[tokio::test]
    async fn test_predict_home_price_passes_sentinels() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/predict_home_price")
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded("total_sqft".into(), "NaN".into()),
                Matcher::UrlEncoded("bhk".into(), "-1".into()),
                Matcher::UrlEncoded("bath".into(), "-1".into()),
                Matcher::UrlEncoded("location".into(), "".into()),
            ]))
            .with_status(200)
            .with_body(r#"{"estimated_price": 0}"#)
            .create_async()
            .await;

        let client = PredictionClient::new(server.url());
        let sentinel = PropertyQuery {
            total_sqft: f64::NAN,
            bhk: -1,
            bath: -1,
            location: String::new(),
        };
        client.predict_home_price(&sentinel).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_predict_future_price_sends_json() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/predict_future_price")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(serde_json::json!({
                "total_sqft": 1200.0,
                "bhk": 2,
                "bath": 1,
                "location": "Indira Nagar",
                "horizon_months": 12
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "current_price": 83.5,
                    "future_price": 88.1,
                    "risk": "Low",
                    "expected_growth_percent": 5.51,
                    "recommendation": "Buy now"
                }"#,
            )
            .create_async()
            .await;

        let client = PredictionClient::new(server.url());
        let projection = client
            .predict_future_price(&FuturePriceQuery {
                property: query(),
                horizon_months: Some(12),
            })
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(projection.future_price, 88.1);
        assert_eq!(projection.risk, "Low");
        assert_eq!(projection.recommendation, "Buy now");
    }

    #[tokio::test]
    async fn test_service_error_body_is_reported() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/predict_home_price")
            .with_status(500)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error": "could not convert string to float: 'NaN'"}"#)
            .create_async()
            .await;

        let client = PredictionClient::new(server.url());
        let err = client.predict_home_price(&query()).await.unwrap_err();
        let msg = format!("{:#}", err);

        assert!(msg.contains("500"), "{msg}");
        assert!(msg.contains("could not convert"), "{msg}");
    }

    #[tokio::test]
    async fn test_malformed_payload_is_an_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/predict_future_price")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"current_price": 83.5}"#)
            .create_async()
            .await;

        let client = PredictionClient::new(server.url());
        let err = client
            .predict_future_price(&FuturePriceQuery {
                property: query(),
                horizon_months: Some(6),
            })
            .await
            .unwrap_err();

        assert!(format!("{:#}", err).contains("Failed to parse predict_future_price response"));
    }

    #[tokio::test]
    async fn test_trailing_slash_base_url() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/get_location_names")
            .with_status(200)
            .with_body(r#"{"locations": []}"#)
            .create_async()
            .await;

        let client = PredictionClient::new(format!("{}/", server.url()));
        let catalog = client.get_location_names().await.unwrap();

        mock.assert_async().await;
        assert!(catalog.into_names().is_none());
    }
}
