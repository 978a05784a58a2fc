//! Prediction requests and their completion handling
//!
//! Every request runs on the app's runtime and reports back through the
//! completion channel. Completions are applied in arrival order, so when
//! several requests target the same output the last response wins.

use super::App;
use crate::api::PredictionClient;
use crate::constants::DEFAULT_API_BASE_URL;
use crate::types::Completion;
use eframe::egui;
use std::future::Future;
use tracing::{debug, error, info, warn};

impl App {
    /// Fetch location names and repopulate the dropdown.
    pub fn load_locations(&mut self, ctx: &egui::Context) {
        info!(api = %self.client.base_url(), "Loading location names");
        let client = self.client.clone();
        self.spawn_request(ctx, async move {
            Completion::Locations(client.get_location_names().await)
        });
    }

    /// Send the form for a current price estimate.
    pub fn estimate_current_price(&mut self, ctx: &egui::Context) {
        let query = self.form.property_query();
        info!(?query, "Estimate price clicked");
        let client = self.client.clone();
        self.spawn_request(ctx, async move {
            Completion::CurrentPrice(client.predict_home_price(&query).await)
        });
    }

    /// Send the form plus horizon for a future price projection.
    pub fn estimate_future_price(&mut self, ctx: &egui::Context) {
        let horizon = self.form.horizon_text();
        let query = self.form.future_query();
        info!(?query, "Estimate future price clicked");
        let client = self.client.clone();
        self.spawn_request(ctx, async move {
            let result = client.predict_future_price(&query).await;
            Completion::FuturePrice { horizon, result }
        });
    }

    /// Point the client at a new base address, persist it and reload locations.
    pub fn apply_api_base_url(&mut self, ctx: &egui::Context) {
        let trimmed = self.api_base_url_str.trim();
        let url = if trimmed.is_empty() {
            DEFAULT_API_BASE_URL
        } else {
            trimmed
        }
        .to_string();
        info!(api = %url, "Prediction service address changed");
        self.api_base_url_str = url.clone();
        self.client = PredictionClient::new(url);
        self.save_settings();
        self.load_locations(ctx);
    }

    fn spawn_request<F>(&mut self, ctx: &egui::Context, request: F)
    where
        F: Future<Output = Completion> + Send + 'static,
    {
        self.in_flight += 1;
        let tx = self.completions_tx.clone();
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            let completion = request.await;
            // Receiver lives as long as the app
            let _ = tx.send(completion);
            ctx.request_repaint();
        });
    }

    /// Apply every completion that has arrived since the last frame.
    pub fn poll_completions(&mut self) {
        while let Ok(completion) = self.completions_rx.try_recv() {
            self.apply_completion(completion);
        }
    }

    pub(crate) fn apply_completion(&mut self, completion: Completion) {
        self.in_flight = self.in_flight.saturating_sub(1);
        match completion {
            Completion::Locations(Ok(catalog)) => match catalog.into_names() {
                Some(names) => {
                    info!(count = names.len(), "Got response for location names");
                    self.form.locations.replace_options(names);
                }
                None => debug!("Location names response was empty, keeping options"),
            },
            Completion::Locations(Err(e)) => {
                let msg = format!("{:#}", e);
                warn!(error = %msg, "Failed to load location names");
            }
            Completion::CurrentPrice(Ok(estimate)) => {
                info!(price = estimate.estimated_price, "Current price estimate received");
                self.outputs.show_current(&estimate);
            }
            Completion::CurrentPrice(Err(e)) => {
                let msg = format!("{:#}", e);
                warn!(error = %msg, "Current price request failed");
            }
            Completion::FuturePrice {
                horizon,
                result: Ok(projection),
            } => {
                info!(
                    horizon = %horizon,
                    future_price = projection.future_price,
                    risk = %projection.risk,
                    "Future price projection received"
                );
                self.outputs.show_future(&horizon, &projection);
            }
            Completion::FuturePrice { result: Err(e), .. } => {
                let msg = format!("{:#}", e);
                error!(error = %msg, "Future price request failed");
                self.alerts
                    .push_back(format!("Error getting future prediction: {}", msg));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::Outputs;
    use crate::settings::Settings;
    use crate::types::{CurrentPriceEstimate, FutureProjection, LocationCatalog};
    use anyhow::anyhow;
    use mockito::{Matcher, Server};
    use std::time::Duration;
    use tempfile::TempDir;

    fn app_for(base_url: &str, dir: &TempDir) -> App {
        let settings = Settings {
            api_base_url: base_url.to_string(),
            ..Settings::default()
        };
        App::with_settings(settings, dir.path().to_path_buf()).unwrap()
    }

    fn wait_for_completion(app: &mut App) {
        let completion = app
            .completions_rx
            .recv_timeout(Duration::from_secs(10))
            .expect("request should complete");
        app.apply_completion(completion);
    }

    fn catalog(names: &[&str]) -> LocationCatalog {
        LocationCatalog {
            locations: Some(names.iter().map(|n| n.to_string()).collect()),
        }
    }

    fn projection() -> FutureProjection {
        FutureProjection {
            current_price: 83.5,
            future_price: 88.1,
            risk: "Low".into(),
            expected_growth_percent: 5.51,
            recommendation: "Buy now".into(),
        }
    }

    #[test]
    fn locations_replace_previous_options_in_order() {
        let dir = TempDir::new().unwrap();
        let mut app = app_for("http://127.0.0.1:1", &dir);
        app.form
            .locations
            .replace_options(vec!["stale 1".into(), "stale 2".into(), "stale 3".into()]);

        app.apply_completion(Completion::Locations(Ok(catalog(&[
            "whitefield",
            "indira nagar",
        ]))));

        assert_eq!(app.form.locations.options(), ["whitefield", "indira nagar"]);
    }

    #[test]
    fn empty_or_failed_location_fetch_keeps_options() {
        let dir = TempDir::new().unwrap();
        let mut app = app_for("http://127.0.0.1:1", &dir);
        app.form
            .locations
            .replace_options(vec!["whitefield".into(), "indira nagar".into()]);

        app.apply_completion(Completion::Locations(Ok(LocationCatalog::default())));
        app.apply_completion(Completion::Locations(Ok(catalog(&[]))));
        app.apply_completion(Completion::Locations(Err(anyhow!("connection refused"))));

        assert_eq!(app.form.locations.options(), ["whitefield", "indira nagar"]);
        assert!(app.alerts.is_empty());
    }

    #[test]
    fn current_price_failure_is_silent() {
        let dir = TempDir::new().unwrap();
        let mut app = app_for("http://127.0.0.1:1", &dir);
        app.apply_completion(Completion::CurrentPrice(Ok(CurrentPriceEstimate {
            estimated_price: 70.0,
        })));

        app.apply_completion(Completion::CurrentPrice(Err(anyhow!("timeout"))));

        assert_eq!(app.outputs.estimated_price.as_deref(), Some("70 Lakh"));
        assert!(app.alerts.is_empty());
    }

    #[test]
    fn future_price_failure_alerts_and_keeps_outputs() {
        let dir = TempDir::new().unwrap();
        let mut app = app_for("http://127.0.0.1:1", &dir);
        app.apply_completion(Completion::FuturePrice {
            horizon: "12".into(),
            result: Ok(projection()),
        });
        let before = app.outputs.clone();

        app.apply_completion(Completion::FuturePrice {
            horizon: "12".into(),
            result: Err(anyhow!("timeout")),
        });

        assert_eq!(app.outputs, before);
        assert_eq!(app.alerts.len(), 1);
        assert!(app.alerts[0].contains("timeout"));
        assert!(app.alerts[0].starts_with("Error getting future prediction: "));
    }

    #[test]
    fn last_response_to_arrive_wins() {
        let dir = TempDir::new().unwrap();
        let mut app = app_for("http://127.0.0.1:1", &dir);

        // Second click's response lands first
        app.apply_completion(Completion::CurrentPrice(Ok(CurrentPriceEstimate {
            estimated_price: 91.0,
        })));
        app.apply_completion(Completion::CurrentPrice(Ok(CurrentPriceEstimate {
            estimated_price: 83.5,
        })));

        assert_eq!(app.outputs.estimated_price.as_deref(), Some("83.5 Lakh"));
    }

    #[test]
    fn estimate_current_price_round_trip() {
        let mut server = Server::new();
        let mock = server
            .mock("POST", "/predict_home_price")
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded("total_sqft".into(), "1200".into()),
                Matcher::UrlEncoded("bhk".into(), "2".into()),
                Matcher::UrlEncoded("bath".into(), "1".into()),
                Matcher::UrlEncoded("location".into(), "Indira Nagar".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"estimated_price": 83.5}"#)
            .create();

        let dir = TempDir::new().unwrap();
        let mut app = app_for(&server.url(), &dir);
        app.form.sqft = "1200".into();
        app.form.bhk.select(1);
        app.form.bath.select(0);
        app.form
            .locations
            .replace_options(vec!["Indira Nagar".into()]);

        let ctx = egui::Context::default();
        app.estimate_current_price(&ctx);
        assert!(app.is_busy());
        wait_for_completion(&mut app);

        mock.assert();
        assert!(!app.is_busy());
        assert!(app
            .outputs
            .estimated_price
            .as_deref()
            .unwrap()
            .contains("83.5 Lakh"));
    }

    #[test]
    fn estimate_future_price_sends_default_horizon() {
        let mut server = Server::new();
        let mock = server
            .mock("POST", "/predict_future_price")
            .match_body(Matcher::PartialJson(serde_json::json!({
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
            .create();

        let dir = TempDir::new().unwrap();
        let mut app = app_for(&server.url(), &dir);
        app.form.sqft = "1200".into();

        app.estimate_future_price(&egui::Context::default());
        wait_for_completion(&mut app);

        mock.assert();
        assert_eq!(
            app.outputs,
            Outputs {
                estimated_price: None,
                future_current: Some("Current: ₹ 83.5".into()),
                future_price: Some("In 12 months: ₹ 88.1".into()),
                risk: Some("Risk: Low (5.51%)".into()),
                recommendation: Some("Action: Buy now".into()),
            }
        );
    }

    #[test]
    fn unreachable_service_alerts_on_future_price_only() {
        let dir = TempDir::new().unwrap();
        let mut app = app_for("http://127.0.0.1:1", &dir);
        let ctx = egui::Context::default();

        app.load_locations(&ctx);
        wait_for_completion(&mut app);
        app.estimate_current_price(&ctx);
        wait_for_completion(&mut app);
        assert!(app.alerts.is_empty());
        assert_eq!(app.outputs, Outputs::default());

        app.estimate_future_price(&ctx);
        wait_for_completion(&mut app);
        assert_eq!(app.alerts.len(), 1);
        assert!(!app.outputs.has_future());
    }

    #[test]
    fn changing_base_url_reloads_locations() {
        let mut server = Server::new();
        let mock = server
            .mock("GET", "/get_location_names")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"locations": ["hebbal", "whitefield"]}"#)
            .create();

        let dir = TempDir::new().unwrap();
        let mut app = app_for("http://127.0.0.1:1", &dir);
        app.api_base_url_str = format!("  {}/ ", server.url());

        app.apply_api_base_url(&egui::Context::default());
        wait_for_completion(&mut app);

        mock.assert();
        assert_eq!(app.form.locations.options(), ["hebbal", "whitefield"]);
        let saved = Settings::load(dir.path());
        assert_eq!(saved.api_base_url, format!("{}/", server.url()));
    }

    #[test]
    fn blank_base_url_falls_back_to_default() {
        let dir = TempDir::new().unwrap();
        let mut app = app_for("http://127.0.0.1:1", &dir);
        app.api_base_url_str = "   ".into();

        app.apply_api_base_url(&egui::Context::default());

        assert_eq!(app.client.base_url(), DEFAULT_API_BASE_URL);
        assert_eq!(app.api_base_url_str, DEFAULT_API_BASE_URL);
    }
}
