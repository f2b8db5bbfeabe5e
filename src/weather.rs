use crate::client::NwsClient;
use crate::constants::{MAX_FORECAST_PERIODS, NWS_API_BASE};
use crate::error::WeatherError;
use crate::formatters::{format_alert, format_period};
use crate::models::{AlertResponse, ForecastResponse, PointsResponse};

/// Separator placed between formatted alert/forecast blocks.
const BLOCK_SEPARATOR: &str = "\n---\n";

/// Weather retrieval core, shared by the MCP and REST adapters.
///
/// Holds no per-call state; any number of calls may run concurrently. Each
/// call performs fresh fetches and is idempotent against an unchanged
/// upstream.
#[derive(Clone)]
pub struct WeatherService {
    client: NwsClient,
    api_base: String,
}

impl WeatherService {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            client: NwsClient::new()?,
            api_base: NWS_API_BASE.to_string(),
        })
    }

    /// Points the service at an alternate API base, for tests.
    pub fn with_api_base(api_base: impl Into<String>) -> anyhow::Result<Self> {
        Ok(Self {
            client: NwsClient::new()?,
            api_base: api_base.into(),
        })
    }

    /// Gets active weather alerts for a US state.
    ///
    /// The state code is uppercased but not otherwise validated; adapters
    /// decide how strictly to check their input before calling.
    pub async fn get_alerts(&self, state: &str) -> Result<String, WeatherError> {
        let url = format!("{}/alerts/active/area/{}", self.api_base, state.to_uppercase());

        let alerts: AlertResponse = self.client.get_json(&url).await.ok_or_else(|| {
            WeatherError::AlertsUnavailable {
                state: state.to_string(),
            }
        })?;

        if alerts.features.is_empty() {
            return Ok(format!("No active alerts for {}", state));
        }

        let blocks: Vec<String> = alerts.features.iter().map(format_alert).collect();
        Ok(format!(
            "Active alerts for {}:\n{}",
            state,
            blocks.join(BLOCK_SEPARATOR)
        ))
    }

    /// Gets the weather forecast for a location.
    ///
    /// Two sequential fetches: resolve the grid point for the coordinates,
    /// then fetch the forecast resource it names. Every failure point is
    /// terminal.
    pub async fn get_forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<String, WeatherError> {
        let points_url = format!("{}/points/{},{}", self.api_base, latitude, longitude);

        let points: PointsResponse = self.client.get_json(&points_url).await.ok_or(
            WeatherError::PointLookupFailed {
                latitude,
                longitude,
            },
        )?;

        let forecast_url = points
            .properties
            .forecast
            .ok_or(WeatherError::MissingForecastUrl)?;

        let forecast: ForecastResponse = self
            .client
            .get_json(&forecast_url)
            .await
            .ok_or(WeatherError::ForecastUnavailable)?;

        let periods = forecast.properties.periods;
        if periods.is_empty() {
            return Ok("No forecast periods available.".to_string());
        }

        let blocks: Vec<String> = periods
            .iter()
            .take(MAX_FORECAST_PERIODS)
            .map(format_period)
            .collect();
        Ok(format!(
            "Weather forecast for ({}, {}):\n{}",
            latitude,
            longitude,
            blocks.join(BLOCK_SEPARATOR)
        ))
    }
}
