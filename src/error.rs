use thiserror::Error;

/// Failures surfaced by the weather core.
///
/// The display text of each variant is the exact message callers relay to
/// end users; adapters match on the variant to pick their own protocol's
/// error representation instead of inspecting the text.
#[derive(Debug, Error, PartialEq)]
pub enum WeatherError {
    #[error("Unable to fetch alerts for {state}. Please check the state code and try again.")]
    AlertsUnavailable { state: String },

    #[error("Unable to fetch forecast data for coordinates ({latitude}, {longitude}). The location may be outside the US.")]
    PointLookupFailed { latitude: f64, longitude: f64 },

    #[error("Unable to get forecast URL from weather service.")]
    MissingForecastUrl,

    #[error("Unable to fetch forecast data.")]
    ForecastUnavailable,
}
