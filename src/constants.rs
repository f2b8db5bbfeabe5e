use std::time::Duration;

/// User agent string for HTTP requests
pub const USER_AGENT: &str = "nws-weather-server/0.1.0";

/// National Weather Service API base URL
pub const NWS_API_BASE: &str = "https://api.weather.gov";

/// Timeout applied to each outbound request/response cycle
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Maximum number of forecast periods included in rendered output
pub const MAX_FORECAST_PERIODS: usize = 5;
