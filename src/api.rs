use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::weather::WeatherService;

type ApiError = (StatusCode, Json<Value>);

/// REST adapter exposing the weather core as HTTP endpoints.
pub fn router(service: WeatherService) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/alerts/:state", get(alerts))
        .route("/forecast", post(forecast))
        .with_state(service)
}

fn error_response(status: StatusCode, detail: impl Into<String>) -> ApiError {
    (status, Json(json!({ "detail": detail.into() })))
}

async fn root() -> Json<Value> {
    Json(json!({
        "name": "Weather API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "alerts": "/alerts/{state}",
            "forecast": "/forecast",
        },
    }))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

async fn alerts(
    State(service): State<WeatherService>,
    Path(state): Path<String>,
) -> Result<Json<Value>, ApiError> {
    if state.len() != 2 {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "State must be a two-letter code",
        ));
    }

    let state = state.to_uppercase();
    let alerts = service
        .get_alerts(&state)
        .await
        .map_err(|e| error_response(StatusCode::SERVICE_UNAVAILABLE, e.to_string()))?;

    Ok(Json(json!({ "state": state, "alerts": alerts })))
}

#[derive(Debug, Deserialize)]
struct ForecastRequest {
    latitude: f64,
    longitude: f64,
}

async fn forecast(
    State(service): State<WeatherService>,
    Json(request): Json<ForecastRequest>,
) -> Result<Json<Value>, ApiError> {
    if !(-90.0..=90.0).contains(&request.latitude) {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "Latitude must be between -90 and 90",
        ));
    }
    if !(-180.0..=180.0).contains(&request.longitude) {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "Longitude must be between -180 and 180",
        ));
    }

    let forecast = service
        .get_forecast(request.latitude, request.longitude)
        .await
        .map_err(|e| error_response(StatusCode::SERVICE_UNAVAILABLE, e.to_string()))?;

    Ok(Json(json!({
        "latitude": request.latitude,
        "longitude": request.longitude,
        "forecast": forecast,
    })))
}
