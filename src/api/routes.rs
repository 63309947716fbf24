/// HTTP routes for the indicator API
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use log::debug;
use serde::Deserialize;
use time::OffsetDateTime;
use tower_http::cors::{Any, CorsLayer};

use crate::aggregator;
use crate::error::ServiceError;
use crate::models::{BucketDto, Granularity, SampleDto, SampleField, Window};
use crate::source::ReadingSource;
use crate::utils::parse_query_date;

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn ReadingSource>,
}

/// Build the router. The whole API is read-only and unauthenticated, so
/// cross-origin requests are allowed from anywhere.
pub fn router(source: Arc<dyn ReadingSource>) -> Router {
    Router::new()
        .route("/indicators", get(get_indicators_by_range))
        .route(
            "/indicators/GetAllTemperatureData",
            get(get_all_temperature_data),
        )
        .route(
            "/indicators/GetAllHumidityData",
            get(get_all_humidity_data),
        )
        .route("/indicators/GetData", get(get_indicators_by_window))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(AppState { source })
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        match self {
            ServiceError::InvalidArgument(reason) => {
                (StatusCode::BAD_REQUEST, reason).into_response()
            }
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    #[serde(rename = "startDate")]
    start_date: Option<String>,
    #[serde(rename = "endDate")]
    end_date: Option<String>,
    step: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct WindowQuery {
    param: Option<String>,
}

/// GET /indicators?startDate=..&endDate=..&step=..
///
/// Aggregates readings between two calendar dates, inclusive. An inverted
/// range yields an empty array; missing or unrecognized parameters are 400s.
async fn get_indicators_by_range(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<Vec<BucketDto>>, ServiceError> {
    let start_date = require(query.start_date.as_deref(), "startDate")?;
    let end_date = require(query.end_date.as_deref(), "endDate")?;
    let step = require(query.step.as_deref(), "step")?;

    let start = parse_query_date(start_date, "startDate")?;
    let end = parse_query_date(end_date, "endDate")?;
    let granularity = Granularity::parse(step)?;

    debug!("Range query {} - {} step {:?}", start, end, granularity);

    let buckets = aggregator::select_by_range(state.source.all_readings(), start, end, granularity);
    Ok(Json(buckets))
}

/// GET /indicators/GetData?param=..
///
/// Aggregates readings in a relative window anchored at the current time.
async fn get_indicators_by_window(
    State(state): State<AppState>,
    Query(query): Query<WindowQuery>,
) -> Result<Json<Vec<BucketDto>>, ServiceError> {
    let param = require(query.param.as_deref(), "param")?;
    let window = Window::parse(param)?;

    debug!("Window query {:?}", window);

    let buckets = aggregator::select_by_window(
        state.source.all_readings(),
        window,
        OffsetDateTime::now_utc(),
    );
    Ok(Json(buckets))
}

/// GET /indicators/GetAllTemperatureData
async fn get_all_temperature_data(State(state): State<AppState>) -> Json<Vec<SampleDto>> {
    Json(aggregator::project_series(
        state.source.all_readings(),
        SampleField::Temperature,
    ))
}

/// GET /indicators/GetAllHumidityData
async fn get_all_humidity_data(State(state): State<AppState>) -> Json<Vec<SampleDto>> {
    Json(aggregator::project_series(
        state.source.all_readings(),
        SampleField::Humidity,
    ))
}

fn require<'a>(value: Option<&'a str>, name: &str) -> Result<&'a str, ServiceError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ServiceError::InvalidArgument(format!(
            "missing parameter '{}'",
            name
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_and_empty_parameters_are_rejected() {
        assert!(matches!(
            require(None, "startDate"),
            Err(ServiceError::InvalidArgument(_))
        ));
        assert!(matches!(
            require(Some(""), "step"),
            Err(ServiceError::InvalidArgument(_))
        ));
        assert_eq!(require(Some("2024-03-05"), "startDate").unwrap(), "2024-03-05");
    }

    #[test]
    fn invalid_argument_maps_to_bad_request() {
        let response =
            ServiceError::InvalidArgument("missing parameter 'param'".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
