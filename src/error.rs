use thiserror::Error;

/// Failures surfaced by the indicator API.
///
/// Everything here is a client error: the aggregation itself is a pure
/// computation with nothing transient to retry. An inverted date range is
/// deliberately not represented here, it yields an empty result instead.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
