use serde::Serialize;
use time::OffsetDateTime;

use crate::error::ServiceError;

/// One raw timestamped sensor sample, read-only once produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub timestamp: OffsetDateTime,
    pub temperature: f32,
    pub humidity: f32,
}

/// One aggregated bucket: all readings sharing a group key, averaged.
///
/// Field names on the wire are PascalCase because the charting frontend
/// consumes them as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BucketDto {
    #[serde(rename = "DateTime")]
    pub date_time: String,
    #[serde(rename = "Temperature")]
    pub temperature: f32,
    #[serde(rename = "Humidity")]
    pub humidity: f32,
}

/// One raw sample projected to a single numeric field, unaggregated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleDto {
    #[serde(rename = "DateTime", with = "time::serde::rfc3339")]
    pub date_time: OffsetDateTime,
    #[serde(rename = "Value")]
    pub value: f32,
}

/// Time unit used to form group keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Hour,
    Day,
    Month,
}

impl Granularity {
    /// Parse a `step` query token. Tokens mirror the historical step names
    /// the frontend already sends; anything else is a client error.
    pub fn parse(token: &str) -> Result<Self, ServiceError> {
        match token.to_ascii_lowercase().as_str() {
            "hours" => Ok(Granularity::Hour),
            "day" => Ok(Granularity::Day),
            "months" => Ok(Granularity::Month),
            _ => Err(ServiceError::InvalidArgument(format!(
                "unrecognized step '{}', expected one of: hours, day, months",
                token
            ))),
        }
    }
}

/// A relative, now-anchored time range shorthand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    Last12Hours,
    LastDay,
    LastWeek,
    LastMonth,
    LastYear,
}

impl Window {
    /// Parse a `param` query token for the relative-window endpoint.
    pub fn parse(token: &str) -> Result<Self, ServiceError> {
        match token.to_ascii_lowercase().as_str() {
            "hours" => Ok(Window::Last12Hours),
            "day" => Ok(Window::LastDay),
            "week" => Ok(Window::LastWeek),
            "months" => Ok(Window::LastMonth),
            "year" => Ok(Window::LastYear),
            _ => Err(ServiceError::InvalidArgument(format!(
                "unrecognized window '{}', expected one of: hours, day, week, months, year",
                token
            ))),
        }
    }
}

/// Which numeric field a raw-series projection exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleField {
    Temperature,
    Humidity,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn granularity_tokens_are_case_insensitive() {
        assert_eq!(Granularity::parse("Hours").unwrap(), Granularity::Hour);
        assert_eq!(Granularity::parse("day").unwrap(), Granularity::Day);
        assert_eq!(Granularity::parse("MONTHS").unwrap(), Granularity::Month);
    }

    #[test]
    fn unrecognized_granularity_token_is_rejected() {
        assert!(Granularity::parse("week").is_err());
        assert!(Granularity::parse("").is_err());
    }

    #[test]
    fn window_tokens_map_to_relative_ranges() {
        assert_eq!(Window::parse("hours").unwrap(), Window::Last12Hours);
        assert_eq!(Window::parse("Day").unwrap(), Window::LastDay);
        assert_eq!(Window::parse("week").unwrap(), Window::LastWeek);
        assert_eq!(Window::parse("months").unwrap(), Window::LastMonth);
        assert_eq!(Window::parse("year").unwrap(), Window::LastYear);
        assert!(Window::parse("decade").is_err());
    }

    #[test]
    fn bucket_dto_serializes_with_pascal_case_fields() {
        let dto = BucketDto {
            date_time: "05/03/2024".to_string(),
            temperature: 21.5,
            humidity: 44.0,
        };
        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["DateTime"], "05/03/2024");
        assert_eq!(value["Temperature"], 21.5);
        assert_eq!(value["Humidity"], 44.0);
    }

    #[test]
    fn sample_dto_serializes_timestamp_as_rfc3339() {
        let dto = SampleDto {
            date_time: datetime!(2024-03-05 14:07:00 UTC),
            value: 18.25,
        };
        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["DateTime"], "2024-03-05T14:07:00Z");
        assert_eq!(value["Value"], 18.25);
    }
}
