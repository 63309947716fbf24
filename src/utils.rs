/// Utility functions for date formatting and query parsing
use time::{format_description, Date};

use crate::error::ServiceError;

/// Format a calendar date for bucket labels
///
/// Produces the DD/MM/YYYY form the charting frontend expects.
/// Falls back to the default string representation if formatting fails.
pub fn format_date(date: Date) -> String {
    let format = format_description::parse("[day]/[month]/[year]")
        .expect("Failed to create format description");
    date.format(&format).unwrap_or_else(|_| date.to_string())
}

/// Parse a date query parameter in YYYY-MM-DD form
///
/// # Arguments
/// * `value` - Raw query parameter value
/// * `name` - Parameter name, used in the error message
///
/// # Returns
/// The parsed calendar date, or InvalidArgument if the value is unparsable.
pub fn parse_query_date(value: &str, name: &str) -> Result<Date, ServiceError> {
    let format = format_description::parse("[year]-[month]-[day]")
        .expect("Failed to create format description");
    Date::parse(value, &format).map_err(|_| {
        ServiceError::InvalidArgument(format!("unparsable {} '{}', expected YYYY-MM-DD", name, value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn format_date_is_day_month_year_with_zero_padding() {
        assert_eq!(format_date(date!(2024 - 03 - 05)), "05/03/2024");
        assert_eq!(format_date(date!(2024 - 12 - 31)), "31/12/2024");
    }

    #[test]
    fn parse_query_date_accepts_iso_dates() {
        assert_eq!(
            parse_query_date("2024-03-05", "startDate").unwrap(),
            date!(2024 - 03 - 05)
        );
    }

    #[test]
    fn parse_query_date_rejects_garbage() {
        assert!(parse_query_date("05/03/2024", "startDate").is_err());
        assert!(parse_query_date("not-a-date", "endDate").is_err());
        assert!(parse_query_date("", "startDate").is_err());
    }
}
