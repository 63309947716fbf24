/// Time-bucket aggregation over sensor readings
use std::collections::HashMap;
use time::{Date, Duration, Month, OffsetDateTime};

use crate::models::{BucketDto, Granularity, Reading, SampleDto, SampleField, Window};
use crate::utils::format_date;

/// Group key implied by a granularity.
///
/// Month keys carry no year on purpose: readings from the same month of
/// different years share a bucket. Downstream consumers rely on that shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum GroupKey {
    Hour(Date, u8),
    Day(Date),
    Month(u8),
}

/// Select readings whose calendar date falls within [start, end], both ends
/// inclusive, and average them per granularity bucket.
///
/// An inverted range (end before start) is a valid "no data" query and
/// returns an empty vector, not an error.
pub fn select_by_range(
    readings: &[Reading],
    start: Date,
    end: Date,
    granularity: Granularity,
) -> Vec<BucketDto> {
    if end < start {
        return Vec::new();
    }

    let range: Vec<&Reading> = readings
        .iter()
        .filter(|r| {
            let date = r.timestamp.date();
            date >= start && date <= end
        })
        .collect();

    group_readings(&range, granularity)
}

/// Select readings from a now-anchored relative window and average them.
///
/// The caller supplies `now`; handlers pass the current UTC time. The window
/// has no upper bound, nothing newer than `now` exists in an append-only
/// source. Short windows (12 hours, day) group by hour, the longer ones by
/// day.
pub fn select_by_window(
    readings: &[Reading],
    window: Window,
    now: OffsetDateTime,
) -> Vec<BucketDto> {
    let (boundary, granularity) = window_boundary(window, now);

    let range: Vec<&Reading> = readings.iter().filter(|r| r.timestamp >= boundary).collect();

    group_readings(&range, granularity)
}

/// Project every reading to a flat (timestamp, value) series for one field.
/// No filtering, no aggregation, original order preserved.
pub fn project_series(readings: &[Reading], field: SampleField) -> Vec<SampleDto> {
    readings
        .iter()
        .map(|r| SampleDto {
            date_time: r.timestamp,
            value: match field {
                SampleField::Temperature => r.temperature,
                SampleField::Humidity => r.humidity,
            },
        })
        .collect()
}

/// Lower boundary and implied grouping granularity for a relative window.
fn window_boundary(window: Window, now: OffsetDateTime) -> (OffsetDateTime, Granularity) {
    match window {
        // Exact timestamp, not truncated to a date boundary.
        Window::Last12Hours => (now - Duration::hours(12), Granularity::Hour),
        Window::LastDay => (start_of_day(now.date()), Granularity::Hour),
        Window::LastWeek => {
            // Week starts on Sunday.
            let days_into_week = now.date().weekday().number_days_from_sunday();
            let week_start = now.date() - Duration::days(days_into_week as i64);
            (start_of_day(week_start), Granularity::Day)
        }
        Window::LastMonth => {
            let first = now
                .date()
                .replace_day(1)
                .expect("day 1 is valid in every month");
            (start_of_day(first), Granularity::Day)
        }
        Window::LastYear => {
            let first = Date::from_calendar_date(now.year(), Month::January, 1)
                .expect("January 1st is valid in every year");
            (start_of_day(first), Granularity::Day)
        }
    }
}

fn start_of_day(date: Date) -> OffsetDateTime {
    date.midnight().assume_utc()
}

struct BucketAccumulator {
    key: GroupKey,
    temperature_sum: f32,
    humidity_sum: f32,
    count: u32,
}

/// Group a filtered range by granularity key and compute per-bucket means.
///
/// Buckets come out in first-seen order over the input. The source hands us
/// readings in ascending chronological order, so in practice the buckets are
/// chronological too, which the chart consumers assume.
fn group_readings(range: &[&Reading], granularity: Granularity) -> Vec<BucketDto> {
    let mut index: HashMap<GroupKey, usize> = HashMap::new();
    let mut groups: Vec<BucketAccumulator> = Vec::new();

    for reading in range {
        let key = group_key(reading, granularity);
        let slot = match index.get(&key) {
            Some(&i) => i,
            None => {
                groups.push(BucketAccumulator {
                    key: key.clone(),
                    temperature_sum: 0.0,
                    humidity_sum: 0.0,
                    count: 0,
                });
                index.insert(key, groups.len() - 1);
                groups.len() - 1
            }
        };

        let group = &mut groups[slot];
        group.temperature_sum += reading.temperature;
        group.humidity_sum += reading.humidity;
        group.count += 1;
    }

    groups
        .into_iter()
        .map(|g| {
            let count = g.count as f32;
            BucketDto {
                date_time: bucket_label(&g.key),
                temperature: g.temperature_sum / count,
                humidity: g.humidity_sum / count,
            }
        })
        .collect()
}

fn group_key(reading: &Reading, granularity: Granularity) -> GroupKey {
    match granularity {
        Granularity::Hour => GroupKey::Hour(reading.timestamp.date(), reading.timestamp.hour()),
        Granularity::Day => GroupKey::Day(reading.timestamp.date()),
        Granularity::Month => GroupKey::Month(u8::from(reading.timestamp.month())),
    }
}

fn bucket_label(key: &GroupKey) -> String {
    match key {
        // Hour is a plain integer, no zero padding.
        GroupKey::Hour(date, hour) => format!("{}, h:{}", format_date(*date), hour),
        GroupKey::Day(date) => format_date(*date),
        GroupKey::Month(month) => month.to_string(),
    }
}
