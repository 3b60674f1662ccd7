//! Client for the data.gov.sg air-temperature and relative-humidity endpoints.

mod client;
mod types;

pub use client::{DEFAULT_BASE_URL, WeatherClient, WeatherSource};
pub use types::{Metric, ReadingSet, StationReading};

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};

/// Local timestamp format accepted by the API's `date_time` parameter.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Singapore Standard Time, UTC+08:00 all year round.
const SINGAPORE_TIME: FixedOffset = match FixedOffset::east_opt(8 * 3600) {
    Some(offset) => offset,
    None => panic!("UTC+08:00 is a valid offset"),
};

/// Formats `now` as a Singapore-local timestamp for the `date_time` parameter.
pub fn singapore_timestamp(now: DateTime<Utc>) -> String {
    now.with_timezone(&SINGAPORE_TIME)
        .format(TIMESTAMP_FORMAT)
        .to_string()
}

/// Checks that `value` is a local timestamp in [`TIMESTAMP_FORMAT`].
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
}
