use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use chrono_tz::Tz;

use crate::error::OracleError;

/// Zone used when neither the CLI nor the settings file names one.
pub const DEFAULT_ZONE: Tz = chrono_tz::US::Mountain;

/// Projects UTC instants into one fixed civil zone.
///
/// The zone travels with the consultation as explicit configuration; there
/// is no process-wide zone constant, so tests can run against any tzdb
/// entry. Standard/daylight transitions come from the zone database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Localizer {
    zone: Tz,
}

impl Default for Localizer {
    fn default() -> Self {
        Self::new(DEFAULT_ZONE)
    }
}

impl Localizer {
    #[must_use]
    pub fn new(zone: Tz) -> Self {
        Self { zone }
    }

    #[must_use]
    pub fn zone(&self) -> Tz {
        self.zone
    }

    /// Civil date and clock time of `instant` in the configured zone.
    #[must_use]
    pub fn to_local(&self, instant: DateTime<Utc>) -> NaiveDateTime {
        instant.with_timezone(&self.zone).naive_local()
    }

    #[must_use]
    pub fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        self.to_local(instant).date()
    }

    #[must_use]
    pub fn local_clock(&self, instant: DateTime<Utc>) -> NaiveTime {
        self.to_local(instant).time()
    }
}

/// Parses a provider timestamp as UTC.
///
/// The forecast source trims the trailing `Z` from its ISO-8601 strings, so
/// the designator is optional; the instant is UTC either way. Anything else
/// is a `Parse` failure.
pub fn parse_utc_instant(value: &str) -> Result<DateTime<Utc>, OracleError> {
    let trimmed = value.trim().trim_end_matches('Z');
    let trimmed = trimmed.strip_suffix("+00:00").unwrap_or(trimmed);

    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f"))
        .map(|naive| naive.and_utc())
        .map_err(|_| OracleError::parse(format!("unparseable instant {value:?}")))
}
