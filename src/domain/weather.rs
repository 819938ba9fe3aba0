use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use super::localtime::Localizer;

/// One hourly observation, imperial units as fetched.
///
/// `local` is derived from `instant` at construction and never stored
/// independently of it; build samples through [`WeatherSample::at`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherSample {
    pub instant: DateTime<Utc>,
    pub local: NaiveDateTime,
    pub temperature_f: f32,
    pub wind_speed_mph: f32,
    pub precip_probability: f32,
}

impl WeatherSample {
    #[must_use]
    pub fn at(
        instant: DateTime<Utc>,
        localizer: &Localizer,
        temperature_f: f32,
        wind_speed_mph: f32,
        precip_probability: f32,
    ) -> Self {
        Self {
            instant,
            local: localizer.to_local(instant),
            temperature_f,
            wind_speed_mph,
            precip_probability,
        }
    }

    #[must_use]
    pub fn local_date(&self) -> NaiveDate {
        self.local.date()
    }

    #[must_use]
    pub fn local_clock(&self) -> NaiveTime {
        self.local.time()
    }
}

/// Sunrise/sunset for one forecast date, reduced to local clock times.
///
/// The provider supplies the instants once per daily record, but daylight
/// membership is checked against every hourly sample of a date; the clock
/// times are therefore reused across the forecast window, combined with
/// each sample's own calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayBounds {
    pub date: NaiveDate,
    pub sunrise_clock: NaiveTime,
    pub sunset_clock: NaiveTime,
}

/// Daily aggregate record from the provider, already localized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyAggregate {
    pub bounds: DayBounds,
    pub temperature_max_f: f32,
    pub wind_speed_mph: f32,
    pub precip_probability: f32,
}

impl DailyAggregate {
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.bounds.date
    }
}

/// Everything one consultation fetched. Immutable for the session; date
/// re-selection reuses this snapshot without another fetch.
#[derive(Debug, Clone)]
pub struct ForecastBundle {
    pub location: String,
    pub daily: Vec<DailyAggregate>,
    pub hourly: Vec<WeatherSample>,
    pub fetched_at: DateTime<Utc>,
}

impl ForecastBundle {
    #[must_use]
    pub fn daily_for(&self, date: NaiveDate) -> Option<&DailyAggregate> {
        self.daily.iter().find(|day| day.date() == date)
    }

    /// Forecast dates in daily-record order.
    #[must_use]
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.daily.iter().map(DailyAggregate::date).collect()
    }
}

/// Total golf-able daylight hours for one calendar date, rounded to the
/// nearest whole hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub hours: i64,
}
