use chrono::{DateTime, NaiveDate, Utc};
use tracing::debug;

use crate::error::OracleError;

use super::daylight::filter_daylight;
use super::intervals::{QualifyingInterval, daily_summaries, merge_intervals};
use super::localtime::Localizer;
use super::thresholds::Thresholds;
use super::weather::{DailySummary, DayBounds, ForecastBundle, WeatherSample};

/// Day-level aggregates compared against the thresholds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadlineMetrics {
    pub daily_high_f: f32,
    pub daily_wind_mph: f32,
    pub daily_precip_probability: f32,
    pub temp_delta: f32,
    pub wind_delta: f32,
    pub rain_delta: f32,
}

impl HeadlineMetrics {
    /// A sub-par day misses at least one threshold on its aggregates. The
    /// flag only selects the headline variant; intervals and summaries are
    /// computed either way.
    #[must_use]
    pub fn sub_par(&self) -> bool {
        self.temp_delta < 0.0 || self.wind_delta > 0.0 || self.rain_delta > 0.0
    }
}

/// Everything the render sink needs for one consulted date.
#[derive(Debug, Clone)]
pub struct DayOutlook {
    pub date: NaiveDate,
    pub bounds: DayBounds,
    /// The selected date's daylight samples, chart-ready.
    pub day_samples: Vec<WeatherSample>,
    /// Qualifying ranges of the selected date, for shading.
    pub intervals: Vec<QualifyingInterval>,
    /// Golf-able hour totals across the whole fetched horizon.
    pub summaries: Vec<DailySummary>,
    pub metrics: HeadlineMetrics,
    /// Set when the selected date is today and the local clock is already
    /// past sunset; only the multi-day summary should render.
    pub past_sunset: bool,
}

impl DayOutlook {
    #[must_use]
    pub fn golfable_hours(&self) -> i64 {
        self.summaries
            .iter()
            .find(|summary| summary.date == self.date)
            .map_or(0, |summary| summary.hours)
    }
}

/// Resolves one consultation for `date` against an already-fetched bundle.
///
/// `now` is a parameter rather than an ambient clock read so the
/// past-sunset fallback is testable.
pub fn consult_date(
    bundle: &ForecastBundle,
    date: NaiveDate,
    thresholds: &Thresholds,
    localizer: &Localizer,
    now: DateTime<Utc>,
) -> Result<DayOutlook, OracleError> {
    let aggregate = bundle.daily_for(date).ok_or(OracleError::NotFound(date))?;
    let bounds = aggregate.bounds;

    let daylight = filter_daylight(&bundle.hourly, &bounds);
    let qualifying_today = daylight
        .iter()
        .filter(|sample| sample.local_date() == date && thresholds.passes(sample))
        .copied()
        .collect::<Vec<_>>();
    let intervals = merge_intervals(&qualifying_today);
    let summaries = daily_summaries(&bundle.hourly, &bounds, thresholds);

    let metrics = HeadlineMetrics {
        daily_high_f: aggregate.temperature_max_f,
        daily_wind_mph: aggregate.wind_speed_mph,
        daily_precip_probability: aggregate.precip_probability,
        temp_delta: aggregate.temperature_max_f - thresholds.min_temperature_f,
        wind_delta: aggregate.wind_speed_mph - thresholds.max_wind_mph,
        rain_delta: aggregate.precip_probability - thresholds.max_precip_probability,
    };

    let day_samples = daylight
        .into_iter()
        .filter(|sample| sample.local_date() == date)
        .collect::<Vec<_>>();
    let past_sunset = is_past_sunset(date, &bounds, localizer, now);

    debug!(
        %date,
        daylight = day_samples.len(),
        intervals = intervals.len(),
        past_sunset,
        "consultation resolved"
    );

    Ok(DayOutlook {
        date,
        bounds,
        day_samples,
        intervals,
        summaries,
        metrics,
        past_sunset,
    })
}

/// The fallback only applies to the current date: once the local clock has
/// passed that date's sunset, the day's own daylight window is closed.
fn is_past_sunset(
    date: NaiveDate,
    bounds: &DayBounds,
    localizer: &Localizer,
    now: DateTime<Utc>,
) -> bool {
    let now_local = localizer.to_local(now);
    now_local.date() == date && now_local.time() > bounds.sunset_clock
}
