use std::collections::BTreeMap;

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};

use super::daylight::filter_daylight;
use super::thresholds::Thresholds;
use super::weather::{DailySummary, DayBounds, WeatherSample};

/// A maximal contiguous run of qualifying samples.
///
/// `start`/`end` are the first and last member sample instants, both
/// inclusive; a single isolated sample is a zero-duration interval and is
/// still reported, since it represents one qualifying hour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualifyingInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub start_local: NaiveDateTime,
    pub end_local: NaiveDateTime,
}

impl QualifyingInterval {
    #[must_use]
    pub fn duration_hours(&self) -> f64 {
        (self.end - self.start).num_seconds() as f64 / 3600.0
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.start_local.date()
    }

    #[must_use]
    pub fn contains_local(&self, local: NaiveDateTime) -> bool {
        local >= self.start_local && local <= self.end_local
    }

    #[must_use]
    pub fn start_label(&self) -> String {
        self.start_local.format("%I:%M %p").to_string()
    }

    #[must_use]
    pub fn end_label(&self) -> String {
        self.end_local.format("%I:%M %p").to_string()
    }
}

/// Two consecutive samples continue one interval when their local-time gap
/// is at most one hour and they share a calendar date. A date rollover
/// splits even a one-hour gap, because daylight windows are per-day.
fn continues(previous: &WeatherSample, next: &WeatherSample) -> bool {
    next.local - previous.local <= Duration::hours(1)
        && next.local_date() == previous.local_date()
}

/// Merges an ordered run of qualifying samples into maximal contiguous
/// intervals.
///
/// # Panics
///
/// The input must already be sorted ascending by instant. Unsorted input is
/// a caller bug and fails the assertion outright; re-sorting here would
/// mask it.
#[must_use]
pub fn merge_intervals(samples: &[WeatherSample]) -> Vec<QualifyingInterval> {
    assert!(
        samples
            .windows(2)
            .all(|pair| pair[0].instant <= pair[1].instant),
        "interval merger requires samples sorted ascending by instant"
    );

    let mut intervals = Vec::new();
    let mut open: Option<(WeatherSample, WeatherSample)> = None;

    for sample in samples {
        open = match open {
            None => Some((*sample, *sample)),
            Some((start, last)) if continues(&last, sample) => Some((start, *sample)),
            Some((start, last)) => {
                intervals.push(close(start, last));
                Some((*sample, *sample))
            }
        };
    }
    if let Some((start, last)) = open {
        intervals.push(close(start, last));
    }
    intervals
}

fn close(start: WeatherSample, end: WeatherSample) -> QualifyingInterval {
    QualifyingInterval {
        start: start.instant,
        end: end.instant,
        start_local: start.local,
        end_local: end.local,
    }
}

/// Per-date golf-able hour totals across the whole fetched horizon.
///
/// Every local date present in the hourly series is reported, including
/// dates whose daylight window excludes all samples or whose qualifying run
/// is empty (0 hours). Dates absent from the hourly series are not
/// invented, even if the daily series extends further.
#[must_use]
pub fn daily_summaries(
    samples: &[WeatherSample],
    bounds: &DayBounds,
    thresholds: &Thresholds,
) -> Vec<DailySummary> {
    let mut totals: BTreeMap<NaiveDate, f64> = samples
        .iter()
        .map(|sample| (sample.local_date(), 0.0))
        .collect();

    let qualifying = filter_daylight(samples, bounds)
        .into_iter()
        .filter(|sample| thresholds.passes(sample))
        .collect::<Vec<_>>();

    // One merge over the full run is equivalent to per-date merges: the
    // adjacency rule itself splits on date rollover.
    for interval in merge_intervals(&qualifying) {
        *totals.entry(interval.date()).or_insert(0.0) += interval.duration_hours();
    }

    totals
        .into_iter()
        .map(|(date, hours)| DailySummary {
            date,
            hours: hours.round() as i64,
        })
        .collect()
}
