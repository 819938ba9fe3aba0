use super::weather::{DayBounds, WeatherSample};

/// Keeps the samples whose local time falls within `[sunrise, sunset]`,
/// both ends inclusive, on the sample's own calendar date.
///
/// The bounds' clock times are combined with each sample's date, so one
/// daily record's sunrise/sunset covers every date in the horizon; the
/// seasonal drift across a few forecast days is ignored on purpose. Input
/// ordering is preserved. An empty result is a valid zero-result, not an
/// error.
#[must_use]
pub fn filter_daylight(samples: &[WeatherSample], bounds: &DayBounds) -> Vec<WeatherSample> {
    samples
        .iter()
        .filter(|sample| in_daylight(sample, bounds))
        .copied()
        .collect()
}

fn in_daylight(sample: &WeatherSample, bounds: &DayBounds) -> bool {
    let date = sample.local_date();
    let sunrise = date.and_time(bounds.sunrise_clock);
    let sunset = date.and_time(bounds.sunset_clock);
    sample.local >= sunrise && sample.local <= sunset
}
