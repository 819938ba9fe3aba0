use chrono::{DateTime, Duration, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::domain::localtime::{Localizer, parse_utc_instant};
use crate::domain::weather::{DailyAggregate, DayBounds, ForecastBundle, WeatherSample};
use crate::error::OracleError;

const TIMELINES_URL: &str = "https://api.tomorrow.io/v4/timelines";
const FIELDS: &str =
    "temperature,temperatureMax,precipitationProbability,windSpeed,sunriseTime,sunsetTime";

#[derive(Debug, Clone)]
pub struct ForecastClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl ForecastClient {
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(TIMELINES_URL, api_key)
    }

    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("reqwest client"),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// One consultation fetch: daily aggregates plus hourly samples for
    /// `location` over `[now, now + days]`, imperial units.
    pub async fn fetch(
        &self,
        location: &str,
        days: u8,
        localizer: &Localizer,
        now: DateTime<Utc>,
    ) -> Result<ForecastBundle, OracleError> {
        let start = now.format("%Y-%m-%dT%H:%M:%SZ").to_string();
        let end = (now + Duration::days(i64::from(days)))
            .format("%Y-%m-%dT%H:%M:%SZ")
            .to_string();
        debug!(location, days, "requesting forecast timelines");

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("location", location),
                ("fields", FIELDS),
                ("units", "imperial"),
                ("timesteps", "1d,1h"),
                ("startTime", start.as_str()),
                ("endTime", end.as_str()),
                ("apikey", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|err| OracleError::fetch(err.to_string()))?
            .error_for_status()
            .map_err(|err| OracleError::fetch(err.to_string()))?;

        let payload: TimelinesResponse = response
            .json()
            .await
            .map_err(|err| OracleError::parse(err.to_string()))?;

        ingest(payload, location, localizer, now)
    }
}

/// Validates the payload once into domain values. Timelines are matched by
/// their `timestep` tag, never by array position, and any missing or
/// malformed field fails here instead of deep inside the day logic.
fn ingest(
    payload: TimelinesResponse,
    location: &str,
    localizer: &Localizer,
    fetched_at: DateTime<Utc>,
) -> Result<ForecastBundle, OracleError> {
    let mut daily_entries = None;
    let mut hourly_entries = None;
    for timeline in payload.data.timelines {
        match timeline.timestep.as_str() {
            "1d" => daily_entries = Some(timeline.intervals),
            "1h" => hourly_entries = Some(timeline.intervals),
            other => debug!(timestep = other, "ignoring unexpected timeline"),
        }
    }

    let daily = daily_entries
        .ok_or_else(|| OracleError::parse("payload has no 1d timeline"))?
        .iter()
        .map(|entry| ingest_daily(entry, localizer))
        .collect::<Result<Vec<_>, _>>()?;
    let hourly = hourly_entries
        .ok_or_else(|| OracleError::parse("payload has no 1h timeline"))?
        .iter()
        .map(|entry| ingest_hourly(entry, localizer))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        daily = daily.len(),
        hourly = hourly.len(),
        "forecast payload ingested"
    );

    Ok(ForecastBundle {
        location: location.to_string(),
        daily,
        hourly,
        fetched_at,
    })
}

fn ingest_daily(entry: &IntervalEntry, localizer: &Localizer) -> Result<DailyAggregate, OracleError> {
    let start = parse_utc_instant(&entry.start_time)?;
    let date = localizer.local_date(start);

    let sunrise = parse_utc_instant(required_str(&entry.values.sunrise_time, "sunriseTime")?)?;
    let sunset = parse_utc_instant(required_str(&entry.values.sunset_time, "sunsetTime")?)?;
    let bounds = DayBounds {
        date,
        sunrise_clock: localizer.local_clock(sunrise),
        sunset_clock: localizer.local_clock(sunset),
    };
    if bounds.sunrise_clock >= bounds.sunset_clock {
        return Err(OracleError::parse(format!(
            "sunrise {} is not before sunset {} on {date}",
            bounds.sunrise_clock, bounds.sunset_clock
        )));
    }

    Ok(DailyAggregate {
        bounds,
        temperature_max_f: required(entry.values.temperature_max, "temperatureMax")?,
        wind_speed_mph: required(entry.values.wind_speed, "windSpeed")?,
        precip_probability: required(entry.values.precipitation_probability, "precipitationProbability")?,
    })
}

fn ingest_hourly(entry: &IntervalEntry, localizer: &Localizer) -> Result<WeatherSample, OracleError> {
    let instant = parse_utc_instant(&entry.start_time)?;
    Ok(WeatherSample::at(
        instant,
        localizer,
        required(entry.values.temperature, "temperature")?,
        required(entry.values.wind_speed, "windSpeed")?,
        required(entry.values.precipitation_probability, "precipitationProbability")?,
    ))
}

fn required(value: Option<f32>, field: &str) -> Result<f32, OracleError> {
    value.ok_or_else(|| OracleError::parse(format!("missing field {field}")))
}

fn required_str<'a>(value: &'a Option<String>, field: &str) -> Result<&'a str, OracleError> {
    value
        .as_deref()
        .ok_or_else(|| OracleError::parse(format!("missing field {field}")))
}

#[derive(Debug, Deserialize)]
struct TimelinesResponse {
    data: TimelinesData,
}

#[derive(Debug, Deserialize)]
struct TimelinesData {
    timelines: Vec<Timeline>,
}

#[derive(Debug, Deserialize)]
struct Timeline {
    timestep: String,
    intervals: Vec<IntervalEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IntervalEntry {
    start_time: String,
    values: IntervalValues,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IntervalValues {
    temperature: Option<f32>,
    temperature_max: Option<f32>,
    wind_speed: Option<f32>,
    precipitation_probability: Option<f32>,
    sunrise_time: Option<String>,
    sunset_time: Option<String>,
}
