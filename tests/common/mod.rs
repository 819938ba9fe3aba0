#![allow(dead_code)]

use chrono::{DateTime, NaiveTime, Utc};
use fairway_tui::{
    app::state::{AppState, ConsultRequest},
    data::forecast::ForecastClient,
    domain::{
        localtime::{Localizer, parse_utc_instant},
        thresholds::Thresholds,
        weather::{DailyAggregate, DayBounds, ForecastBundle, WeatherSample},
    },
};

pub fn utc_localizer() -> Localizer {
    Localizer::new(chrono_tz::UTC)
}

pub fn scenario_thresholds() -> Thresholds {
    Thresholds {
        min_temperature_f: 50.0,
        max_wind_mph: 15.0,
        max_precip_probability: 20.0,
    }
}

pub fn instant(value: &str) -> DateTime<Utc> {
    parse_utc_instant(value).expect("valid fixture instant")
}

pub fn sample(value: &str, temp: f32, wind: f32, rain: f32) -> WeatherSample {
    WeatherSample::at(instant(value), &utc_localizer(), temp, wind, rain)
}

pub fn aggregate(date: &str, high: f32, wind: f32, rain: f32) -> DailyAggregate {
    DailyAggregate {
        bounds: DayBounds {
            date: date.parse().expect("valid fixture date"),
            sunrise_clock: NaiveTime::from_hms_opt(6, 0, 0).expect("valid time"),
            sunset_clock: NaiveTime::from_hms_opt(20, 0, 0).expect("valid time"),
        },
        temperature_max_f: high,
        wind_speed_mph: wind,
        precip_probability: rain,
    }
}

/// The end-to-end scenario: qualifying hours 07, 08 and 10, a failing 09,
/// one golf-able hour in total on the first date.
pub fn scenario_bundle() -> ForecastBundle {
    ForecastBundle {
        location: "Denver".to_string(),
        daily: vec![
            aggregate("2024-11-19", 56.0, 12.0, 15.0),
            aggregate("2024-11-20", 44.0, 22.0, 60.0),
        ],
        hourly: vec![
            sample("2024-11-19T07:00:00", 52.0, 10.0, 10.0),
            sample("2024-11-19T08:00:00", 54.0, 12.0, 5.0),
            sample("2024-11-19T09:00:00", 48.0, 8.0, 5.0),
            sample("2024-11-19T10:00:00", 56.0, 9.0, 15.0),
            sample("2024-11-20T09:00:00", 40.0, 25.0, 70.0),
        ],
        fetched_at: instant("2024-11-19T05:00:00"),
    }
}

pub fn scenario_request() -> ConsultRequest {
    ConsultRequest {
        location: "Denver".to_string(),
        thresholds: scenario_thresholds(),
        localizer: utc_localizer(),
        days: 4,
        initial_date: Some("2024-11-19".parse().expect("valid fixture date")),
    }
}

pub fn scenario_state() -> AppState {
    AppState::new(
        scenario_request(),
        ForecastClient::with_base_url("http://127.0.0.1:0", "test-key"),
    )
}

/// State already displaying the scenario's first date at mid-morning.
pub fn displaying_state() -> AppState {
    let mut state = scenario_state();
    state.bundle = Some(scenario_bundle());
    state.apply_consultation(
        "2024-11-19".parse().expect("valid fixture date"),
        instant("2024-11-19T12:00:00"),
    );
    state
}
