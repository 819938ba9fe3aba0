mod common;

use common::instant;
use fairway_tui::{
    data::forecast::ForecastClient,
    domain::{localtime::Localizer, oracle::consult_date, thresholds::Thresholds},
    error::OracleError,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, query_param},
};

fn thresholds() -> Thresholds {
    Thresholds {
        min_temperature_f: 50.0,
        max_wind_mph: 15.0,
        max_precip_probability: 20.0,
    }
}

/// The provider trims the trailing `Z`; the fixture does too, like the
/// real payloads. All instants are UTC; 06:00 MST sunrise is 13:00Z, the
/// 20:00 MST sunset lands on the next UTC date.
fn mountain_payload(timelines_daily_first: bool) -> serde_json::Value {
    let daily = serde_json::json!({
        "timestep": "1d",
        "intervals": [{
            "startTime": "2024-11-19T13:00:00",
            "values": {
                "temperatureMax": 56.0,
                "windSpeed": 12.0,
                "precipitationProbability": 15.0,
                "sunriseTime": "2024-11-19T13:00:00",
                "sunsetTime": "2024-11-20T03:00:00"
            }
        }]
    });
    let hourly = serde_json::json!({
        "timestep": "1h",
        "intervals": [
            { "startTime": "2024-11-19T14:00:00",
              "values": { "temperature": 52.0, "windSpeed": 10.0, "precipitationProbability": 10.0 } },
            { "startTime": "2024-11-19T15:00:00",
              "values": { "temperature": 54.0, "windSpeed": 12.0, "precipitationProbability": 5.0 } },
            { "startTime": "2024-11-19T16:00:00",
              "values": { "temperature": 48.0, "windSpeed": 8.0, "precipitationProbability": 5.0 } },
            { "startTime": "2024-11-19T17:00:00",
              "values": { "temperature": 56.0, "windSpeed": 9.0, "precipitationProbability": 15.0 } }
        ]
    });

    let timelines = if timelines_daily_first {
        serde_json::json!([daily, hourly])
    } else {
        serde_json::json!([hourly, daily])
    };
    serde_json::json!({ "data": { "timelines": timelines } })
}

async fn mock_server(payload: serde_json::Value) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("units", "imperial"))
        .and(query_param("timesteps", "1d,1h"))
        .and(query_param("location", "Denver"))
        .respond_with(ResponseTemplate::new(200).set_body_json(payload))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn fetched_consultation_matches_the_known_scenario() {
    let server = mock_server(mountain_payload(true)).await;
    let client = ForecastClient::with_base_url(server.uri(), "test-key");
    let localizer = Localizer::default();

    let bundle = client
        .fetch("Denver", 4, &localizer, instant("2024-11-19T14:00:00Z"))
        .await
        .expect("fetch succeeds");

    assert_eq!(bundle.daily.len(), 1);
    assert_eq!(bundle.hourly.len(), 4);
    let bounds = bundle.daily[0].bounds;
    assert_eq!(bounds.date.to_string(), "2024-11-19");
    assert_eq!(bounds.sunrise_clock.to_string(), "06:00:00");
    assert_eq!(bounds.sunset_clock.to_string(), "20:00:00");

    // 11:00 MST, well before sunset.
    let outlook = consult_date(
        &bundle,
        bounds.date,
        &thresholds(),
        &localizer,
        instant("2024-11-19T18:00:00Z"),
    )
    .expect("date in horizon");

    assert_eq!(outlook.day_samples.len(), 4);
    assert_eq!(outlook.intervals.len(), 2);
    assert_eq!(outlook.intervals[0].start_label(), "07:00 AM");
    assert_eq!(outlook.intervals[0].end_label(), "08:00 AM");
    assert_eq!(outlook.intervals[1].start_label(), "10:00 AM");
    assert_eq!(outlook.golfable_hours(), 1);
    assert!(!outlook.metrics.sub_par());
    assert!(!outlook.past_sunset);
}

#[tokio::test]
async fn timeline_order_in_the_payload_does_not_matter() {
    let server = mock_server(mountain_payload(false)).await;
    let client = ForecastClient::with_base_url(server.uri(), "test-key");
    let localizer = Localizer::default();

    let bundle = client
        .fetch("Denver", 4, &localizer, instant("2024-11-19T14:00:00Z"))
        .await
        .expect("fetch succeeds");

    assert_eq!(bundle.daily.len(), 1);
    assert_eq!(bundle.hourly.len(), 4);
}

#[tokio::test]
async fn upstream_failure_is_a_fetch_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let client = ForecastClient::with_base_url(server.uri(), "test-key");

    let err = client
        .fetch(
            "Denver",
            4,
            &Localizer::default(),
            instant("2024-11-19T14:00:00Z"),
        )
        .await
        .expect_err("server error");
    assert!(matches!(err, OracleError::Fetch(_)));
}

#[tokio::test]
async fn unusable_payload_is_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": {}})))
        .mount(&server)
        .await;
    let client = ForecastClient::with_base_url(server.uri(), "test-key");

    let err = client
        .fetch(
            "Denver",
            4,
            &Localizer::default(),
            instant("2024-11-19T14:00:00Z"),
        )
        .await
        .expect_err("payload without timelines");
    assert!(matches!(err, OracleError::Parse(_)));
}

#[tokio::test]
async fn consulting_a_trailing_date_reports_not_found() {
    let server = mock_server(mountain_payload(true)).await;
    let client = ForecastClient::with_base_url(server.uri(), "test-key");
    let localizer = Localizer::default();

    let bundle = client
        .fetch("Denver", 4, &localizer, instant("2024-11-19T14:00:00Z"))
        .await
        .expect("fetch succeeds");

    let missing = "2024-11-25".parse().expect("valid date");
    let err = consult_date(
        &bundle,
        missing,
        &thresholds(),
        &localizer,
        instant("2024-11-19T18:00:00Z"),
    )
    .expect_err("outside horizon");
    assert!(matches!(err, OracleError::NotFound(date) if date == missing));
}
