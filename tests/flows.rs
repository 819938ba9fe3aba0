mod common;

use common::{displaying_state, instant, scenario_bundle, scenario_request, scenario_state};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use fairway_tui::{
    app::{events::AppEvent, state::AppMode},
    one_shot_report,
};
use tokio::sync::mpsc;

fn key(code: KeyCode) -> AppEvent {
    AppEvent::Input(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
}

#[tokio::test]
async fn successful_fetch_moves_to_displaying_day() {
    let mut state = scenario_state();
    let (tx, _rx) = mpsc::channel(8);

    state
        .handle_event(AppEvent::FetchStarted, &tx)
        .await
        .expect("event handled");
    assert_eq!(state.mode, AppMode::Fetching);
    assert!(state.loading_message.contains("Denver"));

    state
        .handle_event(AppEvent::FetchSucceeded(scenario_bundle()), &tx)
        .await
        .expect("event handled");
    assert_eq!(state.mode, AppMode::DisplayingDay);
    let outlook = state.outlook.as_ref().expect("outlook computed");
    assert_eq!(outlook.date.to_string(), "2024-11-19");
    assert_eq!(outlook.golfable_hours(), 1);
}

#[tokio::test]
async fn day_selection_recomputes_without_a_second_fetch() {
    let mut state = displaying_state();
    let (tx, mut rx) = mpsc::channel(8);

    state
        .handle_event(key(KeyCode::Char('2')), &tx)
        .await
        .expect("event handled");

    assert_eq!(state.mode, AppMode::DisplayingDay);
    let outlook = state.outlook.as_ref().expect("outlook computed");
    assert_eq!(outlook.date.to_string(), "2024-11-20");
    // The second date misses every threshold.
    assert!(outlook.metrics.sub_par());
    assert_eq!(outlook.golfable_hours(), 0);

    // No fetch-related events were queued by the selection.
    assert!(rx.try_recv().is_err());
    assert!(!state.fetch_in_flight);
}

#[tokio::test]
async fn failed_fetch_shows_the_error_and_a_retry_path() {
    let mut state = scenario_state();
    let (tx, _rx) = mpsc::channel(8);

    state
        .handle_event(AppEvent::FetchFailed("dns exploded".to_string()), &tx)
        .await
        .expect("event handled");
    assert_eq!(state.mode, AppMode::Error);
    assert_eq!(state.last_error.as_deref(), Some("dns exploded"));
}

#[tokio::test]
async fn quit_flows_through_the_event_channel() {
    let mut state = displaying_state();
    let (tx, mut rx) = mpsc::channel(8);

    state
        .handle_event(key(KeyCode::Esc), &tx)
        .await
        .expect("event handled");
    let queued = rx.recv().await.expect("quit queued");
    assert!(matches!(queued, AppEvent::Quit));

    state
        .handle_event(queued, &tx)
        .await
        .expect("event handled");
    assert_eq!(state.mode, AppMode::Quit);
}

#[test]
fn one_shot_report_carries_the_full_consultation() {
    let state = displaying_state();
    let outlook = state.outlook.as_ref().expect("outlook computed");

    let report = one_shot_report(&scenario_request(), outlook);
    assert!(report.contains("The Golf-able Oracle — Denver"));
    assert!(report.contains("1 hr of golf-ability prophesied for 2024-11-19"));
    assert!(report.contains("Twilight 06:00 AM · Dusk 08:00 PM"));
    assert!(report.contains("Golf-able ranges: 07:00 AM–08:00 AM, 10:00 AM"));
    assert!(report.contains("2024-11-19: 1 hr"));
    assert!(report.contains("2024-11-20: 0 hr"));
}

#[test]
fn one_shot_report_past_sunset_keeps_only_the_summary() {
    let mut state = scenario_state();
    state.bundle = Some(scenario_bundle());
    state.apply_consultation(
        "2024-11-19".parse().expect("valid date"),
        instant("2024-11-19T20:30:00"),
    );
    let outlook = state.outlook.as_ref().expect("outlook computed");
    assert!(outlook.past_sunset);

    let report = one_shot_report(&scenario_request(), outlook);
    assert!(report.contains("dreaming about tomorrow"));
    assert!(!report.contains("Golf-able ranges"));
    assert!(report.contains("2024-11-19: 1 hr"));
}
