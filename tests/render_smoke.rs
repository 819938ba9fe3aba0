mod common;

use clap::Parser;
use common::{displaying_state, instant, scenario_bundle, scenario_state};
use fairway_tui::{app::state::AppState, cli::Cli, ui};
use ratatui::{Terminal, backend::TestBackend};

fn cli() -> Cli {
    Cli::parse_from(["fairway-tui", "Denver", "--no-color"])
}

fn render_to_string(width: u16, height: u16, state: &AppState) -> String {
    let cli = cli();
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    terminal
        .draw(|frame| ui::render(frame, state, &cli))
        .expect("draw");

    let buffer = terminal.backend().buffer().clone();
    let mut lines = Vec::new();
    for y in 0..height {
        let mut line = String::new();
        for x in 0..width {
            line.push_str(buffer[(x, y)].symbol());
        }
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

#[test]
fn displaying_day_renders_chart_metrics_and_week_strip() {
    let state = displaying_state();
    let screen = render_to_string(100, 34, &state);

    assert!(screen.contains("The Golf-able Oracle"));
    assert!(screen.contains("1 hr of golf-ability prophesied for 2024-11-19"));
    assert!(screen.contains("Twilight 06:00 AM"));
    assert!(screen.contains("Temperature"));
    assert!(screen.contains("Daylight hours"));
    assert!(screen.contains("Golf-able hours per day"));
    assert!(screen.contains("q quit"));
}

#[test]
fn past_sunset_renders_summary_only() {
    let mut state = scenario_state();
    state.bundle = Some(scenario_bundle());
    state.apply_consultation(
        "2024-11-19".parse().expect("valid date"),
        instant("2024-11-19T20:30:00"),
    );
    let screen = render_to_string(100, 34, &state);

    assert!(screen.contains("dreaming about tomorrow"));
    assert!(screen.contains("Golf-able hours per day"));
    assert!(!screen.contains("Daylight hours"));
    assert!(!screen.contains("Temperature"));
}

#[test]
fn fetching_and_no_data_screens_show_their_messages() {
    let mut state = scenario_state();
    state.loading_message = "Consulting the forecast for Denver...".to_string();
    state.mode = fairway_tui::app::state::AppMode::Fetching;
    let screen = render_to_string(100, 30, &state);
    assert!(screen.contains("Consulting the forecast for Denver..."));
    assert!(screen.contains("Thresholds"));

    let mut state = scenario_state();
    state.bundle = Some(scenario_bundle());
    state.apply_consultation(
        "2024-11-27".parse().expect("valid date"),
        instant("2024-11-19T12:00:00"),
    );
    let screen = render_to_string(100, 30, &state);
    assert!(screen.contains("No forecast data for 2024-11-27"));
}

#[test]
fn tiny_terminals_get_a_resize_hint() {
    let state = displaying_state();
    let screen = render_to_string(40, 10, &state);
    assert!(screen.contains("Terminal too small"));
}
