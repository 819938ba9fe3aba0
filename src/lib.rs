pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod ui;

use std::io::{self, Stdout};

use anyhow::Result;
use chrono::Utc;
use crossterm::{
    event::DisableMouseCapture,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tracing::warn;

use app::events::{AppEvent, spawn_input_task};
use app::settings::{load_runtime_settings, save_runtime_settings};
use app::state::{AppMode, AppState, ConsultRequest};
use cli::Cli;
use data::forecast::ForecastClient;
use domain::oracle::{DayOutlook, consult_date};
use error::OracleError;

pub async fn run(cli: Cli) -> Result<()> {
    cli.validate()?;

    let (settings, settings_path) = load_runtime_settings(&cli, !cli.no_saved_settings);
    if let Some(path) = &settings_path
        && let Err(err) = save_runtime_settings(path, &settings)
    {
        warn!("could not persist settings: {err:#}");
    }

    let api_key = cli.resolved_api_key()?;
    let client = match &cli.forecast_url {
        Some(url) => ForecastClient::with_base_url(url.clone(), api_key),
        None => ForecastClient::new(api_key),
    };
    let request = ConsultRequest::from_settings(&settings, cli.date);

    if cli.one_shot {
        return run_one_shot(request, client).await;
    }

    let mut terminal = setup_terminal()?;
    let result = run_inner(&mut terminal, AppState::new(request, client), &cli).await;
    restore_terminal(&mut terminal)?;
    result
}

async fn run_inner(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: AppState,
    cli: &Cli,
) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<AppEvent>(256);
    let input_stream = spawn_input_task();
    tokio::pin!(input_stream);

    tx.send(AppEvent::Bootstrap).await?;

    while app.running {
        tokio::select! {
            maybe_input = input_stream.next() => {
                if let Some(input) = maybe_input {
                    app.handle_event(AppEvent::Input(input), &tx).await?;
                }
            }
            maybe_event = rx.recv() => {
                if let Some(event) = maybe_event {
                    app.handle_event(event, &tx).await?;
                }
            }
        }

        terminal.draw(|frame| ui::render(frame, &app, cli))?;

        if app.mode == AppMode::Quit {
            app.running = false;
        }
    }

    Ok(())
}

async fn run_one_shot(request: ConsultRequest, client: ForecastClient) -> Result<()> {
    let now = Utc::now();
    let bundle = client
        .fetch(&request.location, request.days, &request.localizer, now)
        .await?;
    let date = request
        .initial_date
        .unwrap_or_else(|| request.localizer.local_date(now));

    match consult_date(&bundle, date, &request.thresholds, &request.localizer, now) {
        Ok(outlook) => {
            println!("{}", one_shot_report(&request, &outlook));
            Ok(())
        }
        Err(OracleError::NotFound(date)) => {
            println!("No forecast data for {date}");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

/// Plain-text consultation for `--one-shot` and scripts.
#[must_use]
pub fn one_shot_report(request: &ConsultRequest, outlook: &DayOutlook) -> String {
    let mut lines = vec![format!("The Golf-able Oracle — {}", request.location)];

    if outlook.past_sunset {
        lines.push(
            "Past sunset — the oracle is already dreaming about tomorrow's golf-abilities."
                .to_string(),
        );
    } else if outlook.metrics.sub_par() {
        lines.push(format!("Sub-par golf ranges prophesied for {}", outlook.date));
    } else {
        lines.push(format!(
            "{} hr of golf-ability prophesied for {}",
            outlook.golfable_hours(),
            outlook.date
        ));
    }

    lines.push(format!(
        "Twilight {} · Dusk {}",
        outlook.bounds.sunrise_clock.format("%I:%M %p"),
        outlook.bounds.sunset_clock.format("%I:%M %p")
    ));

    if !outlook.past_sunset {
        lines.push(format!(
            "High {:.0}°F ({:+.0} vs min) · Wind {:.0} mph ({:+.0} vs cap) · Rain {:.0}% ({:+.0} vs cap)",
            outlook.metrics.daily_high_f,
            outlook.metrics.temp_delta,
            outlook.metrics.daily_wind_mph,
            outlook.metrics.wind_delta,
            outlook.metrics.daily_precip_probability,
            outlook.metrics.rain_delta,
        ));

        let ranges = if outlook.intervals.is_empty() {
            "none".to_string()
        } else {
            outlook
                .intervals
                .iter()
                .map(|interval| {
                    if interval.start == interval.end {
                        interval.start_label()
                    } else {
                        format!("{}–{}", interval.start_label(), interval.end_label())
                    }
                })
                .collect::<Vec<_>>()
                .join(", ")
        };
        lines.push(format!("Golf-able ranges: {ranges}"));
    }

    for summary in &outlook.summaries {
        lines.push(format!(
            "  {} {}: {} hr",
            summary.date.format("%a"),
            summary.date,
            summary.hours
        ));
    }

    lines.join("\n")
}

pub fn init_tracing(one_shot: bool) {
    let default_filter = if one_shot { "info" } else { "off" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    install_panic_hook();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn install_panic_hook() {
    let existing = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture);
        existing(panic);
    }));
}
