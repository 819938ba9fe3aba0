pub mod theme;
pub mod widgets;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    app::state::{AppMode, AppState},
    cli::Cli,
    domain::oracle::DayOutlook,
};
use theme::{Theme, theme_for};

pub fn render(frame: &mut Frame, state: &AppState, cli: &Cli) {
    let area = frame.area();
    let theme = theme_for(cli.no_color);

    if area.width < 60 || area.height < 20 {
        let warning = Paragraph::new("Terminal too small. Resize to at least 60x20.")
            .block(Block::default().borders(Borders::ALL).title("fairway-tui"));
        frame.render_widget(warning, area);
        return;
    }

    match state.mode {
        AppMode::Idle | AppMode::Fetching => {
            render_message_screen(frame, area, &state.loading_message, theme.accent, state, theme);
        }
        AppMode::Error => {
            let message = state
                .last_error
                .clone()
                .unwrap_or_else(|| "Consultation failed".to_string());
            render_message_screen(frame, area, &message, theme.danger, state, theme);
        }
        AppMode::NoData => {
            let message = match state.selected_date {
                Some(date) => format!("No forecast data for {date}"),
                None => "No forecast data".to_string(),
            };
            render_message_screen(frame, area, &message, theme.warning, state, theme);
        }
        AppMode::DisplayingDay | AppMode::Quit => render_day(frame, area, state, theme),
    }
}

fn render_day(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let Some(outlook) = &state.outlook else {
        render_message_screen(frame, area, "Nothing consulted yet", theme.muted_text, state, theme);
        return;
    };

    // Past sunset the day's own window is closed: banner and week strip
    // only, no single-day chart or metrics.
    if outlook.past_sunset {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(5),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);
        render_banner(frame, chunks[0], state, outlook, theme);
        widgets::week::render(frame, chunks[1], &outlook.summaries, outlook.date, theme);
        render_footer(frame, chunks[3], theme);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Min(8),
            Constraint::Length(5),
            Constraint::Length(1),
        ])
        .split(area);

    render_banner(frame, chunks[0], state, outlook, theme);
    render_sun_callout(frame, chunks[1], outlook, theme);
    widgets::metrics::render(
        frame,
        chunks[2],
        &outlook.metrics,
        &state.request.thresholds,
        theme,
    );
    widgets::chart::render(frame, chunks[3], outlook, theme);
    widgets::week::render(frame, chunks[4], &outlook.summaries, outlook.date, theme);
    render_footer(frame, chunks[5], theme);
}

fn render_banner(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    outlook: &DayOutlook,
    theme: Theme,
) {
    let title = Line::from(vec![
        Span::styled(
            "The Golf-able Oracle",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", state.request.location),
            Style::default().fg(theme.muted_text),
        ),
    ]);

    let prophecy = if outlook.past_sunset {
        Line::from(Span::styled(
            "Past sunset — the oracle is already dreaming about tomorrow's golf-abilities.",
            Style::default().fg(theme.warning),
        ))
    } else if outlook.metrics.sub_par() {
        Line::from(Span::styled(
            format!("Sub-par golf ranges prophesied for {}", outlook.date),
            Style::default()
                .fg(theme.danger)
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::styled(
            format!(
                "{} hr of golf-ability prophesied for {}",
                outlook.golfable_hours(),
                outlook.date
            ),
            Style::default()
                .fg(theme.success)
                .add_modifier(Modifier::BOLD),
        ))
    };

    let lines = vec![title, Line::default(), prophecy];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_sun_callout(frame: &mut Frame, area: Rect, outlook: &DayOutlook, theme: Theme) {
    let line = Line::from(vec![
        Span::styled("Twilight ", Style::default().fg(theme.muted_text)),
        Span::styled(
            outlook.bounds.sunrise_clock.format("%I:%M %p").to_string(),
            Style::default().fg(theme.text),
        ),
        Span::styled("  ·  Dusk ", Style::default().fg(theme.muted_text)),
        Span::styled(
            outlook.bounds.sunset_clock.format("%I:%M %p").to_string(),
            Style::default().fg(theme.text),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_message_screen(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    color: ratatui::style::Color,
    state: &AppState,
    theme: Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("The Golf-able Oracle")
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::default(),
        Line::from(Span::styled(message.to_string(), Style::default().fg(color))),
        Line::default(),
        Line::from(Span::styled(
            format!(
                "Thresholds: ≥{:.0}°F · ≤{:.0} mph · ≤{:.0}% rain",
                state.request.thresholds.min_temperature_f,
                state.request.thresholds.max_wind_mph,
                state.request.thresholds.max_precip_probability
            ),
            Style::default().fg(theme.muted_text),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_footer(frame: &mut Frame, area: Rect, theme: Theme) {
    let help = Line::from(Span::styled(
        "q quit · r new consultation · ←/→ or 1-5 select day",
        Style::default().fg(theme.muted_text),
    ));
    frame.render_widget(Paragraph::new(help), area);
}
