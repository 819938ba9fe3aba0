use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::domain::oracle::HeadlineMetrics;
use crate::domain::thresholds::Thresholds;
use crate::ui::theme::Theme;

/// Headline triples for the selected date: value plus signed delta against
/// each threshold. Temperature above its minimum is good; wind or rain
/// above their caps is bad.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    metrics: &HeadlineMetrics,
    thresholds: &Thresholds,
    theme: Theme,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    render_tile(
        frame,
        columns[0],
        "Temperature",
        format!("High {:.0}°F", metrics.daily_high_f),
        format!(
            "{:+.0}°F vs {:.0}°F min",
            metrics.temp_delta, thresholds.min_temperature_f
        ),
        metrics.temp_delta >= 0.0,
        theme,
    );
    render_tile(
        frame,
        columns[1],
        "Wind",
        format!("Max {:.0} mph", metrics.daily_wind_mph),
        format!(
            "{:+.0} mph vs {:.0} mph cap",
            metrics.wind_delta, thresholds.max_wind_mph
        ),
        metrics.wind_delta <= 0.0,
        theme,
    );
    render_tile(
        frame,
        columns[2],
        "Rain chance",
        format!("{:.0}%", metrics.daily_precip_probability),
        format!(
            "{:+.0}% vs {:.0}% cap",
            metrics.rain_delta, thresholds.max_precip_probability
        ),
        metrics.rain_delta <= 0.0,
        theme,
    );
}

fn render_tile(
    frame: &mut Frame,
    area: Rect,
    title: &'static str,
    value: String,
    delta: String,
    good: bool,
    theme: Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let delta_color = if good { theme.success } else { theme.danger };
    let lines = vec![
        Line::from(Span::styled(
            value,
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(delta, Style::default().fg(delta_color))),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
