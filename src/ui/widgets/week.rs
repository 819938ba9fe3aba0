use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::domain::weather::DailySummary;
use crate::ui::theme::Theme;

/// Multi-day strip: one column per forecast date with its golf-able hour
/// total. A zero-hour day shows as −1, the original metric treatment for
/// "nothing to play with".
pub fn render(
    frame: &mut Frame,
    area: Rect,
    summaries: &[DailySummary],
    selected: chrono::NaiveDate,
    theme: Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Golf-able hours per day")
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if summaries.is_empty() || inner.height == 0 {
        return;
    }

    let dates = Row::new(
        summaries
            .iter()
            .map(|summary| {
                let mut cell = Cell::from(summary.date.format("%m-%d").to_string())
                    .style(Style::default().fg(theme.muted_text));
                if summary.date == selected {
                    cell = cell.style(
                        Style::default()
                            .fg(theme.accent)
                            .add_modifier(Modifier::BOLD),
                    );
                }
                cell
            })
            .collect::<Vec<_>>(),
    );

    let weekdays = Row::new(
        summaries
            .iter()
            .map(|summary| {
                Cell::from(summary.date.format("%a").to_string())
                    .style(Style::default().fg(theme.text))
            })
            .collect::<Vec<_>>(),
    );

    let hours = Row::new(
        summaries
            .iter()
            .map(|summary| {
                let (label, color) = hours_cell(summary.hours);
                Cell::from(label).style(
                    Style::default()
                        .fg(color(theme))
                        .add_modifier(Modifier::BOLD),
                )
            })
            .collect::<Vec<_>>(),
    );

    let widths = vec![Constraint::Length(7); summaries.len()];
    let table = Table::new([dates, weekdays, hours], widths);
    frame.render_widget(table, inner);
}

fn hours_cell(hours: i64) -> (String, fn(Theme) -> ratatui::style::Color) {
    if hours == 0 {
        ("-1".to_string(), |theme| theme.danger)
    } else {
        (format!("+{hours}"), |theme| theme.success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_hour_days_display_as_minus_one() {
        let (label, _) = hours_cell(0);
        assert_eq!(label, "-1");

        let (label, _) = hours_cell(3);
        assert_eq!(label, "+3");
    }
}
