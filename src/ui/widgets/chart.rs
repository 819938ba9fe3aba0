use chrono::{NaiveDateTime, Timelike};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::domain::intervals::QualifyingInterval;
use crate::domain::oracle::DayOutlook;
use crate::ui::theme::Theme;

/// Hourly chart for the selected date's daylight window: one sparkline row
/// per metric plus a band marking the qualifying ranges, the terminal
/// rendition of shaded background ranges.
pub fn render(frame: &mut Frame, area: Rect, outlook: &DayOutlook, theme: Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Daylight hours")
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 || inner.width < 12 {
        return;
    }

    if outlook.day_samples.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No daylight samples for this date",
            Style::default().fg(theme.muted_text),
        )));
        frame.render_widget(empty, inner);
        return;
    }

    let cols = inner.width.saturating_sub(7) as usize;
    let series = DaySeries::from_outlook(outlook);
    let mut lines = vec![
        labeled_row(
            "Temp  ",
            sparkline(&series.temps, cols),
            theme.accent,
            theme,
        ),
        labeled_row("Wind  ", sparkline(&series.winds, cols), theme.info, theme),
        labeled_row("Rain  ", barline(&series.rains, cols), theme.warning, theme),
        labeled_row(
            "Golf  ",
            golf_band(&series.locals, &outlook.intervals, cols),
            theme.success,
            theme,
        ),
        labeled_row(
            "Hour  ",
            hour_label_line(&series.locals, cols),
            theme.text,
            theme,
        ),
    ];
    lines.push(range_line(&outlook.intervals, theme));
    lines.truncate(inner.height as usize);

    frame.render_widget(Paragraph::new(lines), inner);
}

struct DaySeries {
    temps: Vec<f32>,
    winds: Vec<f32>,
    rains: Vec<f32>,
    locals: Vec<NaiveDateTime>,
}

impl DaySeries {
    fn from_outlook(outlook: &DayOutlook) -> Self {
        Self {
            temps: outlook.day_samples.iter().map(|s| s.temperature_f).collect(),
            winds: outlook
                .day_samples
                .iter()
                .map(|s| s.wind_speed_mph)
                .collect(),
            rains: outlook
                .day_samples
                .iter()
                .map(|s| s.precip_probability)
                .collect(),
            locals: outlook.day_samples.iter().map(|s| s.local).collect(),
        }
    }
}

fn labeled_row(label: &'static str, body: String, body_color: ratatui::style::Color, theme: Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(label, Style::default().fg(theme.muted_text)),
        Span::styled(body, Style::default().fg(body_color)),
    ])
}

fn range_line(intervals: &[QualifyingInterval], theme: Theme) -> Line<'static> {
    if intervals.is_empty() {
        return Line::from(Span::styled(
            "No golf-able ranges",
            Style::default().fg(theme.muted_text),
        ));
    }

    let ranges = intervals
        .iter()
        .map(|interval| {
            if interval.start == interval.end {
                interval.start_label()
            } else {
                format!("{}–{}", interval.start_label(), interval.end_label())
            }
        })
        .collect::<Vec<_>>()
        .join(", ");

    Line::from(vec![
        Span::styled("Golf-able: ", Style::default().fg(theme.muted_text)),
        Span::styled(ranges, Style::default().fg(theme.success)),
    ])
}

/// Maps a display column back onto the sample it represents.
fn sample_index(col: usize, width: usize, sample_len: usize) -> usize {
    if width <= 1 || sample_len <= 1 {
        return 0;
    }
    col.saturating_mul(sample_len.saturating_sub(1)) / width.saturating_sub(1)
}

fn sparkline(values: &[f32], width: usize) -> String {
    const BLOCKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
    if values.is_empty() || width == 0 {
        return String::new();
    }

    let min = values.iter().copied().fold(f32::INFINITY, f32::min);
    let max = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let span = (max - min).max(0.001);

    (0..width)
        .map(|col| {
            let value = values[sample_index(col, width, values.len())];
            let level = (((value - min) / span) * (BLOCKS.len() as f32 - 1.0)).round() as usize;
            BLOCKS[level.min(BLOCKS.len() - 1)]
        })
        .collect()
}

fn barline(values: &[f32], width: usize) -> String {
    const BLOCKS: [char; 8] = ['·', '▁', '▂', '▃', '▄', '▅', '▆', '█'];
    if values.is_empty() || width == 0 {
        return String::new();
    }
    let max = values.iter().copied().fold(0.0f32, f32::max).max(0.001);
    (0..width)
        .map(|col| {
            let value = values[sample_index(col, width, values.len())].max(0.0);
            let level = ((value / max) * (BLOCKS.len() as f32 - 1.0)).round() as usize;
            BLOCKS[level.min(BLOCKS.len() - 1)]
        })
        .collect()
}

fn golf_band(
    locals: &[NaiveDateTime],
    intervals: &[QualifyingInterval],
    width: usize,
) -> String {
    if locals.is_empty() || width == 0 {
        return String::new();
    }
    (0..width)
        .map(|col| {
            let local = locals[sample_index(col, width, locals.len())];
            if intervals.iter().any(|i| i.contains_local(local)) {
                '█'
            } else {
                '·'
            }
        })
        .collect()
}

fn hour_label_line(locals: &[NaiveDateTime], width: usize) -> String {
    if locals.is_empty() || width == 0 {
        return String::new();
    }
    let mut out = vec![' '; width];
    for col in 0..width {
        let hour = locals[sample_index(col, width, locals.len())].hour();
        if hour.is_multiple_of(3) {
            let label = format!("{hour:02}");
            let start = col.saturating_sub(1).min(width.saturating_sub(label.len()));
            for (offset, ch) in label.chars().enumerate() {
                if start + offset < width {
                    out[start + offset] = ch;
                }
            }
        }
    }
    out.into_iter().collect()
}
