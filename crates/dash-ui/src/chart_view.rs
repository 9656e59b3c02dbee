//! Bar-chart rendering for aggregate tables.
//!
//! Each dashboard chart is one [`ratatui::widgets::BarChart`] fed directly
//! from an [`AggregateTable`]; bar heights are the rounded group values and
//! the exact formatted value is printed on the bar.

use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use dash_core::formatting::{format_currency, format_number};
use dash_core::models::AggregateTable;

use crate::themes::Theme;

/// Width of one bar in terminal cells; category labels are truncated to fit.
const BAR_WIDTH: u16 = 9;

/// Render `table` as a titled bar chart into `area`.
///
/// `is_count` switches the printed values from currency to plain integers.
/// An empty table renders a dimmed "no data" placeholder instead.
pub fn render_bar_chart(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    table: &AggregateTable,
    is_count: bool,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border)
        .title(Line::styled(format!(" {} ", title), theme.chart_title));

    if table.is_empty() {
        render_no_data(frame, area, block, theme);
        return;
    }

    let bars: Vec<Bar> = table
        .points
        .iter()
        .map(|point| {
            let text = if is_count {
                format_number(point.value, 0)
            } else {
                format_currency(point.value)
            };
            Bar::default()
                // Bar heights are unsigned; negative sums still print their
                // real value on the bar.
                .value(point.value.max(0.0).round() as u64)
                .label(Line::styled(
                    truncate_label(&point.category, BAR_WIDTH as usize),
                    theme.bar_label,
                ))
                .text_value(text)
                .style(theme.bar)
                .value_style(theme.bar_value)
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .bar_width(BAR_WIDTH)
        .bar_gap(1)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

/// Placeholder for charts whose table has no groups.
fn render_no_data(frame: &mut Frame, area: Rect, block: Block, theme: &Theme) {
    let paragraph = Paragraph::new(Line::styled("no data", theme.dim))
        .centered()
        .block(block);
    frame.render_widget(paragraph, area);
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Truncate `label` to at most `max_width` terminal cells, appending an
/// ellipsis when anything was cut.
fn truncate_label(label: &str, max_width: usize) -> String {
    if label.width() <= max_width {
        return label.to_string();
    }

    let budget = max_width.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;
    for c in label.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────
