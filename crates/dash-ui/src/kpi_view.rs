//! The KPI tile row shown at the top of the dashboard.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use dash_core::formatting::{format_currency, format_number};
use dash_core::models::KpiSet;

use crate::themes::Theme;

/// Render the four KPI tiles side by side across `area`.
///
/// Money values are formatted to two decimal places; the order count is a
/// plain grouped integer.
pub fn render_kpi_row(frame: &mut Frame, area: Rect, kpis: &KpiSet, theme: &Theme) {
    let tiles = Layout::horizontal([
        Constraint::Ratio(1, 4),
        Constraint::Ratio(1, 4),
        Constraint::Ratio(1, 4),
        Constraint::Ratio(1, 4),
    ])
    .split(area);

    let values = [
        ("Total Orders", format_number(kpis.order_count as f64, 0)),
        ("Total Revenue", format_currency(kpis.total_revenue)),
        ("Total Selling", format_currency(kpis.total_selling)),
        ("Total GP", format_currency(kpis.total_gross_profit)),
    ];

    for (tile, (label, value)) in tiles.iter().zip(values) {
        render_tile(frame, *tile, label, &value, theme);
    }
}

fn render_tile(frame: &mut Frame, area: Rect, label: &str, value: &str, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border)
        .title(Line::styled(format!(" {} ", label), theme.kpi_label));

    let paragraph = Paragraph::new(Line::styled(value.to_string(), theme.kpi_value))
        .centered()
        .block(block);

    frame.render_widget(paragraph, area);
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_kpi_row_renders_values() {
        let kpis = KpiSet {
            order_count: 1234,
            total_revenue: 56_789.0,
            total_selling: 50_000.5,
            total_gross_profit: 6_788.5,
        };

        let backend = TestBackend::new(100, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_kpi_row(frame, area, &kpis, &Theme::dark());
            })
            .unwrap();

        let content = format!("{:?}", terminal.backend().buffer());
        assert!(content.contains("Total Orders"));
        assert!(content.contains("1,234"));
        assert!(content.contains("$56,789.00"));
        assert!(content.contains("$50,000.50"));
    }

    #[test]
    fn test_kpi_row_zero_dataset() {
        let backend = TestBackend::new(80, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_kpi_row(frame, area, &KpiSet::default(), &Theme::dark());
            })
            .unwrap();

        let content = format!("{:?}", terminal.backend().buffer());
        assert!(content.contains("$0.00"));
    }
}
