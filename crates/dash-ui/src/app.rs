//! Main application state and TUI event loop for the sales dashboard.
//!
//! [`App`] owns the theme and the most recent [`DashboardSnapshot`], drives
//! the terminal event loop, and forwards key presses to the
//! [`DashboardEngine`] as selection events.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Tabs},
    Frame, Terminal,
};

use dash_runtime::data::snapshot::DashboardSnapshot;
use dash_runtime::engine::DashboardEngine;
use dash_runtime::events::DashboardEvent;

use crate::chart_view::render_bar_chart;
use crate::kpi_view::render_kpi_row;
use crate::themes::Theme;

// ── App ───────────────────────────────────────────────────────────────────────

/// Root application state for the dashboard TUI.
pub struct App {
    /// Active colour theme.
    pub theme: Theme,
    /// Set to `true` to break out of the event loop on the next iteration.
    pub should_quit: bool,
    /// The render model currently on screen.
    snapshot: DashboardSnapshot,
    /// Status line text after a failed interaction, `None` when healthy.
    status: Option<String>,
}

impl App {
    /// Construct the application around an initial snapshot.
    pub fn new(theme_name: &str, snapshot: DashboardSnapshot) -> Self {
        Self {
            theme: Theme::from_name(theme_name),
            should_quit: false,
            snapshot,
            status: None,
        }
    }

    // ── Event loop ────────────────────────────────────────────────────────────

    /// Run the dashboard TUI until the user quits.
    ///
    /// Uses `crossterm::event::poll` (synchronous, with a 250 ms timeout) so
    /// the terminal event loop stays on the current thread; every handled key
    /// triggers a full synchronous recompute through the engine.
    ///
    /// The loop exits on `q`, `Q`, or `Ctrl+C`.
    pub async fn run(mut self, mut engine: DashboardEngine) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let tick_rate = Duration::from_millis(250);

        let result = loop {
            terminal.draw(|frame| self.render(frame, &engine))?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    match key.code {
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            break Ok(());
                        }
                        KeyCode::Char('q') | KeyCode::Char('Q') => break Ok(()),
                        KeyCode::Right | KeyCode::Char('l') => {
                            self.apply(&mut engine, DashboardEvent::NextAgent);
                        }
                        KeyCode::Left | KeyCode::Char('h') => {
                            self.apply(&mut engine, DashboardEvent::PrevAgent);
                        }
                        KeyCode::Char('a') | KeyCode::Char('A') => {
                            self.apply(&mut engine, DashboardEvent::SelectAll);
                        }
                        KeyCode::Char('r') | KeyCode::Char('R') => {
                            self.apply(&mut engine, DashboardEvent::Reload);
                        }
                        _ => {}
                    }
                }
            }

            if self.should_quit {
                break Ok(());
            }
        };

        // Restore terminal state unconditionally.
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    /// Run one event through the engine, keeping the previous snapshot and
    /// surfacing the error in the status line on failure.
    fn apply(&mut self, engine: &mut DashboardEngine, event: DashboardEvent) {
        match engine.handle_event(event) {
            Ok(snapshot) => {
                self.snapshot = snapshot;
                self.status = None;
            }
            Err(e) => self.status = Some(e.to_string()),
        }
    }

    // ── Rendering ─────────────────────────────────────────────────────────────

    fn render(&self, frame: &mut Frame, engine: &DashboardEngine) {
        let [header, selector, kpis, charts, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        self.render_header(frame, header);
        self.render_selector(frame, selector, engine);
        render_kpi_row(frame, kpis, &self.snapshot.kpis, &self.theme);
        self.render_charts(frame, charts);
        self.render_footer(frame, footer);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let meta = &self.snapshot.metadata;
        let line = Line::from(vec![
            Span::styled("Sales Dashboard", self.theme.header),
            Span::styled(
                format!("  {} — {}/{} rows", meta.selector, meta.filtered_rows, meta.source_rows),
                self.theme.dim,
            ),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_selector(&self, frame: &mut Frame, area: Rect, engine: &DashboardEngine) {
        let tabs = Tabs::new(engine.agents().to_vec())
            .select(engine.selection_index())
            .style(self.theme.selector)
            .highlight_style(self.theme.selector_active)
            .divider("|");
        frame.render_widget(tabs, area);
    }

    fn render_charts(&self, frame: &mut Frame, area: Rect) {
        let [top, bottom] =
            Layout::vertical([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).areas(area);
        let thirds = [
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ];
        let [top_left, top_mid, top_right] = Layout::horizontal(thirds).areas(top);
        let [bot_left, bot_mid, bot_right] = Layout::horizontal(thirds).areas(bottom);

        let snap = &self.snapshot;
        let theme = &self.theme;
        render_bar_chart(frame, top_left, "Revenue by Agent", &snap.agent_revenue, false, theme);
        render_bar_chart(frame, top_mid, "Selling by Agent", &snap.agent_selling, false, theme);
        render_bar_chart(
            frame,
            top_right,
            "Company Business",
            &snap.company_selling,
            false,
            theme,
        );
        render_bar_chart(
            frame,
            bot_left,
            "Month-Wise Orders",
            &snap.monthly_counts,
            true,
            theme,
        );
        render_bar_chart(
            frame,
            bot_mid,
            "Payment Mode/Status",
            &snap.payment_selling,
            false,
            theme,
        );
        render_bar_chart(
            frame,
            bot_right,
            "Gross Profit by Agent",
            &snap.agent_gross_profit,
            false,
            theme,
        );
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let line = match &self.status {
            Some(message) => Line::styled(message.clone(), self.theme.error),
            None => Line::styled(
                " ←/→ agent   a all agents   r reload   q quit",
                self.theme.footer,
            ),
        };
        frame.render_widget(Paragraph::new(line), area);
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
