use ratatui::style::{Color, Modifier, Style};

/// Terminal background type detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackgroundType {
    Dark,
    Light,
    Unknown,
}

/// Detect terminal background type from the `COLORFGBG` environment variable.
///
/// The variable has the format `"foreground;background"`.  Background values
/// 0–6 are considered dark; 7–15 are considered light.  If the variable is
/// absent or unparseable, `BackgroundType::Dark` is returned as the safe
/// default.
pub fn detect_background() -> BackgroundType {
    if let Ok(val) = std::env::var("COLORFGBG") {
        if let Some(bg) = val.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                return if bg_num <= 6 {
                    BackgroundType::Dark
                } else {
                    BackgroundType::Light
                };
            }
        }
    }
    BackgroundType::Dark
}

/// Complete theme definition carrying all UI styles used by the dashboard
/// components.
#[derive(Debug, Clone)]
pub struct Theme {
    // ── Header / chrome ──────────────────────────────────────────────────────
    pub header: Style,
    pub border: Style,
    pub footer: Style,

    // ── Text ─────────────────────────────────────────────────────────────────
    pub text: Style,
    pub dim: Style,

    // ── Selector ─────────────────────────────────────────────────────────────
    pub selector: Style,
    pub selector_active: Style,

    // ── KPI tiles ────────────────────────────────────────────────────────────
    pub kpi_label: Style,
    pub kpi_value: Style,

    // ── Bar charts ───────────────────────────────────────────────────────────
    pub bar: Style,
    pub bar_value: Style,
    pub bar_label: Style,
    pub chart_title: Style,

    // ── Status ───────────────────────────────────────────────────────────────
    pub error: Style,
}

impl Theme {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Dark-background terminal theme (default).
    pub fn dark() -> Self {
        Self {
            header: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            border: Style::default().fg(Color::DarkGray),
            footer: Style::default().fg(Color::DarkGray),

            text: Style::default().fg(Color::White),
            dim: Style::default().fg(Color::DarkGray),

            selector: Style::default().fg(Color::Gray),
            selector_active: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),

            kpi_label: Style::default().fg(Color::Gray),
            kpi_value: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),

            bar: Style::default().fg(Color::Cyan),
            bar_value: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan),
            bar_label: Style::default().fg(Color::Gray),
            chart_title: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),

            error: Style::default().fg(Color::Red),
        }
    }

    /// Light-background terminal theme.
    pub fn light() -> Self {
        Self {
            header: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            border: Style::default().fg(Color::Gray),
            footer: Style::default().fg(Color::Gray),

            text: Style::default().fg(Color::Black),
            dim: Style::default().fg(Color::Gray),

            selector: Style::default().fg(Color::DarkGray),
            selector_active: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),

            kpi_label: Style::default().fg(Color::DarkGray),
            kpi_value: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),

            bar: Style::default().fg(Color::Blue),
            bar_value: Style::default().fg(Color::White).bg(Color::Blue),
            bar_label: Style::default().fg(Color::DarkGray),
            chart_title: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),

            error: Style::default().fg(Color::Red),
        }
    }

    /// Resolve a theme name (`"dark"`, `"light"`, `"auto"` or anything else)
    /// into a concrete theme. `"auto"` and unknown names use background
    /// detection.
    pub fn from_name(name: &str) -> Self {
        match name {
            "dark" => Self::dark(),
            "light" => Self::light(),
            _ => match detect_background() {
                BackgroundType::Light => Self::light(),
                _ => Self::dark(),
            },
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
