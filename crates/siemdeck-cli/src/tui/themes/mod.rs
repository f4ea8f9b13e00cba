//! Dashboard theme
//!
//! One dark theme. Severity and log-level colours are derived from the
//! semantic slots so views never hard-code colours.

use ratatui::style::{Color, Modifier, Style};

use siemdeck_core::content::{LogLevel, PhaseStatus, Severity};

/// A complete theme definition
#[derive(Debug, Clone)]
pub struct Theme {
    // Core colors
    pub bg_color: Color,
    pub border_color: Color,
    pub title_color: Color,
    pub accent_color: Color,
    pub text_color: Color,
    pub success_color: Color,
    pub dim_color: Color,

    // Special colors
    pub warning_color: Color,
    pub error_color: Color,
    pub info_color: Color,
    pub code_bg_color: Color,

    // UI element colors
    pub selection_bg_color: Color,
    pub selection_fg_color: Color,
    pub status_bar_bg_color: Color,
    pub highlight_color: Color,
    pub ai_color: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::siemdeck()
    }
}

impl Theme {
    /// Default dark theme
    pub fn siemdeck() -> Self {
        Self {
            bg_color: Color::Rgb(24, 24, 37),
            border_color: Color::Rgb(88, 91, 112),
            title_color: Color::Rgb(139, 233, 253),
            accent_color: Color::Rgb(96, 165, 250), // blue, nav highlight
            text_color: Color::Rgb(203, 213, 225),
            success_color: Color::Rgb(80, 250, 123),
            dim_color: Color::Rgb(148, 163, 184),
            warning_color: Color::Rgb(255, 203, 107),
            error_color: Color::Rgb(255, 85, 85),
            info_color: Color::Rgb(56, 189, 248),
            code_bg_color: Color::Rgb(30, 30, 45),
            selection_bg_color: Color::Rgb(51, 65, 85),
            selection_fg_color: Color::Rgb(241, 245, 249),
            status_bar_bg_color: Color::Rgb(44, 44, 57),
            highlight_color: Color::Rgb(255, 184, 108),
            ai_color: Color::Rgb(189, 147, 249),
        }
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.text_color)
    }

    pub fn dim(&self) -> Style {
        Style::default().fg(self.dim_color)
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.title_color)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border_color)
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.selection_fg_color)
            .bg(self.selection_bg_color)
            .add_modifier(Modifier::BOLD)
    }

    /// Heading style by level (1 is the most prominent)
    pub fn heading(&self, level: u8) -> Style {
        let style = Style::default().add_modifier(Modifier::BOLD);
        match level {
            1 => style.fg(self.title_color).add_modifier(Modifier::UNDERLINED),
            2 => style.fg(self.info_color),
            _ => style.fg(self.selection_fg_color),
        }
    }

    pub fn severity_color(&self, severity: Severity) -> Color {
        match severity {
            Severity::Critical => self.error_color,
            Severity::High => self.highlight_color,
            Severity::Medium => self.warning_color,
            Severity::Low => self.info_color,
        }
    }

    pub fn log_level_color(&self, level: LogLevel) -> Color {
        match level {
            LogLevel::Error => self.error_color,
            LogLevel::Warn => self.warning_color,
            LogLevel::Info => self.info_color,
            LogLevel::Debug => self.dim_color,
        }
    }

    pub fn phase_status_color(&self, status: PhaseStatus) -> Color {
        match status {
            PhaseStatus::Completed => self.success_color,
            PhaseStatus::InProgress => self.warning_color,
            PhaseStatus::Pending => self.dim_color,
            PhaseStatus::Conceptual => self.ai_color,
        }
    }
}
