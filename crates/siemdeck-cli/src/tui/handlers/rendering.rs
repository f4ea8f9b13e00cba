//! UI rendering coordinator
//!
//! Lays out the frame and dispatches the content area to the current view.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};
use siemdeck_core::content::View;

use crate::tui::app::App;
use crate::tui::components::{nav, status_bar};
use crate::tui::views;

impl App {
    /// Main UI rendering dispatcher
    pub fn ui(&self, f: &mut Frame) {
        let bg = Block::default().style(Style::default().bg(self.theme.bg_color));
        f.render_widget(bg, f.area());

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(f.area());
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(nav::NAV_WIDTH), Constraint::Min(20)])
            .split(rows[0]);

        nav::render(f, columns[0], self);

        let area = columns[1];
        match self.view {
            View::Overview => views::overview::render(f, area, self),
            View::Dashboard => views::dashboard::render(f, area, self),
            View::Alerts => views::alerts::render(f, area, self),
            View::Logs => views::logs::render(f, area, self),
            View::Rules | View::Playbooks | View::Artifacts => views::code::render(f, area, self),
            View::Runbook => views::runbook::render(f, area, self),
            View::Deliverables => views::deliverables::render(f, area, self),
        }

        status_bar::render(f, rows[1], self);
    }
}
