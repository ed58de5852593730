//! # TitleBar Component
//!
//! Single-line bar at the top: app name, current path, and the pending path
//! while a navigation is in flight.
//!
//! ```text
//! linkstatus | /dashboard
//! linkstatus | /dashboard | → /settings/profile
//! ```
//!
//! Purely presentational; all props come from `App`.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    pub current_path: String,
    pub pending_path: Option<String>,
}

impl TitleBar {
    pub fn new(current_path: String, pending_path: Option<String>) -> Self {
        Self {
            current_path,
            pending_path,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled("linkstatus", Style::default().fg(Color::Cyan)),
            Span::raw(format!(" | {}", self.current_path)),
        ];
        if let Some(pending) = &self.pending_path {
            spans.push(Span::styled(
                format!(" | → {pending}"),
                Style::default().fg(Color::Yellow),
            ));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
