//! # Page Component
//!
//! Content pane standing in for the routed view: what is loaded, what is on
//! the way, and the most recent link activations.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

use crate::tui::component::Component;

/// Activations listed below the page body.
const RECENT_SHOWN: usize = 5;

pub struct PageView<'a> {
    pub current_path: &'a str,
    pub known_route: bool,
    pub pending_path: Option<&'a str>,
    pub recent: &'a [String],
}

impl<'a> Component for PageView<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let dim = Style::default().fg(Color::DarkGray);
        let mut lines = Vec::new();

        if self.known_route {
            lines.push(Line::from(Span::styled(
                self.current_path.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                format!("404 · {} not found", self.current_path),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )));
        }
        lines.push(Line::default());

        match self.pending_path {
            Some(pending) => lines.push(Line::from(vec![
                Span::styled("Loading ", Style::default().fg(Color::Yellow)),
                Span::raw(pending.to_string()),
            ])),
            None => lines.push(Line::from(Span::styled("Idle", dim))),
        }

        if !self.recent.is_empty() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled("Recent activations", dim)));
            for path in self.recent.iter().take(RECENT_SHOWN) {
                lines.push(Line::from(Span::styled(format!("  {path}"), dim)));
            }
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(dim)
            .padding(Padding::horizontal(1));

        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(page: &mut PageView) -> String {
        let backend = TestBackend::new(50, 14);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| page.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_known_route_while_loading() {
        let recent = vec!["/settings".to_string()];
        let text = render_text(&mut PageView {
            current_path: "/dashboard",
            known_route: true,
            pending_path: Some("/settings"),
            recent: &recent,
        });
        assert!(text.contains("/dashboard"));
        assert!(text.contains("Loading /settings"));
        assert!(text.contains("Recent activations"));
    }

    #[test]
    fn test_unknown_route_idle() {
        let text = render_text(&mut PageView {
            current_path: "/missing",
            known_route: false,
            pending_path: None,
            recent: &[],
        });
        assert!(text.contains("/missing not found"));
        assert!(text.contains("Idle"));
        assert!(!text.contains("Recent"));
    }

    #[test]
    fn test_recent_list_is_capped() {
        let recent: Vec<String> = (0..10).map(|i| format!("/p{i}")).collect();
        let text = render_text(&mut PageView {
            current_path: "/",
            known_route: true,
            pending_path: None,
            recent: &recent,
        });
        assert!(text.contains("/p4"));
        assert!(!text.contains("/p5"));
    }
}
