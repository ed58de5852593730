//! # NavBar Component
//!
//! Sidebar listing the navigation links. Each row shows a spinner while its
//! link status reads pending, so a group link (`/settings`) spins while any
//! of its sub-paths load, and the root link only spins for `/` itself.
//!
//! Stateless: created each frame from borrowed link entries and the
//! per-link pending flags read off the mounted `StatusWatcher`s.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::state::LinkEntry;
use crate::tui::component::Component;

pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const MIN_WIDTH: u16 = 16;
const MAX_WIDTH: u16 = 32;

pub struct NavBar<'a> {
    pub links: &'a [LinkEntry],
    pub pending: &'a [bool],
    pub selected: usize,
    pub current: Option<usize>,
    pub spinner_frame: usize,
}

impl<'a> NavBar<'a> {
    /// Sidebar width that fits the longest label: borders + marker + spinner + gaps.
    pub fn preferred_width(links: &[LinkEntry]) -> u16 {
        let longest = links
            .iter()
            .map(|link| link.label.width())
            .max()
            .unwrap_or(0);
        (longest as u16).saturating_add(6).clamp(MIN_WIDTH, MAX_WIDTH)
    }

    fn row(&self, index: usize, link: &LinkEntry, label_width: usize) -> Line<'static> {
        let is_pending = self.pending.get(index).copied().unwrap_or(false);
        let indicator = if is_pending {
            SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
        } else {
            " "
        };

        let mut style = Style::default().fg(Color::Gray);
        if self.current == Some(index) {
            style = style.fg(Color::White).add_modifier(Modifier::BOLD);
        }
        if index == self.selected {
            style = style.add_modifier(Modifier::REVERSED);
        }

        let marker = if index == self.selected { "›" } else { " " };
        Line::from(vec![
            Span::styled(marker, style),
            Span::styled(
                format!(" {}", fit_label(&link.label, label_width)),
                style,
            ),
            Span::raw(" "),
            Span::styled(indicator, Style::default().fg(Color::Yellow)),
        ])
    }
}

impl<'a> Component for NavBar<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // borders (2) + marker (1) + leading space (1) + gap (1) + spinner (1)
        let label_width = area.width.saturating_sub(6) as usize;

        let lines: Vec<Line> = self
            .links
            .iter()
            .enumerate()
            .map(|(i, link)| self.row(i, link, label_width))
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Links ");

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

/// Pad or truncate `label` to exactly `width` display columns.
fn fit_label(label: &str, width: usize) -> String {
    if label.width() <= width {
        let pad = width - label.width();
        return format!("{label}{}", " ".repeat(pad));
    }

    let mut out = String::new();
    let mut used = 0;
    let budget = width.saturating_sub(1);
    for c in label.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(c);
        used += w;
    }
    if width > 0 {
        out.push('…');
        used += 1;
    }
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_links;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(nav: &mut NavBar, width: u16, height: u16) -> Vec<String> {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| nav.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn test_fit_label_pads_and_truncates() {
        assert_eq!(fit_label("Home", 6), "Home  ");
        assert_eq!(fit_label("Dashboard", 5), "Dash…");
        assert_eq!(fit_label("x", 0), "");
    }

    #[test]
    fn test_fit_label_counts_wide_chars() {
        // Each CJK char is two columns
        assert_eq!(fit_label("設定", 4), "設定");
        assert_eq!(fit_label("設定画面", 5).width(), 5);
    }

    #[test]
    fn test_preferred_width_is_clamped() {
        assert_eq!(NavBar::preferred_width(&[]), MIN_WIDTH);
        let long = vec![LinkEntry::new("x".repeat(100), "/x")];
        assert_eq!(NavBar::preferred_width(&long), MAX_WIDTH);
    }

    #[test]
    fn test_pending_row_shows_spinner() {
        let links = test_links();
        let mut pending = vec![false; links.len()];
        pending[2] = true;

        let mut nav = NavBar {
            links: &links,
            pending: &pending,
            selected: 0,
            current: Some(0),
            spinner_frame: 0,
        };
        let rows = render_text(&mut nav, 24, links.len() as u16 + 2);

        // Row 0 is the top border
        assert!(rows[3].contains("Settings"));
        assert!(rows[3].contains(SPINNER_FRAMES[0]));
        assert!(!rows[1].contains(SPINNER_FRAMES[0]));
        assert!(rows[1].contains('›'));
    }

    #[test]
    fn test_spinner_frame_advances() {
        let links = test_links();
        let pending = vec![true; links.len()];
        let mut nav = NavBar {
            links: &links,
            pending: &pending,
            selected: 0,
            current: None,
            spinner_frame: 13,
        };
        let rows = render_text(&mut nav, 24, links.len() as u16 + 2);
        assert!(rows[1].contains(SPINNER_FRAMES[3]));
    }
}
