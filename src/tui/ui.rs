use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{NavBar, PageView, TitleBar};

const HELP_TEXT: &str = " ↑/↓ select  Enter open  click open  r reload  q quit";

struct Areas {
    title: Rect,
    nav: Rect,
    page: Rect,
    help: Rect,
}

fn split(frame_area: Rect, nav_width: u16) -> Areas {
    use Constraint::{Length, Min};
    let [title, body, help] = Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame_area);
    let [nav, page] = Layout::horizontal([Length(nav_width), Min(0)]).areas(body);
    Areas {
        title,
        nav,
        page,
        help,
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &TuiState, spinner_frame: usize) {
    let areas = split(frame.area(), tui.nav_width);
    let pending_path = app.pending_path();

    TitleBar::new(app.current_path.clone(), pending_path.clone()).render(frame, areas.title);

    let pending = tui.pending_flags();
    NavBar {
        links: &app.links,
        pending: &pending,
        selected: app.selected,
        current: app.current_link(),
        spinner_frame,
    }
    .render(frame, areas.nav);

    let recent = app.recent_activations();
    PageView {
        current_path: &app.current_path,
        known_route: app.is_known_route(&app.current_path),
        pending_path: pending_path.as_deref(),
        recent: &recent,
    }
    .render(frame, areas.page);

    let help = if app.status_message.is_empty() {
        HELP_TEXT.to_string()
    } else {
        format!("{HELP_TEXT} | {}", app.status_message)
    };
    frame.render_widget(
        Span::styled(help, Style::default().fg(Color::DarkGray)),
        areas.help,
    );
}

/// Hit test: given a screen position, find which link row (if any) is there.
pub fn hit_test_link(
    column: u16,
    row: u16,
    frame_area: Rect,
    nav_width: u16,
    link_count: usize,
) -> Option<usize> {
    let nav = split(frame_area, nav_width).nav;

    // Rows inside the border only
    let inner_top = nav.y + 1;
    let inner_bottom = (nav.y + nav.height).saturating_sub(1);
    let inside_x = column > nav.x && column < (nav.x + nav.width).saturating_sub(1);
    if !inside_x || row < inner_top || row >= inner_bottom {
        return None;
    }

    let index = (row - inner_top) as usize;
    (index < link_count).then_some(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::{index_of, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draw_ui_idle() {
        let app = test_app();
        let tui = TuiState::mount(&app).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(80, 16)).unwrap();

        terminal.draw(|f| draw_ui(f, &app, &tui, 0)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("linkstatus"));
        assert!(text.contains("Dashboard"));
        assert!(text.contains("Idle"));
    }

    #[test]
    fn test_draw_ui_while_pending() {
        let mut app = test_app();
        let tui = TuiState::mount(&app).unwrap();
        let idx = index_of(&app, "/settings/profile");
        update(&mut app, Action::Activate(idx));

        let mut terminal = Terminal::new(TestBackend::new(80, 16)).unwrap();
        terminal.draw(|f| draw_ui(f, &app, &tui, 0)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("→ /settings/profile"));
        assert!(text.contains("Loading /settings/profile"));
    }

    #[test]
    fn test_hit_test_link_rows() {
        let area = Rect::new(0, 0, 80, 20);
        // Title bar is row 0, nav border row 1, first link row 2
        assert_eq!(hit_test_link(2, 2, area, 20, 5), Some(0));
        assert_eq!(hit_test_link(2, 6, area, 20, 5), Some(4));
        assert_eq!(hit_test_link(2, 7, area, 20, 5), None);
        assert_eq!(hit_test_link(2, 1, area, 20, 5), None);
        assert_eq!(hit_test_link(0, 2, area, 20, 5), None);
        assert_eq!(hit_test_link(40, 2, area, 20, 5), None);
    }
}
