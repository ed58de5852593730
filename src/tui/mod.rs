//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! translates input into `core::action::Action` values, and plays the role of
//! the host router through [`router::SimulatedRouter`].
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! - Input, a resolved navigation, or a link watcher flipping its pending
//!   flag marks the frame dirty.
//! - While a navigation is in flight the loop polls at ~12fps so spinners
//!   animate and the router resolves on time.
//! - Idle, it sleeps up to 500ms and only redraws on input or resize.

mod component;
pub mod components;
mod event;
pub mod router;
mod ui;

use log::{debug, info};
use std::io::{self, stdout};
use std::time::{Duration, Instant};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::provider::ScopeError;
use crate::core::state::App;
use crate::core::status::StatusWatcher;
use crate::tui::components::NavBar;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::router::SimulatedRouter;

const ANIMATION_TICK: Duration = Duration::from_millis(80);
const IDLE_TICK: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core logic)
pub struct TuiState {
    /// One mounted status per link, same order as `App::links`.
    pub watchers: Vec<StatusWatcher>,
    pub nav_width: u16,
}

impl TuiState {
    pub fn mount(app: &App) -> Result<Self, ScopeError> {
        let context = app.context();
        let watchers = app
            .links
            .iter()
            .map(|link| StatusWatcher::mount(&context, link.status_options()))
            .collect::<Result<Vec<_>, _>>()?;
        debug!("Mounted {} link status watchers", watchers.len());

        Ok(Self {
            watchers,
            nav_width: NavBar::preferred_width(&app.links),
        })
    }

    pub fn pending_flags(&self) -> Vec<bool> {
        self.watchers.iter().map(StatusWatcher::is_pending).collect()
    }

    /// Whether any link's pending flag flipped since the last call. Resets
    /// every watcher, not just the first changed one.
    pub fn take_changed(&self) -> bool {
        self.watchers
            .iter()
            .fold(false, |changed, watcher| watcher.take_changed() | changed)
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

fn to_io(e: ScopeError) -> io::Error {
    io::Error::other(e)
}

/// Runs the session. `open_path`, when given, is activated before the first
/// frame as if typed by the user.
pub fn run(config: ResolvedConfig, open_path: Option<String>) -> io::Result<()> {
    let mut app = App::from_config(&config);
    let tui = TuiState::mount(&app).map_err(to_io)?;
    let mut router = SimulatedRouter::new(config.navigation_delay);

    if let Some(path) = open_path {
        if let Effect::Navigate(path) = update(&mut app, Action::ActivatePath(path)) {
            router.navigate(path, Instant::now());
        }
    }

    let mut dirty = true; // Force first frame

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let start_time = Instant::now();

    let result = loop {
        let animating = router.is_navigating() || app.pending_path().is_some();

        if tui.take_changed() | std::mem::take(&mut dirty) || animating {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            if let Err(e) = terminal.draw(|f| ui::draw_ui(f, &app, &tui, spinner_frame)) {
                break Err(e);
            }
        }

        let timeout = if animating { ANIMATION_TICK } else { IDLE_TICK };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain everything queued before the next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            dirty = true;
            let action = match event {
                TuiEvent::Resize => continue,
                TuiEvent::Quit | TuiEvent::ForceQuit => Action::Quit,
                TuiEvent::SelectPrev => Action::SelectPrev,
                TuiEvent::SelectNext => Action::SelectNext,
                TuiEvent::Activate => Action::ActivateSelected,
                TuiEvent::Reload => Action::ActivatePath(app.current_path.clone()),
                TuiEvent::MouseClick(column, row) => {
                    let frame_area = terminal.get_frame().area();
                    match ui::hit_test_link(column, row, frame_area, tui.nav_width, app.links.len()) {
                        Some(index) => Action::Activate(index),
                        None => continue,
                    }
                }
            };

            match update(&mut app, action) {
                Effect::Navigate(path) => router.navigate(path, Instant::now()),
                Effect::Quit => should_quit = true,
                Effect::None => {}
            }
        }

        if should_quit {
            break Ok(());
        }

        if let Some(path) = router.poll(Instant::now()) {
            dirty = true;
            update(&mut app, Action::PathChanged(path));
        }
    };

    ratatui::restore();
    info!("linkstatus exiting");
    result
}
