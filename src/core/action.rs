//! # Actions
//!
//! Everything that can happen in a session becomes an `Action`.
//! User presses Enter on a link? That's `Action::ActivateSelected`.
//! Router finishes loading? That's `Action::PathChanged(path)`.
//!
//! `update()` applies an action to the `App` and returns an `Effect`
//! describing the I/O the adapter should perform. The core never navigates
//! by itself; it asks for it.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::core::link::LinkActivator;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Activate the link at this index (mouse click).
    Activate(usize),
    /// Activate the highlighted link (Enter).
    ActivateSelected,
    /// Activate a path that need not be a configured link (`--open`, reload).
    ActivatePath(String),
    /// The router reports the current path. Sent on every observation.
    PathChanged(String),
    SelectNext,
    SelectPrev,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Ask the router to load this path.
    Navigate(String),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Activate(index) => activate(app, index),
        Action::ActivateSelected => {
            let index = app.selected;
            activate(app, index)
        }
        Action::ActivatePath(path) => {
            let mut activator = app.ad_hoc_activator(path);
            let path = start_navigation(&mut activator);
            app.status_message = format!("Loading {path}...");
            Effect::Navigate(path)
        }
        Action::PathChanged(path) => {
            info!("Current path: {}", path);
            app.current_path = path;
            app.broadcast_current_path();
            app.status_message = if app.is_known_route(&app.current_path) {
                format!("Loaded {}", app.current_path)
            } else {
                format!("Not found: {}", app.current_path)
            };
            Effect::None
        }
        Action::SelectNext => {
            if !app.links.is_empty() {
                app.selected = (app.selected + 1).min(app.links.len() - 1);
            }
            Effect::None
        }
        Action::SelectPrev => {
            app.selected = app.selected.saturating_sub(1);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn activate(app: &mut App, index: usize) -> Effect {
    let Some(activator) = app.activators.get_mut(index) else {
        warn!("No link at index {}", index);
        app.status_message = format!("No link at index {index}");
        return Effect::None;
    };

    let path = start_navigation(activator);
    app.selected = index;
    app.status_message = format!("Loading {path}...");
    Effect::Navigate(path)
}

/// Activates and returns the path to navigate to.
fn start_navigation(activator: &mut LinkActivator) -> String {
    match activator.activate() {
        Ok(path) => path,
        Err(e) => {
            // The write failed but the click still goes through
            warn!("Link activation outside provider: {}", e);
            activator.destination().normalize()
        }
    }
}
