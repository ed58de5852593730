//! # Application State
//!
//! The host session that owns the link-status provider. Domain state only,
//! no terminal types; presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── provider: LinkStatusProvider    // root scope, owns the pending path
//! ├── links: Vec<LinkEntry>           // navigation links, from config
//! ├── activators: Vec<LinkActivator>  // one per link, same order
//! ├── current_path: String            // last path the router resolved
//! ├── selected: usize                 // highlighted link
//! ├── history: Rc<RefCell<VecDeque>>  // recent activations, newest first
//! └── status_message: String          // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use log::warn;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::core::config::ResolvedConfig;
use crate::core::destination::Destination;
use crate::core::link::LinkActivator;
use crate::core::provider::{LinkStatusContext, LinkStatusProvider};
use crate::core::status::StatusOptions;

/// Number of recent activations kept for display.
pub const MAX_HISTORY: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEntry {
    pub label: String,
    pub destination: Destination,
    pub prefix: String,
    pub root: bool,
}

impl LinkEntry {
    /// Entry whose prefix is its own pathname. `/` becomes an exact-match root link.
    pub fn new(label: impl Into<String>, destination: impl Into<Destination>) -> Self {
        let destination = destination.into();
        let root = destination.pathname() == "/";
        Self {
            label: label.into(),
            prefix: default_prefix(&destination, root),
            destination,
            root,
        }
    }

    /// Switches matching mode and recomputes the default prefix for it.
    pub fn with_root(mut self, root: bool) -> Self {
        self.root = root;
        self.prefix = default_prefix(&self.destination, root);
        self
    }

    pub fn status_options(&self) -> StatusOptions {
        StatusOptions {
            prefix: self.prefix.clone(),
            root: self.root,
        }
    }
}

/// Exact-match links compare against what activation writes, query and hash
/// included. Prefix links only need the pathname.
fn default_prefix(destination: &Destination, root: bool) -> String {
    if root {
        destination.normalize()
    } else {
        destination.pathname().to_string()
    }
}

pub struct App {
    pub provider: LinkStatusProvider,
    pub links: Vec<LinkEntry>,
    pub activators: Vec<LinkActivator>,
    pub current_path: String,
    pub selected: usize,
    pub history: Rc<RefCell<VecDeque<String>>>,
    pub status_message: String,
}

impl App {
    pub fn new(links: Vec<LinkEntry>, initial_path: &str) -> Self {
        let provider = LinkStatusProvider::new();
        let history = Rc::new(RefCell::new(VecDeque::with_capacity(MAX_HISTORY)));

        let activators = links
            .iter()
            .map(|link| {
                LinkActivator::new(provider.context(), link.destination.clone())
                    .with_on_click(history_recorder(Rc::clone(&history)))
            })
            .collect();

        let app = Self {
            provider,
            links,
            activators,
            current_path: initial_path.to_string(),
            selected: 0,
            history,
            status_message: String::from("Ready"),
        };

        // Every link observes the path it was mounted on
        app.broadcast_current_path();
        app
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.links.clone(), &config.initial_path)
    }

    pub fn context(&self) -> LinkStatusContext {
        self.provider.context()
    }

    pub fn pending_path(&self) -> Option<String> {
        self.context().pending_path().ok().flatten()
    }

    /// Whether `path` is one of the configured link destinations.
    pub fn is_known_route(&self, path: &str) -> bool {
        let pathname = Destination::from(path).pathname().to_string();
        self.links
            .iter()
            .any(|link| link.destination.pathname() == pathname)
    }

    /// Index of the link whose destination is the current path, if any.
    pub fn current_link(&self) -> Option<usize> {
        self.links
            .iter()
            .position(|link| link.destination.normalize() == self.current_path)
    }

    /// An activator for a destination outside the configured links. Its
    /// clicks land in the same history as the link activators.
    pub fn ad_hoc_activator(&self, destination: impl Into<Destination>) -> LinkActivator {
        LinkActivator::new(self.context(), destination)
            .with_on_click(history_recorder(Rc::clone(&self.history)))
    }

    pub fn recent_activations(&self) -> Vec<String> {
        self.history.borrow().iter().cloned().collect()
    }

    pub(crate) fn broadcast_current_path(&self) {
        for activator in &self.activators {
            if let Err(e) = activator.observe_path(&self.current_path) {
                warn!("Link {} could not observe path: {}", activator.destination(), e);
            }
        }
    }
}

fn history_recorder(history: Rc<RefCell<VecDeque<String>>>) -> impl FnMut(&Destination) + 'static {
    move |destination| record_activation(&history, destination)
}

fn record_activation(history: &RefCell<VecDeque<String>>, destination: &Destination) {
    let mut history = history.borrow_mut();
    history.push_front(destination.normalize());
    history.truncate(MAX_HISTORY);
}
