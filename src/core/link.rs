//! # Link Activator
//!
//! Bridges the two signals the host gives us into pending-state transitions:
//!
//! ```text
//! user activates link   →  set(Some(destination))  →  caller's on_click
//! host reports path     →  set(None)
//! ```
//!
//! The path observation is level-triggered: every report clears, including
//! the one at mount and repeats of the path we are already on.

use log::debug;
use std::fmt;

use crate::core::destination::Destination;
use crate::core::provider::{LinkStatusContext, ScopeError};

pub type ClickHandler = Box<dyn FnMut(&Destination)>;

pub struct LinkActivator {
    context: LinkStatusContext,
    destination: Destination,
    on_click: Option<ClickHandler>,
}

impl LinkActivator {
    pub fn new(context: LinkStatusContext, destination: impl Into<Destination>) -> Self {
        Self {
            context,
            destination: destination.into(),
            on_click: None,
        }
    }

    /// Preserve a caller-supplied click handler. It runs after the pending
    /// path is written, once per activation.
    pub fn with_on_click(mut self, handler: impl FnMut(&Destination) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    pub fn destination(&self) -> &Destination {
        &self.destination
    }

    /// Mark this link's destination as pending, then forward to the
    /// caller's handler.
    ///
    /// The handler runs even when the write fails, so navigation is never
    /// blocked by this layer. The write error is returned afterwards.
    pub fn activate(&mut self) -> Result<String, ScopeError> {
        let path = self.destination.normalize();
        debug!("Link activated: {}", path);

        let written = self.context.set_pending_path(Some(path.clone()));

        if let Some(handler) = self.on_click.as_mut() {
            handler(&self.destination);
        }

        written.map(|()| path)
    }

    /// Host reported its current path. Navigation has resolved, one way or
    /// another, so whatever was pending is no longer.
    pub fn observe_path(&self, current_path: &str) -> Result<(), ScopeError> {
        debug!(
            "Link {} observed current path {}",
            self.destination, current_path
        );
        self.context.set_pending_path(None)
    }
}

impl fmt::Debug for LinkActivator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkActivator")
            .field("destination", &self.destination)
            .field("has_on_click", &self.on_click.is_some())
            .finish()
    }
}
