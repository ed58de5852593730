//! # Provider Scope
//!
//! `LinkStatusProvider` is the root scope that owns the [`PendingState`].
//! Everything below it gets a [`LinkStatusContext`]: a cheap, cloneable handle
//! holding a weak reference to the state.
//!
//! A handle used after its provider is gone, or one that never had a provider
//! ([`LinkStatusContext::detached`]), fails every access with [`ScopeError`].
//! That error is a wiring mistake, not a runtime condition, so nothing in this
//! crate retries or swallows it.

use log::{debug, info};
use std::fmt;
use std::rc::{Rc, Weak};

use crate::core::pending::{PendingState, Subscription};

// ============================================================================
// Error Type
// ============================================================================

/// Link-status API used outside an installed provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeError;

impl fmt::Display for ScopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "state accessed outside provider")
    }
}

impl std::error::Error for ScopeError {}

// ============================================================================
// Provider
// ============================================================================

pub struct LinkStatusProvider {
    state: Rc<PendingState>,
}

impl LinkStatusProvider {
    pub fn new() -> Self {
        info!("Link status provider mounted");
        Self {
            state: PendingState::new(),
        }
    }

    /// Hand out a handle for a descendant of this scope.
    pub fn context(&self) -> LinkStatusContext {
        LinkStatusContext {
            state: Rc::downgrade(&self.state),
        }
    }
}

impl Default for LinkStatusProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for LinkStatusProvider {
    fn drop(&mut self) {
        info!(
            "Link status provider unmounted ({} observers still registered)",
            self.state.observer_count()
        );
    }
}

// ============================================================================
// Context Handle
// ============================================================================

#[derive(Clone, Default)]
pub struct LinkStatusContext {
    state: Weak<PendingState>,
}

impl LinkStatusContext {
    /// A handle with no provider behind it. Every access returns `ScopeError`.
    pub fn detached() -> Self {
        Self { state: Weak::new() }
    }

    pub fn is_in_scope(&self) -> bool {
        self.state.strong_count() > 0
    }

    fn state(&self) -> Result<Rc<PendingState>, ScopeError> {
        self.state.upgrade().ok_or_else(|| {
            debug!("Link status context used without a live provider");
            ScopeError
        })
    }

    pub fn pending_path(&self) -> Result<Option<String>, ScopeError> {
        Ok(self.state()?.get())
    }

    /// Setter used by link activators. Status consumers only read.
    pub fn set_pending_path(&self, path: Option<String>) -> Result<(), ScopeError> {
        self.state()?.set(path);
        Ok(())
    }

    pub fn observer_count(&self) -> Result<usize, ScopeError> {
        Ok(self.state()?.observer_count())
    }

    pub fn subscribe(
        &self,
        observer: impl Fn(Option<&str>) + 'static,
    ) -> Result<Subscription, ScopeError> {
        Ok(self.state()?.subscribe(observer))
    }
}

impl fmt::Debug for LinkStatusContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkStatusContext")
            .field("in_scope", &self.is_in_scope())
            .finish()
    }
}
