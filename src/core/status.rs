//! # Link Status
//!
//! Derives "is this link pending" from the shared pending path and a prefix.
//!
//! Two matching modes:
//!
//! - **prefix** (`root: false`): pending if the pending path starts with the
//!   prefix. A group link like `/settings` lights up while navigating to
//!   `/settings/profile`.
//! - **exact** (`root: true`): pending only on full equality. Used for the
//!   base path, which is a prefix of everything and would otherwise read as
//!   pending during every navigation.
//!
//! [`derive_status`] is a one-shot read for render time. [`StatusWatcher`] is
//! the mounted form: it subscribes once and keeps its answer current.

use std::cell::Cell;
use std::rc::Rc;

use crate::core::pending::Subscription;
use crate::core::provider::{LinkStatusContext, ScopeError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusOptions {
    pub prefix: String,
    pub root: bool,
}

impl StatusOptions {
    pub fn prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            root: false,
        }
    }

    pub fn root(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            root: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkStatus {
    pub is_pending: bool,
}

/// An empty pending path counts as nothing pending.
pub fn is_pending(pending_path: Option<&str>, prefix: &str, root: bool) -> bool {
    match pending_path {
        None | Some("") => false,
        Some(path) if root => path == prefix,
        Some(path) => path.starts_with(prefix),
    }
}

pub fn derive_status(
    context: &LinkStatusContext,
    options: &StatusOptions,
) -> Result<LinkStatus, ScopeError> {
    let pending = context.pending_path()?;
    Ok(LinkStatus {
        is_pending: is_pending(pending.as_deref(), &options.prefix, options.root),
    })
}

/// A status derivation kept live by a pending-state subscription.
///
/// Registered on [`mount`](Self::mount), released on drop.
pub struct StatusWatcher {
    pending: Rc<Cell<bool>>,
    changed: Rc<Cell<bool>>,
    _subscription: Subscription,
}

impl StatusWatcher {
    pub fn mount(context: &LinkStatusContext, options: StatusOptions) -> Result<Self, ScopeError> {
        let initial = derive_status(context, &options)?;
        let pending = Rc::new(Cell::new(initial.is_pending));
        let changed = Rc::new(Cell::new(false));

        let subscription = context.subscribe({
            let pending = Rc::clone(&pending);
            let changed = Rc::clone(&changed);
            move |path| {
                let next = is_pending(path, &options.prefix, options.root);
                if pending.replace(next) != next {
                    changed.set(true);
                }
            }
        })?;

        Ok(Self {
            pending,
            changed,
            _subscription: subscription,
        })
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }

    /// Whether the derived value flipped since the last call.
    pub fn take_changed(&self) -> bool {
        self.changed.replace(false)
    }
}
