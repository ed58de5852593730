//! # Core Link-Status Logic
//!
//! Tracks which navigation link is pending and derives per-link loading
//! indicators from it. Knows nothing about any specific UI technology.
//!
//! ```text
//!            activate()                           observe_path()
//!   click ──────────────┐                ┌──────────────────── router
//!                       ▼                ▼
//!               ┌──────────────────────────────┐
//!               │   PendingState (provider)    │
//!               │   pending_path: Option<..>   │
//!               └──────────────┬───────────────┘
//!                              │ notify (sync)
//!            ┌─────────────────┼─────────────────┐
//!            ▼                 ▼                 ▼
//!     StatusWatcher     StatusWatcher     StatusWatcher
//!     ("/", root)       ("/settings")     ("/reports")
//! ```
//!
//! ## Modules
//!
//! - [`pending`]: the shared cell and its observer list
//! - [`provider`]: the owning scope and the handles handed to descendants
//! - [`destination`]: raw path or structured route, normalized to a string
//! - [`link`]: `LinkActivator`, which writes and clears the pending path
//! - [`status`]: prefix/exact matching and mounted status watchers
//! - [`state`], [`action`]: the host session and its reducer
//! - [`config`]: TOML config and resolution

pub mod action;
pub mod config;
pub mod destination;
pub mod link;
pub mod pending;
pub mod provider;
pub mod state;
pub mod status;

pub use destination::{Destination, Route};
pub use link::LinkActivator;
pub use provider::{LinkStatusContext, LinkStatusProvider, ScopeError};
pub use status::{LinkStatus, StatusOptions, StatusWatcher, derive_status, is_pending};
