//! # TUI Components
//!
//! Stateless, props-based components. Each is created per frame from
//! borrowed `App`/`TuiState` data and renders itself into a `Rect`:
//!
//! - `TitleBar`: current path and in-flight destination
//! - `NavBar`: link sidebar with per-link pending spinners
//! - `PageView`: stand-in for the routed content
//!
//! ```text
//! components/
//! ├── mod.rs        (this file)
//! ├── title_bar.rs
//! ├── nav_bar.rs
//! └── page.rs
//! ```

pub mod nav_bar;
pub mod page;
mod title_bar;

pub use nav_bar::NavBar;
pub use page::PageView;
pub use title_bar::TitleBar;
