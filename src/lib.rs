//! rostergrid - windowed rendering and interval queries for roster calendars
//!
//! The engine behind a two-dimensional calendar grid (rows are entities,
//! columns are the dates of one year) that stays responsive as rows grow
//! into the thousands:
//! - Two-axis virtual-scroll window calculation with overscan
//! - Debounce/throttle primitives gating recomputation under scroll input
//! - A paginated row-loading state machine with stale-completion rejection
//! - Date-interval overlap detection, point lookup, and range queries
//!
//! The crate emits index ranges and resolved cells, never pixels; data
//! arrives through the [`EntityProvider`] contract one page at a time.
//!
//! # Example
//!
//! ```
//! use rostergrid::compute_window;
//!
//! // 400-unit viewport over 100 rows of height 50, scrolled to 100.
//! let window = compute_window(100.0, 400.0, 50.0, 100, 5);
//! assert_eq!(window.start(), 0);
//! assert_eq!(window.end(), 15);
//! assert_eq!(window.total_extent(), 5000.0);
//! ```

// Data model
pub mod dates;
pub mod error;
pub mod types;

// Query and mutation engine
pub mod roster;
pub mod window;

// Scroll-driven loading
pub mod grid;
pub mod limiter;
pub mod pager;
pub mod provider;

pub use error::{Result, RostergridError};
pub use grid::{GridConfig, GridCoordinator, GridView};
pub use limiter::{Debouncer, Throttler};
pub use pager::{LoadPhase, PageRequest, Pager};
pub use provider::EntityProvider;
pub use roster::Roster;
pub use types::{Cell, Entity, Interval, IntervalDraft, IntervalKind};
pub use window::{clamp_scroll_offset, compute_window, AxisWindow};

/// Get the library version
#[must_use]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
