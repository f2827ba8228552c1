//! Virtual-scrolling window math.
//!
//! Pure functions mapping a scroll position to the contiguous index range
//! worth materializing on one axis. The vertical (row) and horizontal (date
//! column) axes use the same algorithm with their own cell extents and
//! overscan, and are combined into a rectangle by the grid coordinator.

use std::ops::Range;

/// A contiguous inclusive index range over one scrollable axis, plus the
/// axis total extent in layout units.
///
/// Recomputed on every scroll event, never persisted. An axis with zero
/// cells (or a scroll position past the end of the axis) produces an empty
/// window; callers must check [`is_empty`](Self::is_empty) before using
/// [`start`](Self::start)/[`end`](Self::end), or iterate
/// [`indices`](Self::indices) which yields nothing when empty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisWindow {
    start: usize,
    len: usize,
    total_extent: f32,
}

impl AxisWindow {
    /// First index in the window (inclusive). Meaningless when empty.
    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Last index in the window (inclusive). Meaningless when empty.
    #[must_use]
    pub fn end(&self) -> usize {
        self.start + self.len.saturating_sub(1)
    }

    /// Number of indices in the window.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when the window contains no indices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total axis extent in layout units (`total_cells * cell_extent`).
    #[must_use]
    pub fn total_extent(&self) -> f32 {
        self.total_extent
    }

    /// The window as an iterable half-open range.
    #[must_use]
    pub fn indices(&self) -> Range<usize> {
        self.start..self.start + self.len
    }

    /// Whether `index` falls inside the window.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.indices().contains(&index)
    }
}

/// Compute the visible index window for one axis.
///
/// * `scroll_offset` - current scroll position in layout units
/// * `viewport_extent` - visible size of the axis in layout units
/// * `cell_extent` - size of one cell in layout units (must be positive)
/// * `total_cells` - number of cells on the axis
/// * `overscan` - extra cells rendered on each side to mask scroll latency
///
/// The window is `[floor(scroll / cell) - overscan,
/// ceil((scroll + viewport) / cell) + overscan]`, clamped to
/// `[0, total_cells - 1]`. Overscan has no correctness implication, only a
/// smoothness trade-off. A zero-cell axis or non-positive `cell_extent`
/// yields an empty window; a scroll offset past the axis end clamps the end
/// index to `total_cells - 1` (and may leave the window empty).
///
/// Pure: identical arguments always produce identical windows.
#[must_use]
pub fn compute_window(
    scroll_offset: f32,
    viewport_extent: f32,
    cell_extent: f32,
    total_cells: usize,
    overscan: usize,
) -> AxisWindow {
    let total_extent = (cell_extent * total_cells as f32).max(0.0);

    if total_cells == 0 || cell_extent <= 0.0 {
        return AxisWindow {
            start: 0,
            len: 0,
            total_extent,
        };
    }

    let scroll = f64::from(scroll_offset.max(0.0));
    let cell = f64::from(cell_extent);
    let viewport = f64::from(viewport_extent.max(0.0));

    let first_visible = to_index((scroll / cell).floor());
    let last_visible = to_index(((scroll + viewport) / cell).ceil());

    let start = first_visible.saturating_sub(overscan);
    let end = last_visible
        .saturating_add(overscan)
        .min(total_cells - 1);

    if start > end {
        // Scrolled past the end of the axis: nothing to materialize.
        return AxisWindow {
            start: 0,
            len: 0,
            total_extent,
        };
    }

    AxisWindow {
        start,
        len: end - start + 1,
        total_extent,
    }
}

/// Clamp a target scroll offset into `[0, max_offset]`.
///
/// A negative `max_offset` (content smaller than the viewport) clamps to 0.
#[must_use]
pub fn clamp_scroll_offset(target: f32, max_offset: f32) -> f32 {
    target.clamp(0.0, max_offset.max(0.0))
}

/// Safely convert a non-negative f64 to an index with clamping.
/// The clamp ensures the value is in [0, u32::MAX] before casting.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_index(v: f64) -> usize {
    v.clamp(0.0, f64::from(u32::MAX)) as usize
}
