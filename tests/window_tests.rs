//! Window calculator tests
//!
//! Verifies the virtual-scroll index math on both axes: overscan handling,
//! clamping at the edges, empty-axis behavior, and scroll offset clamping.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use rostergrid::{clamp_scroll_offset, compute_window};
use test_case::test_case;

// =============================================================================
// VERTICAL (ROW) AXIS
// =============================================================================

#[test]
fn vertical_window_with_overscan() {
    let w = compute_window(100.0, 400.0, 50.0, 100, 5);

    // floor(100/50) - 5 clamps to 0
    assert_eq!(w.start(), 0, "start should clamp to 0");
    // ceil((100+400)/50) + 5 = 15
    assert_eq!(w.end(), 15, "end should be ceil(500/50) + overscan");
    assert_eq!(w.total_extent(), 5000.0, "100 rows * 50 units");
}

#[test]
fn small_dataset_clamps_to_last_row() {
    let w = compute_window(0.0, 400.0, 50.0, 5, 2);

    assert_eq!(w.start(), 0);
    assert_eq!(w.end(), 4, "end should clamp to total_cells - 1");
    assert_eq!(w.total_extent(), 250.0);
}

#[test]
fn overscan_is_respected_inside_bounds() {
    let w = compute_window(200.0, 200.0, 50.0, 50, 10);

    // floor(200/50) - 10 clamps to 0
    assert_eq!(w.start(), 0);
    // ceil(400/50) + 10 = 18
    assert_eq!(w.end(), 18);
}

// =============================================================================
// HORIZONTAL (DATE COLUMN) AXIS
// =============================================================================

#[test]
fn horizontal_window_over_a_year_of_dates() {
    let w = compute_window(200.0, 800.0, 40.0, 365, 10);

    assert_eq!(w.start(), 0, "floor(200/40) - 10 clamps to 0");
    assert_eq!(w.end(), 35, "ceil(1000/40) + 10 = 35");
    assert_eq!(w.total_extent(), 14600.0, "365 columns * 40 units");
}

#[test]
fn horizontal_window_at_large_scroll() {
    let w = compute_window(5000.0, 800.0, 40.0, 365, 5);

    assert_eq!(w.start(), 120, "floor(5000/40) - 5 = 120");
    assert_eq!(w.end(), 150, "ceil(5800/40) + 5 = 150");
}

// =============================================================================
// INVARIANTS AND EDGE CASES
// =============================================================================

#[test_case(0.0, 400.0, 50.0, 100, 0; "no overscan at origin")]
#[test_case(100.0, 400.0, 50.0, 100, 5; "overscan clamped at start")]
#[test_case(5000.0, 800.0, 40.0, 365, 5; "deep scroll")]
#[test_case(4999.0, 333.0, 7.0, 1000, 13; "odd sizes")]
#[test_case(0.0, 0.0, 50.0, 10, 0; "zero viewport")]
fn window_bounds_invariant(scroll: f32, viewport: f32, cell: f32, total: usize, overscan: usize) {
    let w = compute_window(scroll, viewport, cell, total, overscan);

    assert!(!w.is_empty(), "window should be non-empty for these inputs");
    assert!(w.start() <= w.end(), "start must not exceed end");
    assert!(w.end() <= total - 1, "end must stay below total_cells");
    assert_eq!(w.len(), w.end() - w.start() + 1, "len matches bounds");
}

#[test]
fn empty_axis_yields_empty_window() {
    let w = compute_window(100.0, 400.0, 50.0, 0, 5);

    assert!(w.is_empty());
    assert_eq!(w.len(), 0);
    assert_eq!(w.indices().count(), 0, "callers iterating see nothing");
    assert_eq!(w.total_extent(), 0.0);
}

#[test]
fn scroll_far_past_the_end_yields_empty_window() {
    let w = compute_window(100_000.0, 400.0, 50.0, 10, 2);

    assert!(w.is_empty(), "nothing to materialize beyond the axis");
    assert_eq!(w.total_extent(), 500.0, "total extent is still reported");
}

#[test]
fn negative_scroll_is_treated_as_origin() {
    let w = compute_window(-250.0, 400.0, 50.0, 100, 0);

    assert_eq!(w.start(), 0);
    assert_eq!(w.end(), compute_window(0.0, 400.0, 50.0, 100, 0).end());
}

#[test]
fn pure_function_identical_results() {
    let a = compute_window(123.4, 456.7, 33.0, 500, 7);
    let b = compute_window(123.4, 456.7, 33.0, 500, 7);

    assert_eq!(a, b, "same arguments must give the same window");
}

// =============================================================================
// SCROLL OFFSET CLAMPING
// =============================================================================

#[test_case(500.0, 1000.0, 500.0; "within bounds")]
#[test_case(-100.0, 1000.0, 0.0; "clamps to zero")]
#[test_case(1500.0, 1000.0, 1000.0; "clamps to max")]
#[test_case(100.0, 0.0, 0.0; "zero max position")]
fn scroll_offset_clamping(target: f32, max: f32, expected: f32) {
    assert_eq!(clamp_scroll_offset(target, max), expected);
}
