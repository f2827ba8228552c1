//! Common test utilities: date shorthand, entity builders, and an
//! in-memory paged provider with failure injection.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::NaiveDate;
use rostergrid::{Entity, EntityProvider, Interval, IntervalKind, Result, RostergridError};

// ============================================================================
// Builders
// ============================================================================

/// Shorthand for a 2025 date.
pub fn d(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, month, day).expect("valid test date")
}

/// Shorthand for a date in an arbitrary year.
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// A bare entity with a generated label.
pub fn entity(id: &str) -> Entity {
    Entity::new(id, format!("Entity {id}"))
}

/// A sick-leave interval between two 2025 dates.
pub fn interval(id: &str, entity_id: &str, start: NaiveDate, end: NaiveDate) -> Interval {
    Interval::new(id, entity_id, start, end, IntervalKind::Sick)
}

/// `count` entities with ids `emp-0000`, `emp-0001`, ...
pub fn entities(count: usize) -> Vec<Entity> {
    (0..count)
        .map(|i| Entity::new(format!("emp-{i:04}"), format!("Employee {i}")))
        .collect()
}

// ============================================================================
// In-memory paged provider
// ============================================================================

/// Serves a fixed entity list page by page, counting fetches and failing on
/// demand.
pub struct FixtureProvider {
    rows: Vec<Entity>,
    fail_next: AtomicBool,
    fetch_calls: AtomicUsize,
}

impl FixtureProvider {
    /// A provider over `count` generated entities.
    pub fn with_rows(count: usize) -> Self {
        Self::from_entities(entities(count))
    }

    /// A provider over explicit entities (e.g. rows carrying intervals).
    pub fn from_entities(rows: Vec<Entity>) -> Self {
        Self {
            rows,
            fail_next: AtomicBool::new(false),
            fetch_calls: AtomicUsize::new(0),
        }
    }

    /// Make the next `fetch_page` call fail.
    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    /// Number of `fetch_page` calls observed.
    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EntityProvider for FixtureProvider {
    async fn fetch_page(&self, offset: usize, limit: usize) -> Result<Vec<Entity>> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(RostergridError::Provider("injected fixture failure".into()));
        }
        Ok(self.rows.iter().skip(offset).take(limit).cloned().collect())
    }

    fn total_count(&self) -> usize {
        self.rows.len()
    }
}
