//! Interval model: overlap detection, point lookup, and range queries over
//! entity interval sets, plus the `Roster` collection of loaded entities.
//!
//! Mutations validate first and only then write, so a failed insert or
//! update leaves no partial state behind. An entity's intervals are kept
//! sorted by start date ascending, stable on ties.

use chrono::{NaiveDate, Utc};

use crate::error::{Result, RostergridError};
use crate::types::{Entity, Interval, IntervalDraft};

impl Entity {
    /// The interval covering `date`, if any.
    ///
    /// At most one interval can cover a date while the non-overlap invariant
    /// holds; if the invariant was violated by outside construction, the
    /// first match in sorted order is returned deterministically.
    #[must_use]
    pub fn find_covering(&self, date: NaiveDate) -> Option<&Interval> {
        self.intervals.iter().find(|interval| interval.covers(date))
    }

    /// Whether the entity has an interval covering `date`.
    #[must_use]
    pub fn is_absent_on(&self, date: NaiveDate) -> bool {
        self.find_covering(date).is_some()
    }

    /// Whether `[candidate_start, candidate_end]` intersects any interval
    /// other than the one with id `exclude_id`.
    ///
    /// Boundaries are inclusive: an interval ending on day X intersects one
    /// starting on day X.
    #[must_use]
    pub fn overlaps(
        &self,
        candidate_start: NaiveDate,
        candidate_end: NaiveDate,
        exclude_id: Option<&str>,
    ) -> bool {
        self.intervals
            .iter()
            .filter(|interval| exclude_id != Some(interval.id.as_str()))
            .any(|interval| candidate_start <= interval.end && candidate_end >= interval.start)
    }

    /// Insert a new interval, enforcing date validity and the non-overlap
    /// invariant, then re-sort by start date.
    ///
    /// # Errors
    /// [`RostergridError::InvalidInterval`] when `start > end`;
    /// [`RostergridError::Overlap`] when the interval would intersect a
    /// sibling.
    pub fn insert_interval(&mut self, interval: Interval) -> Result<()> {
        validate_dates(interval.start, interval.end)?;
        if self.overlaps(interval.start, interval.end, None) {
            return Err(overlap_error(&self.id, interval.start, interval.end));
        }

        self.intervals.push(interval);
        self.sort_intervals();
        Ok(())
    }

    /// Apply `draft` to the interval with id `interval_id`, re-validating
    /// the non-overlap invariant against its siblings (the interval itself
    /// is excluded, so an edit that keeps the same dates succeeds).
    ///
    /// Refreshes `updated_at` and re-sorts. Nothing is written on failure.
    ///
    /// # Errors
    /// [`RostergridError::IntervalNotFound`] when the id is absent;
    /// [`RostergridError::InvalidInterval`] / [`RostergridError::Overlap`]
    /// as for insert.
    pub fn update_interval(&mut self, interval_id: &str, draft: IntervalDraft) -> Result<()> {
        let idx = self
            .intervals
            .iter()
            .position(|interval| interval.id == interval_id)
            .ok_or_else(|| RostergridError::IntervalNotFound(interval_id.to_string()))?;

        validate_dates(draft.start, draft.end)?;
        if self.overlaps(draft.start, draft.end, Some(interval_id)) {
            return Err(overlap_error(&self.id, draft.start, draft.end));
        }

        if let Some(interval) = self.intervals.get_mut(idx) {
            interval.start = draft.start;
            interval.end = draft.end;
            interval.kind = draft.kind;
            interval.note = draft.note;
            interval.updated_at = Utc::now();
        }
        self.sort_intervals();
        Ok(())
    }

    /// Remove the interval with id `interval_id`.
    ///
    /// Returns true if removed, false if no such interval exists; a missing
    /// target is an expected outcome, not an error.
    pub fn remove_interval(&mut self, interval_id: &str) -> bool {
        let before = self.intervals.len();
        self.intervals.retain(|interval| interval.id != interval_id);
        self.intervals.len() != before
    }

    fn sort_intervals(&mut self) {
        // Stable: ties keep creation order.
        self.intervals.sort_by_key(|interval| interval.start);
    }
}

/// Reject drafts whose end precedes their start.
///
/// # Errors
/// [`RostergridError::InvalidInterval`] describing the bad range.
pub fn validate_dates(start: NaiveDate, end: NaiveDate) -> Result<()> {
    if start > end {
        return Err(RostergridError::InvalidInterval(format!(
            "end date {end} is before start date {start}"
        )));
    }
    Ok(())
}

fn overlap_error(entity_id: &str, start: NaiveDate, end: NaiveDate) -> RostergridError {
    RostergridError::Overlap {
        entity_id: entity_id.to_string(),
        start: start.to_string(),
        end: end.to_string(),
    }
}

/// The materialized (loaded) sequence of entities, in row order.
///
/// Grows page by page under the pagination controller; interval edits are
/// addressed either per entity or roster-wide by interval id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    entities: Vec<Entity>,
}

impl Roster {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster from pre-loaded entities (fixtures, tests).
    #[must_use]
    pub fn from_entities(entities: Vec<Entity>) -> Self {
        Self { entities }
    }

    /// Number of loaded rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Loaded rows in row order.
    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entity> {
        self.entities.iter()
    }

    /// Append one row.
    pub fn push(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    /// Append a fetched page of rows.
    pub fn extend(&mut self, rows: Vec<Entity>) {
        self.entities.extend(rows);
    }

    /// Drop all rows.
    pub fn clear(&mut self) {
        self.entities.clear();
    }

    /// Look up an entity by id.
    #[must_use]
    pub fn entity(&self, id: &str) -> Option<&Entity> {
        self.entities.iter().find(|entity| entity.id == id)
    }

    pub fn entity_mut(&mut self, id: &str) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|entity| entity.id == id)
    }

    /// Insert an interval on the entity named by `interval.entity_id`.
    ///
    /// # Errors
    /// [`RostergridError::EntityNotFound`] when no such entity is loaded,
    /// plus the per-entity insert failures.
    pub fn insert_interval(&mut self, interval: Interval) -> Result<()> {
        let Some(entity) = self.entity_mut(&interval.entity_id) else {
            return Err(RostergridError::EntityNotFound(interval.entity_id));
        };
        entity.insert_interval(interval)
    }

    /// Update the interval with id `interval_id`, wherever it lives.
    ///
    /// # Errors
    /// [`RostergridError::IntervalNotFound`] when no entity holds the id,
    /// plus the per-entity update failures.
    pub fn update_interval(&mut self, interval_id: &str, draft: IntervalDraft) -> Result<()> {
        let entity = self
            .entities
            .iter_mut()
            .find(|entity| entity.intervals.iter().any(|i| i.id == interval_id))
            .ok_or_else(|| RostergridError::IntervalNotFound(interval_id.to_string()))?;
        entity.update_interval(interval_id, draft)
    }

    /// Remove the interval with id `interval_id`, wherever it lives.
    /// Returns true if removed, false if not found.
    pub fn remove_interval(&mut self, interval_id: &str) -> bool {
        self.entities
            .iter_mut()
            .any(|entity| entity.remove_interval(interval_id))
    }

    /// All intervals across all loaded entities intersecting
    /// `[range_start, range_end]`, boundaries inclusive.
    ///
    /// Order is entity order, then interval order within each entity:
    /// stable for identical input.
    #[must_use]
    pub fn query_range(&self, range_start: NaiveDate, range_end: NaiveDate) -> Vec<&Interval> {
        self.entities
            .iter()
            .flat_map(|entity| entity.intervals.iter())
            .filter(|interval| range_start <= interval.end && range_end >= interval.start)
            .collect()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Entity;
    type IntoIter = std::slice::Iter<'a, Entity>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
