//! Core data model: entities, their date intervals, and derived grid cells.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Closed set of interval categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntervalKind {
    Sick,
    Vacation,
    Personal,
    Maternity,
    Paternity,
    Bereavement,
    Other,
}

/// A closed date range attached to one entity (an absence).
///
/// Both `start` and `end` are inclusive; `start <= end` is validated on
/// insert/update, and siblings on the same entity never overlap (enforced by
/// the roster operations, not merely assumed).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interval {
    /// Caller-assigned identity, unique within the roster.
    pub id: String,
    /// Id of the owning entity.
    pub entity_id: String,
    /// First covered date (inclusive).
    pub start: NaiveDate,
    /// Last covered date (inclusive).
    pub end: NaiveDate,
    /// Category tag.
    pub kind: IntervalKind,
    /// Optional free-text annotation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Interval {
    /// Build an interval stamped with the current time.
    ///
    /// Date validity (`start <= end`) is checked by the insert operation, not
    /// here, so drafts can be constructed freely.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        entity_id: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
        kind: IntervalKind,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            entity_id: entity_id.into(),
            start,
            end,
            kind,
            note: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Attach a free-text note.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Inclusive day count: a single-day interval has duration 1.
    #[must_use]
    pub fn duration_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Whether `date` falls inside `[start, end]`.
    #[must_use]
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// User-editable interval fields, used for both create drafts and edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntervalDraft {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub kind: IntervalKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl IntervalDraft {
    #[must_use]
    pub fn new(start: NaiveDate, end: NaiveDate, kind: IntervalKind) -> Self {
        Self {
            start,
            end,
            kind,
            note: None,
        }
    }
}

/// A row of the grid: one entity and its intervals, sorted by start date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    /// Opaque identity.
    pub id: String,
    /// Display label; the engine never interprets it.
    pub label: String,
    /// Owned intervals, kept sorted by start date ascending.
    pub intervals: Vec<Interval>,
}

impl Entity {
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            intervals: Vec::new(),
        }
    }
}

/// One resolved (row, date) cell of the visible rectangle.
///
/// Derived state: recomputed from the entity and date on every grid pass,
/// never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell<'a> {
    /// Row index into the roster.
    pub row: usize,
    /// Column index into the date axis.
    pub col: usize,
    /// Id of the entity on this row.
    pub entity_id: &'a str,
    /// The date of this column.
    pub date: NaiveDate,
    /// Whether the date is a Saturday or Sunday.
    pub is_weekend: bool,
    /// Whether an interval of the entity covers this date.
    pub is_absent: bool,
    /// The covering interval, when `is_absent`.
    pub interval: Option<&'a Interval>,
}
