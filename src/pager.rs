//! Incremental row-loading state machine.
//!
//! The pager owns the materialized roster and tracks how much of the total
//! row set is resident. Requests are strictly serialized: the idle/loading
//! guard allows at most one in-flight page, and a second request while one
//! is outstanding is dropped, not queued, so pages can never apply out of
//! order. Every issued request is stamped with a fresh epoch (a reset bumps
//! it as well), so a delivered completion or failure is applied only while
//! its request is the one outstanding; duplicate deliveries and loads from
//! before a reset are dropped as stale.
//!
//! The transitions ([`begin_load`](Pager::begin_load),
//! [`complete_load`](Pager::complete_load), [`fail_load`](Pager::fail_load),
//! [`reset`](Pager::reset)) are public so an event-driven host can drive
//! them directly; [`request_more`](Pager::request_more) composes them over
//! an [`EntityProvider`] for the common case.

use tracing::{debug, warn};

use crate::error::Result;
use crate::provider::EntityProvider;
use crate::roster::Roster;
use crate::types::Entity;

/// Load phase of the pagination state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadPhase {
    /// No request in flight.
    #[default]
    Idle,
    /// Exactly one page request is outstanding.
    LoadingMore,
}

/// A page request issued by [`Pager::begin_load`].
///
/// Carries the epoch it was issued under; a completion or failure is
/// applied only while its request is still the outstanding one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Row offset of the first requested row.
    pub offset: usize,
    /// Maximum number of rows requested (clamped to the remaining total).
    pub limit: usize,
    epoch: u64,
}

/// Pagination controller: loaded rows out of a total, one page at a time.
#[derive(Debug)]
pub struct Pager {
    roster: Roster,
    total_count: usize,
    page_size: usize,
    phase: LoadPhase,
    epoch: u64,
}

impl Pager {
    /// A pager with nothing loaded and a total of zero rows; call
    /// [`reset`](Self::reset) (or seed via the provider's total) before use.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            roster: Roster::new(),
            total_count: 0,
            page_size,
            phase: LoadPhase::Idle,
            epoch: 0,
        }
    }

    /// Number of rows materialized so far.
    #[must_use]
    pub fn loaded_count(&self) -> usize {
        self.roster.len()
    }

    /// Total rows the data source holds.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Rows requested per page.
    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Whether rows remain beyond the loaded prefix.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.loaded_count() < self.total_count
    }

    /// Current load phase.
    #[must_use]
    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// True while a page request is outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::LoadingMore
    }

    /// The materialized rows.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Mutable access to the materialized rows, for interval edits.
    pub fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }

    /// Start a page load, if one is warranted.
    ///
    /// Returns `None` when nothing remains to load or a request is already
    /// in flight (the idempotent guard); otherwise transitions to
    /// [`LoadPhase::LoadingMore`] and returns the request to hand to the
    /// data source: the next `min(page_size, remaining)` rows starting at
    /// `loaded_count`, stamped with a fresh epoch.
    pub fn begin_load(&mut self) -> Option<PageRequest> {
        if self.phase == LoadPhase::LoadingMore {
            debug!("begin_load skipped: request already in flight");
            return None;
        }
        if !self.has_more() {
            debug!("begin_load skipped: all rows loaded");
            return None;
        }

        let offset = self.loaded_count();
        let limit = self.page_size.min(self.total_count - offset);
        self.epoch += 1;
        self.phase = LoadPhase::LoadingMore;
        debug!(offset, limit, epoch = self.epoch, "page load started");
        Some(PageRequest {
            offset,
            limit,
            epoch: self.epoch,
        })
    }

    /// Apply a completed page load.
    ///
    /// Appends the rows, returns to idle, and reports true, but only while
    /// `request` is the page currently outstanding. Any other delivery is
    /// dropped with state untouched and reports false, whether a duplicate
    /// of a load that already settled or a leftover from before a
    /// [`reset`](Self::reset), so rows are never applied twice.
    ///
    /// Rows beyond the requested limit are truncated so `loaded_count` can
    /// never exceed `total_count`.
    pub fn complete_load(&mut self, request: &PageRequest, mut rows: Vec<Entity>) -> bool {
        if self.phase != LoadPhase::LoadingMore {
            warn!(
                offset = request.offset,
                "dropping completion: no page outstanding"
            );
            return false;
        }
        if request.epoch != self.epoch {
            warn!(
                stale_epoch = request.epoch,
                current_epoch = self.epoch,
                "dropping completion for a superseded request"
            );
            return false;
        }

        if rows.len() > request.limit {
            warn!(
                returned = rows.len(),
                limit = request.limit,
                "provider returned more rows than requested; truncating"
            );
            rows.truncate(request.limit);
        }

        let appended = rows.len();
        self.roster.extend(rows);
        self.phase = LoadPhase::Idle;
        debug!(
            appended,
            loaded = self.loaded_count(),
            total = self.total_count,
            "page load applied"
        );
        true
    }

    /// Record a failed page load: back to idle with `loaded_count`
    /// unchanged, so the state never sticks in loading. A failure that
    /// matches no outstanding request is ignored. Retry is caller-initiated.
    pub fn fail_load(&mut self, request: &PageRequest) {
        if self.phase != LoadPhase::LoadingMore {
            warn!(offset = request.offset, "dropping failure: no page outstanding");
            return;
        }
        if request.epoch != self.epoch {
            warn!(
                stale_epoch = request.epoch,
                current_epoch = self.epoch,
                "dropping failure for a superseded request"
            );
            return;
        }
        self.phase = LoadPhase::Idle;
        debug!(offset = request.offset, "page load failed; back to idle");
    }

    /// Replace the data set: clear all rows, set the new total, return to
    /// idle, and bump the epoch so any in-flight completion is ignored.
    pub fn reset(&mut self, new_total: usize) {
        self.roster.clear();
        self.total_count = new_total;
        self.phase = LoadPhase::Idle;
        self.epoch += 1;
        debug!(total = new_total, epoch = self.epoch, "pager reset");
    }

    /// Request the next page from `provider` and apply it.
    ///
    /// A no-op returning `Ok(0)` when nothing remains or a request is
    /// already in flight; otherwise returns the number of appended rows.
    ///
    /// # Errors
    /// Propagates the provider's failure after the pager has rolled back to
    /// idle; the caller may simply call again to retry.
    pub async fn request_more<P>(&mut self, provider: &P) -> Result<usize>
    where
        P: EntityProvider + ?Sized,
    {
        let Some(request) = self.begin_load() else {
            return Ok(0);
        };

        match provider.fetch_page(request.offset, request.limit).await {
            Ok(rows) => {
                let appended = rows.len();
                if self.complete_load(&request, rows) {
                    Ok(appended.min(request.limit))
                } else {
                    Ok(0)
                }
            }
            Err(err) => {
                self.fail_load(&request);
                Err(err)
            }
        }
    }
}
