//! Grid coordination: combines the window calculator, the pagination
//! controller, and the interval model into one scroll-driven query.
//!
//! For a scroll position the coordinator returns the rectangle of (row,
//! date) cells worth rendering, resolves each cell's interval membership,
//! and requests the next page when the visible rows approach the loaded
//! boundary. It holds no render state: the output is index ranges and
//! resolved cells, never pixels.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::dates;
use crate::error::{Result, RostergridError};
use crate::pager::Pager;
use crate::provider::EntityProvider;
use crate::roster::Roster;
use crate::types::{Cell, Interval, IntervalDraft};
use crate::window::{compute_window, AxisWindow};

/// Axis geometry and loading tunables.
#[derive(Debug, Clone, PartialEq)]
pub struct GridConfig {
    /// Row height in layout units.
    pub row_height: f32,
    /// Date-column width in layout units.
    pub col_width: f32,
    /// Extra rows rendered above and below the visible range.
    pub row_overscan: usize,
    /// Extra date columns rendered left and right of the visible range.
    pub col_overscan: usize,
    /// Trailing distance (in rows) from the loaded boundary at which the
    /// next page is requested.
    pub prefetch_margin: usize,
    /// Rows fetched per page.
    pub page_size: usize,
    /// The calendar year shown on the horizontal axis.
    pub year: i32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            row_height: 50.0,
            col_width: 40.0,
            row_overscan: 5,
            col_overscan: 10,
            prefetch_margin: 20,
            page_size: 20,
            year: dates::current_year(),
        }
    }
}

/// The resolved visible rectangle for one scroll position.
#[derive(Debug)]
pub struct GridView<'a> {
    /// Vertical window over the loaded rows.
    pub rows: AxisWindow,
    /// Horizontal window over the date columns.
    pub cols: AxisWindow,
    /// Resolved cells, row-major across the rectangle.
    pub cells: Vec<Cell<'a>>,
}

impl<'a> GridView<'a> {
    /// The resolved cell at grid coordinates (row, col), when inside the
    /// rectangle.
    #[must_use]
    pub fn cell_at(&self, row: usize, col: usize) -> Option<&Cell<'a>> {
        if !self.rows.contains(row) || !self.cols.contains(col) {
            return None;
        }
        let idx = (row - self.rows.start()) * self.cols.len() + (col - self.cols.start());
        self.cells.get(idx)
    }
}

/// Composes windowing, pagination, and interval resolution over one grid.
#[derive(Debug)]
pub struct GridCoordinator {
    config: GridConfig,
    columns: Vec<NaiveDate>,
    pager: Pager,
}

impl GridCoordinator {
    /// A coordinator for the configured year with nothing loaded yet.
    #[must_use]
    pub fn new(config: GridConfig) -> Self {
        let columns = dates::dates_in_year(config.year);
        let pager = Pager::new(config.page_size);
        Self {
            config,
            columns,
            pager,
        }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// The date axis: every day of the configured year, in order.
    #[must_use]
    pub fn columns(&self) -> &[NaiveDate] {
        &self.columns
    }

    /// The pagination controller.
    #[must_use]
    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    /// Mutable pagination access, for hosts driving transitions directly.
    pub fn pager_mut(&mut self) -> &mut Pager {
        &mut self.pager
    }

    /// The loaded rows.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        self.pager.roster()
    }

    /// Replace the data set: drops all loaded rows and adopts a new total.
    pub fn reset(&mut self, new_total: usize) {
        self.pager.reset(new_total);
    }

    /// Compute the visible rectangle for a scroll position, prefetching the
    /// next page when the vertical window nears the loaded boundary.
    ///
    /// The vertical window ranges over loaded rows only, so cells for rows
    /// that are not yet fetched are never produced. A prefetch extends the
    /// roster for subsequent calls; the rectangle returned here stays the
    /// one computed for the current loaded count.
    ///
    /// # Errors
    /// Propagates the provider's failure when the prefetch fetch fails; the
    /// pager is already back to idle, so calling again retries.
    pub async fn compute_grid<P>(
        &mut self,
        provider: &P,
        scroll_x: f32,
        scroll_y: f32,
        viewport_width: f32,
        viewport_height: f32,
    ) -> Result<GridView<'_>>
    where
        P: EntityProvider + ?Sized,
    {
        let loaded = self.pager.loaded_count();
        let rows = compute_window(
            scroll_y,
            viewport_height,
            self.config.row_height,
            loaded,
            self.config.row_overscan,
        );

        if self.pager.has_more() && near_loaded_tail(&rows, loaded, self.config.prefetch_margin) {
            let appended = self.pager.request_more(provider).await?;
            debug!(
                appended,
                loaded = self.pager.loaded_count(),
                total = self.pager.total_count(),
                "prefetched page near loaded boundary"
            );
        }

        let cols = compute_window(
            scroll_x,
            viewport_width,
            self.config.col_width,
            self.columns.len(),
            self.config.col_overscan,
        );

        let mut cells = Vec::with_capacity(rows.len() * cols.len());
        for (row, entity) in self
            .pager
            .roster()
            .iter()
            .enumerate()
            .skip(rows.start())
            .take(rows.len())
        {
            for (col, &date) in self
                .columns
                .iter()
                .enumerate()
                .skip(cols.start())
                .take(cols.len())
            {
                let interval = entity.find_covering(date);
                cells.push(Cell {
                    row,
                    col,
                    entity_id: entity.id.as_str(),
                    date,
                    is_weekend: dates::is_weekend(date),
                    is_absent: interval.is_some(),
                    interval,
                });
            }
        }

        Ok(GridView { rows, cols, cells })
    }

    /// Insert an interval on the entity named by `interval.entity_id`,
    /// additionally requiring both dates to fall inside the grid's year.
    ///
    /// # Errors
    /// The roster's insert failures, plus
    /// [`RostergridError::InvalidInterval`] for out-of-year dates.
    pub fn insert_interval(&mut self, interval: Interval) -> Result<()> {
        self.validate_year(interval.start, interval.end)?;
        self.pager.roster_mut().insert_interval(interval)
    }

    /// Update the interval with id `interval_id`, requiring the new dates
    /// to fall inside the grid's year.
    ///
    /// # Errors
    /// The roster's update failures, plus
    /// [`RostergridError::InvalidInterval`] for out-of-year dates.
    pub fn update_interval(&mut self, interval_id: &str, draft: IntervalDraft) -> Result<()> {
        self.validate_year(draft.start, draft.end)?;
        self.pager.roster_mut().update_interval(interval_id, draft)
    }

    /// Remove the interval with id `interval_id`. Returns true if removed.
    pub fn remove_interval(&mut self, interval_id: &str) -> bool {
        self.pager.roster_mut().remove_interval(interval_id)
    }

    fn validate_year(&self, start: NaiveDate, end: NaiveDate) -> Result<()> {
        if start.year() != self.config.year || end.year() != self.config.year {
            return Err(RostergridError::InvalidInterval(format!(
                "dates must fall within {}",
                self.config.year
            )));
        }
        Ok(())
    }
}

/// Whether the vertical window has come within `margin` rows of the last
/// loaded row. An empty window means nothing is materialized at this scroll
/// position (nothing loaded yet, or scrolled past the loaded rows): both
/// warrant a fetch.
fn near_loaded_tail(rows: &AxisWindow, loaded: usize, margin: usize) -> bool {
    if rows.is_empty() {
        return true;
    }
    loaded.saturating_sub(rows.end() + 1) <= margin
}
