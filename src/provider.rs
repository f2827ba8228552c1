//! The paged data-source boundary.
//!
//! The engine never assumes anything about where rows come from: an
//! in-memory fixture, a remote call, or generated data all implement the
//! same contract.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::Entity;

/// Supplies entity rows one page at a time.
#[async_trait]
pub trait EntityProvider: Send + Sync {
    /// Fetch up to `limit` rows starting at row `offset`.
    ///
    /// A short page (fewer than `limit` rows) is valid near the end of the
    /// data set.
    ///
    /// # Errors
    /// Implementations report fetch failures as
    /// [`RostergridError::Provider`](crate::error::RostergridError::Provider);
    /// the pagination controller rolls back to idle and the caller may retry.
    async fn fetch_page(&self, offset: usize, limit: usize) -> Result<Vec<Entity>>;

    /// Total number of rows the source can supply.
    fn total_count(&self) -> usize;
}
