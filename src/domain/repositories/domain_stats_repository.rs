//! Repository trait for per-domain shortening counters.

use crate::domain::entities::DomainCount;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the domain frequency table.
///
/// Counters are created lazily, only ever incremented, and never removed.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::MemoryDomainStatsRepository`] - In-memory implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DomainStatsRepository: Send + Sync {
    /// Adds one to the counter for `domain`, creating it at 1 if absent.
    ///
    /// Concurrent increments of the same domain must never be lost.
    ///
    /// # Returns
    ///
    /// The counter value after the increment.
    async fn increment(&self, domain: &str) -> Result<u64, AppError>;

    /// Returns up to `limit` domains ordered by count, highest first.
    ///
    /// Domains with equal counts are ordered by name.
    async fn top(&self, limit: usize) -> Result<Vec<DomainCount>, AppError>;

    /// Counts distinct domains seen so far.
    async fn count(&self) -> Result<usize, AppError>;
}
