//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Result of attempting to store a new link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// Both directions of the mapping were written.
    Created(Link),
    /// The URL was already mapped; carries the mapping that is stored.
    Existing(Link),
    /// The proposed code already belongs to another URL. Nothing was written.
    CodeTaken,
}

/// Repository interface for the bidirectional code/URL mapping.
///
/// Lookups by code back redirects, lookups by URL back deduplication.
/// Implementations must keep both directions consistent: a reader never
/// observes a code without its URL or a URL without its code.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::MemoryLinkRepository`] - In-memory implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Stores a new link, once.
    ///
    /// Links are never overwritten. If the URL is already mapped the existing
    /// link is returned as [`CreateOutcome::Existing`]; if the code is in use
    /// the call reports [`CreateOutcome::CodeTaken`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, new_link: NewLink) -> Result<CreateOutcome, AppError>;

    /// Finds a link by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Finds a link by its original URL, compared as an exact string.
    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<Link>, AppError>;

    /// Counts stored links.
    async fn count(&self) -> Result<usize, AppError>;
}
