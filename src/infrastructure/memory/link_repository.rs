//! In-memory link repository backed by sharded concurrent maps.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{CreateOutcome, LinkRepository};
use crate::error::AppError;

/// Bidirectional code/URL store.
///
/// `by_code` is the forward view used by redirects, `by_url` the reverse view
/// used for deduplication. Each map is sharded, so unrelated keys never
/// contend on the same lock.
///
/// # Lock Ordering
///
/// [`LinkRepository::create`] is the only operation that holds two shard
/// guards at once and always takes the `by_url` shard before the `by_code`
/// shard. Every other operation holds at most one guard.
#[derive(Debug, Default)]
pub struct MemoryLinkRepository {
    by_code: DashMap<String, String>,
    by_url: DashMap<String, String>,
}

impl MemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<CreateOutcome, AppError> {
        let NewLink { code, long_url } = new_link;

        let url_slot = match self.by_url.entry(long_url) {
            Entry::Occupied(existing) => {
                let link = Link::new(existing.get().clone(), existing.key().clone());
                return Ok(CreateOutcome::Existing(link));
            }
            Entry::Vacant(slot) => slot,
        };

        let code_slot = match self.by_code.entry(code) {
            Entry::Occupied(_) => return Ok(CreateOutcome::CodeTaken),
            Entry::Vacant(slot) => slot,
        };

        let link = Link::new(code_slot.key().clone(), url_slot.key().clone());

        // Both shard guards live until the end of this scope.
        let _reverse = url_slot.insert(link.code.clone());
        let _forward = code_slot.insert(link.long_url.clone());

        Ok(CreateOutcome::Created(link))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        Ok(self
            .by_code
            .get(code)
            .map(|url| Link::new(code, url.value().clone())))
    }

    async fn find_by_long_url(&self, long_url: &str) -> Result<Option<Link>, AppError> {
        Ok(self
            .by_url
            .get(long_url)
            .map(|code| Link::new(code.value().clone(), long_url)))
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.by_code.len())
    }
}
