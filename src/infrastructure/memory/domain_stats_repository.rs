//! In-memory domain counter backed by a sharded map of atomics.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::entities::DomainCount;
use crate::domain::repositories::DomainStatsRepository;
use crate::error::AppError;

/// Frequency table keyed by hostname.
///
/// Known domains are bumped with a single atomic add under a shared shard
/// guard; only a domain's first shortening takes the shard's write guard.
#[derive(Debug, Default)]
pub struct MemoryDomainStatsRepository {
    counts: DashMap<String, AtomicU64>,
}

impl MemoryDomainStatsRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DomainStatsRepository for MemoryDomainStatsRepository {
    async fn increment(&self, domain: &str) -> Result<u64, AppError> {
        if let Some(counter) = self.counts.get(domain) {
            return Ok(counter.fetch_add(1, Ordering::Relaxed) + 1);
        }

        let counter = self
            .counts
            .entry(domain.to_owned())
            .or_insert_with(|| AtomicU64::new(0));

        Ok(counter.fetch_add(1, Ordering::Relaxed) + 1)
    }

    async fn top(&self, limit: usize) -> Result<Vec<DomainCount>, AppError> {
        let mut entries: Vec<DomainCount> = self
            .counts
            .iter()
            .map(|entry| {
                DomainCount::new(entry.key().clone(), entry.value().load(Ordering::Relaxed))
            })
            .collect();

        entries.sort_unstable_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.domain.cmp(&b.domain))
        });
        entries.truncate(limit);

        Ok(entries)
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.counts.len())
    }
}
