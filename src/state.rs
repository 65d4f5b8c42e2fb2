//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{LinkService, StatsService};
use crate::infrastructure::memory::{MemoryDomainStatsRepository, MemoryLinkRepository};

pub type AppLinkService = LinkService<MemoryLinkRepository, MemoryDomainStatsRepository>;
pub type AppStatsService = StatsService<MemoryDomainStatsRepository>;

/// Services built once at startup and cloned cheaply per request.
///
/// Both services share the same domain counter, so metrics reflect every
/// shortening performed through [`LinkService`].
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<AppLinkService>,
    pub stats_service: Arc<AppStatsService>,
}

impl AppState {
    /// Creates state around empty in-memory stores.
    pub fn new() -> Self {
        let link_repository = Arc::new(MemoryLinkRepository::new());
        let stats_repository = Arc::new(MemoryDomainStatsRepository::new());

        Self {
            link_service: Arc::new(LinkService::new(
                link_repository,
                stats_repository.clone(),
            )),
            stats_service: Arc::new(StatsService::new(stats_repository)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
