//! Process-lifetime in-memory repositories.
//!
//! State lives only as long as the process; nothing is persisted.

mod domain_stats_repository;
mod link_repository;

pub use domain_stats_repository::MemoryDomainStatsRepository;
pub use link_repository::MemoryLinkRepository;
