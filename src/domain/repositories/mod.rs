//! Repository trait definitions for the domain layer.
//!
//! These traits abstract the two shared stores of the service. Concrete
//! implementations live in `crate::infrastructure::memory`; mock
//! implementations are auto-generated via `mockall` for testing.
//!
//! # Available Repositories
//!
//! - [`LinkRepository`] - Bidirectional code/URL mapping
//! - [`DomainStatsRepository`] - Shortening counts per hostname

pub mod domain_stats_repository;
pub mod link_repository;

pub use domain_stats_repository::DomainStatsRepository;
pub use link_repository::{CreateOutcome, LinkRepository};

#[cfg(test)]
pub use domain_stats_repository::MockDomainStatsRepository;
#[cfg(test)]
pub use link_repository::MockLinkRepository;
