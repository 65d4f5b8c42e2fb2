//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Shorten and redirect lookups
//! - [`services::stats_service::StatsService`] - Top domain metrics

pub mod services;
