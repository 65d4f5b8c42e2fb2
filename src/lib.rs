//! # Smart URL
//!
//! An in-memory URL shortener that tracks which domains are shortened most
//! often, built with Axum.
//!
//! ## Architecture
//!
//! The crate keeps clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Entities and storage traits
//! - **Application Layer** ([`application`]) - Shorten, redirect and metrics logic
//! - **Infrastructure Layer** ([`infrastructure`]) - Concurrent in-memory stores
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Endpoints
//!
//! - `POST /shorten` with `{"url": "..."}` returns `{"short_url": "/<code>"}`
//! - `GET /<code>` answers `302` to the original URL
//! - `GET /metrics` lists the top three domains by shortening count
//!
//! ## Storage
//!
//! Everything lives in memory for the lifetime of the process. Short codes
//! are six random alphanumeric characters; the same URL string always gets
//! the same code.
//!
//! ## Quick Start
//!
//! ```bash
//! export LISTEN="0.0.0.0:8080"   # Optional
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::{LinkService, StatsService};
    pub use crate::domain::entities::{DomainCount, Link, NewLink};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
