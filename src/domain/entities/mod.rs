//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`Link`] - A short code and the original URL it maps to
//! - [`NewLink`] - Input for creating a link
//! - [`DomainCount`] - Shortening count for one hostname

pub mod domain_count;
pub mod link;

pub use domain_count::DomainCount;
pub use link::{Link, NewLink};
