//! Infrastructure layer implementing the domain storage contracts.
//!
//! # Modules
//!
//! - [`memory`] - Concurrent in-memory repositories

pub mod memory;
