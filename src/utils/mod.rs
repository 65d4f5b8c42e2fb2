//! Utility functions used across the application.
//!
//! - [`code_generator`] - Random short code generation
//! - [`url_parser`] - URL parsing and hostname extraction

pub mod code_generator;
pub mod url_parser;
