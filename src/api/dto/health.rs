//! DTOs for health check endpoint.

use serde::Serialize;

/// Health check response with store sizes.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
}

/// Number of entries held by each in-memory store.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub links: usize,
    pub domains: usize,
}
