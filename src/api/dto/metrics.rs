//! DTOs for domain metrics endpoint.

use serde::Serialize;

use crate::domain::entities::DomainCount;

/// Shortening count for one domain.
#[derive(Debug, Serialize)]
pub struct DomainMetric {
    pub domain: String,
    pub count: u64,
}

impl From<DomainCount> for DomainMetric {
    fn from(entry: DomainCount) -> Self {
        Self {
            domain: entry.domain,
            count: entry.count,
        }
    }
}
