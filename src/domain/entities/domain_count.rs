//! Per-domain shortening counter snapshot.

/// Number of links created for a single hostname.
///
/// Counts start at 1 on the first shortening for a domain and only grow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainCount {
    pub domain: String,
    pub count: u64,
}

impl DomainCount {
    pub fn new(domain: impl Into<String>, count: u64) -> Self {
        Self {
            domain: domain.into(),
            count,
        }
    }
}
