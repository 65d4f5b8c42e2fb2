//! Domain usage statistics service.

use std::sync::Arc;

use crate::domain::entities::DomainCount;
use crate::domain::repositories::DomainStatsRepository;
use crate::error::AppError;

/// Number of domains reported by the metrics endpoint.
pub const TOP_DOMAINS: usize = 3;

/// Service for reading the per-domain shortening counters.
pub struct StatsService<R: DomainStatsRepository> {
    repository: Arc<R>,
}

impl<R: DomainStatsRepository> StatsService<R> {
    /// Creates a new statistics service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns the most frequently shortened domains, highest count first.
    ///
    /// Returns fewer than [`TOP_DOMAINS`] entries when fewer domains exist.
    pub async fn top_domains(&self) -> Result<Vec<DomainCount>, AppError> {
        self.repository.top(TOP_DOMAINS).await
    }

    /// Number of distinct domains seen.
    pub async fn domain_count(&self) -> Result<usize, AppError> {
        self.repository.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockDomainStatsRepository;

    #[tokio::test]
    async fn test_top_domains_requests_three() {
        let mut mock_repo = MockDomainStatsRepository::new();

        mock_repo
            .expect_top()
            .withf(|limit| *limit == 3)
            .times(1)
            .returning(|_| {
                Ok(vec![
                    DomainCount::new("example.com", 5),
                    DomainCount::new("rust-lang.org", 2),
                ])
            });

        let service = StatsService::new(Arc::new(mock_repo));
        let top = service.top_domains().await.unwrap();

        assert_eq!(top.len(), 2);
        assert_eq!(top[0], DomainCount::new("example.com", 5));
    }

    #[tokio::test]
    async fn test_domain_count() {
        let mut mock_repo = MockDomainStatsRepository::new();
        mock_repo.expect_count().times(1).returning(|| Ok(4));

        let service = StatsService::new(Arc::new(mock_repo));
        assert_eq!(service.domain_count().await.unwrap(), 4);
    }
}
