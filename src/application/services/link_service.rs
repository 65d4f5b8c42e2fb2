//! Link creation and retrieval service.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info, warn};

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{CreateOutcome, DomainStatsRepository, LinkRepository};
use crate::error::AppError;
use crate::utils::code_generator::{CODE_LENGTH, generate_code, is_reserved};
use crate::utils::url_parser::{hostname, parse_url};

/// Number of fresh codes tried before a shorten request gives up.
const MAX_ATTEMPTS: usize = 10;

/// Service for creating and resolving short links.
///
/// Owns the shorten workflow: parse, deduplicate, generate a code, store
/// both directions of the mapping, and bump the domain counter.
pub struct LinkService<L: LinkRepository, S: DomainStatsRepository> {
    link_repository: Arc<L>,
    stats_repository: Arc<S>,
}

impl<L: LinkRepository, S: DomainStatsRepository> LinkService<L, S> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>, stats_repository: Arc<S>) -> Self {
        Self {
            link_repository,
            stats_repository,
        }
    }

    /// Creates a short link for `long_url`, or returns the existing one.
    ///
    /// # Deduplication
    ///
    /// URLs are matched as exact strings. Submitting the same string again
    /// returns the original code and leaves the domain counter untouched.
    /// Concurrent submissions of one URL all receive the same code.
    ///
    /// # Code Generation
    ///
    /// Generates random 6-character alphanumeric codes, skipping reserved
    /// route names and codes already in use. Gives up after 10 attempts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL does not parse. Nothing is
    /// stored in that case.
    ///
    /// Returns [`AppError::Internal`] if no free code was found.
    pub async fn create_short_link(&self, long_url: String) -> Result<Link, AppError> {
        let parsed = parse_url(&long_url).map_err(|e| {
            AppError::bad_request("Invalid URL", json!({ "reason": e.to_string() }))
        })?;

        if let Some(existing) = self.link_repository.find_by_long_url(&long_url).await? {
            debug!(code = %existing.code, "URL already shortened");
            return Ok(existing);
        }

        for _ in 0..MAX_ATTEMPTS {
            let code = generate_code(CODE_LENGTH);
            if is_reserved(&code) {
                continue;
            }

            let new_link = NewLink {
                code,
                long_url: long_url.clone(),
            };

            match self.link_repository.create(new_link).await? {
                CreateOutcome::Created(link) => {
                    let domain = hostname(&parsed);
                    let count = self.stats_repository.increment(&domain).await?;
                    info!(code = %link.code, domain = %domain, count, "Short link created");
                    return Ok(link);
                }
                CreateOutcome::Existing(link) => {
                    debug!(code = %link.code, "URL shortened concurrently, reusing code");
                    return Ok(link);
                }
                CreateOutcome::CodeTaken => {
                    warn!("Short code collision, retrying");
                }
            }
        }

        Err(AppError::internal(
            "Failed to generate unique code",
            json!({ "reason": "Too many collisions" }),
        ))
    }

    /// Retrieves a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn get_link_by_code(&self, code: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))
    }

    /// Number of stored links.
    pub async fn link_count(&self) -> Result<usize, AppError> {
        self.link_repository.count().await
    }
}
