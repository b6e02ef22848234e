//! Repository trait for short link and click storage.

use crate::domain::entities::{Click, Link};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Storage interface for links and their click history.
///
/// The store is the only shared mutable state in the service. Links are
/// keyed by shortcode; click events are an append-only sequence per code.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::MemoryLinkRepository`] - in-memory implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a link if and only if its code is not already taken.
    ///
    /// This is deliberately a single atomic operation rather than an
    /// exists-then-save pair: two concurrent creations for the same code
    /// must not both succeed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a link with the same code exists.
    async fn create(&self, link: Link) -> Result<Link, AppError>;

    /// Finds a link by its shortcode.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Returns true if a link with the given code exists.
    ///
    /// Used as a cheap pre-filter during code generation; [`Self::create`]
    /// remains the authority on uniqueness.
    async fn exists(&self, code: &str) -> Result<bool, AppError>;

    /// Increments the click counter for a code. No-op if the code is absent.
    async fn increment_clicks(&self, code: &str) -> Result<(), AppError>;

    /// Appends a click event to the per-code history.
    async fn append_click(&self, click: Click) -> Result<(), AppError>;

    /// Returns the click history for a code, in insertion order.
    async fn get_clicks(&self, code: &str) -> Result<Vec<Click>, AppError>;

    /// Removes every link whose expiry has passed, along with its click
    /// history, and returns the number of links removed.
    async fn sweep_expired(&self, now: DateTime<Utc>) -> Result<usize, AppError>;
}
