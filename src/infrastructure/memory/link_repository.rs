//! In-memory link storage backed by sharded concurrent maps.

use crate::domain::entities::{Click, Link};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::debug;

/// In-memory [`LinkRepository`] implementation.
///
/// Links and click histories live in [`DashMap`]s, giving reader-shared
/// lookups and per-shard write serialization without a global lock. The
/// `entry` API makes creation an atomic insert-if-absent, so two
/// concurrent requests for the same code cannot both succeed.
///
/// Nothing here is durable: a restart loses all state. The reaper is the
/// only bound on memory growth.
#[derive(Default)]
pub struct MemoryLinkRepository {
    links: DashMap<String, Link>,
    clicks: DashMap<String, Vec<Click>>,
}

impl MemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn create(&self, link: Link) -> Result<Link, AppError> {
        match self.links.entry(link.code.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict(
                "Shortcode already exists",
                json!({ "code": link.code }),
            )),
            Entry::Vacant(slot) => {
                let stored = slot.insert(link).clone();
                debug!(code = %stored.code, "link saved");
                Ok(stored)
            }
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        Ok(self.links.get(code).map(|entry| entry.clone()))
    }

    async fn exists(&self, code: &str) -> Result<bool, AppError> {
        Ok(self.links.contains_key(code))
    }

    async fn increment_clicks(&self, code: &str) -> Result<(), AppError> {
        if let Some(mut link) = self.links.get_mut(code) {
            link.click_count += 1;
        }
        Ok(())
    }

    async fn append_click(&self, click: Click) -> Result<(), AppError> {
        self.clicks
            .entry(click.code.clone())
            .or_default()
            .push(click);
        Ok(())
    }

    async fn get_clicks(&self, code: &str) -> Result<Vec<Click>, AppError> {
        Ok(self
            .clicks
            .get(code)
            .map(|entry| entry.clone())
            .unwrap_or_default())
    }

    async fn sweep_expired(&self, now: DateTime<Utc>) -> Result<usize, AppError> {
        // Counted per eviction: diffing map lengths miscounts when a
        // concurrent create lands mid-sweep.
        let removed = AtomicUsize::new(0);
        self.links.retain(|_, link| {
            if link.is_expired_at(now) {
                removed.fetch_add(1, Ordering::Relaxed);
                false
            } else {
                true
            }
        });
        let removed = removed.into_inner();

        // Drop click history for anything no longer in the link map.
        self.clicks.retain(|code, _| self.links.contains_key(code));

        Ok(removed)
    }
}
