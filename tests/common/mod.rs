#![allow(dead_code)]

use std::sync::Arc;

use chrono::{Duration, Utc};
use shorturls::application::services::LinkService;
use shorturls::domain::entities::Link;
use shorturls::domain::repositories::LinkRepository;
use shorturls::infrastructure::memory::MemoryLinkRepository;
use shorturls::state::AppState;

/// Default validity used by test states, in minutes.
pub const TEST_DEFAULT_VALIDITY: i64 = 30;

pub fn create_test_state() -> (AppState, Arc<MemoryLinkRepository>) {
    let repository = Arc::new(MemoryLinkRepository::new());
    let link_service = Arc::new(LinkService::new(
        repository.clone(),
        TEST_DEFAULT_VALIDITY,
    ));

    let state = AppState {
        link_service,
        public_host: "localhost:3000".to_string(),
    };

    (state, repository)
}

pub async fn create_test_link(repository: &MemoryLinkRepository, code: &str, url: &str) {
    repository
        .create(Link::new(code.to_string(), url.to_string(), 30, Utc::now()))
        .await
        .unwrap();
}

pub async fn create_expired_link(repository: &MemoryLinkRepository, code: &str, url: &str) {
    // One-minute validity, created an hour ago.
    let link = Link::new(
        code.to_string(),
        url.to_string(),
        1,
        Utc::now() - Duration::hours(1),
    );
    repository.create(link).await.unwrap();
}
