//! # shorturls
//!
//! A URL shortening microservice with click analytics and TTL expiry,
//! built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core business entities and repository traits
//! - **Application Layer** ([`application`]) - The link lifecycle service and the reaper
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory storage
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Short link creation with optional custom shortcodes
//! - Per-minute TTL with 410 Gone after expiry
//! - Click analytics (IP, user agent, referrer) per link
//! - Hourly reaper purging expired links and their history
//!
//! ## Quick Start
//!
//! ```bash
//! # Everything has a default; just run it
//! cargo run
//!
//! curl -X POST localhost:3000/shorturls \
//!   -H 'Content-Type: application/json' \
//!   -d '{"url": "https://example.com", "validity": 30}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::{Click, ClientInfo, Link};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
