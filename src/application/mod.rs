//! Application layer: business logic and background jobs.

pub mod reaper;
pub mod services;
