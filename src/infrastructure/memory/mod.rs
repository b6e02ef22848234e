//! In-memory storage implementations.

mod link_repository;

pub use link_repository::MemoryLinkRepository;
