//! Repository traits abstracting storage from business logic.
//!
//! Any store satisfying [`LinkRepository`] is interchangeable; the
//! application layer never depends on a concrete storage technology.

mod link_repository;

pub use link_repository::LinkRepository;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
