//! Core business entities.

mod click;
mod link;

pub use click::{ClientInfo, Click};
pub use link::Link;
