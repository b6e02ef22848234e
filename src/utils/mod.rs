//! Shared utilities.

pub mod code_generator;
pub mod extract_host;
pub mod url_validator;
