//! Presenter configuration

pub mod config;

pub use config::{Config, DEFAULT_HIGHLIGHT_LIMIT, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
