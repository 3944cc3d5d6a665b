use std::path::{Path, PathBuf};

use crate::catalog::PriorityTable;
use crate::error::{CatalogError, CatalogResult};

/// Dishes shown per section before the first "show more"
pub const DEFAULT_PAGE_SIZE: usize = 12;
/// Largest page size accepted from configuration
pub const MAX_PAGE_SIZE: usize = 1000;
/// Hard cap on the highlights strip
pub const DEFAULT_HIGHLIGHT_LIMIT: usize = 12;

/// Presenter configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | CATALOG_PAGE_SIZE | 12 | Initial visible count and reveal increment, 1..=1000 |
/// | CATALOG_HIGHLIGHT_LIMIT | 12 | Maximum number of highlighted dishes |
/// | CATALOG_PRIORITY_FILE | - | JSON object `{"category name": rank}` |
/// | LOG_LEVEL | info | Tracing level |
/// | LOG_DIR | - | Directory for daily rolling log files |
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub page_size: usize,
    pub highlight_limit: usize,
    /// Overrides the built-in editorial category order
    pub priority_file: Option<PathBuf>,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparseable values fall back to defaults.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            page_size: var("CATALOG_PAGE_SIZE")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(DEFAULT_PAGE_SIZE),
            highlight_limit: var("CATALOG_HIGHLIGHT_LIMIT")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(DEFAULT_HIGHLIGHT_LIMIT),
            priority_file: var("CATALOG_PRIORITY_FILE")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            log_level: var("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: var("LOG_DIR").filter(|v| !v.is_empty()),
        }
    }

    /// Reject values the presenter cannot work with
    pub fn validate(&self) -> CatalogResult<()> {
        if self.page_size == 0 {
            return Err(CatalogError::InvalidConfig(
                "CATALOG_PAGE_SIZE must be greater than 0".into(),
            ));
        }
        if self.page_size > MAX_PAGE_SIZE {
            return Err(CatalogError::InvalidConfig(format!(
                "CATALOG_PAGE_SIZE must not exceed {}",
                MAX_PAGE_SIZE
            )));
        }
        if self.highlight_limit == 0 {
            return Err(CatalogError::InvalidConfig(
                "CATALOG_HIGHLIGHT_LIMIT must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    /// Category priority table: the configured file, or the built-in one
    pub fn load_priority_table(&self) -> CatalogResult<PriorityTable> {
        match &self.priority_file {
            Some(path) => load_priority_file(path),
            None => Ok(PriorityTable::default()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            highlight_limit: DEFAULT_HIGHLIGHT_LIMIT,
            priority_file: None,
            log_level: "info".into(),
            log_dir: None,
        }
    }
}

fn load_priority_file(path: &Path) -> CatalogResult<PriorityTable> {
    let raw = std::fs::read_to_string(path)?;
    let ranks: std::collections::HashMap<String, u32> = serde_json::from_str(&raw)?;
    tracing::debug!(
        "Loaded {} category priorities from {}",
        ranks.len(),
        path.display()
    );
    Ok(ranks.into_iter().collect())
}
