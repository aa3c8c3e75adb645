use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::core::{CategoryDescriptor, ColumnStrategy, default_categories};
use crate::paging::DEFAULT_PAGE_SIZE;
use crate::{AnalyticsError, AnalyticsResult};

/// Settings for viewing and exporting report snapshots.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsConfig {
    pub page_size: usize,
    pub output_dir: PathBuf,
    pub columns: ColumnStrategy,
    pub categories: Vec<CategoryDescriptor>,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        AnalyticsConfig {
            page_size: DEFAULT_PAGE_SIZE,
            output_dir: PathBuf::from("."),
            columns: ColumnStrategy::default(),
            categories: default_categories(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    page_size: Option<usize>,
    #[serde(default)]
    output_dir: Option<PathBuf>,
    #[serde(default)]
    columns: Option<ColumnStrategy>,
    #[serde(default, rename = "category")]
    categories: Option<Vec<CategoryDescriptor>>,
}

/// Load configuration from a TOML file (or YAML for `.yaml`/`.yml`).
///
/// `None` yields the defaults.
pub fn load_config(path: Option<&Path>) -> AnalyticsResult<AnalyticsConfig> {
    let Some(path) = path else {
        return Ok(AnalyticsConfig::default());
    };
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let raw: RawConfig = match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => serde_yaml::from_str(&s)
            .with_context(|| format!("failed to parse config {}", path.display()))?,
        _ => toml::from_str(&s)
            .with_context(|| format!("failed to parse config {}", path.display()))?,
    };
    from_raw(raw)
}

fn from_raw(raw: RawConfig) -> AnalyticsResult<AnalyticsConfig> {
    let defaults = AnalyticsConfig::default();
    let page_size = raw.page_size.unwrap_or(defaults.page_size);
    if page_size == 0 {
        return Err(AnalyticsError::Message(
            "page_size must be at least 1".to_string(),
        ));
    }
    let categories = match raw.categories {
        Some(list) if !list.is_empty() => list,
        _ => defaults.categories,
    };
    Ok(AnalyticsConfig {
        page_size,
        output_dir: raw.output_dir.unwrap_or(defaults.output_dir),
        columns: raw.columns.unwrap_or(defaults.columns),
        categories,
    })
}
