//! Report snapshots: the per-category record sets fetched for one project/release.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::record::Record;
use crate::{AnalyticsError, AnalyticsResult};

/// All category data retrieved for one project/release at one point in time.
///
/// A snapshot is never edited in place; loading new data replaces it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReportSnapshot {
    /// When the upstream report was last refreshed (opaque provider string)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_refreshed: Option<String>,
    categories: BTreeMap<String, Vec<Record>>,
}

impl ReportSnapshot {
    pub fn new(last_refreshed: Option<String>) -> Self {
        ReportSnapshot {
            last_refreshed,
            categories: BTreeMap::new(),
        }
    }

    /// Builder-style setter for one category's records.
    pub fn with_category(mut self, id: impl Into<String>, records: Vec<Record>) -> Self {
        self.categories.insert(id.into(), records);
        self
    }

    /// Records of a category; absent categories are empty.
    pub fn records(&self, id: &str) -> &[Record] {
        self.categories.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn category_ids(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// True when no category holds any record.
    pub fn is_empty(&self) -> bool {
        self.categories.values().all(Vec::is_empty)
    }

    /// Build a snapshot from the provider's JSON payload.
    ///
    /// Expected shape: `{"last_refreshed": "...", "categories": {"id": [{...}, ...]}}`.
    /// A category whose value is not an array is treated as empty, and array
    /// entries that are not objects are dropped.
    pub fn from_json(value: Value) -> AnalyticsResult<Self> {
        let Value::Object(mut root) = value else {
            return Err(AnalyticsError::Message(
                "snapshot must be a JSON object".to_string(),
            ));
        };

        let last_refreshed = match root.remove("last_refreshed") {
            Some(Value::String(s)) => Some(s),
            Some(Value::Null) | None => None,
            Some(other) => Some(other.to_string()),
        };

        let mut snapshot = ReportSnapshot::new(last_refreshed);
        let categories = match root.remove("categories") {
            Some(Value::Object(map)) => map,
            Some(Value::Null) | None => return Ok(snapshot),
            Some(_) => {
                return Err(AnalyticsError::Message(
                    "snapshot `categories` must be an object".to_string(),
                ));
            }
        };

        for (id, raw) in categories {
            let records = match raw {
                Value::Array(items) => {
                    let total = items.len();
                    let records: Vec<Record> = items
                        .into_iter()
                        .filter_map(|item| match item {
                            Value::Object(map) => Some(Record::from(map)),
                            _ => None,
                        })
                        .collect();
                    if records.len() != total {
                        warn!(
                            category = %id,
                            dropped = total - records.len(),
                            "skipping non-object entries in category"
                        );
                    }
                    records
                }
                other => {
                    debug!(category = %id, kind = json_kind(&other), "category is not an array, treating as empty");
                    Vec::new()
                }
            };
            snapshot.categories.insert(id, records);
        }

        Ok(snapshot)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Read a snapshot JSON file from disk.
pub fn load_snapshot(path: &Path) -> AnalyticsResult<ReportSnapshot> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot {}", path.display()))?;
    let value: Value = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse snapshot {}", path.display()))?;
    let snapshot = ReportSnapshot::from_json(value)?;
    debug!(
        path = %path.display(),
        categories = snapshot.categories.len(),
        "loaded snapshot"
    );
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_reads_categories() {
        let snapshot = ReportSnapshot::from_json(json!({
            "last_refreshed": "2026-10-01T08:00:00Z",
            "categories": {
                "unmappedTestCases": [
                    {"key": "TC-1", "summary": "Login"},
                    {"key": "TC-2", "summary": "Logout"}
                ],
                "emptyTestSteps": []
            }
        }))
        .unwrap();

        assert_eq!(
            snapshot.last_refreshed.as_deref(),
            Some("2026-10-01T08:00:00Z")
        );
        assert_eq!(snapshot.records("unmappedTestCases").len(), 2);
        assert!(snapshot.records("emptyTestSteps").is_empty());
        assert!(snapshot.records("neverFetched").is_empty());
    }

    #[test]
    fn test_malformed_category_is_empty() {
        let snapshot = ReportSnapshot::from_json(json!({
            "categories": {
                "a": null,
                "b": {"not": "an array"},
                "c": "text",
                "d": [1, {"key": "ok"}, "x"]
            }
        }))
        .unwrap();

        assert!(snapshot.records("a").is_empty());
        assert!(snapshot.records("b").is_empty());
        assert!(snapshot.records("c").is_empty());
        assert_eq!(snapshot.records("d").len(), 1);
    }

    #[test]
    fn test_missing_categories_is_empty_snapshot() {
        let snapshot = ReportSnapshot::from_json(json!({})).unwrap();
        assert!(snapshot.is_empty());
        assert!(snapshot.last_refreshed.is_none());
    }

    #[test]
    fn test_non_object_root_is_error() {
        let result = ReportSnapshot::from_json(json!([1, 2, 3]));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_snapshot_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_snapshot(&dir.path().join("missing.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read snapshot"));
    }
}
