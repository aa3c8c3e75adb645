//! Schemaless report records.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Placeholder shown in grid views for a missing or null field.
pub const EMPTY_PLACEHOLDER: &str = "-";

/// A single scalar cell of a report record.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(Number),
    Bool(bool),
    /// Absent key or JSON `null`
    Empty,
}

impl CellValue {
    /// Convert a JSON value into a cell. Arrays and objects are kept as compact JSON text.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => CellValue::Empty,
            Value::Bool(b) => CellValue::Bool(*b),
            Value::Number(n) => CellValue::Number(n.clone()),
            Value::String(s) => CellValue::Text(s.clone()),
            other => CellValue::Text(other.to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Text used in grid views; empty cells render as [`EMPTY_PLACEHOLDER`].
    pub fn display(&self) -> String {
        match self {
            CellValue::Empty => EMPTY_PLACEHOLDER.to_string(),
            other => other.export_text(),
        }
    }

    /// Text written to exported files; empty cells serialize as an empty string.
    pub fn export_text(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Bool(b) => b.to_string(),
            CellValue::Empty => String::new(),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// An ordered mapping from column key to value.
///
/// Key order is the order in which the upstream provider emitted the fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn new() -> Self {
        Record(Map::new())
    }

    /// Builder-style insert, mostly useful for tests and fixtures.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Cell for `key`; a missing key is [`CellValue::Empty`].
    pub fn cell(&self, key: &str) -> CellValue {
        self.0
            .get(key)
            .map(CellValue::from_json)
            .unwrap_or(CellValue::Empty)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Record(map)
    }
}
