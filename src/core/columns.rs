//! Column inference and header labels.

use serde::{Deserialize, Serialize};

use super::record::Record;

/// How the display columns of a category are derived from its records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnStrategy {
    /// Keys of the first record only. Keys that appear only in later
    /// records are not shown.
    #[default]
    FirstRecord,
    /// Union of keys across all records, in first-seen order.
    Union,
}

/// Compute the ordered column keys for a category.
pub fn columns_for(records: &[Record], strategy: ColumnStrategy) -> Vec<String> {
    match strategy {
        ColumnStrategy::FirstRecord => records
            .first()
            .map(|r| r.keys().map(str::to_string).collect())
            .unwrap_or_default(),
        ColumnStrategy::Union => {
            let mut columns: Vec<String> = Vec::new();
            for record in records {
                for key in record.keys() {
                    if !columns.iter().any(|c| c == key) {
                        columns.push(key.to_string());
                    }
                }
            }
            columns
        }
    }
}

/// Turn a raw key into a header: underscores become spaces and the first
/// letter of every word is upper-cased. The rest of each word is kept as is.
///
/// `no_steps_expected_results` -> `No Steps Expected Results`
pub fn header_label(key: &str) -> String {
    key.split('_')
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    let mut out: String = first.to_uppercase().collect();
                    out.push_str(chars.as_str());
                    out
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
