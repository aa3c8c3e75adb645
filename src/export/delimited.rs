//! CSV export, one file per category.

use std::path::PathBuf;

use tracing::{info, warn};

use super::ExportOptions;
use super::naming::delimited_filename;
use super::sink::FileSink;
use crate::core::{ColumnStrategy, ExportMetadata, Record, ReportSnapshot};
use crate::core::{columns_for, header_label};
use crate::{AnalyticsError, AnalyticsResult};

/// Render records as comma-separated UTF-8 text with a header row.
///
/// Empty cells are written as empty fields; quoting follows RFC 4180.
/// Without any column (first record is `{}` under `FirstRecord`) the output
/// is empty.
pub fn render_delimited(records: &[Record], strategy: ColumnStrategy) -> AnalyticsResult<Vec<u8>> {
    let columns = columns_for(records, strategy);
    if columns.is_empty() {
        warn!(records = records.len(), "no columns inferred, writing no rows");
        return Ok(Vec::new());
    }

    let mut writer = csv::Writer::from_writer(Vec::new());
    let headers: Vec<String> = columns.iter().map(|c| header_label(c)).collect();
    writer.write_record(&headers)?;

    for record in records {
        let row: Vec<String> = columns
            .iter()
            .map(|key| record.cell(key).export_text())
            .collect();
        writer.write_record(&row)?;
    }

    writer
        .into_inner()
        .map_err(|e| AnalyticsError::Message(format!("failed to flush CSV writer: {e}")))
}

/// Export one category as a CSV file.
///
/// An empty record set, or one without any inferable column, is skipped:
/// nothing is saved and `Ok(None)` is returned. The file is named after the
/// category label from `meta` (or the id when the category is not listed).
pub fn export_delimited(
    records: &[Record],
    meta: &ExportMetadata,
    category_id: &str,
    sink: &dyn FileSink,
    options: ExportOptions,
) -> AnalyticsResult<Option<PathBuf>> {
    if records.is_empty() {
        info!(category = %category_id, "no records, skipping CSV export");
        return Ok(None);
    }

    let bytes = render_delimited(records, options.columns)?;
    if bytes.is_empty() {
        return Ok(None);
    }
    let filename = delimited_filename(meta, meta.label_for(category_id), options.exported_at);
    let path = sink.save(&filename, &bytes)?;
    Ok(Some(path))
}

/// Export each non-empty category listed in `meta` as its own CSV file.
///
/// Stops at the first sink failure; files saved before it are kept.
pub fn export_all_delimited(
    snapshot: &ReportSnapshot,
    meta: &ExportMetadata,
    sink: &dyn FileSink,
    options: ExportOptions,
) -> AnalyticsResult<Vec<PathBuf>> {
    let mut saved = Vec::new();
    for category in &meta.categories {
        if let Some(path) = export_delimited(
            snapshot.records(&category.id),
            meta,
            &category.id,
            sink,
            options,
        )? {
            saved.push(path);
        }
    }
    info!(files = saved.len(), "CSV export complete");
    Ok(saved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_render_header_and_rows() {
        let records = vec![
            Record::new()
                .with("test_key", "TC-1")
                .with("step_count", 3)
                .with("owner", Value::Null),
            Record::new()
                .with("test_key", "TC-2")
                .with("step_count", 0)
                .with("owner", "Kim, Lee"),
        ];
        let bytes = render_delimited(&records, ColumnStrategy::FirstRecord).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Test Key,Step Count,Owner");
        assert_eq!(lines[1], "TC-1,3,");
        assert_eq!(lines[2], "TC-2,0,\"Kim, Lee\"");
    }

    #[test]
    fn test_render_missing_key_is_empty_field() {
        let records = vec![
            Record::new().with("a", 1).with("b", 2),
            Record::new().with("a", 3),
        ];
        let text = String::from_utf8(render_delimited(&records, ColumnStrategy::FirstRecord).unwrap())
            .unwrap();
        assert_eq!(text, "A,B\n1,2\n3,\n");
    }

    #[test]
    fn test_empty_first_record_writes_nothing() {
        let records = vec![Record::new(), Record::new().with("a", 1)];
        let bytes = render_delimited(&records, ColumnStrategy::FirstRecord).unwrap();
        assert!(bytes.is_empty());

        let sink = crate::export::MemorySink::new();
        let meta = ExportMetadata::new("P", "R");
        let options = ExportOptions::at(time::macros::datetime!(2026-10-19 08:00:00 UTC));
        let saved = export_delimited(&records, &meta, "emptyTestSteps", &sink, options).unwrap();
        assert!(saved.is_none());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_render_union_columns() {
        let records = vec![
            Record::new().with("a", 1),
            Record::new().with("b", 2),
        ];
        let text = String::from_utf8(render_delimited(&records, ColumnStrategy::Union).unwrap())
            .unwrap();
        assert_eq!(text, "A,B\n1,\n,2\n");
    }
}
