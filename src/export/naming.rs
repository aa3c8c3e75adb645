//! Generated file and sheet names.

use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

use crate::core::{ExportMetadata, sanitize_name};

/// Maximum sheet-name length accepted by the xlsx format.
pub const MAX_SHEET_NAME_LEN: usize = 31;

/// Characters the xlsx format rejects in sheet names.
const INVALID_SHEET_CHARS: &[char] = &['[', ']', ':', '*', '?', '/', '\\'];

/// Sortable, filesystem-safe UTC timestamp: `2026-10-19T08-05-09-042Z`.
///
/// This is the ISO-8601 form with colons and the fractional-second dot
/// replaced by hyphens.
pub fn export_timestamp(instant: OffsetDateTime) -> String {
    let format =
        format_description!("[year]-[month]-[day]T[hour]-[minute]-[second]-[subsecond digits:3]Z");
    instant
        .to_offset(UtcOffset::UTC)
        .format(&format)
        .unwrap_or_default()
}

/// `{project}_{release}_Analytics_{timestamp}.xlsx`
pub fn workbook_filename(meta: &ExportMetadata, instant: OffsetDateTime) -> String {
    format!("{}.xlsx", file_stem(meta, "Analytics", instant))
}

/// `{project}_{release}_{label}_{timestamp}.csv`
pub fn delimited_filename(meta: &ExportMetadata, label: &str, instant: OffsetDateTime) -> String {
    format!("{}.csv", file_stem(meta, label, instant))
}

fn file_stem(meta: &ExportMetadata, middle: &str, instant: OffsetDateTime) -> String {
    format!(
        "{}_{}_{}_{}",
        sanitize_name(&meta.project),
        sanitize_name(&meta.release),
        sanitize_name(middle),
        export_timestamp(instant)
    )
}

/// Sheet name for a category label.
///
/// Characters invalid in sheet names become `-` and the result is cut to
/// [`MAX_SHEET_NAME_LEN`] characters. Distinct labels may collide after
/// truncation.
pub fn sheet_name(label: &str) -> String {
    let mut name: String = label
        .chars()
        .map(|c| if INVALID_SHEET_CHARS.contains(&c) { '-' } else { c })
        .take(MAX_SHEET_NAME_LEN)
        .collect();

    // Apostrophes may not start or end a sheet name.
    if name.starts_with('\'') {
        name.replace_range(..1, "-");
    }
    if name.ends_with('\'') {
        let last = name.len() - 1;
        name.replace_range(last.., "-");
    }
    if name.trim().is_empty() {
        return "Sheet".to_string();
    }
    if name.eq_ignore_ascii_case("history") {
        name.push('-');
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_export_timestamp_format() {
        let instant = datetime!(2026-10-19 08:05:09.042 UTC);
        assert_eq!(export_timestamp(instant), "2026-10-19T08-05-09-042Z");
    }

    #[test]
    fn test_export_timestamp_pads_fields() {
        let instant = datetime!(2026-01-02 03:04:05.0009 UTC);
        assert_eq!(export_timestamp(instant), "2026-01-02T03-04-05-000Z");
    }

    #[test]
    fn test_export_timestamp_normalizes_to_utc() {
        let instant = datetime!(2026-10-19 10:00:00 +02:00);
        assert_eq!(export_timestamp(instant), "2026-10-19T08-00-00-000Z");
    }

    #[test]
    fn test_workbook_filename_sanitizes() {
        let meta = ExportMetadata::new("Proj/A", "R:1");
        let instant = datetime!(2026-01-02 03:04:05 UTC);
        assert_eq!(
            workbook_filename(&meta, instant),
            "Proj-A_R-1_Analytics_2026-01-02T03-04-05-000Z.xlsx"
        );
    }

    #[test]
    fn test_delimited_filename_uses_label() {
        let meta = ExportMetadata::new("Core", "2.0");
        let instant = datetime!(2026-01-02 03:04:05 UTC);
        assert_eq!(
            delimited_filename(&meta, "Steps w/o Results", instant),
            "Core_2.0_Steps w-o Results_2026-01-02T03-04-05-000Z.csv"
        );
    }

    #[test]
    fn test_sheet_name_truncates() {
        let long = "Failed Test Cases Without Any Linked Defects";
        let name = sheet_name(long);
        assert_eq!(name.chars().count(), MAX_SHEET_NAME_LEN);
        assert_eq!(name, "Failed Test Cases Without Any L");
    }

    #[test]
    fn test_sheet_name_multibyte_does_not_panic() {
        let label = "Ünïcödé ".repeat(10);
        let name = sheet_name(&label);
        assert_eq!(name.chars().count(), MAX_SHEET_NAME_LEN);
    }

    #[test]
    fn test_sheet_name_replaces_invalid_chars() {
        assert_eq!(sheet_name("Steps [a/b]: *?"), "Steps -a-b-- --");
        assert_eq!(sheet_name("'quoted'"), "-quoted-");
        assert_eq!(sheet_name(""), "Sheet");
        assert_eq!(sheet_name("History"), "History-");
    }
}
