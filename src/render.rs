//! Plain-text grid rendering of one report page.

use crate::core::{ColumnStrategy, Record, columns_for, header_label};
use crate::paging::{PageControls, PageItem, total_pages, window_of};

/// Render one page of a category as a Markdown table followed by the page strip.
///
/// Empty cells show as `-`. The page strip is left out when the category fits
/// on a single page.
pub fn render_page(
    records: &[Record],
    page: usize,
    page_size: usize,
    strategy: ColumnStrategy,
) -> String {
    if records.is_empty() {
        return "_No records._\n".to_string();
    }

    let columns = columns_for(records, strategy);
    let mut out = String::new();

    let headers: Vec<String> = columns.iter().map(|c| escape_cell(&header_label(c))).collect();
    out.push_str(&format!("| {} |\n", headers.join(" | ")));
    out.push_str(&format!(
        "|{}|\n",
        columns.iter().map(|_| "---").collect::<Vec<_>>().join("|")
    ));

    for record in window_of(records, page, page_size) {
        let cells: Vec<String> = columns
            .iter()
            .map(|key| escape_cell(&record.cell(key).display()))
            .collect();
        out.push_str(&format!("| {} |\n", cells.join(" | ")));
    }

    let controls = PageControls::new(page, total_pages(records.len(), page_size));
    if controls.visible {
        out.push('\n');
        out.push_str(&render_controls(&controls));
        out.push('\n');
    }
    out
}

/// `‹ 1 … 4 [5] 6 … 10 ›`; a disabled arrow is rendered as a blank.
pub fn render_controls(controls: &PageControls) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(controls.items.len() + 2);
    parts.push(if controls.prev_enabled { "‹" } else { " " }.to_string());
    for item in &controls.items {
        match item {
            PageItem::Page(n) if *n == controls.current => parts.push(format!("[{n}]")),
            other => parts.push(other.to_string()),
        }
    }
    parts.push(if controls.next_enabled { "›" } else { " " }.to_string());
    parts.join(" ")
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(n: usize) -> Vec<Record> {
        (1..=n)
            .map(|i| Record::new().with("test_key", format!("TC-{i}")).with("owner", serde_json::Value::Null))
            .collect()
    }

    #[test]
    fn test_single_page_has_no_strip() {
        let out = render_page(&records(2), 1, 25, ColumnStrategy::FirstRecord);
        assert_eq!(out, "| Test Key | Owner |\n|---|---|\n| TC-1 | - |\n| TC-2 | - |\n");
    }

    #[test]
    fn test_strip_marks_current_page() {
        let out = render_page(&records(50), 5, 5, ColumnStrategy::FirstRecord);
        assert!(out.contains("| TC-21 | - |"));
        assert!(out.contains("| TC-25 | - |"));
        assert!(!out.contains("TC-26"));
        assert!(out.ends_with("‹ 1 … 4 [5] 6 … 10 ›\n"));
    }

    #[test]
    fn test_controls_disabled_arrows() {
        let first = render_controls(&PageControls::new(1, 3));
        assert_eq!(first, "  [1] 2 3 ›");
        let last = render_controls(&PageControls::new(3, 3));
        assert_eq!(last, "‹ 1 2 [3]  ");
    }

    #[test]
    fn test_empty_category() {
        assert_eq!(
            render_page(&[], 1, 25, ColumnStrategy::FirstRecord),
            "_No records._\n"
        );
    }

    #[test]
    fn test_pipes_escaped() {
        let recs = vec![Record::new().with("summary", "a|b")];
        let out = render_page(&recs, 1, 25, ColumnStrategy::FirstRecord);
        assert!(out.contains("| a\\|b |"));
    }
}
