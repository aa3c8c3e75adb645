//! Multi-sheet xlsx export.

use std::path::PathBuf;

use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook, Worksheet};
use tracing::{debug, info, warn};

use super::naming::{MAX_SHEET_NAME_LEN, sheet_name, workbook_filename};
use super::sink::FileSink;
use super::ExportOptions;
use crate::core::{CellValue, ColumnStrategy, ExportMetadata, Record, ReportSnapshot};
use crate::core::{columns_for, header_label};
use crate::{AnalyticsError, AnalyticsResult};

/// Column width bounds, in character units.
pub const MIN_COLUMN_WIDTH: f64 = 10.0;
pub const MAX_COLUMN_WIDTH: f64 = 50.0;
const COLUMN_PADDING: usize = 2;

/// Longest text a single xlsx cell can hold, in characters.
pub const MAX_CELL_TEXT_LEN: usize = 32_767;

const HEADER_FILL: u32 = 0x1F4E78;
const BAND_FILL: u32 = 0xF2F2F2;

/// Layout of one worksheet, computed before any cell is written.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetPlan {
    pub category_id: String,
    pub name: String,
    /// Record keys, in column order
    pub columns: Vec<String>,
    pub headers: Vec<String>,
    pub widths: Vec<f64>,
}

/// Plan one sheet per non-empty category, in metadata order.
///
/// Categories that are absent from the snapshot or hold no records get no
/// sheet. Categories present in the snapshot but not listed in `meta` are
/// not exported.
pub fn plan_sheets(
    snapshot: &ReportSnapshot,
    meta: &ExportMetadata,
    strategy: ColumnStrategy,
) -> Vec<SheetPlan> {
    let mut plans: Vec<SheetPlan> = Vec::new();

    for category in &meta.categories {
        let records = snapshot.records(&category.id);
        if records.is_empty() {
            debug!(category = %category.id, "no records, skipping sheet");
            continue;
        }

        let columns = columns_for(records, strategy);
        if columns.is_empty() {
            warn!(category = %category.id, "no columns inferred, skipping sheet");
            continue;
        }
        let headers: Vec<String> = columns.iter().map(|c| header_label(c)).collect();
        let widths = columns
            .iter()
            .zip(&headers)
            .map(|(key, header)| column_width(records, key, header))
            .collect();

        let name = unique_sheet_name(&sheet_name(&category.label), &plans);
        plans.push(SheetPlan {
            category_id: category.id.clone(),
            name,
            columns,
            headers,
            widths,
        });
    }

    plans
}

fn column_width(records: &[Record], key: &str, header: &str) -> f64 {
    let longest = records
        .iter()
        .map(|r| r.cell(key).export_text().chars().count())
        .chain(std::iter::once(header.chars().count()))
        .max()
        .unwrap_or(0);
    ((longest + COLUMN_PADDING) as f64).clamp(MIN_COLUMN_WIDTH, MAX_COLUMN_WIDTH)
}

// xlsx rejects two sheets whose names differ only by case, so a name that
// collides after truncation gets a numeric suffix.
fn unique_sheet_name(base: &str, taken: &[SheetPlan]) -> String {
    let is_taken = |candidate: &str| {
        taken
            .iter()
            .any(|p| p.name.to_lowercase() == candidate.to_lowercase())
    };
    if !is_taken(base) {
        return base.to_string();
    }
    (2..)
        .map(|n| {
            let suffix = format!(" ({n})");
            let keep = MAX_SHEET_NAME_LEN.saturating_sub(suffix.chars().count());
            let stem: String = base.chars().take(keep).collect();
            format!("{stem}{suffix}")
        })
        .find(|candidate| !is_taken(candidate))
        .unwrap_or_else(|| base.to_string())
}

/// Build the xlsx document in memory; `None` when every category is empty.
pub fn build_workbook(
    snapshot: &ReportSnapshot,
    meta: &ExportMetadata,
    strategy: ColumnStrategy,
) -> AnalyticsResult<Option<Vec<u8>>> {
    let plans = plan_sheets(snapshot, meta, strategy);
    if plans.is_empty() {
        return Ok(None);
    }

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(HEADER_FILL))
        .set_border(FormatBorder::Thin);
    let plain_format = Format::new().set_border(FormatBorder::Thin);
    let band_format = Format::new()
        .set_border(FormatBorder::Thin)
        .set_background_color(Color::RGB(BAND_FILL));

    let mut workbook = Workbook::new();
    for plan in &plans {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&plan.name)?;

        for (col, (header, width)) in plan.headers.iter().zip(&plan.widths).enumerate() {
            let col = column_index(col)?;
            worksheet.set_column_width(col, *width)?;
            worksheet.write_string_with_format(0, col, header, &header_format)?;
        }
        worksheet.set_freeze_panes(1, 0)?;

        for (idx, record) in snapshot.records(&plan.category_id).iter().enumerate() {
            let row = u32::try_from(idx + 1)
                .map_err(|_| AnalyticsError::Message("too many rows for one sheet".to_string()))?;
            // Every other data row is shaded.
            let format = if idx % 2 == 1 { &band_format } else { &plain_format };
            for (col, key) in plan.columns.iter().enumerate() {
                write_cell(worksheet, row, column_index(col)?, &record.cell(key), format)?;
            }
        }
        debug!(sheet = %plan.name, rows = snapshot.records(&plan.category_id).len(), "wrote sheet");
    }

    Ok(Some(workbook.save_to_buffer()?))
}

fn column_index(col: usize) -> AnalyticsResult<u16> {
    u16::try_from(col)
        .map_err(|_| AnalyticsError::Message("too many columns for one sheet".to_string()))
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: &CellValue,
    format: &Format,
) -> AnalyticsResult<()> {
    match value {
        CellValue::Empty => {
            worksheet.write_blank(row, col, format)?;
        }
        CellValue::Number(n) => match n.as_f64() {
            Some(v) => {
                worksheet.write_number_with_format(row, col, v, format)?;
            }
            None => {
                write_text(worksheet, row, col, &n.to_string(), format)?;
            }
        },
        CellValue::Bool(b) => {
            worksheet.write_boolean_with_format(row, col, *b, format)?;
        }
        CellValue::Text(s) => {
            write_text(worksheet, row, col, s, format)?;
        }
    }
    Ok(())
}

// Text over the per-cell limit is cut rather than failing the whole workbook.
fn write_text(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    text: &str,
    format: &Format,
) -> AnalyticsResult<()> {
    match text.char_indices().nth(MAX_CELL_TEXT_LEN) {
        Some((cut, _)) => {
            warn!(row, col, chars = text.chars().count(), "cell text truncated to xlsx limit");
            worksheet.write_string_with_format(row, col, &text[..cut], format)?;
        }
        None => {
            worksheet.write_string_with_format(row, col, text, format)?;
        }
    }
    Ok(())
}

/// Export every non-empty category as one sheet of a single workbook.
///
/// Returns `Ok(None)` without saving anything when there is no data. Sink
/// failures are returned unchanged.
pub fn export_workbook(
    snapshot: &ReportSnapshot,
    meta: &ExportMetadata,
    sink: &dyn FileSink,
    options: ExportOptions,
) -> AnalyticsResult<Option<PathBuf>> {
    let Some(bytes) = build_workbook(snapshot, meta, options.columns)? else {
        info!(project = %meta.project, release = %meta.release, "no report data to export");
        return Ok(None);
    };
    let filename = workbook_filename(meta, options.exported_at);
    let path = sink.save(&filename, &bytes)?;
    Ok(Some(path))
}
