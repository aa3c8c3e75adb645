//! File export for report snapshots.
//!
//! This module provides:
//! - `export_workbook`: one multi-sheet `.xlsx` document for all non-empty categories
//! - `export_delimited` / `export_all_delimited`: one `.csv` file per category
//! - `FileSink`: where generated files are persisted

pub mod delimited;
pub mod naming;
pub mod sink;
pub mod workbook;

use time::OffsetDateTime;

use crate::core::ColumnStrategy;

// Re-export key types
pub use delimited::{export_all_delimited, export_delimited, render_delimited};
pub use naming::{delimited_filename, export_timestamp, sheet_name, workbook_filename};
pub use sink::{DirectorySink, FileSink, MemorySink};
pub use workbook::{build_workbook, export_workbook, plan_sheets, SheetPlan};

/// Per-export settings.
#[derive(Debug, Clone, Copy)]
pub struct ExportOptions {
    /// Instant stamped into generated file names
    pub exported_at: OffsetDateTime,
    pub columns: ColumnStrategy,
}

impl ExportOptions {
    /// Options stamped with the current UTC time.
    pub fn now(columns: ColumnStrategy) -> Self {
        ExportOptions {
            exported_at: OffsetDateTime::now_utc(),
            columns,
        }
    }

    pub fn at(exported_at: OffsetDateTime) -> Self {
        ExportOptions {
            exported_at,
            columns: ColumnStrategy::default(),
        }
    }
}
