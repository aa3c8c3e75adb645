pub mod config;
pub mod core;
pub mod export;
pub mod paging;
pub mod render;
pub mod state;

use thiserror::Error;

pub use crate::core::{
    CategoryDescriptor, CellValue, ColumnStrategy, ExportMetadata, Record, ReportSnapshot,
};
pub use crate::export::{DirectorySink, ExportOptions, FileSink, MemorySink};
pub use crate::paging::{DEFAULT_PAGE_SIZE, PageControls, PageItem};

#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("{0}")]
    Message(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("XLSX write error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

pub type AnalyticsResult<T> = Result<T, AnalyticsError>;
