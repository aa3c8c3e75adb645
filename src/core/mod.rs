//! Core types for QA analytics report snapshots.
//!
//! Records are schemaless: each category is a list of flat JSON objects and
//! the display columns are inferred from the data.

pub mod category;
pub mod columns;
pub mod metadata;
pub mod record;
pub mod snapshot;

// Re-export key types for convenience
pub use category::{CategoryDescriptor, default_categories};
pub use columns::{ColumnStrategy, columns_for, header_label};
pub use metadata::{ExportMetadata, sanitize_name};
pub use record::{CellValue, Record};
pub use snapshot::{ReportSnapshot, load_snapshot};
