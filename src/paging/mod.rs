//! Client-side pagination over in-memory record sets.
//!
//! - [`window_of`] / [`total_pages`]: which records belong to a page
//! - [`page_sequence`] / [`PageControls`]: abbreviated page-number strip for display

pub mod sequence;
pub mod window;

// Re-export key types
pub use sequence::{PageControls, PageItem, page_sequence};
pub use window::{DEFAULT_PAGE_SIZE, total_pages, window_of};
