//! Report-view state model.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::{ExportMetadata, Record, ReportSnapshot};
use crate::paging::{PageControls, total_pages, window_of};

/// Progress of the generate/view request cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Idle,
    Generating,
    Generated,
    Viewing,
    Loaded,
    Failed,
}

impl Phase {
    /// A request is in flight; the triggering controls are disabled.
    pub fn is_busy(&self) -> bool {
        matches!(self, Phase::Generating | Phase::Viewing)
    }
}

/// Result of a "generate" request: report metadata without category data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedReport {
    pub metadata: ExportMetadata,
    /// Provider timestamp of the generated report
    pub generated_at: String,
}

/// Complete state of the analytics report view.
///
/// Values are cheap to clone: the snapshot and report are shared and the page
/// map is a persistent `im` map.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub(crate) tool: Option<String>,
    pub(crate) project: Option<String>,
    pub(crate) release: Option<String>,
    pub(crate) phase: Phase,
    pub(crate) report: Option<Arc<GeneratedReport>>,
    pub(crate) snapshot: Option<Arc<ReportSnapshot>>,
    pub(crate) pages: im::HashMap<String, usize>,
    pub(crate) error: Option<String>,
    pub(crate) page_size: usize,
}

impl DashboardState {
    /// Empty state; a zero `page_size` is raised to 1.
    pub fn new(page_size: usize) -> Self {
        DashboardState {
            tool: None,
            project: None,
            release: None,
            phase: Phase::Idle,
            report: None,
            snapshot: None,
            pages: im::HashMap::new(),
            error: None,
            page_size: page_size.max(1),
        }
    }

    pub fn tool(&self) -> Option<&str> {
        self.tool.as_deref()
    }

    pub fn project(&self) -> Option<&str> {
        self.project.as_deref()
    }

    pub fn release(&self) -> Option<&str> {
        self.release.as_deref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn report(&self) -> Option<&GeneratedReport> {
        self.report.as_deref()
    }

    pub fn snapshot(&self) -> Option<&ReportSnapshot> {
        self.snapshot.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Tool, project and release are all chosen.
    pub fn selection_complete(&self) -> bool {
        self.tool.is_some() && self.project.is_some() && self.release.is_some()
    }

    /// "Generate" is enabled.
    pub fn can_generate(&self) -> bool {
        !self.phase.is_busy() && self.selection_complete()
    }

    /// "View" is enabled.
    pub fn can_view(&self) -> bool {
        !self.phase.is_busy() && self.report.is_some()
    }

    /// Current 1-based page of a category.
    pub fn page(&self, category: &str) -> usize {
        self.pages.get(category).copied().unwrap_or(1)
    }

    pub fn total_pages(&self, category: &str) -> usize {
        total_pages(self.records(category).len(), self.page_size)
    }

    /// Records shown on the current page of a category.
    pub fn visible_records(&self, category: &str) -> &[Record] {
        window_of(self.records(category), self.page(category), self.page_size)
    }

    pub fn page_controls(&self, category: &str) -> PageControls {
        PageControls::new(self.page(category), self.total_pages(category))
    }

    fn records(&self, category: &str) -> &[Record] {
        self.snapshot
            .as_deref()
            .map(|s| s.records(category))
            .unwrap_or(&[])
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        DashboardState::new(crate::paging::DEFAULT_PAGE_SIZE)
    }
}
