//! State transitions for the report view.

use std::sync::Arc;

use tracing::debug;

use super::model::{DashboardState, GeneratedReport, Phase};
use crate::core::ReportSnapshot;

/// Every event that can change the report view.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SelectTool(String),
    SelectProject(String),
    SelectRelease(String),
    GenerateRequested,
    ReportGenerated(GeneratedReport),
    ViewRequested,
    SnapshotLoaded(ReportSnapshot),
    RequestFailed(String),
    TurnPage { category: String, page: usize },
}

/// Compute the state that follows `action`.
///
/// Actions that are not allowed in the current state (a second request while
/// one is in flight, a page outside the data, a response for a request that
/// was superseded by a selection change) leave the state unchanged.
pub fn reduce(state: &DashboardState, action: Action) -> DashboardState {
    match action {
        Action::SelectTool(tool) => {
            if state.tool.as_deref() == Some(tool.as_str()) {
                return state.clone();
            }
            DashboardState {
                tool: Some(tool),
                ..DashboardState::new(state.page_size)
            }
        }
        Action::SelectProject(project) => {
            if state.project.as_deref() == Some(project.as_str()) {
                return state.clone();
            }
            DashboardState {
                tool: state.tool.clone(),
                project: Some(project),
                ..DashboardState::new(state.page_size)
            }
        }
        Action::SelectRelease(release) => {
            if state.release.as_deref() == Some(release.as_str()) {
                return state.clone();
            }
            DashboardState {
                tool: state.tool.clone(),
                project: state.project.clone(),
                release: Some(release),
                ..DashboardState::new(state.page_size)
            }
        }
        Action::GenerateRequested => {
            if !state.can_generate() {
                debug!(phase = ?state.phase, "generate ignored");
                return state.clone();
            }
            DashboardState {
                tool: state.tool.clone(),
                project: state.project.clone(),
                release: state.release.clone(),
                phase: Phase::Generating,
                ..DashboardState::new(state.page_size)
            }
        }
        Action::ReportGenerated(report) => {
            if state.phase != Phase::Generating {
                debug!(phase = ?state.phase, "stale generate response dropped");
                return state.clone();
            }
            DashboardState {
                phase: Phase::Generated,
                report: Some(Arc::new(report)),
                ..state.clone()
            }
        }
        Action::ViewRequested => {
            if !state.can_view() {
                debug!(phase = ?state.phase, "view ignored");
                return state.clone();
            }
            DashboardState {
                phase: Phase::Viewing,
                error: None,
                ..state.clone()
            }
        }
        Action::SnapshotLoaded(snapshot) => {
            if state.phase != Phase::Viewing {
                debug!(phase = ?state.phase, "stale snapshot dropped");
                return state.clone();
            }
            // A new snapshot puts every category back on page 1.
            DashboardState {
                phase: Phase::Loaded,
                snapshot: Some(Arc::new(snapshot)),
                pages: im::HashMap::new(),
                ..state.clone()
            }
        }
        Action::RequestFailed(message) => {
            if !state.phase.is_busy() {
                return state.clone();
            }
            DashboardState {
                phase: Phase::Failed,
                error: Some(message),
                ..state.clone()
            }
        }
        Action::TurnPage { category, page } => {
            let total = state.total_pages(&category);
            if page == 0 || page > total || page == state.page(&category) {
                return state.clone();
            }
            DashboardState {
                pages: state.pages.update(category, page),
                ..state.clone()
            }
        }
    }
}
