//! Drive the report view through a full user session with the reducer.

use std::path::Path;

use qa_analytics::core::{ExportMetadata, load_snapshot};
use qa_analytics::render::render_page;
use qa_analytics::state::{Action, DashboardState, GeneratedReport, Phase, reduce};
use qa_analytics::ColumnStrategy;

fn fixture_path() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/snapshot.json")
}

fn apply(state: DashboardState, actions: Vec<Action>) -> DashboardState {
    actions.into_iter().fold(state, |s, a| reduce(&s, a))
}

#[test]
fn session_generate_view_page_and_reset() {
    let snapshot = load_snapshot(&fixture_path()).unwrap();

    let state = apply(
        DashboardState::new(2),
        vec![
            Action::SelectTool("zephyr".into()),
            Action::SelectProject("CORE".into()),
            Action::SelectRelease("2026.10".into()),
            Action::GenerateRequested,
            Action::ReportGenerated(GeneratedReport {
                metadata: ExportMetadata::new("CORE", "2026.10"),
                generated_at: "2026-10-19T08:00:00Z".into(),
            }),
            Action::ViewRequested,
            Action::SnapshotLoaded(snapshot),
        ],
    );
    assert_eq!(state.phase(), Phase::Loaded);
    assert_eq!(state.total_pages("unmappedTestCases"), 2);
    assert_eq!(state.total_pages("emptyTestSteps"), 0);
    assert!(!state.page_controls("emptyTestSteps").visible);
    assert!(!state.page_controls("unmappedUserStories").visible);

    let controls = state.page_controls("unmappedTestCases");
    assert!(controls.visible);
    assert_eq!(controls.prev(), None);
    let next = controls.next().unwrap();

    let state = reduce(
        &state,
        Action::TurnPage {
            category: "unmappedTestCases".into(),
            page: next,
        },
    );
    let visible = state.visible_records("unmappedTestCases");
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].cell("test_key").display(), "CORE-T9");
    assert_eq!(state.page("unmappedUserStories"), 1);

    let table = render_page(
        state.snapshot().unwrap().records("unmappedTestCases"),
        state.page("unmappedTestCases"),
        state.page_size(),
        ColumnStrategy::FirstRecord,
    );
    assert!(table.contains("| CORE-T9 | Customer detail \\| long address | 6 | - |"));
    assert!(table.ends_with("‹ 1 [2]  \n"));

    // Changing the project throws the whole report away.
    let state = reduce(&state, Action::SelectProject("WEB".into()));
    assert_eq!(state.phase(), Phase::Idle);
    assert!(state.snapshot().is_none());
    assert!(state.visible_records("unmappedTestCases").is_empty());
    assert!(!state.can_generate());
}
