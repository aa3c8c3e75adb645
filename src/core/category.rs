//! Report category descriptors.

use serde::{Deserialize, Serialize};

/// A named report slice, e.g. test cases that are not linked to any user story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDescriptor {
    /// Identifier used as the snapshot key
    pub id: String,
    /// Human label used for sheet names and file names
    pub label: String,
}

impl CategoryDescriptor {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        CategoryDescriptor {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Categories served by the gap-analysis report provider, in display order.
const DEFAULT_CATEGORIES: &[(&str, &str)] = &[
    ("unmappedUserStories", "User Stories Without Test Cases"),
    ("unmappedTestCases", "Test Cases Without User Stories"),
    ("emptyTestSteps", "Test Cases With Empty Steps"),
    ("missingExpectedResults", "Steps Missing Expected Results"),
    ("notExecutedTestCases", "Test Cases Not Executed"),
    ("failedWithoutDefects", "Failed Test Cases Without Defects"),
];

pub fn default_categories() -> Vec<CategoryDescriptor> {
    DEFAULT_CATEGORIES
        .iter()
        .map(|(id, label)| CategoryDescriptor::new(*id, *label))
        .collect()
}
