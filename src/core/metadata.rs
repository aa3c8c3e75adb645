//! Export metadata and file-name sanitization.

use serde::{Deserialize, Serialize};

use super::category::{CategoryDescriptor, default_categories};

/// Characters that are not safe in file names on common platforms.
const UNSAFE_FILENAME_CHARS: &[char] = &['/', '\\', '?', '%', '*', ':', '|', '"', '<', '>'];

/// Labels used to name exported files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub project: String,
    pub release: String,
    pub categories: Vec<CategoryDescriptor>,
}

impl ExportMetadata {
    /// Metadata for the default report categories.
    pub fn new(project: impl Into<String>, release: impl Into<String>) -> Self {
        ExportMetadata {
            project: project.into(),
            release: release.into(),
            categories: default_categories(),
        }
    }

    pub fn with_categories(mut self, categories: Vec<CategoryDescriptor>) -> Self {
        self.categories = categories;
        self
    }

    pub fn category(&self, id: &str) -> Option<&CategoryDescriptor> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Human label for `id`, falling back to the id itself.
    pub fn label_for<'a>(&'a self, id: &'a str) -> &'a str {
        self.category(id).map(|c| c.label.as_str()).unwrap_or(id)
    }
}

/// Replace every filesystem-unsafe character with a hyphen.
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| if UNSAFE_FILENAME_CHARS.contains(&c) { '-' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("Proj/A"), "Proj-A");
        assert_eq!(sanitize_name("R:1"), "R-1");
        assert_eq!(sanitize_name(r#"a\b?c%d*e|f"g<h>i"#), "a-b-c-d-e-f-g-h-i");
        assert_eq!(sanitize_name("plain name"), "plain name");
    }

    #[test]
    fn test_sanitize_all_unsafe() {
        assert_eq!(sanitize_name("/:*"), "---");
        assert_eq!(sanitize_name(""), "");
    }

    #[test]
    fn test_label_fallback() {
        let meta = ExportMetadata::new("P", "R");
        assert_eq!(
            meta.label_for("emptyTestSteps"),
            "Test Cases With Empty Steps"
        );
        assert_eq!(meta.label_for("customCategory"), "customCategory");
    }
}
