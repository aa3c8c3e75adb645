//! Destinations for generated export files.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::info;

use crate::{AnalyticsError, AnalyticsResult};

/// Persists a generated file.
///
/// Errors are returned to the caller as-is; exporters never retry a save.
pub trait FileSink {
    /// Save `bytes` under `filename` and return where the file ended up.
    fn save(&self, filename: &str, bytes: &[u8]) -> AnalyticsResult<PathBuf>;
}

/// Writes files into a directory, creating it on first use.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        DirectorySink {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl FileSink for DirectorySink {
    fn save(&self, filename: &str, bytes: &[u8]) -> AnalyticsResult<PathBuf> {
        if !self.dir.as_os_str().is_empty() && !self.dir.exists() {
            std::fs::create_dir_all(&self.dir).map_err(|e| {
                AnalyticsError::Message(format!(
                    "failed to create directory {}: {e}",
                    self.dir.display()
                ))
            })?;
        }

        let path = self.dir.join(filename);
        std::fs::write(&path, bytes).map_err(|e| {
            AnalyticsError::Message(format!("failed to write {}: {e}", path.display()))
        })?;
        info!(path = %path.display(), bytes = bytes.len(), "saved export");
        Ok(path)
    }
}

/// Keeps saved files in memory, in save order.
#[derive(Debug, Default)]
pub struct MemorySink {
    files: Mutex<Vec<(String, Vec<u8>)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        MemorySink::default()
    }

    /// Names of the files saved so far.
    pub fn filenames(&self) -> Vec<String> {
        self.lock().iter().map(|(name, _)| name.clone()).collect()
    }

    /// Contents of the file saved under `filename`, if any.
    pub fn contents(&self, filename: &str) -> Option<Vec<u8>> {
        self.lock()
            .iter()
            .find(|(name, _)| name == filename)
            .map(|(_, bytes)| bytes.clone())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<(String, Vec<u8>)>> {
        // Poisoning leaves the file list intact.
        self.files.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl FileSink for MemorySink {
    fn save(&self, filename: &str, bytes: &[u8]) -> AnalyticsResult<PathBuf> {
        self.lock().push((filename.to_string(), bytes.to_vec()));
        Ok(PathBuf::from(filename))
    }
}
