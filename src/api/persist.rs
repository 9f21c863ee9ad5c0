use crate::api::error::ApiError;
use crate::api::types::record::PersistedRecord;
use crate::api::utils::safe_file_stem;
use log::{error, info};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes each response as `<output_dir>/<stem>.json`
#[derive(Debug, Clone)]
pub struct Persister {
    output_dir: PathBuf,
}

impl Persister {
    /// Creates a persister for the given directory
    ///
    /// The directory is created lazily on the first save.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Persister {
            output_dir: output_dir.into(),
        }
    }

    /// Directory the files land in
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path a label will be written to
    pub fn path_for(&self, label: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}.json", safe_file_stem(label)))
    }

    /// Create the output directory, no-op when it already exists
    pub fn ensure_dir(&self) -> Result<(), ApiError> {
        fs::create_dir_all(&self.output_dir).map_err(|e| {
            error!("Unable to create {}: {}", self.output_dir.display(), e);
            ApiError::from(e)
        })
    }

    /// Wrap `response` with a timestamp and the label and write it, overwriting
    /// any previous file for the same label
    pub fn save(&self, label: &str, response: &Value) -> Result<PathBuf, ApiError> {
        self.ensure_dir()?;
        let record = PersistedRecord::new(label, response.clone());
        let path = self.path_for(label);
        let contents = serde_json::to_string_pretty(&record)?;
        if let Err(e) = fs::write(&path, contents) {
            error!("Unable to write {}: {}", path.display(), e);
            return Err(e.into());
        }
        info!("Saved {} to {}", label, path.display());
        Ok(path)
    }
}

impl Default for Persister {
    fn default() -> Self {
        Persister::new(crate::DEFAULT_OUTPUT_DIR)
    }
}
