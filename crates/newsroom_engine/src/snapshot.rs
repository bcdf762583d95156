use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("output directory missing or not writable: {0}")]
    OutputDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Ensure output directory exists; create if missing.
pub fn ensure_output_dir(dir: &Path) -> Result<(), SnapshotError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| SnapshotError::OutputDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(SnapshotError::OutputDir(format!(
                "{} is not a directory",
                dir.display()
            )));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| SnapshotError::OutputDir(e.to_string()))?;
    }
    Ok(())
}

/// Writes the rendered page to `{dir}/{file_name}`.
///
/// Each write goes to a temp file in the same directory that is then renamed
/// over the target, so readers never observe a half-written page.
#[derive(Debug, Clone)]
pub struct PageSnapshotWriter {
    dir: PathBuf,
    file_name: String,
}

impl PageSnapshotWriter {
    pub fn new(dir: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            file_name: file_name.into(),
        }
    }

    pub fn target(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }

    pub fn write(&self, html: &str) -> Result<PathBuf, SnapshotError> {
        ensure_output_dir(&self.dir)?;

        let target = self.target();
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(html.as_bytes())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;
        tmp.persist(&target).map_err(|e| SnapshotError::Io(e.error))?;
        Ok(target)
    }
}
