//! File checks and reading utilities

use crate::error::CliError;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// File reader with existence checks
pub struct FileReader;

impl FileReader {
    /// Fail with [`CliError::FileNotFound`] unless `path` is an existing file
    pub fn ensure_exists(path: &Path) -> Result<(), CliError> {
        if path.is_file() {
            Ok(())
        } else {
            Err(CliError::FileNotFound(path.display().to_string()))
        }
    }

    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }
}
