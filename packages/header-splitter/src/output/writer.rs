//! Interface header writer.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::render::render_interface;
use crate::config::interface_file_name;
use crate::error::{Result, SplitterError};
use crate::splitting::{InterfaceBlock, InterfaceSink};

/// Create the output directory if needed and delete everything in it.
pub fn prepare_output_dir(dir: &Path) -> Result<()> {
    let dir_error = |source| SplitterError::OutputDir {
        path: dir.to_path_buf(),
        source,
    };

    fs::create_dir_all(dir).map_err(dir_error)?;

    for entry in fs::read_dir(dir).map_err(dir_error)? {
        let entry = entry.map_err(dir_error)?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(dir_error)?;

        if file_type.is_dir() {
            fs::remove_dir_all(&path).map_err(dir_error)?;
        } else {
            fs::remove_file(&path).map_err(dir_error)?;
        }
        tracing::debug!(path = %path.display(), "Removed old output");
    }

    Ok(())
}

/// Render a block and write it to `<dir>/<name>.h`.
///
/// Uses atomic write pattern: writes to temp file, syncs to disk, then renames.
/// An existing file of the same name is replaced.
///
/// # Returns
/// Path to the written file
pub fn write_interface(dir: &Path, block: &InterfaceBlock) -> Result<PathBuf> {
    let output_file = dir.join(interface_file_name(&block.name));
    let temp_file = dir.join(format!(".{}.tmp", interface_file_name(&block.name)));
    let write_error = |source| SplitterError::OutputWrite {
        path: output_file.clone(),
        source,
    };

    tracing::info!(path = %output_file.display(), "Writing to: {}", output_file.display());
    let content = render_interface(block);

    if let Err(source) = write_and_rename(&temp_file, &output_file, content.as_bytes()) {
        // The temp file may be partially written; the write error is what matters
        let _ = fs::remove_file(&temp_file);
        return Err(write_error(source));
    }

    Ok(output_file)
}

/// Write `bytes` to `temp_file`, sync it, then move it over `output_file`.
fn write_and_rename(temp_file: &Path, output_file: &Path, bytes: &[u8]) -> std::io::Result<()> {
    {
        let mut file = File::create(temp_file)?;
        file.write_all(bytes)?;
        file.sync_all()?; // Ensure data is flushed to disk
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if output_file.exists() {
        fs::remove_file(output_file)?;
    }

    fs::rename(temp_file, output_file)
}

/// Sink that writes every block into an output directory.
#[derive(Debug)]
pub struct DirectoryWriter {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl DirectoryWriter {
    /// Create a writer for an existing directory.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: Vec::new(),
        }
    }

    /// Files written so far, in write order. A name written twice appears twice.
    #[must_use]
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    #[must_use]
    pub fn into_written(self) -> Vec<PathBuf> {
        self.written
    }
}

impl InterfaceSink for DirectoryWriter {
    fn emit(&mut self, block: InterfaceBlock) -> Result<()> {
        let path = write_interface(&self.dir, &block)?;
        self.written.push(path);
        Ok(())
    }
}
