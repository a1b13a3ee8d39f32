//! Main generator that ties all components together.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::config::GeneratorConfig;
use crate::error::{Result, SplitterError};
use crate::output::{prepare_output_dir, DirectoryWriter};
use crate::splitting::HeaderSplitter;

/// What one SDK header produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionReport {
    pub version: String,
    pub input: PathBuf,
    /// Files written for this version, in write order.
    pub written: Vec<PathBuf>,
}

/// What a whole run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub versions: Vec<VersionReport>,
}

impl GenerationReport {
    /// Distinct files left in the output directory.
    #[must_use]
    pub fn output_files(&self) -> BTreeSet<&Path> {
        self.versions
            .iter()
            .flat_map(|v| v.written.iter().map(PathBuf::as_path))
            .collect()
    }

    /// Total number of writes, counting overwrites.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.versions.iter().map(|v| v.written.len()).sum()
    }
}

/// Split every configured SDK header into interface headers.
///
/// The output directory is wiped first. Versions are processed in the
/// order given, so a later version overwrites any interface file an earlier
/// one wrote under the same name.
///
/// # Arguments
/// * `config` - Input directory, output directory and version list
///
/// # Returns
/// A `GenerationReport` listing the files written per version
pub fn generate_interfaces(config: &GeneratorConfig) -> Result<GenerationReport> {
    config.validate()?;
    prepare_output_dir(config.output_dir())?;

    let mut splitter = HeaderSplitter::new();
    let mut report = GenerationReport::default();

    for version in &config.versions {
        let input = config.input_path(version);
        let written = split_header_file(&mut splitter, &input, config.output_dir())?;
        report.versions.push(VersionReport {
            version: version.clone(),
            input,
            written,
        });
    }

    Ok(report)
}

/// Split one header file into `output_dir`.
///
/// Returns the paths written, in write order.
pub fn split_header_file(
    splitter: &mut HeaderSplitter,
    input: &Path,
    output_dir: &Path,
) -> Result<Vec<PathBuf>> {
    tracing::info!(path = %input.display(), "Reading: {}", input.display());

    let file = File::open(input).map_err(|source| SplitterError::InputRead {
        path: input.to_path_buf(),
        source,
    })?;

    let mut writer = DirectoryWriter::new(output_dir);
    let count = splitter
        .split(BufReader::new(file), &mut writer)
        .map_err(|err| match err {
            SplitterError::Io(source) => SplitterError::InputRead {
                path: input.to_path_buf(),
                source,
            },
            other => other,
        })?;

    tracing::debug!(path = %input.display(), interfaces = count, "Header split");
    Ok(writer.into_written())
}
