//! Configuration constants and validation functions for the splitter.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, SplitterError};

/// SDK versions processed when none are given.
///
/// Must stay in ascending order: later versions overwrite same-named
/// interface files, so the newest declaration of each interface wins.
pub const DEFAULT_SDK_VERSIONS: &[&str] = &["1.0.7", "1.0.8", "1.0.11", "1.0.12"];

/// Directory the SDK headers are read from.
pub const DEFAULT_INPUT_DIR: &str = ".";

/// Directory the split interface headers are written to.
pub const DEFAULT_OUTPUT_DIR: &str = "interfaces";

/// Substrings of include-guard lines that never make it into the output.
pub const GUARD_MARKERS: [&str; 2] = ["_OPENVR_API", "_INCLUDE_"];

/// The exact line that opens the shared namespace in the SDK header.
pub const NAMESPACE_LINE: &str = "namespace vr";

/// First line of every generated header.
pub const PRAGMA_ONCE: &str = "#pragma once";

/// Line appended to versioned interfaces to close the nested namespace.
pub const CLOSE_NAMESPACE_LINE: &str = "} // Close custom namespace";

/// Qualifier removed from versioned interfaces, which already live in `vr::<name>`.
pub const VR_QUALIFIER: &str = "vr::";

/// SDK version pattern: dotted digits.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static VERSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(\.\d+)*$").expect("valid regex"));

/// Validate an SDK version string.
///
/// # Examples
/// ```
/// use openvr_header_splitter::config::validate_version;
///
/// assert!(validate_version("1.0.12").is_ok());
/// assert!(validate_version("1.0.x").is_err());
/// ```
pub fn validate_version(version: &str) -> Result<()> {
    if VERSION_PATTERN.is_match(version) {
        Ok(())
    } else {
        Err(SplitterError::InvalidVersion(version.to_string()))
    }
}

/// Numeric sort key for a validated version string.
fn version_key(version: &str) -> Vec<u64> {
    version
        .split('.')
        .map(|part| part.parse().unwrap_or(u64::MAX))
        .collect()
}

/// Check whether versions are in strictly ascending numeric order.
///
/// `1.0.8` sorts before `1.0.11`.
pub fn is_ascending<S: AsRef<str>>(versions: &[S]) -> bool {
    versions
        .windows(2)
        .all(|pair| version_key(pair[0].as_ref()) < version_key(pair[1].as_ref()))
}

/// File name of the SDK header for a version, e.g. `openvr-1.0.7.h`.
pub fn input_file_name(version: &str) -> String {
    format!("openvr-{version}.h")
}

/// File name of a generated interface header, e.g. `IVRSystem_019.h`.
pub fn interface_file_name(interface: &str) -> String {
    format!("{interface}.h")
}

/// Settings for one generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub versions: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            versions: DEFAULT_SDK_VERSIONS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl GeneratorConfig {
    pub fn with_input_dir(mut self, input_dir: impl Into<PathBuf>) -> Self {
        self.input_dir = input_dir.into();
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_versions(mut self, versions: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.versions = versions.into_iter().map(Into::into).collect();
        self
    }

    /// Path of the SDK header for a version.
    pub fn input_path(&self, version: &str) -> PathBuf {
        self.input_dir.join(input_file_name(version))
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Validate the version list.
    ///
    /// An out-of-order list is accepted as given but logged, since the
    /// generator never reorders versions.
    pub fn validate(&self) -> Result<()> {
        if self.versions.is_empty() {
            return Err(SplitterError::NoVersions);
        }
        for version in &self.versions {
            validate_version(version)?;
        }
        if !is_ascending(self.versions.as_slice()) {
            tracing::warn!(
                versions = ?self.versions,
                "SDK versions are not in ascending order; older headers may overwrite newer ones"
            );
        }
        Ok(())
    }
}
