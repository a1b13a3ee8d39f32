//! Line classification for SDK headers.

use std::sync::LazyLock;

use regex::Regex;

use super::types::LineKind;
use crate::config::{GUARD_MARKERS, NAMESPACE_LINE};

/// Interface start comment: `// <name>.h` on a line of its own.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static INTERFACE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^// ([\w-]+)\.h$").expect("valid regex"));

/// Interface version assignment, e.g. `IVRSystem_Version = "IVRSystem_019";`.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static VERSION_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"_Version = "([\w-]+)";"#).expect("valid regex"));

/// Strip the line terminator (`\n` or `\r\n`).
fn trim_newline(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Line terminator used by a line, defaulting to `\n` for the final line.
pub fn line_ending(line: &str) -> &'static str {
    if line.ends_with("\r\n") {
        "\r\n"
    } else {
        "\n"
    }
}

/// Whether a line is an include-guard artifact.
pub fn is_guard_line(line: &str) -> bool {
    GUARD_MARKERS.iter().any(|marker| line.contains(marker))
}

/// Name captured by the interface start comment, if this line is one.
pub fn interface_marker(line: &str) -> Option<&str> {
    INTERFACE_MARKER
        .captures(trim_newline(line))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Name captured by a version assignment, if this line contains one.
pub fn version_marker(line: &str) -> Option<&str> {
    VERSION_MARKER
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Classify one input line.
///
/// The interface start comment is checked before the version assignment;
/// the two can never match the same line. Marker lines are reported as
/// markers even when they also contain a guard substring, so callers must
/// check [`is_guard_line`] before copying them.
pub fn classify_line(line: &str) -> LineKind<'_> {
    if let Some(name) = interface_marker(line) {
        return LineKind::InterfaceStart(name);
    }
    if let Some(name) = version_marker(line) {
        return LineKind::VersionTag(name);
    }

    if trim_newline(line) == NAMESPACE_LINE {
        LineKind::NamespaceOpen
    } else if is_guard_line(line) {
        LineKind::Guard
    } else {
        LineKind::Body
    }
}
