//! Header splitting system for OpenVR SDK headers.
//!
//! A header is scanned once, line by line. `// <name>.h` comments open a
//! new interface block, `_Version = "<name>";` assignments turn the open
//! block into a versioned interface, and `namespace vr` is kept as a typed
//! marker until the block is rendered.

mod classify;
mod engine;
mod types;

pub use classify::{classify_line, interface_marker, is_guard_line, line_ending, version_marker};
pub use engine::{HeaderSplitter, InterfaceSink};
pub use types::{InterfaceBlock, InterfaceKind, LineKind, Segment};
