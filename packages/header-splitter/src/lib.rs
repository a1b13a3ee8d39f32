//! OpenVR Header Splitter - Split versioned SDK headers into per-interface headers.
//!
//! Each `openvr-<version>.h` from the OpenVR SDK is cut into one header per
//! interface. Plain interfaces share `namespace vr` and are included by
//! every interface that follows them; versioned interfaces (those carrying a
//! `_Version = "<name>";` string) get their own `vr::<name>` namespace.
//!
//! # Example
//!
//! ```
//! use openvr_header_splitter::output::render_interface;
//! use openvr_header_splitter::splitting::{HeaderSplitter, InterfaceBlock};
//!
//! let header = "// vrtypes.h\nnamespace vr\n{\n}\n";
//! let mut blocks: Vec<InterfaceBlock> = Vec::new();
//! HeaderSplitter::new().split_str(header, &mut blocks).unwrap();
//!
//! assert_eq!(blocks[0].name, "vrtypes");
//! assert!(render_interface(&blocks[0]).starts_with("#pragma once\n"));
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Constants, version validation and run configuration
//! - [`error`]: Error types and Result alias
//! - [`splitting`]: Line classification and the splitting state machine
//! - [`output`]: Rendering and writing of interface headers
//! - [`generator`]: Main driver over all SDK versions
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod output;
pub mod splitting;

// Re-export main functions
pub use generator::{generate_interfaces, GenerationReport, VersionReport};

// Re-export commonly used items
pub use config::{validate_version, GeneratorConfig};
pub use error::{Result, SplitterError};
pub use splitting::{HeaderSplitter, InterfaceBlock, InterfaceKind, InterfaceSink};
