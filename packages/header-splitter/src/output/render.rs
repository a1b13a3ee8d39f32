//! Rendering of interface blocks to header text.

use crate::config::{
    interface_file_name, CLOSE_NAMESPACE_LINE, NAMESPACE_LINE, PRAGMA_ONCE, VR_QUALIFIER,
};
use crate::splitting::{InterfaceBlock, Segment};

/// Render a block to the text of its header file.
///
/// The output starts with `#pragma once` and one include per previously
/// emitted plain interface. A plain block keeps its `namespace vr` opening.
/// A versioned block opens `namespace vr { namespace <name>`, loses every
/// `vr::` qualifier and gets a closing brace line at the very end.
///
/// Generated lines use the block's line terminator, so CRLF input stays CRLF.
pub fn render_interface(block: &InterfaceBlock) -> String {
    let versioned = block.kind.is_versioned();
    let nl = block.newline;
    let mut out = format!("{PRAGMA_ONCE}{nl}");

    for import in block.imports.iter().filter(|name| **name != block.name) {
        out.push_str(&format!("#include \"{}\"{nl}", interface_file_name(import)));
    }

    for segment in &block.body {
        match segment {
            Segment::Text(text) if versioned => out.push_str(&text.replace(VR_QUALIFIER, "")),
            Segment::Text(text) => out.push_str(text),
            Segment::NamespaceOpen if versioned => {
                out.push_str(&format!("{NAMESPACE_LINE}{nl}{{{nl}namespace {}{nl}", block.name));
            }
            Segment::NamespaceOpen => out.push_str(&format!("{NAMESPACE_LINE}{nl}")),
        }
    }

    if versioned {
        out.push_str(&format!("{CLOSE_NAMESPACE_LINE}{nl}"));
    }

    out
}
