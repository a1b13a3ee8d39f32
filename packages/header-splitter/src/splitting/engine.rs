//! Split engine that turns one SDK header into interface blocks.

use std::io::BufRead;

use super::classify::{classify_line, is_guard_line, line_ending};
use super::types::{InterfaceBlock, LineKind};
use crate::error::Result;

/// Receiver for completed interface blocks.
///
/// Blocks arrive in input order; a sink that writes files must overwrite
/// existing ones so later versions win.
pub trait InterfaceSink {
    /// Accept one fully scanned interface.
    fn emit(&mut self, block: InterfaceBlock) -> Result<()>;
}

impl InterfaceSink for Vec<InterfaceBlock> {
    fn emit(&mut self, block: InterfaceBlock) -> Result<()> {
        self.push(block);
        Ok(())
    }
}

/// Splits SDK headers into per-interface blocks.
///
/// One splitter is used for a whole run: the list of importable plain
/// interfaces carries over from one input header to the next, while the
/// in-progress block is local to each [`split`](Self::split) call.
///
/// A plain interface becomes importable when the next interface comment is
/// seen. The last interface of a header is written but never recorded.
#[derive(Debug, Default)]
pub struct HeaderSplitter {
    imports: Vec<String>,
}

impl HeaderSplitter {
    /// Create a splitter with an empty import list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Importable plain interfaces so far, in emission order.
    #[must_use]
    pub fn imports(&self) -> &[String] {
        &self.imports
    }

    /// Split one header, emitting every interface it declares to `sink`.
    ///
    /// Returns the number of interfaces emitted. Read failures surface as
    /// [`SplitterError::Io`](crate::error::SplitterError::Io); sink errors
    /// are passed through unchanged.
    pub fn split<R: BufRead, S: InterfaceSink + ?Sized>(
        &mut self,
        mut reader: R,
        sink: &mut S,
    ) -> Result<usize> {
        let mut current: Option<InterfaceBlock> = None;
        let mut emitted = 0;
        let mut discarded = 0;
        let mut line = String::new();

        while reader.read_line(&mut line)? > 0 {
            match classify_line(&line) {
                LineKind::InterfaceStart(name) => {
                    if let Some(previous) = current.take() {
                        if let Some(import) = Self::emit(previous, sink)? {
                            self.record_import(import);
                        }
                        emitted += 1;
                    }
                    tracing::debug!(interface = %name, "Interface started");
                    let mut block = InterfaceBlock::new(name, self.imports.clone())
                        .with_newline(line_ending(&line));
                    if !is_guard_line(&line) {
                        block.push_text(line.as_str());
                    }
                    current = Some(block);
                }
                LineKind::VersionTag(name) => match current.as_mut() {
                    Some(block) => {
                        tracing::debug!(from = %block.name, to = %name, "Interface is versioned");
                        block.mark_versioned(name);
                        if !is_guard_line(&line) {
                            block.push_text(line.as_str());
                        }
                    }
                    None => {
                        tracing::debug!(interface = %name, "Version tag before any interface, ignoring");
                        discarded += 1;
                    }
                },
                LineKind::NamespaceOpen => match current.as_mut() {
                    Some(block) => block.push_namespace_open(),
                    None => discarded += 1,
                },
                LineKind::Guard => {}
                LineKind::Body => match current.as_mut() {
                    Some(block) => block.push_text(line.as_str()),
                    None => discarded += 1,
                },
            }
            line.clear();
        }

        if let Some(last) = current.take() {
            Self::emit(last, sink)?;
            emitted += 1;
        }

        if discarded > 0 {
            tracing::debug!(lines = discarded, "Discarded lines before the first interface");
        }

        Ok(emitted)
    }

    /// Split an in-memory header.
    pub fn split_str<S: InterfaceSink + ?Sized>(&mut self, text: &str, sink: &mut S) -> Result<usize> {
        self.split(text.as_bytes(), sink)
    }

    /// Hand a finished block to the sink.
    ///
    /// Returns the block's name if it is plain, so the caller can decide
    /// whether to record it as importable.
    fn emit<S: InterfaceSink + ?Sized>(block: InterfaceBlock, sink: &mut S) -> Result<Option<String>> {
        let import = (!block.kind.is_versioned()).then(|| block.name.clone());
        sink.emit(block)?;
        Ok(import)
    }

    fn record_import(&mut self, name: String) {
        if !self.imports.contains(&name) {
            self.imports.push(name);
        }
    }
}
