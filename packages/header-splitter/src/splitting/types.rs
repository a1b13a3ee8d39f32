//! Types for the header splitting system.

/// How a single input line is treated by the splitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `// <name>.h`: starts a new plain interface.
    InterfaceStart(&'a str),

    /// `..._Version = "<name>";`: marks the open block as versioned.
    VersionTag(&'a str),

    /// Exactly `namespace vr`.
    NamespaceOpen,

    /// Include-guard artifact, dropped.
    Guard,

    /// Anything else, copied verbatim.
    Body,
}

/// Whether an interface shares the `vr` namespace or gets its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterfaceKind {
    /// Lives in `namespace vr` and can be included by later interfaces.
    Plain,

    /// Lives in `namespace vr { namespace <name>` with `vr::` stripped.
    Versioned,
}

impl InterfaceKind {
    #[must_use]
    pub fn is_versioned(self) -> bool {
        matches!(self, Self::Versioned)
    }
}

/// A piece of an interface body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Raw text, including its line terminator.
    Text(String),

    /// Where `namespace vr` stood. Expanded at render time, once the
    /// interface kind is known.
    NamespaceOpen,
}

/// One interface, fully scanned and ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceBlock {
    /// Output name without extension (e.g. `IVRSystem_019`).
    pub name: String,

    pub kind: InterfaceKind,

    /// Importable plain interfaces recorded before this block started, in order.
    pub imports: Vec<String>,

    pub body: Vec<Segment>,

    /// Line terminator of the interface comment, reused for generated lines.
    pub newline: &'static str,
}

impl InterfaceBlock {
    /// Create an empty plain block.
    #[must_use]
    pub fn new(name: impl Into<String>, imports: Vec<String>) -> Self {
        Self {
            name: name.into(),
            kind: InterfaceKind::Plain,
            imports,
            body: Vec::new(),
            newline: "\n",
        }
    }

    /// Set the line terminator for generated lines.
    #[must_use]
    pub fn with_newline(mut self, newline: &'static str) -> Self {
        self.newline = newline;
        self
    }

    /// Append a line of body text.
    pub fn push_text(&mut self, line: impl Into<String>) {
        self.body.push(Segment::Text(line.into()));
    }

    /// Append the namespace-open marker.
    pub fn push_namespace_open(&mut self) {
        self.body.push(Segment::NamespaceOpen);
    }

    /// Reclassify this block as a versioned interface with a new name.
    pub fn mark_versioned(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.kind = InterfaceKind::Versioned;
    }
}
