// Diagram document types for JavaLens.

/// Which synthesis mode produced a document. Callers use this to name the
/// output artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagramKind {
    Structural,
    Behavioral,
    CallGraph,
}

impl DiagramKind {
    pub fn file_stem(self) -> &'static str {
        match self {
            DiagramKind::Structural => "class_diagram",
            DiagramKind::Behavioral => "sequence_diagram",
            DiagramKind::CallGraph => "call_graph",
        }
    }
}

/// An immutable diagram-description document. Constructed once per synthesis
/// call; byte-identical across repeated synthesis of the same input.
#[derive(Debug, Clone)]
pub struct DiagramDocument {
    kind: DiagramKind,
    text: String,
}

impl DiagramDocument {
    pub fn new(kind: DiagramKind, text: String) -> Self {
        Self { kind, text }
    }

    pub fn kind(&self) -> DiagramKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
