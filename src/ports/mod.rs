use crate::domain::diagram::DiagramDocument;
use crate::domain::error::AnalyzerError;
use crate::domain::syntax::SourceTree;

pub mod callgraph_exporter;
pub mod class_diagram_exporter;
pub mod sequence_diagram_exporter;

/// One source file queued for analysis.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: String,
    pub code: String,
}

/// The external parsing collaborator. Returns a lowered tree or fails with
/// a syntax error attributed to the given file.
pub trait SourceParser: Sync {
    fn parse(&self, file: &str, code: &str) -> Result<SourceTree, AnalyzerError>;
}

/// The external diagram-to-raster collaborator.
pub trait DiagramRenderer {
    fn render(&self, document: &DiagramDocument) -> Result<Vec<u8>, AnalyzerError>;
}
