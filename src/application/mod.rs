//! Application usecases wiring ports to domain logic. Each call receives its
//! own input and returns its own immutable document; nothing is cached or
//! shared across requests.

use rayon::prelude::*;

use crate::domain::callgraph::CallGraph;
use crate::domain::class_model::{ClassDescriptor, StructuralModel};
use crate::domain::diagram::{DiagramDocument, DiagramKind};
use crate::domain::error::AnalyzerError;
use crate::domain::interaction::TraceExtractor;
use crate::domain::syntax::SourceTree;
use crate::ports::callgraph_exporter::CallGraphExporter;
use crate::ports::class_diagram_exporter::ClassDiagramExporter;
use crate::ports::sequence_diagram_exporter::SequenceDiagramExporter;
use crate::ports::{SourceFile, SourceParser};

/// Parse a batch of files in parallel, preserving input order. Files the
/// collaborator cannot parse are logged and skipped; the batch continues.
fn parse_batch(parser: &dyn SourceParser, files: &[SourceFile]) -> Vec<SourceTree> {
    files
        .par_iter()
        .map(|file| parser.parse(&file.path, &file.code))
        .collect::<Vec<_>>()
        .into_iter()
        .zip(files)
        .filter_map(|(result, file)| match result {
            Ok(tree) => Some(tree),
            Err(e) => {
                log::warn!("Skipping {}: {}", file.path, e);
                None
            }
        })
        .collect()
}

/// Builds one class diagram from a batch of source files.
pub struct ClassDiagramUsecase<'a> {
    pub parser: &'a dyn SourceParser,
}

impl<'a> ClassDiagramUsecase<'a> {
    /// Parse every file, build the structural model, synthesize the diagram.
    pub fn run(&self, files: &[SourceFile]) -> DiagramDocument {
        let model = self.build_model(files);
        ClassDiagramExporter::to_plantuml(&model)
    }

    pub fn build_model(&self, files: &[SourceFile]) -> StructuralModel {
        let descriptors: Vec<ClassDescriptor> = parse_batch(self.parser, files)
            .iter()
            .flat_map(|tree| tree.classes.iter().map(ClassDescriptor::from))
            .collect();
        StructuralModel::build(&descriptors)
    }
}

/// Builds one sequence diagram for a chosen entry method in one file.
pub struct SequenceDiagramUsecase<'a> {
    pub parser: &'a dyn SourceParser,
    pub extractor: TraceExtractor,
}

impl<'a> SequenceDiagramUsecase<'a> {
    pub fn new(parser: &'a dyn SourceParser) -> Self {
        Self {
            parser,
            extractor: TraceExtractor::default(),
        }
    }

    pub fn run(&self, file: &SourceFile, method: &str) -> Result<DiagramDocument, AnalyzerError> {
        let tree = self.parser.parse(&file.path, &file.code)?;
        let trace = self.extractor.extract(&tree, method)?;
        SequenceDiagramExporter::to_plantuml(&trace)
    }
}

/// Builds one whole-corpus call graph document.
pub struct CallGraphUsecase<'a> {
    pub parser: &'a dyn SourceParser,
}

impl<'a> CallGraphUsecase<'a> {
    pub fn run(&self, files: &[SourceFile]) -> DiagramDocument {
        let mut merged = SourceTree::default();
        for tree in parse_batch(self.parser, files) {
            merged.classes.extend(tree.classes);
        }
        let graph = CallGraph::from_tree(&merged);
        DiagramDocument::new(DiagramKind::CallGraph, CallGraphExporter::to_dot(&graph))
    }
}
