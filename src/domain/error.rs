// Analysis error kinds for JavaLens.
// Batch callers rely on these being distinct: a syntax error skips one file,
// a missing method fails one diagram request, an empty trace is "nothing to
// show" rather than bad input.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// The external parser could not parse one source file. Fatal for that
    /// file only; batch analysis skips it and continues.
    #[error("syntax error in {file}: {detail}")]
    SourceSyntax { file: String, detail: String },

    /// No declared method anywhere in the tree matched the requested name.
    #[error("method '{method}' not found in any class")]
    MethodNotFound { method: String },

    /// The method was located but its body contains no invocations, so there
    /// is nothing to draw. Distinct from `MethodNotFound` by contract.
    #[error("no interactions found in {class}.{method}")]
    EmptyTrace { class: String, method: String },

    /// The external renderer failed. Carries its raw diagnostic text and is
    /// never retried automatically.
    #[error("renderer failed: {diagnostic}")]
    Render { diagnostic: String },
}
