//! Interaction Trace Extraction
//!
//! Locates a target method by name and walks its body, producing the ordered
//! sequence of invocation events a sequence diagram renders.

use crate::domain::error::AnalyzerError;
use crate::domain::syntax::{Expr, SourceTree};

/// One observed invocation inside the traced method body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionEvent {
    /// Source actor (always the class declaring the traced method).
    pub source: String,
    /// Target actor: the invocation's verbatim qualifier, or the enclosing
    /// class when the call is unqualified. Qualifiers are not resolved; a
    /// local variable name and a class name are indistinguishable here.
    pub target: String,
    pub message: String,
    /// Best-effort textual rendering of each argument, declared order.
    pub arguments: Vec<String>,
}

/// The ordered result of walking one method body.
#[derive(Debug, Clone)]
pub struct InteractionTrace {
    pub root_class: String,
    pub root_method: String,
    /// Events in pre-order, left-to-right walk order. This order is the
    /// rendering order, not a sort key.
    pub events: Vec<InteractionEvent>,
}

impl InteractionTrace {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Walks a parsed tree and extracts the interaction trace for one method.
pub struct TraceExtractor {
    /// Upper bound on visited body nodes, guarding against pathological
    /// input trees. The walk stops quietly once exhausted.
    max_visits: usize,
}

impl Default for TraceExtractor {
    fn default() -> Self {
        Self {
            max_visits: 100_000,
        }
    }
}

impl TraceExtractor {
    pub fn new(max_visits: usize) -> Self {
        Self { max_visits }
    }

    /// Extract the trace for `method_name`.
    ///
    /// Classes and their methods are scanned in source order; the first
    /// matching class/method pair wins. Overloads and same-named methods in
    /// later classes are ignored by policy. A matched method without a body
    /// yields an empty trace, which is not an error.
    pub fn extract(
        &self,
        tree: &SourceTree,
        method_name: &str,
    ) -> Result<InteractionTrace, AnalyzerError> {
        for class in &tree.classes {
            // Interfaces are not scanned; only concrete class declarations
            // can anchor a trace.
            if class.is_interface {
                continue;
            }
            for method in &class.methods {
                if method.name == method_name {
                    let mut trace = InteractionTrace {
                        root_class: class.name.clone(),
                        root_method: method.name.clone(),
                        events: Vec::new(),
                    };
                    if let Some(body) = &method.body {
                        let mut visits = 0usize;
                        for expr in body {
                            self.walk(expr, &class.name, &mut trace.events, &mut visits);
                        }
                    }
                    return Ok(trace);
                }
            }
        }
        Err(AnalyzerError::MethodNotFound {
            method: method_name.to_string(),
        })
    }

    fn walk(
        &self,
        expr: &Expr,
        root_class: &str,
        events: &mut Vec<InteractionEvent>,
        visits: &mut usize,
    ) {
        if *visits >= self.max_visits {
            return;
        }
        *visits += 1;

        match expr {
            Expr::Invocation {
                qualifier,
                member,
                arguments,
                ..
            } => {
                let target = qualifier
                    .clone()
                    .unwrap_or_else(|| root_class.to_string());
                let rendered = arguments.iter().filter_map(render_argument).collect();
                events.push(InteractionEvent {
                    source: root_class.to_string(),
                    target,
                    message: member.clone(),
                    arguments: rendered,
                });
                // Nested invocations in argument position get their own
                // events, after the enclosing call (pre-order).
                for arg in arguments {
                    self.walk(arg, root_class, events, visits);
                }
            }
            Expr::Other { children, .. } => {
                for child in children {
                    self.walk(child, root_class, events, visits);
                }
            }
            Expr::Literal(_) | Expr::MemberRef(_) => {}
        }
    }
}

/// Render one argument expression: literal value, else referenced member
/// name, else raw source text. An unrenderable argument is dropped without
/// affecting the event.
fn render_argument(expr: &Expr) -> Option<String> {
    let text = match expr {
        Expr::Literal(value) => value,
        Expr::MemberRef(member) => member,
        Expr::Invocation { text, .. } => text,
        Expr::Other { text, .. } => text,
    };
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
