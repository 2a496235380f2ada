// Call graph structures for JavaLens.
// Represents method-to-method call relationships across a whole tree,
// resolved syntactically by invoked member name.

use crate::domain::syntax::{Expr, SourceTree};

/// A node in the call graph.
#[derive(Debug, Clone)]
pub struct CallGraphNode {
    /// Method identifier, `Class.method` for declared methods.
    pub id: String,
    /// Member names this method invokes, first-seen order, deduplicated.
    pub callees: Vec<String>,
}

/// The call graph itself.
#[derive(Debug, Clone, Default)]
pub struct CallGraph {
    pub nodes: Vec<CallGraphNode>,
}

impl CallGraph {
    /// Build the graph from every method body in the tree. Call targets are
    /// member names only; no overload or receiver resolution.
    pub fn from_tree(tree: &SourceTree) -> Self {
        let mut nodes = Vec::new();
        for class in &tree.classes {
            for method in &class.methods {
                let mut callees: Vec<String> = Vec::new();
                if let Some(body) = &method.body {
                    for expr in body {
                        collect_callees(expr, &mut callees);
                    }
                }
                nodes.push(CallGraphNode {
                    id: format!("{}.{}", class.name, method.name),
                    callees,
                });
            }
        }
        Self { nodes }
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.callees.len()).sum()
    }
}

fn collect_callees(expr: &Expr, out: &mut Vec<String>) {
    match expr {
        Expr::Invocation {
            member, arguments, ..
        } => {
            if !out.iter().any(|m| m == member) {
                out.push(member.clone());
            }
            for arg in arguments {
                collect_callees(arg, out);
            }
        }
        Expr::Other { children, .. } => {
            for child in children {
                collect_callees(child, out);
            }
        }
        Expr::Literal(_) | Expr::MemberRef(_) => {}
    }
}
