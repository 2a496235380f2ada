// Syntax tree data structures for JavaLens.
// These types represent parsed Java code in a form suitable for static analysis.
// The parser adapter owns the lowering from the third-party CST into this
// model, so everything downstream can be tested against hand-built fixtures.

/// A parsed compilation unit: every class declared in one source file,
/// in source order.
#[derive(Debug, Clone, Default)]
pub struct SourceTree {
    pub classes: Vec<ClassDecl>,
}

/// One class or interface declaration.
#[derive(Debug, Clone)]
pub struct ClassDecl {
    pub name: String,
    /// Package of the enclosing compilation unit, if declared.
    pub package: Option<String>,
    pub is_interface: bool,
    pub is_abstract: bool,
    pub extends: Option<String>,
    pub implements: Vec<String>,
    /// Raw field declaration text, declared order (e.g. "private int id").
    pub fields: Vec<String>,
    pub methods: Vec<MethodDecl>,
}

impl ClassDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: None,
            is_interface: false,
            is_abstract: false,
            extends: None,
            implements: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }
}

/// One method declaration inside a class.
#[derive(Debug, Clone)]
pub struct MethodDecl {
    pub name: String,
    /// Raw signature text (e.g. "public void ship()").
    pub rendered: String,
    /// Statement expressions of the body, source order. `None` for
    /// abstract/interface methods without a body.
    pub body: Option<Vec<Expr>>,
}

impl MethodDecl {
    pub fn new(name: impl Into<String>, rendered: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rendered: rendered.into(),
            body: None,
        }
    }

    pub fn with_body(mut self, body: Vec<Expr>) -> Self {
        self.body = Some(body);
        self
    }
}

/// A body expression, reduced to the shapes the trace extractor cares about.
/// Anything else is kept as `Other` with its raw text and lowered children,
/// so a pre-order walk still reaches invocations nested in control flow.
#[derive(Debug, Clone)]
pub enum Expr {
    /// A method invocation: `qualifier.member(arguments)`.
    Invocation {
        /// Verbatim qualifier text, if any. May name a class or a local
        /// variable; no resolution is attempted.
        qualifier: Option<String>,
        member: String,
        arguments: Vec<Expr>,
        /// Raw source text of the whole invocation, used as the textual
        /// fallback when this expression appears as an argument.
        text: String,
    },
    /// A literal value, rendered as written ("42", "\"hi\"", "true").
    Literal(String),
    /// A simple member or variable reference.
    MemberRef(String),
    /// Any other expression or statement shape.
    Other { text: String, children: Vec<Expr> },
}

impl Expr {
    pub fn invocation(
        qualifier: Option<&str>,
        member: &str,
        arguments: Vec<Expr>,
    ) -> Self {
        let text = match qualifier {
            Some(q) => format!("{}.{}(...)", q, member),
            None => format!("{}(...)", member),
        };
        Expr::Invocation {
            qualifier: qualifier.map(str::to_string),
            member: member.to_string(),
            arguments,
            text,
        }
    }
}
