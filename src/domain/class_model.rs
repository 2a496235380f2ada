//! Structural Class Model
//!
//! Groups parsed class descriptors by package and derives the relationship
//! edges and display policies a class diagram renders.

use crate::domain::syntax::ClassDecl;

pub const DEFAULT_PACKAGE: &str = "default";

/// The pre-parsed structural record for one class, as supplied by the
/// parser adapter. The builder only reads it.
#[derive(Debug, Clone)]
pub struct ClassDescriptor {
    pub name: String,
    /// Declaring package; files without a package declaration land in the
    /// "default" bucket.
    pub package: String,
    pub is_interface: bool,
    pub is_abstract: bool,
    /// Raw field declaration strings, declared order.
    pub fields: Vec<String>,
    /// Raw method declaration strings, declared order.
    pub methods: Vec<String>,
    pub extends: Option<String>,
    pub implements: Vec<String>,
    pub description: Option<String>,
}

impl ClassDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: DEFAULT_PACKAGE.to_string(),
            is_interface: false,
            is_abstract: false,
            fields: Vec::new(),
            methods: Vec::new(),
            extends: None,
            implements: Vec::new(),
            description: None,
        }
    }

    /// Stereotype tags in rendering order: `interface` before `abstract`.
    pub fn stereotypes(&self) -> Vec<&'static str> {
        let mut tags = Vec::new();
        if self.is_interface {
            tags.push("interface");
        }
        if self.is_abstract {
            tags.push("abstract");
        }
        tags
    }
}

impl From<&ClassDecl> for ClassDescriptor {
    fn from(decl: &ClassDecl) -> Self {
        Self {
            name: decl.name.clone(),
            package: decl
                .package
                .clone()
                .unwrap_or_else(|| DEFAULT_PACKAGE.to_string()),
            is_interface: decl.is_interface,
            is_abstract: decl.is_abstract,
            fields: decl.fields.clone(),
            methods: decl.methods.iter().map(|m| m.rendered.clone()).collect(),
            extends: decl.extends.clone(),
            implements: decl.implements.clone(),
            description: None,
        }
    }
}

/// Member visibility as derived by the textual policy below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Other,
}

impl Visibility {
    pub fn marker(self) -> char {
        match self {
            Visibility::Public => '+',
            Visibility::Other => '-',
        }
    }
}

/// Textual visibility heuristic over an already-rendered declaration string:
/// a case-insensitive `public` substring means public, anything else does
/// not. This is not semantic analysis; it is the documented policy and can
/// be swapped out if descriptors ever carry a real modifier field.
pub fn derive_visibility(text: &str) -> Visibility {
    if text.to_lowercase().contains("public") {
        Visibility::Public
    } else {
        Visibility::Other
    }
}

/// Reduce a raw declaration string to its member name for display, keeping
/// the parameter list for methods: "private int id" -> "id",
/// "public void ship()" -> "ship()".
pub fn member_display(text: &str) -> String {
    let text = text.trim().trim_end_matches(';').trim();
    match text.find('(') {
        Some(paren) => {
            let (head, params) = text.split_at(paren);
            let name = head.split_whitespace().last().unwrap_or(head);
            format!("{}{}", name, params)
        }
        None => text
            .split_whitespace()
            .last()
            .unwrap_or(text)
            .to_string(),
    }
}

/// Relationship edge kinds between classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
    Extends,
    Implements,
}

/// One relationship edge. `from` is always declared in the model; `to` may
/// name an external supertype that never appears as a class of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    pub from: String,
    pub kind: RelationKind,
    pub to: String,
}

/// Classes of one package, input order preserved.
#[derive(Debug, Clone)]
pub struct PackageGroup {
    pub name: String,
    pub classes: Vec<ClassDescriptor>,
}

/// The grouped, relationship-annotated structural model.
#[derive(Debug, Clone)]
pub struct StructuralModel {
    /// Packages in first-seen order.
    pub packages: Vec<PackageGroup>,
    /// Edges in descriptor order: extends first, then implements entries in
    /// their declared order, per class.
    pub relations: Vec<Relation>,
}

impl StructuralModel {
    /// Build the model from descriptors. Total over any well-formed input;
    /// there are no failure modes.
    pub fn build(descriptors: &[ClassDescriptor]) -> Self {
        let mut packages: Vec<PackageGroup> = Vec::new();
        let mut relations = Vec::new();

        for descriptor in descriptors {
            match packages.iter_mut().find(|p| p.name == descriptor.package) {
                Some(group) => group.classes.push(descriptor.clone()),
                None => packages.push(PackageGroup {
                    name: descriptor.package.clone(),
                    classes: vec![descriptor.clone()],
                }),
            }

            if let Some(parent) = &descriptor.extends {
                relations.push(Relation {
                    from: descriptor.name.clone(),
                    kind: RelationKind::Extends,
                    to: parent.clone(),
                });
            }
            for interface in &descriptor.implements {
                relations.push(Relation {
                    from: descriptor.name.clone(),
                    kind: RelationKind::Implements,
                    to: interface.clone(),
                });
            }
        }

        Self {
            packages,
            relations,
        }
    }

    pub fn class_count(&self) -> usize {
        self.packages.iter().map(|p| p.classes.len()).sum()
    }
}
