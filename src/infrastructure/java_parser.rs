//! Tree-sitter Java Parser Adapter
//!
//! Lowers a tree-sitter-java CST into the owned `SourceTree` model. The CST
//! is externally owned and read-only; nothing downstream ever touches a
//! tree-sitter node, so the domain stays testable against hand-built trees.

use crate::domain::error::AnalyzerError;
use crate::domain::syntax::{ClassDecl, Expr, MethodDecl, SourceTree};
use crate::ports::SourceParser;
use tree_sitter::{Node, Parser};

pub struct TreeSitterJavaParser;

impl SourceParser for TreeSitterJavaParser {
    fn parse(&self, file: &str, code: &str) -> Result<SourceTree, AnalyzerError> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_java::LANGUAGE.into())
            .map_err(|e| AnalyzerError::SourceSyntax {
                file: file.to_string(),
                detail: format!("failed to load Java grammar: {}", e),
            })?;

        let tree = parser
            .parse(code, None)
            .ok_or_else(|| AnalyzerError::SourceSyntax {
                file: file.to_string(),
                detail: "parser produced no tree".to_string(),
            })?;

        let root = tree.root_node();
        if root.has_error() {
            return Err(AnalyzerError::SourceSyntax {
                file: file.to_string(),
                detail: "invalid Java syntax".to_string(),
            });
        }

        let package = find_package(root, code);
        let mut classes = Vec::new();
        collect_classes(root, code, package.as_deref(), &mut classes);
        Ok(SourceTree { classes })
    }
}

fn node_text<'a>(node: Node, code: &'a str) -> &'a str {
    node.utf8_text(code.as_bytes()).unwrap_or("")
}

fn collapse_ws(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn find_package(root: Node, code: &str) -> Option<String> {
    let mut cursor = root.walk();
    for child in root.named_children(&mut cursor) {
        if child.kind() == "package_declaration" {
            let mut inner = child.walk();
            for part in child.named_children(&mut inner) {
                if matches!(part.kind(), "identifier" | "scoped_identifier") {
                    return Some(node_text(part, code).to_string());
                }
            }
        }
    }
    None
}

/// Collect class and interface declarations in source order, recursing so
/// nested types are seen too.
fn collect_classes(node: Node, code: &str, package: Option<&str>, out: &mut Vec<ClassDecl>) {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        match child.kind() {
            "class_declaration" | "interface_declaration" => {
                out.push(lower_class(child, code, package));
                if let Some(body) = child.child_by_field_name("body") {
                    collect_classes(body, code, package, out);
                }
            }
            _ => collect_classes(child, code, package, out),
        }
    }
}

fn lower_class(node: Node, code: &str, package: Option<&str>) -> ClassDecl {
    let name = node
        .child_by_field_name("name")
        .map(|n| node_text(n, code).to_string())
        .unwrap_or_default();

    let mut class = ClassDecl::new(name);
    class.package = package.map(str::to_string);
    class.is_interface = node.kind() == "interface_declaration";

    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        match child.kind() {
            "modifiers" => {
                class.is_abstract = node_text(child, code)
                    .split_whitespace()
                    .any(|m| m == "abstract");
            }
            // `extends Base` on a class.
            "superclass" => {
                let mut inner = child.walk();
                if let Some(ty) = child.named_children(&mut inner).next() {
                    class.extends = Some(node_text(ty, code).to_string());
                };
            }
            // `implements A, B` on a class; `extends A, B` on an interface
            // is recorded in the same list.
            "super_interfaces" | "extends_interfaces" => {
                collect_type_list(child, code, &mut class.implements);
            }
            _ => {}
        }
    }

    if let Some(body) = node.child_by_field_name("body") {
        let mut inner = body.walk();
        for member in body.named_children(&mut inner) {
            match member.kind() {
                "field_declaration" | "constant_declaration" => {
                    let text = node_text(member, code).trim_end_matches(';').trim();
                    class.fields.push(collapse_ws(text));
                }
                "method_declaration" | "constructor_declaration" => {
                    class.methods.push(lower_method(member, code));
                }
                _ => {}
            }
        }
    }

    class
}

fn collect_type_list(node: Node, code: &str, out: &mut Vec<String>) {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if child.kind() == "type_list" {
            let mut inner = child.walk();
            for ty in child.named_children(&mut inner) {
                out.push(node_text(ty, code).to_string());
            }
        }
    }
}

fn lower_method(node: Node, code: &str) -> MethodDecl {
    let name = node
        .child_by_field_name("name")
        .map(|n| node_text(n, code).to_string())
        .unwrap_or_default();

    let body = node.child_by_field_name("body");

    // Signature text is everything up to the body, or the whole declaration
    // for abstract/interface methods.
    let sig_end = body.map(|b| b.start_byte()).unwrap_or_else(|| node.end_byte());
    let rendered = collapse_ws(
        code[node.start_byte()..sig_end]
            .trim()
            .trim_end_matches(';'),
    );

    let mut method = MethodDecl::new(name, rendered);
    if let Some(block) = body {
        let mut statements = Vec::new();
        let mut cursor = block.walk();
        for statement in block.named_children(&mut cursor) {
            statements.push(lower_expr(statement, code));
        }
        method.body = Some(statements);
    }
    method
}

/// Lower one expression or statement node. Invocations, literals and simple
/// references are recognized; everything else keeps its raw text plus its
/// lowered children so a pre-order walk still reaches nested calls.
fn lower_expr(node: Node, code: &str) -> Expr {
    match node.kind() {
        "method_invocation" => {
            let qualifier = node
                .child_by_field_name("object")
                .map(|o| node_text(o, code).to_string());
            let member = node
                .child_by_field_name("name")
                .map(|n| node_text(n, code).to_string())
                .unwrap_or_default();
            let mut arguments = Vec::new();
            if let Some(args) = node.child_by_field_name("arguments") {
                let mut cursor = args.walk();
                for arg in args.named_children(&mut cursor) {
                    arguments.push(lower_expr(arg, code));
                }
            }
            Expr::Invocation {
                qualifier,
                member,
                arguments,
                text: node_text(node, code).to_string(),
            }
        }
        "decimal_integer_literal"
        | "hex_integer_literal"
        | "octal_integer_literal"
        | "binary_integer_literal"
        | "decimal_floating_point_literal"
        | "hex_floating_point_literal"
        | "string_literal"
        | "character_literal"
        | "true"
        | "false"
        | "null_literal" => Expr::Literal(node_text(node, code).to_string()),
        "identifier" => Expr::MemberRef(node_text(node, code).to_string()),
        "field_access" => {
            let member = node
                .child_by_field_name("field")
                .map(|f| node_text(f, code))
                .unwrap_or_else(|| node_text(node, code));
            Expr::MemberRef(member.to_string())
        }
        _ => {
            let mut children = Vec::new();
            let mut cursor = node.walk();
            for child in node.named_children(&mut cursor) {
                children.push(lower_expr(child, code));
            }
            Expr::Other {
                text: node_text(node, code).to_string(),
                children,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        package com.shop;

        public class Order extends Base implements Shippable, Auditable {
            private int id;
            public String name;

            public void ship() {
                validate();
                courier.dispatch(id, "express");
            }
        }
    "#;

    #[test]
    fn lowers_class_shape() {
        let tree = TreeSitterJavaParser.parse("Order.java", SAMPLE).unwrap();
        assert_eq!(tree.classes.len(), 1);
        let class = &tree.classes[0];
        assert_eq!(class.name, "Order");
        assert_eq!(class.package.as_deref(), Some("com.shop"));
        assert_eq!(class.extends.as_deref(), Some("Base"));
        assert_eq!(class.implements, vec!["Shippable", "Auditable"]);
        assert_eq!(class.fields, vec!["private int id", "public String name"]);
        assert_eq!(class.methods.len(), 1);
        assert_eq!(class.methods[0].name, "ship");
        assert_eq!(class.methods[0].rendered, "public void ship()");
    }

    #[test]
    fn lowers_invocations_with_qualifiers_and_arguments() {
        let tree = TreeSitterJavaParser.parse("Order.java", SAMPLE).unwrap();
        let body = tree.classes[0].methods[0].body.as_ref().unwrap();

        let mut invocations = Vec::new();
        fn collect(expr: &Expr, out: &mut Vec<(Option<String>, String, usize)>) {
            match expr {
                Expr::Invocation {
                    qualifier,
                    member,
                    arguments,
                    ..
                } => {
                    out.push((qualifier.clone(), member.clone(), arguments.len()));
                    for arg in arguments {
                        collect(arg, out);
                    }
                }
                Expr::Other { children, .. } => {
                    for child in children {
                        collect(child, out);
                    }
                }
                _ => {}
            }
        }
        for statement in body {
            collect(statement, &mut invocations);
        }

        assert_eq!(
            invocations,
            vec![
                (None, "validate".to_string(), 0),
                (Some("courier".to_string()), "dispatch".to_string(), 2),
            ]
        );
    }

    #[test]
    fn abstract_and_interface_modifiers_are_detected() {
        let code = r#"
            public interface Repo {
                void save();
            }

            public abstract class BaseRepo implements Repo {
                public void save() {}
            }
        "#;
        let tree = TreeSitterJavaParser.parse("Repo.java", code).unwrap();
        assert_eq!(tree.classes.len(), 2);
        assert!(tree.classes[0].is_interface);
        assert!(tree.classes[0].methods[0].body.is_none());
        assert!(tree.classes[1].is_abstract);
        assert_eq!(tree.classes[1].implements, vec!["Repo"]);
    }

    #[test]
    fn broken_source_is_a_syntax_error() {
        let err = TreeSitterJavaParser
            .parse("Broken.java", "public class {{{")
            .unwrap_err();
        match err {
            AnalyzerError::SourceSyntax { file, .. } => assert_eq!(file, "Broken.java"),
            other => panic!("expected SourceSyntax, got {:?}", other),
        }
    }
}
