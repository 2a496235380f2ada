//! Class Diagram Exporter
//!
//! Serializes a StructuralModel as PlantUML class-diagram text. Output is
//! deterministic: a fixed style preamble, then packages and classes in model
//! order, then relationship edges, then the closing token. Synthesizing the
//! same model twice yields byte-identical text.

use crate::domain::class_model::{
    derive_visibility, member_display, RelationKind, StructuralModel, DEFAULT_PACKAGE,
};
use crate::domain::diagram::{DiagramDocument, DiagramKind};
use std::io::Result;

const STYLE_PREAMBLE: &[&str] = &[
    "@startuml",
    "' Modern style configuration",
    "skinparam monochrome false",
    "skinparam shadowing false",
    "skinparam classAttributeIconSize 0",
    "skinparam classFontStyle bold",
    "skinparam classBackgroundColor LightBlue",
    "skinparam classBorderColor DarkBlue",
    "skinparam packageBackgroundColor White",
    "skinparam stereotypeCBackgroundColor LightYellow",
    "skinparam interfaceBackgroundColor LightGreen",
    "' Layout configuration",
    "skinparam linetype ortho",
    "left to right direction",
    "title Java Class Diagram",
];

pub struct ClassDiagramExporter;

impl ClassDiagramExporter {
    /// Export a StructuralModel to a PlantUML file.
    pub fn export(model: &StructuralModel, path: &str) -> Result<()> {
        let document = Self::to_plantuml(model);
        std::fs::write(path, document.text())
    }

    /// Convert a StructuralModel to a PlantUML document.
    pub fn to_plantuml(model: &StructuralModel) -> DiagramDocument {
        let mut lines: Vec<String> = STYLE_PREAMBLE.iter().map(|s| s.to_string()).collect();

        for package in &model.packages {
            let wrapped = package.name != DEFAULT_PACKAGE;
            if wrapped {
                lines.push(format!("package {} {{", package.name));
            }

            for class in &package.classes {
                let tags = class.stereotypes();
                let stereotype = if tags.is_empty() {
                    String::new()
                } else {
                    format!(" <<{}>>", tags.join(","))
                };
                lines.push(format!("class {}{} {{", class.name, stereotype));

                for field in &class.fields {
                    lines.push(format!(
                        "  {}{}",
                        derive_visibility(field).marker(),
                        member_display(field)
                    ));
                }

                if !class.methods.is_empty() {
                    lines.push(String::new());
                    for method in &class.methods {
                        lines.push(format!(
                            "  {}{}",
                            derive_visibility(method).marker(),
                            member_display(method)
                        ));
                    }
                }

                lines.push("}".to_string());

                if let Some(description) = &class.description {
                    lines.push(format!("note right of {}", class.name));
                    lines.push(format!("  {}", description));
                    lines.push("end note".to_string());
                }
            }

            if wrapped {
                lines.push("}".to_string());
            }
        }

        for relation in &model.relations {
            let arrow = match relation.kind {
                RelationKind::Extends => "--|>",
                RelationKind::Implements => "..|>",
            };
            lines.push(format!("{} {} {}", relation.from, arrow, relation.to));
        }

        lines.push("@enduml".to_string());
        DiagramDocument::new(DiagramKind::Structural, lines.join("\n"))
    }
}
