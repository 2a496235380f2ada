use crate::domain::class_model::{RelationKind, StructuralModel};
use crate::domain::interaction::InteractionTrace;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ModelDto {
    pub packages: Vec<PackageDto>,
    pub relations: Vec<RelationDto>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PackageDto {
    pub name: String,
    pub classes: Vec<ClassDto>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ClassDto {
    pub name: String,
    pub stereotypes: Vec<String>,
    pub fields: Vec<String>,
    pub methods: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RelationDto {
    pub from: String,
    pub to: String,
    pub kind: String,
}

impl From<&StructuralModel> for ModelDto {
    fn from(model: &StructuralModel) -> Self {
        let packages = model
            .packages
            .iter()
            .map(|package| PackageDto {
                name: package.name.clone(),
                classes: package
                    .classes
                    .iter()
                    .map(|class| ClassDto {
                        name: class.name.clone(),
                        stereotypes: class
                            .stereotypes()
                            .iter()
                            .map(|s| s.to_string())
                            .collect(),
                        fields: class.fields.clone(),
                        methods: class.methods.clone(),
                    })
                    .collect(),
            })
            .collect();

        let relations = model
            .relations
            .iter()
            .map(|relation| RelationDto {
                from: relation.from.clone(),
                to: relation.to.clone(),
                kind: match relation.kind {
                    RelationKind::Extends => "extends".to_string(),
                    RelationKind::Implements => "implements".to_string(),
                },
            })
            .collect();

        ModelDto {
            packages,
            relations,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TraceDto {
    pub root_class: String,
    pub root_method: String,
    pub events: Vec<EventDto>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EventDto {
    pub from: String,
    pub to: String,
    pub message: String,
    pub arguments: Vec<String>,
}

impl From<&InteractionTrace> for TraceDto {
    fn from(trace: &InteractionTrace) -> Self {
        TraceDto {
            root_class: trace.root_class.clone(),
            root_method: trace.root_method.clone(),
            events: trace
                .events
                .iter()
                .map(|event| EventDto {
                    from: event.source.clone(),
                    to: event.target.clone(),
                    message: event.message.clone(),
                    arguments: event.arguments.clone(),
                })
                .collect(),
        }
    }
}
