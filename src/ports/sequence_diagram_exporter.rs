//! Sequence Diagram Exporter
//!
//! Serializes an InteractionTrace as PlantUML sequence-diagram text.
//! Participant declarations are sorted lexicographically so they stay stable
//! regardless of trace order; the interaction lines themselves follow trace
//! order exactly.

use crate::domain::diagram::{DiagramDocument, DiagramKind};
use crate::domain::error::AnalyzerError;
use crate::domain::interaction::InteractionTrace;
use std::collections::BTreeSet;

const STYLE_PREAMBLE: &[&str] = &[
    "@startuml",
    "skinparam sequenceMessageAlign center",
    "skinparam responseMessageBelowArrow true",
    "skinparam maxMessageSize 100",
    "skinparam sequence {",
    "    ArrowColor DeepSkyBlue",
    "    LifeLineBorderColor blue",
    "    ParticipantBorderColor DarkBlue",
    "    ParticipantBackgroundColor LightBlue",
    "    ParticipantFontStyle bold",
    "}",
];

pub struct SequenceDiagramExporter;

impl SequenceDiagramExporter {
    /// Convert an InteractionTrace to a PlantUML document. A trace with zero
    /// events fails with `EmptyTrace`; there is nothing to draw.
    pub fn to_plantuml(trace: &InteractionTrace) -> Result<DiagramDocument, AnalyzerError> {
        if trace.events.is_empty() {
            return Err(AnalyzerError::EmptyTrace {
                class: trace.root_class.clone(),
                method: trace.root_method.clone(),
            });
        }

        let mut lines: Vec<String> = STYLE_PREAMBLE.iter().map(|s| s.to_string()).collect();

        // BTreeSet gives the sorted, duplicate-free participant union.
        let mut participants = BTreeSet::new();
        for event in &trace.events {
            participants.insert(event.source.as_str());
            participants.insert(event.target.as_str());
        }
        for participant in participants {
            lines.push(format!("participant \"{0}\" as {0}", participant));
        }

        for event in &trace.events {
            let args = if event.arguments.is_empty() {
                String::new()
            } else {
                format!("({})", event.arguments.join(", "))
            };
            lines.push(format!(
                "{} -> {}: {}{}",
                event.source, event.target, event.message, args
            ));
        }

        lines.push("@enduml".to_string());
        Ok(DiagramDocument::new(
            DiagramKind::Behavioral,
            lines.join("\n"),
        ))
    }
}
