//! PlantUML Renderer Adapter
//!
//! Invokes a local PlantUML jar to turn diagram text into PNG bytes. The jar
//! is located (or rejected) at construction time; rendering itself is a
//! blocking external process call whose failures carry the raw diagnostic
//! and are never retried.

use crate::domain::diagram::DiagramDocument;
use crate::domain::error::AnalyzerError;
use crate::ports::DiagramRenderer;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug)]
pub struct PlantUmlRenderer {
    jar: PathBuf,
}

impl PlantUmlRenderer {
    /// Locate-or-fail capability check: the jar must already exist. Fetching
    /// it is the operator's concern, not this adapter's.
    pub fn new(jar: impl AsRef<Path>) -> Result<Self, AnalyzerError> {
        let jar = jar.as_ref().to_path_buf();
        if !jar.is_file() {
            return Err(AnalyzerError::Render {
                diagnostic: format!("PlantUML jar not found at {}", jar.display()),
            });
        }
        Ok(Self { jar })
    }
}

impl DiagramRenderer for PlantUmlRenderer {
    fn render(&self, document: &DiagramDocument) -> Result<Vec<u8>, AnalyzerError> {
        let dir = tempfile::tempdir().map_err(|e| AnalyzerError::Render {
            diagnostic: format!("failed to create temp dir: {}", e),
        })?;

        let stem = document.kind().file_stem();
        let puml = dir.path().join(format!("{}.puml", stem));
        let png = dir.path().join(format!("{}.png", stem));

        fs::write(&puml, document.text()).map_err(|e| AnalyzerError::Render {
            diagnostic: format!("failed to write diagram text: {}", e),
        })?;

        log::info!("Running PlantUML on {}", puml.display());
        let output = Command::new("java")
            .arg("-jar")
            .arg(&self.jar)
            .arg("-tpng")
            .arg(&puml)
            .output()
            .map_err(|e| AnalyzerError::Render {
                diagnostic: format!("failed to run java: {}", e),
            })?;

        if !output.status.success() || !png.is_file() {
            return Err(AnalyzerError::Render {
                diagnostic: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        fs::read(&png).map_err(|e| AnalyzerError::Render {
            diagnostic: format!("failed to read rendered PNG: {}", e),
        })
    }
}
