// Infrastructure implementations for JavaLens.

pub mod concurrency;
pub mod java_parser;
pub mod project_loader;
pub mod renderer;

pub use java_parser::TreeSitterJavaParser;
pub use project_loader::ProjectLoader;
pub use renderer::PlantUmlRenderer;
