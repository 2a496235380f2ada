// Command-line entry point for JavaLens.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::Path;

use javalens::api::dto::{ModelDto, TraceDto};
use javalens::application::{CallGraphUsecase, ClassDiagramUsecase, SequenceDiagramUsecase};
use javalens::domain::diagram::DiagramDocument;
use javalens::domain::interaction::TraceExtractor;
use javalens::infrastructure::{concurrency, PlantUmlRenderer, ProjectLoader, TreeSitterJavaParser};
use javalens::ports::{DiagramRenderer, SourceFile, SourceParser};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a PlantUML class diagram from Java sources
    Class {
        /// Input source file path (can specify multiple)
        #[arg(short, long, required = false)]
        input: Vec<String>,

        /// Input source folder(s); test files are skipped
        #[arg(short = 'd', long, required = false)]
        folder: Vec<String>,

        /// Output file path
        #[arg(short, long)]
        output: String,

        /// Output format (puml, json)
        #[arg(short, long, default_value = "puml")]
        format: String,

        /// Also render a PNG next to the output using this PlantUML jar
        #[arg(long)]
        plantuml_jar: Option<String>,
    },

    /// Generate a PlantUML sequence diagram for one method
    Sequence {
        /// Input source file path
        #[arg(short, long)]
        input: String,

        /// Entry method name to trace
        #[arg(short, long)]
        method: String,

        /// Output file path
        #[arg(short, long)]
        output: String,

        /// Output format (puml, json)
        #[arg(short, long, default_value = "puml")]
        format: String,

        /// Also render a PNG next to the output using this PlantUML jar
        #[arg(long)]
        plantuml_jar: Option<String>,
    },

    /// Export the method call graph as Graphviz DOT
    Callgraph {
        /// Input source file path (can specify multiple)
        #[arg(short, long, required = false)]
        input: Vec<String>,

        /// Input source folder(s); test files are skipped
        #[arg(short = 'd', long, required = false)]
        folder: Vec<String>,

        /// Output file path
        #[arg(short, long)]
        output: String,
    },
}

fn gather_sources(inputs: &[String], folders: &[String]) -> Result<Vec<SourceFile>> {
    let mut sources = Vec::new();

    for input in inputs {
        let code = fs::read_to_string(input)
            .with_context(|| format!("Cannot read input file: {}", input))?;
        sources.push(SourceFile {
            path: input.clone(),
            code,
        });
    }

    for folder in folders {
        sources.extend(ProjectLoader::load_project(folder)?);
    }

    if sources.is_empty() {
        bail!("Please provide at least one --input <file> or --folder <dir>");
    }
    Ok(sources)
}

fn render_png(jar: &str, document: &DiagramDocument, output: &str) -> Result<()> {
    let renderer = PlantUmlRenderer::new(jar)?;
    let png = renderer.render(document)?;
    let png_path = Path::new(output).with_extension("png");
    fs::write(&png_path, png)
        .with_context(|| format!("Failed to write {}", png_path.display()))?;
    println!("Rendered PNG written to {}", png_path.display());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let parser = TreeSitterJavaParser;

    match &cli.command {
        Commands::Class {
            input,
            folder,
            output,
            format,
            plantuml_jar,
        } => {
            concurrency::init_thread_pool()?;
            let sources = gather_sources(input, folder)?;
            let usecase = ClassDiagramUsecase { parser: &parser };

            match format.as_str() {
                "json" => {
                    let model = usecase.build_model(&sources);
                    let dto = ModelDto::from(&model);
                    fs::write(output, serde_json::to_string_pretty(&dto)?)?;
                }
                "puml" => {
                    let document = usecase.run(&sources);
                    fs::write(output, document.text())?;
                    if let Some(jar) = plantuml_jar {
                        render_png(jar, &document, output)?;
                    }
                }
                other => bail!("Unsupported format: {}", other),
            }
            println!(
                "Class diagram for {} file(s) written to {} (format: {})",
                sources.len(),
                output,
                format
            );
        }

        Commands::Sequence {
            input,
            method,
            output,
            format,
            plantuml_jar,
        } => {
            let code = fs::read_to_string(input)
                .with_context(|| format!("Cannot read input file: {}", input))?;
            let source = SourceFile {
                path: input.clone(),
                code,
            };

            match format.as_str() {
                "json" => {
                    let tree = parser.parse(&source.path, &source.code)?;
                    let trace = TraceExtractor::default().extract(&tree, method)?;
                    let dto = TraceDto::from(&trace);
                    fs::write(output, serde_json::to_string_pretty(&dto)?)?;
                }
                "puml" => {
                    let usecase = SequenceDiagramUsecase::new(&parser);
                    let document = usecase.run(&source, method)?;
                    fs::write(output, document.text())?;
                    if let Some(jar) = plantuml_jar {
                        render_png(jar, &document, output)?;
                    }
                }
                other => bail!("Unsupported format: {}", other),
            }
            println!(
                "Sequence diagram for '{}' written to {} (format: {})",
                method, output, format
            );
        }

        Commands::Callgraph {
            input,
            folder,
            output,
        } => {
            concurrency::init_thread_pool()?;
            let sources = gather_sources(input, folder)?;
            let usecase = CallGraphUsecase { parser: &parser };
            let document = usecase.run(&sources);
            fs::write(output, document.text())?;
            println!("Call graph written to {} (format: dot)", output);
        }
    }

    Ok(())
}
