use javalens::application::SequenceDiagramUsecase;
use javalens::domain::error::AnalyzerError;
use javalens::domain::interaction::TraceExtractor;
use javalens::infrastructure::TreeSitterJavaParser;
use javalens::ports::{SourceFile, SourceParser};

fn file(path: &str, code: &str) -> SourceFile {
    SourceFile {
        path: path.to_string(),
        code: code.to_string(),
    }
}

const CONTROLLER: &str = r#"
    public class Controller {
        public void handle() {
            validate();
            repo.save(x);
        }
    }
"#;

#[test]
fn behavioral_document_matches_the_contract() {
    let parser = TreeSitterJavaParser;
    let usecase = SequenceDiagramUsecase::new(&parser);
    let document = usecase
        .run(&file("Controller.java", CONTROLLER), "handle")
        .unwrap();
    let text = document.text();

    // Participants are the sorted union of sources and targets.
    let participants: Vec<&str> = text
        .lines()
        .filter(|l| l.starts_with("participant"))
        .collect();
    assert_eq!(
        participants,
        vec![
            "participant \"Controller\" as Controller",
            "participant \"repo\" as repo",
        ]
    );

    // Interaction lines follow call order exactly.
    let validate = text.find("Controller -> Controller: validate").unwrap();
    let save = text.find("Controller -> repo: save(x)").unwrap();
    assert!(validate < save);
    assert!(text.ends_with("@enduml"));
}

#[test]
fn missing_method_fails_with_method_not_found() {
    let parser = TreeSitterJavaParser;
    let usecase = SequenceDiagramUsecase::new(&parser);
    let err = usecase
        .run(&file("Controller.java", CONTROLLER), "unknownMethod")
        .unwrap_err();
    assert!(matches!(err, AnalyzerError::MethodNotFound { .. }));
}

#[test]
fn empty_body_extracts_but_fails_synthesis_with_empty_trace() {
    let code = r#"
        public class Api {
            public void ping() {}
        }
    "#;
    let parser = TreeSitterJavaParser;

    // Extraction succeeds and returns an empty trace.
    let tree = parser.parse("Api.java", code).unwrap();
    let trace = TraceExtractor::default().extract(&tree, "ping").unwrap();
    assert!(trace.is_empty());

    // Behavioral synthesis reports the distinct EmptyTrace kind.
    let usecase = SequenceDiagramUsecase::new(&parser);
    let err = usecase.run(&file("Api.java", code), "ping").unwrap_err();
    assert!(matches!(err, AnalyzerError::EmptyTrace { .. }));
}

#[test]
fn first_declared_class_wins_for_duplicate_method_names() {
    let code = r#"
        class First {
            void process() { fromFirst(); }
        }
        class Second {
            void process() { fromSecond(); }
        }
    "#;
    let parser = TreeSitterJavaParser;
    let usecase = SequenceDiagramUsecase::new(&parser);
    let text = usecase
        .run(&file("Both.java", code), "process")
        .unwrap()
        .text()
        .to_string();

    assert!(text.contains("First -> First: fromFirst"));
    assert!(!text.contains("fromSecond"));
}

#[test]
fn literal_and_member_arguments_render_in_declared_order() {
    let code = r#"
        public class Billing {
            public void charge() {
                gateway.submit(amount, "USD", 3);
            }
        }
    "#;
    let parser = TreeSitterJavaParser;
    let usecase = SequenceDiagramUsecase::new(&parser);
    let text = usecase
        .run(&file("Billing.java", code), "charge")
        .unwrap()
        .text()
        .to_string();

    assert!(text.contains("Billing -> gateway: submit(amount, \"USD\", 3)"));
}

#[test]
fn calls_nested_in_control_flow_appear_in_walk_order() {
    let code = r#"
        public class Guard {
            public void check() {
                if (enabled) {
                    log.info(msg);
                }
                finish();
            }
        }
    "#;
    let parser = TreeSitterJavaParser;
    let usecase = SequenceDiagramUsecase::new(&parser);
    let text = usecase
        .run(&file("Guard.java", code), "check")
        .unwrap()
        .text()
        .to_string();

    let info = text.find("Guard -> log: info(msg)").unwrap();
    let finish = text.find("Guard -> Guard: finish").unwrap();
    assert!(info < finish);
}
