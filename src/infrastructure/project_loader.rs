use crate::ports::SourceFile;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Path fragments that mark a file or directory as test code. Matching is
/// case-insensitive substring, mirroring the documented loader policy.
const TEST_PATTERNS: &[&str] = &["test", "tests", "Test.java", "Tests.java", "/test/", "/tests/"];

pub struct ProjectLoader;

impl ProjectLoader {
    /// Load all non-test `.java` files under a project root, in directory
    /// walk order.
    pub fn load_project(root: &str) -> Result<Vec<SourceFile>> {
        let mut files = Vec::new();
        Self::collect_java_recursive(Path::new(root), &mut files)?;
        Ok(files)
    }

    /// Check whether a path looks like test code.
    pub fn is_test_path(path: &str) -> bool {
        let lower = path.to_lowercase();
        TEST_PATTERNS
            .iter()
            .any(|pattern| lower.contains(&pattern.to_lowercase()))
    }

    fn collect_java_recursive(dir: &Path, out: &mut Vec<SourceFile>) -> Result<()> {
        if !dir.exists() {
            return Ok(());
        }

        if dir.is_file() {
            Self::push_if_java(dir, out)?;
            return Ok(());
        }

        if Self::is_test_path(&dir.display().to_string()) {
            return Ok(());
        }

        for entry in fs::read_dir(dir)
            .with_context(|| format!("Failed to read directory {}", dir.display()))?
        {
            let entry = entry?;
            let path = entry.path();
            if path.is_dir() {
                Self::collect_java_recursive(&path, out)?;
            } else {
                Self::push_if_java(&path, out)?;
            }
        }
        Ok(())
    }

    fn push_if_java(path: &Path, out: &mut Vec<SourceFile>) -> Result<()> {
        let display = path.display().to_string();
        let is_java = path.extension().map(|ext| ext == "java").unwrap_or(false);
        if !is_java || Self::is_test_path(&display) {
            return Ok(());
        }
        let code = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file {}", display))?;
        out.push(SourceFile {
            path: display,
            code,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_paths_are_filtered() {
        assert!(ProjectLoader::is_test_path("src/test/java/FooTest.java"));
        assert!(ProjectLoader::is_test_path("OrderTests.java"));
        assert!(!ProjectLoader::is_test_path("src/main/java/Order.java"));
    }

    #[test]
    fn loads_only_java_sources() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Order.java"), "class Order {}").unwrap();
        fs::write(dir.path().join("notes.txt"), "skip me").unwrap();
        fs::create_dir(dir.path().join("tests")).unwrap();
        fs::write(dir.path().join("tests").join("OrderTest.java"), "class T {}").unwrap();

        let files = ProjectLoader::load_project(dir.path().to_str().unwrap()).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].path.ends_with("Order.java"));
    }
}
