//! Test fixtures and builders

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch folder with automatic cleanup
pub struct TestTree {
    pub temp_dir: TempDir,
}

impl TestTree {
    /// Get the root of the tree
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a file, making parent folders as needed
    pub fn create_file(&self, relative: &str, content: &[u8]) -> Result<PathBuf> {
        let file_path = self.path().join(relative);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&file_path, content)?;
        Ok(file_path)
    }

    /// Full text of a path inside the tree, as it would appear in a report
    pub fn full_text(&self, relative: &str) -> String {
        self.path().join(relative).to_string_lossy().into_owned()
    }

    /// Names of the entries directly under the root, sorted
    pub fn entries(&self) -> Result<Vec<String>> {
        let mut names = fs::read_dir(self.path())?
            .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
            .collect::<std::io::Result<Vec<_>>>()?;
        names.sort();
        Ok(names)
    }

    /// The single root-level entry whose name starts with `prefix` and ends with `suffix`
    pub fn find_output(&self, prefix: &str, suffix: &str) -> Result<Option<PathBuf>> {
        Ok(self
            .entries()?
            .into_iter()
            .find(|name| name.starts_with(prefix) && name.ends_with(suffix))
            .map(|name| self.path().join(name)))
    }
}

/// Builder for creating test trees
#[derive(Default)]
pub struct TestTreeBuilder {
    files: Vec<(String, Vec<u8>)>,
    dirs: Vec<String>,
}

impl TestTreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, relative: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        self.files.push((relative.into(), content.into()));
        self
    }

    pub fn with_empty_dir(mut self, relative: impl Into<String>) -> Self {
        self.dirs.push(relative.into());
        self
    }

    pub fn build(self) -> Result<TestTree> {
        let tree = TestTree {
            temp_dir: TempDir::new()?,
        };
        for dir in &self.dirs {
            fs::create_dir_all(tree.path().join(dir))?;
        }
        for (relative, content) in &self.files {
            tree.create_file(relative, content)?;
        }
        Ok(tree)
    }
}

/// Lines of a report file
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    Ok(fs::read_to_string(path)?
        .lines()
        .map(str::to_string)
        .collect())
}
