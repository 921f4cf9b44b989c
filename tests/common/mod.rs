//! Common test utilities
//!
//! Builds isolated shader directories under a temp dir so the generator
//! pipeline can run against them instead of the real source tree.

use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with an isolated shader directory
pub struct TestEnvironment {
    /// Temporary directory backing the whole environment
    pub temp_dir: TempDir,
    /// Input directory scanned by the generator
    pub shader_dir: PathBuf,
}

impl TestEnvironment {
    /// Create a new isolated test environment
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let shader_dir = temp_dir.path().join("shaders");
        std::fs::create_dir_all(&shader_dir).expect("Failed to create shader directory");

        Self {
            temp_dir,
            shader_dir,
        }
    }

    /// Write a shader source file into the input directory
    pub fn write_shader(&self, name: &str, content: &str) {
        std::fs::write(self.shader_dir.join(name), content).expect("Failed to write shader");
    }

    /// Create a sub-directory inside the input directory, with one file in it
    pub fn write_nested_shader(&self, dir_name: &str, file_name: &str, content: &str) {
        let sub = self.shader_dir.join(dir_name);
        std::fs::create_dir_all(&sub).expect("Failed to create sub-directory");
        std::fs::write(sub.join(file_name), content).expect("Failed to write nested shader");
    }

    /// Path the generated header is written to
    pub fn output_path(&self) -> PathBuf {
        self.temp_dir.path().join("shader.h")
    }
}

impl Default for TestEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

/// Reverse the generated escaping: strip the quotes from each fragment,
/// turn the two-character `\n` escapes back into real newlines, and
/// concatenate the fragments, reconstructing the original shader text.
pub fn unescape_literal_body(body: &str) -> String {
    let mut content = String::new();
    for fragment in body.lines() {
        let inner = fragment
            .strip_prefix('"')
            .and_then(|s| s.strip_suffix('"'))
            .expect("fragment should be quoted");
        content.push_str(&inner.replace("\\n", "\n"));
    }
    content
}
