use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde_json::Value;
use tempfile::TempDir;


/// Test fixture for MCP integration tests
///
/// Manages a temporary Home-Assistant-like project with a custom_components/
/// directory.
pub struct McpTestFixture {
    _temp_dir: TempDir,
    project_root: PathBuf,
}

impl McpTestFixture {
    /// Create an empty test project
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_root = temp_dir.path().canonicalize()?;

        fs::create_dir_all(project_root.join("custom_components"))?;

        Ok(Self {
            _temp_dir: temp_dir,
            project_root,
        })
    }

    /// Write a component's translations/en.json under custom_components/
    pub fn write_component(&self, name: &str, en: &Value) -> Result<()> {
        let dir = self
            .project_root
            .join("custom_components")
            .join(name)
            .join("translations");
        fs::create_dir_all(&dir)?;
        let json_str = serde_json::to_string_pretty(en)
            .with_context(|| format!("Failed to serialize en.json for component: {}", name))?;
        fs::write(dir.join("en.json"), format!("{}\n", json_str))
            .with_context(|| format!("Failed to write en.json for component: {}", name))?;
        Ok(())
    }

    /// Read a component's translations/zh-Hans.json
    pub fn read_target_file(&self, name: &str) -> Result<Value> {
        let path = self
            .project_root
            .join("custom_components")
            .join(name)
            .join("translations")
            .join("zh-Hans.json");
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read target file: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON from: {}", path.display()))
    }

    /// Whether a component's zh-Hans.json exists
    pub fn has_target_file(&self, name: &str) -> bool {
        self.project_root
            .join("custom_components")
            .join(name)
            .join("translations")
            .join("zh-Hans.json")
            .is_file()
    }

    /// Write a .hanlocrc.json config file
    pub fn write_config(&self, content: &Value) -> Result<()> {
        let path = self.project_root.join(".hanlocrc.json");
        let json_str = serde_json::to_string_pretty(content)?;
        fs::write(&path, format!("{}\n", json_str))?;
        Ok(())
    }

    /// Get the project root path as a string (for MCP parameters)
    pub fn root(&self) -> String {
        self.project_root.to_string_lossy().to_string()
    }

    /// Get the project root path as a Path reference
    pub fn root_path(&self) -> &Path {
        &self.project_root
    }
}

/// Extract JSON value from a successful CallToolResult
///
/// Panics if the result indicates an error or cannot be parsed
pub fn extract_tool_result_json(result: &rmcp::model::CallToolResult) -> Value {
    if let Some(true) = result.is_error {
        panic!("Tool call returned an error: {:?}", result);
    }

    assert!(!result.content.is_empty(), "Tool result should have content");

    let content_item = &result.content[0];
    let text_content = content_item
        .as_text()
        .expect("Tool result content should be text");

    serde_json::from_str(&text_content.text).expect("Tool result should be valid JSON")
}
