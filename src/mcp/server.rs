use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};

use crate::config::load_config;
use crate::config::validate_api_key;
use crate::scanner::{ComponentScanner, resolve_components_root};
use crate::translator::{ChatCompletionClient, Translator};

use super::types::{TranslateComponentsParams, TranslateComponentsResult};

#[derive(Clone)]
pub struct HanlocMcpServer {
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl HanlocMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Translate all components under the project's configured root
    #[tool(
        description = "Translate every custom component's translations/en.json into zh-Hans.json. Credentials and the components root come from the project's .hanlocrc.json or HANLOC_API_KEY. Components already translated are skipped."
    )]
    pub async fn translate_components(
        &self,
        params: Parameters<TranslateComponentsParams>,
    ) -> Result<CallToolResult, McpError> {
        let project_root = PathBuf::from(&params.0.project_root_path);

        // The scan is blocking and slow; keep it off the event loop.
        let result = tokio::task::spawn_blocking(move || run_scan(&project_root))
            .await
            .map_err(|e| McpError::internal_error(format!("Worker thread failed: {}", e), None))?
            .map_err(|e| McpError::internal_error(format!("{:#}", e), None))?;

        let json_str = serde_json::to_string_pretty(&result).map_err(|e| {
            McpError::internal_error(format!("JSON serialization failed: {}", e), None)
        })?;

        Ok(CallToolResult::success(vec![Content::text(json_str)]))
    }
}

impl Default for HanlocMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve config and credentials, then run the blocking scan.
fn run_scan(project_root: &Path) -> Result<TranslateComponentsResult> {
    if !project_root.is_dir() {
        bail!(
            "Project root is not a directory: {}",
            project_root.display()
        );
    }
    let config = load_config(project_root)
        .context("Failed to load config")?
        .config;

    // Config entry first, environment as fallback.
    let api_key = if config.api_key.trim().is_empty() {
        env::var("HANLOC_API_KEY").unwrap_or_default()
    } else {
        config.api_key.clone()
    };
    validate_api_key(&api_key)?;

    let Some(root) = resolve_components_root(project_root, &config.components_root) else {
        bail!("Components directory not found: {}", config.components_root);
    };

    let backend = ChatCompletionClient::new(&config.endpoint, &api_key, &config.model)?;
    let translator = Translator::new(backend);
    let scanner = ComponentScanner::new(&translator, &config.ignores)?;
    let scan = scanner.scan(&root);

    Ok(TranslateComponentsResult::from_scan(
        root.display().to_string(),
        scan,
    ))
}

#[tool_handler]
impl ServerHandler for HanlocMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Hanloc MCP localizes Home-Assistant-style custom components into Simplified Chinese.\n\n\
                 Available tools:\n\
                 1. translate_components - Scan the project's components root and translate\n\
                    every translations/en.json into zh-Hans.json, preserving placeholders.\n\n\
                 The scan is idempotent: components that already have a zh-Hans.json are\n\
                 skipped, so the tool can be re-run safely. Per-component failures are\n\
                 reported in the result and never abort the rest of the scan."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = HanlocMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
