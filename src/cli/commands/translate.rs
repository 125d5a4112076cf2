use std::env;

use anyhow::Result;
use tracing::warn;

use super::super::args::TranslateCommand;
use super::super::exit_status::ExitStatus;
use super::{CommandResult, CommandSummary, TranslateSummary};
use crate::config::{load_config, validate_api_key};
use crate::scanner::{ComponentScanner, ScanSummary, resolve_components_root};
use crate::translator::{ChatCompletionClient, Translator};

/// Run the scan-and-translate batch.
///
/// Credential resolution mirrors the config lookup order: the CLI flag (or
/// `HANLOC_API_KEY`) wins over the config file. A rejected credential is a
/// hard error; everything past that point is isolated per component.
pub fn translate(cmd: TranslateCommand) -> Result<CommandResult> {
    let cwd = env::current_dir()?;
    let mut config = load_config(&cwd)?.config;

    if let Some(root) = &cmd.common.root {
        config.components_root = root.display().to_string();
    }
    let api_key = cmd.common.api_key.unwrap_or_else(|| config.api_key.clone());
    validate_api_key(&api_key)?;

    let Some(root) = resolve_components_root(&cwd, &config.components_root) else {
        warn!(
            "Components directory not found: {}",
            config.components_root
        );
        return Ok(CommandResult {
            summary: CommandSummary::Translate(TranslateSummary {
                configured_root: config.components_root,
                resolved_root: None,
                scan: ScanSummary::default(),
            }),
            status: ExitStatus::Failure,
        });
    };

    let backend = ChatCompletionClient::new(&config.endpoint, &api_key, &config.model)?;
    let translator = Translator::new(backend);
    let scanner = ComponentScanner::new(&translator, &config.ignores)?;
    let scan = scanner.scan(&root);

    let status = if scan.errors > 0 {
        ExitStatus::Failure
    } else {
        ExitStatus::Success
    };

    Ok(CommandResult {
        summary: CommandSummary::Translate(TranslateSummary {
            configured_root: config.components_root,
            resolved_root: Some(root),
            scan,
        }),
        status,
    })
}
