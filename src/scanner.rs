//! Component directory scanning and per-component translation.
//!
//! A component is an installed add-on directory expected to carry a
//! `translations/` subfolder with per-language JSON string tables. The
//! scanner walks the components root one level deep, translates each
//! component's `en.json` into `zh-Hans.json` when the target is missing, and
//! isolates every failure to the component it occurred in.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::Pattern;
use serde_json::Value;
use tracing::{info, warn};
use walkdir::WalkDir;

use crate::translator::{TranslationBackend, Translator};
use crate::walker::translate_value;

pub const TRANSLATIONS_DIR: &str = "translations";
pub const SOURCE_LOCALE_FILE: &str = "en.json";
pub const TARGET_LOCALE_FILE: &str = "zh-Hans.json";

/// The tool's own component directory, never scanned.
pub const OWN_COMPONENT: &str = "hanloc";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentOutcome {
    Translated,
    Skipped,
    Error,
}

impl ComponentOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentOutcome::Translated => "translated",
            ComponentOutcome::Skipped => "skipped",
            ComponentOutcome::Error => "error",
        }
    }
}

#[derive(Debug)]
pub struct ComponentReport {
    pub name: String,
    pub outcome: ComponentOutcome,
    /// Error message for `Error` outcomes.
    pub detail: Option<String>,
}

/// Aggregate result of one scan.
#[derive(Debug, Default)]
pub struct ScanSummary {
    pub translated: usize,
    pub skipped: usize,
    pub errors: usize,
    pub components: Vec<ComponentReport>,
}

impl ScanSummary {
    fn record(&mut self, name: &str, outcome: ComponentOutcome, detail: Option<String>) {
        match outcome {
            ComponentOutcome::Translated => self.translated += 1,
            ComponentOutcome::Skipped => self.skipped += 1,
            ComponentOutcome::Error => self.errors += 1,
        }
        self.components.push(ComponentReport {
            name: name.to_string(),
            outcome,
            detail,
        });
    }
}

/// Resolve the components root against a short list of candidate locations.
///
/// Tries the configured path under `base` (an absolute configured path wins
/// outright), then under `/config`, then under `~/.homeassistant`. The first
/// existing directory wins; `None` means the scan should be a no-op.
pub fn resolve_components_root(base: &Path, configured: &str) -> Option<PathBuf> {
    let mut candidates = vec![
        base.join(configured),
        Path::new("/config").join(configured),
    ];
    if let Some(home) = dirs::home_dir() {
        candidates.push(home.join(".homeassistant").join(configured));
    }

    candidates.into_iter().find(|path| path.is_dir())
}

pub struct ComponentScanner<'a, B> {
    translator: &'a Translator<B>,
    ignores: Vec<Pattern>,
}

impl<'a, B: TranslationBackend> ComponentScanner<'a, B> {
    /// Build a scanner; `ignores` are glob patterns of component directory
    /// names to leave untouched.
    pub fn new(translator: &'a Translator<B>, ignores: &[String]) -> Result<Self> {
        let ignores = ignores
            .iter()
            .map(|pattern| {
                Pattern::new(pattern)
                    .with_context(|| format!("Invalid ignore pattern: \"{}\"", pattern))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            translator,
            ignores,
        })
    }

    /// Scan every component directory immediately under `root`.
    ///
    /// Components are processed strictly sequentially; a failure in one is
    /// logged, counted, and never stops the rest of the scan.
    pub fn scan(&self, root: &Path) -> ScanSummary {
        info!("Scanning components in {}", root.display());

        let mut summary = ScanSummary::default();

        for entry in WalkDir::new(root)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("Failed to read directory entry: {}", err);
                    continue;
                }
            };
            if !entry.file_type().is_dir() {
                continue;
            }

            let name = entry.file_name().to_string_lossy().to_string();
            if name == OWN_COMPONENT || self.is_ignored(&name) {
                continue;
            }

            match self.translate_component(entry.path(), &name) {
                Ok(outcome) => summary.record(&name, outcome, None),
                Err(err) => {
                    warn!("Error processing {}: {:#}", name, err);
                    summary.record(&name, ComponentOutcome::Error, Some(format!("{:#}", err)));
                }
            }
        }

        info!(
            "Translation completed: {} translated, {} skipped, {} errors",
            summary.translated, summary.skipped, summary.errors
        );
        summary
    }

    fn is_ignored(&self, name: &str) -> bool {
        self.ignores.iter().any(|pattern| pattern.matches(name))
    }

    /// Translate a single component, if it needs translation.
    ///
    /// Skips when the source file is absent or the target file already
    /// exists, so a second scan over the same tree is a no-op.
    fn translate_component(&self, component_dir: &Path, name: &str) -> Result<ComponentOutcome> {
        let translations_dir = component_dir.join(TRANSLATIONS_DIR);
        let source_file = translations_dir.join(SOURCE_LOCALE_FILE);
        let target_file = translations_dir.join(TARGET_LOCALE_FILE);

        if !source_file.is_file() {
            return Ok(ComponentOutcome::Skipped);
        }
        if target_file.exists() {
            return Ok(ComponentOutcome::Skipped);
        }

        info!("Translating {}", name);

        let content = fs::read_to_string(&source_file)
            .with_context(|| format!("Failed to read {}", source_file.display()))?;
        let document: Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", source_file.display()))?;

        let translated = translate_value(&document, self.translator);
        write_locale_file(&target_file, &translated)?;

        Ok(ComponentOutcome::Translated)
    }
}

/// Save a locale file with pretty formatting.
///
/// Uses 2-space indentation, literal (non-escaped) non-ASCII output, and a
/// trailing newline.
fn write_locale_file(path: &Path, value: &Value) -> Result<()> {
    let content = serde_json::to_string_pretty(value).context("Failed to serialize JSON")?;
    fs::write(path, format!("{}\n", content))
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
