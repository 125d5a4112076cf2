//! Hanloc - Simplified-Chinese localizer for custom components
//!
//! Hanloc is a CLI tool and library that scans a directory of installed
//! add-on components, finds each component's English UI-string file
//! (`translations/en.json`), and writes a Simplified-Chinese translation
//! (`translations/zh-Hans.json`) produced by a chat-completion LLM backend.
//! Format placeholders (`{name}`, `%count`, `${var}`) are shielded from the
//! backend and restored verbatim.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands)
//! - `config`: Configuration file loading and credential validation
//! - `mcp`: Model Context Protocol server implementation
//! - `placeholder`: Placeholder extraction and marker substitution
//! - `scanner`: Component directory scanning and per-component isolation
//! - `translator`: Placeholder-preserving translation pipeline
//! - `walker`: Recursive translation of JSON document trees
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod mcp;
pub mod placeholder;
pub mod scanner;
pub mod translator;
pub mod utils;
pub mod walker;
