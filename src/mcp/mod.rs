//! Model Context Protocol (MCP) server implementation.
//!
//! This is the host-integration surface: automation hosts and AI agents
//! trigger the component scan through one registered tool. The scan itself is
//! blocking and slow (one HTTP round trip per translated string), so it always
//! runs on a worker thread, never on the server's event loop.
//!
//! ## Module Structure
//!
//! - `server`: Main MCP server implementation
//! - `types`: MCP-specific type definitions

mod server;
pub mod types;

pub use server::{HanlocMcpServer, run_server};
