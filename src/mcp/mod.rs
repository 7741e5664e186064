//! MCP (Model Context Protocol) server for pugg.
//!
//! Allows AI assistants like Claude to query YouTube and build study
//! material through tools. Implements JSON-RPC 2.0 over stdio.

mod protocol;
mod server;
mod tools;

pub use server::McpServer;
