// MCP (Model Context Protocol) server for the Quran.com API
// Exposes every client operation as a tool to agent clients over stdio

pub mod config;
pub mod protocol;
pub mod server;
pub mod tools;

pub use server::McpServer;
