//! CLI surface

pub mod check;
pub mod mcp;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "todolist-mcp")]
#[command(version)]
#[command(about = "MCP todo-list server backed by a Supabase table store")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the MCP server (stdio transport); also the default command
    Mcp,
    /// Verify configuration and store reachability, then exit
    Check,
}
