mod cli;
mod config;
mod error;
mod gateway;
mod model;
mod store;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Check) => {
            cli::check::execute();
        }
        // No subcommand runs the server, same as `todolist-mcp mcp`
        Some(Commands::Mcp) | None => {
            tokio::runtime::Runtime::new()
                .expect("Failed to create tokio runtime")
                .block_on(async {
                    if let Err(e) = cli::mcp::run_mcp_server().await {
                        eprintln!("MCP server error: {}", e);
                        std::process::exit(1);
                    }
                });
        }
    }
}
