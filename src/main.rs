//! Park Menu MCP Server - Main Entry Point
//!
//! This is the main entry point for the park menu MCP server application.
//! The actual implementation is in the `park_menu_mcp` library.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use mcp_attr::server::serve_stdio;
use park_menu_mcp::{Config, MenuBrowserHandler};
use std::path::PathBuf;
use tracing::Level;

/// Park Menu MCP Server - browse theme-park menus and track nutrition via Model Context Protocol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path or http(s) URL of the park catalog JSON
    source: Option<String>,

    /// TOML config file (source and starting filters)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level written to stderr: error, warn, info, debug, trace
    #[arg(long, default_value = "info")]
    log_level: Level,
}

fn init_logging(level: Level) {
    // stdout carries the MCP transport
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_ansi(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        // No arguments provided, show help and exit with error code
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!(); // Add a newline after help
        std::process::exit(2);
    }

    let args = Args::parse();
    init_logging(args.log_level);

    let config = match args.config {
        Some(ref path) => Config::load(path)?,
        None => Config::default(),
    }
    .with_source(args.source);

    let handler = MenuBrowserHandler::from_config(&config)?;
    handler.load().await;
    serve_stdio(handler).await?;
    Ok(())
}
