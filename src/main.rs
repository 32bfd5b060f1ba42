//! Route table CLI.
//!
//! Loads a TOML routes file and resolves paths against it, prints the trie,
//! or serves resolutions from stdin while hot-reloading the file.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::json;
use tokio::io::{AsyncBufReadExt, BufReader};

use trie_router::config::{load_config, ConfigWatcher};
use trie_router::observability::logging::init_logging;
use trie_router::routing::{build_router, RouteHit, RoutingResult, SharedRouter};

#[derive(Parser)]
#[command(name = "trie-router")]
#[command(about = "Resolve request paths against a template routing table", long_about = None)]
struct Cli {
    /// Routes file (TOML).
    #[arg(short, long, default_value = "routes.toml", global = true)]
    config: PathBuf,

    /// Overrides `observability.log_level` from the routes file.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the routes file
    Check,
    /// Resolve one or more paths
    Resolve {
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Print the trie as JSON
    Dump,
    /// Resolve paths read from stdin, reloading routes when the file changes
    Watch,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(&cli.config)?;

    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.observability.log_level.clone());
    init_logging(&level);

    tracing::info!(
        path = ?cli.config,
        routes = config.routes.len(),
        separator = %config.separator,
        "Configuration loaded"
    );

    let router = build_router(&config)?;

    match cli.command {
        Commands::Check => {
            println!("{}: {} routes OK", cli.config.display(), router.len());
        }
        Commands::Resolve { paths } => {
            for path in &paths {
                print_resolution(path, router.resolve(path))?;
            }
        }
        Commands::Dump => {
            println!("{}", serde_json::to_string_pretty(&router.snapshot())?);
        }
        Commands::Watch => {
            watch(cli.config, SharedRouter::new(router)).await?;
        }
    }

    Ok(())
}

async fn watch(
    path: PathBuf,
    shared: SharedRouter<RouteHit>,
) -> Result<(), Box<dyn std::error::Error>> {
    let (watcher, mut updates) = ConfigWatcher::new(&path);
    let _watcher = watcher.run()?;

    let reload_target = shared.clone();
    tokio::spawn(async move {
        while let Some(config) = updates.recv().await {
            match build_router(&config) {
                Ok(router) => {
                    reload_target.replace(router);
                }
                Err(e) => tracing::error!(error = %e, "Reloaded routes rejected"),
            }
        }
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let path = line.trim();
                if !path.is_empty() {
                    print_resolution(path, shared.resolve(path))?;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Shutdown signal received");
                break;
            }
        }
    }

    Ok(())
}

fn print_resolution(
    path: &str,
    result: RoutingResult<RouteHit>,
) -> Result<(), serde_json::Error> {
    let line = match result {
        Ok(hit) => json!({ "path": path, "route": hit.route, "params": hit.params }),
        Err(e) => json!({ "path": path, "error": e.to_string() }),
    };
    println!("{}", serde_json::to_string(&line)?);
    Ok(())
}
