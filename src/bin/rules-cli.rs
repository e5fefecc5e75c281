use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::Value;

use route_rules::codegen::{self, CompileOptions};
use route_rules::config::{load_rules, register_layers};
use route_rules::matching::to_manifest;
use route_rules::observability::init_logging;
use route_rules::registry::{Provenance, Registry};
use route_rules::sync::{sync, SyncMode};

#[derive(Parser)]
#[command(name = "rules-cli")]
#[command(about = "Route rule resolution and compilation CLI", long_about = None)]
struct Cli {
    /// Path to the layered rules file (TOML).
    #[arg(short, long, default_value = "rules.toml")]
    config: PathBuf,

    /// Dev-like mode: prerendered routes also get payload siblings.
    #[arg(long)]
    dev: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the effective rules for a path
    Resolve {
        path: String,
        /// Print the compact client manifest instead of the full result
        #[arg(long)]
        manifest: bool,
    },
    /// Emit the standalone matcher function
    Compile {
        /// Preserve all matching entries instead of the merged result
        #[arg(long)]
        match_all: bool,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Load, validate and rebuild, reporting totals
    Check,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let cli = Cli::parse();

    let config = load_rules(&cli.config)?;
    let mut registry = Registry::new();
    register_layers(&config, &mut registry)?;

    let mode = if cli.dev { SyncMode::Dev } else { SyncMode::Build };
    sync(&mut registry, mode);

    match cli.command {
        Commands::Resolve { path, manifest } => {
            let resolved = registry.matcher().resolve(&path, None);
            let output = if manifest {
                to_manifest(&resolved)
            } else {
                resolved
            };
            println!("{}", serde_json::to_string_pretty(&Value::Object(output))?);
        }
        Commands::Compile { match_all, output } => {
            let options = CompileOptions {
                match_all,
                serialize: &codegen::manifest_serialize,
            };
            let source = codegen::compile_to_string(&registry.snapshot(), &options)?;
            match output {
                Some(path) => {
                    fs::write(&path, source)?;
                    tracing::info!(path = %path.display(), "matcher written");
                }
                None => println!("{source}"),
            }
        }
        Commands::Check => {
            let snapshot = registry.snapshot();
            let derived = snapshot
                .entries()
                .iter()
                .filter(|entry| entry.provenance == Provenance::Derived)
                .count();
            println!("layers:  {}", config.layers.len());
            println!("entries: {} ({} derived)", snapshot.len(), derived);
        }
    }

    Ok(())
}
