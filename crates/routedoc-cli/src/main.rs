//! routedoc CLI entrypoint
//! Parses command-line arguments and dispatches to the core library.

// Internal imports (std, crate)
use std::path::PathBuf;

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use routedoc_core::{
    extract_path, extract_path_params, field_to_property, generate, Config, ConverterRegistry,
    FieldKind, PathParameter,
};
use serde::Serialize;
use tokio::fs;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "routedoc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log debug output (overridden by RUST_LOG)
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Convert a single route template into a Swagger path and its path parameters
    Path {
        /// Route template, e.g. /pets/<int:id>
        template: String,
        /// Additional converter name registered by the application (repeatable)
        #[arg(long = "converter")]
        converters: Vec<String>,
        /// Do not register the Werkzeug built-in converters
        #[arg(long)]
        no_builtin_converters: bool,
    },
    /// Print the Swagger property declaration for a field kind (e.g. Integer, DateTime)
    Field {
        /// Field kind name
        kind: String,
    },
    /// Render the fragments of every route in a manifest
    Render {
        /// Configuration file (YAML or JSON)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Route manifest; overrides the configured one
        #[arg(long)]
        manifest: Option<PathBuf>,
        /// Output file; overrides the configured one (default: stdout)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Serialize)]
struct PathOutput {
    path: String,
    parameters: Vec<PathParameter>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match &cli.command {
        Commands::Path {
            template,
            converters,
            no_builtin_converters,
        } => {
            let mut registry = if *no_builtin_converters {
                ConverterRegistry::new()
            } else {
                ConverterRegistry::with_builtins()
            };
            registry.extend(converters.iter().cloned());

            let output = PathOutput {
                path: extract_path(template),
                parameters: extract_path_params(template, &registry)
                    .with_context(|| format!("Failed to extract parameters from '{template}'"))?,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Commands::Field { kind } => {
            let kind = FieldKind::from(kind.clone());
            if let FieldKind::Custom(name) = &kind {
                tracing::warn!("Unknown field kind '{}', declaring it as a string", name);
            }
            println!("{}", serde_json::to_string_pretty(&field_to_property(&kind))?);
        }
        Commands::Render {
            config,
            manifest,
            output,
        } => {
            let mut config = match (config, manifest) {
                (Some(path), _) => Config::from_file(path)
                    .await
                    .with_context(|| format!("Failed to load config from {}", path.display()))?,
                (None, Some(manifest)) => Config::new(manifest.to_string_lossy()),
                (None, None) => anyhow::bail!("Either --config or --manifest is required"),
            };
            if let Some(manifest) = manifest {
                config.manifest_path = manifest.to_string_lossy().to_string();
            }
            if let Some(output) = output {
                config.output = Some(output.to_string_lossy().to_string());
            }

            tracing::debug!("Rendering fragments from: {}", config.manifest_path);
            let fragments = generate(&config)
                .await
                .with_context(|| format!("Failed to render {}", config.manifest_path))?;
            let json = routedoc_core::generate::to_json(&fragments, config.pretty)?;

            match &config.output {
                Some(path) => {
                    fs::write(path, json)
                        .await
                        .with_context(|| format!("Failed to write {}", path))?;
                    tracing::info!("Wrote {} route fragment(s) to {}", fragments.len(), path);
                }
                None => println!("{}", json),
            }
        }
    }
    Ok(())
}
