//! Filepick CLI: resolve picker identifiers against a manifest-backed
//! provider.
//!
//! The manifest (`--manifest fixture.json`) seeds the in-memory provider;
//! without one, only identifier shapes that resolve directly (file paths,
//! primary-volume documents, remote references) produce output.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use filepick_cli::{init_tracing, Manifest};
use filepick_core::{ResolverConfig, ResourceUri, SupportedTypeSet};
use filepick_provider::MemoryProvider;
use filepick_resolver::Resolver;

#[derive(Parser)]
#[command(name = "filepick", about = "Resolve picker identifiers to local paths")]
struct Cli {
    /// JSON fixture seeding the provider (rows, blobs, declared MIME types)
    #[arg(long)]
    manifest: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve an identifier to a local path
    Resolve {
        /// The identifier, e.g. content://authority/document/id
        uri: String,
        /// Fall back to copying into the private directory when unresolved
        #[arg(long)]
        copy: bool,
    },
    /// Print display name, size, and MIME type for an identifier
    Metadata {
        uri: String,
    },
    /// List the supported MIME type patterns
    SupportedTypes,
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let provider = match &cli.manifest {
        Some(path) => Manifest::load(path)?.into_provider()?,
        None => MemoryProvider::new(),
    };
    let resolver = Resolver::new(provider, ResolverConfig::from_env());

    match cli.command {
        Commands::Resolve { uri, copy } => {
            let uri = ResourceUri::parse(&uri).context("Invalid identifier")?;
            let resolution = if copy {
                resolver.resolve_or_copy(&uri)?
            } else {
                resolver.resolve(&uri)
            };
            println!("{}", serde_json::to_string_pretty(&resolution)?);
            if !resolution.is_resolved() {
                anyhow::bail!("No strategy could resolve {uri}");
            }
        }
        Commands::Metadata { uri } => {
            let uri = ResourceUri::parse(&uri).context("Invalid identifier")?;
            let metadata = resolver.metadata(&uri);
            println!("{}", serde_json::to_string_pretty(&metadata)?);
        }
        Commands::SupportedTypes => {
            for pattern in SupportedTypeSet::default_set().patterns() {
                println!("{pattern}");
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
