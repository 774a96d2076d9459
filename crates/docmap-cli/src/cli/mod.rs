//! CLI for the docmap namespace URL registry.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use docmap_core::config::{self, DocmapConfig};
use docmap_core::export::ExportFormat;
use docmap_core::UrlMap;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use commands::{run_check, run_export, run_get, run_list, run_resolve};

/// Top-level CLI for docmap.
#[derive(Debug, Parser)]
#[command(name = "docmap")]
#[command(about = "docmap: look up online documentation URLs by namespace", long_about = None)]
pub struct Cli {
    /// Extra map file to load after the configured ones (repeatable).
    #[arg(long = "map", value_name = "FILE", global = true)]
    pub map_files: Vec<PathBuf>,

    /// Do not include the built-in GLib family table.
    #[arg(long, global = true)]
    pub no_builtin: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the documentation base URL of a namespace.
    Get {
        /// Namespace, e.g. GLib (case-sensitive).
        namespace: String,
    },

    /// List all namespaces and their base URLs.
    List,

    /// Print the whole table in another format.
    Export {
        /// toml, json or js.
        #[arg(long, default_value = "toml")]
        format: ExportFormat,
    },

    /// Resolve documentation links such as method@Gio.File.read to URLs.
    Resolve {
        /// One or more links.
        #[arg(required = true)]
        links: Vec<String>,
    },

    /// Validate map files.
    Check {
        /// Map files to check.
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<ExitCode> {
        let cli = Cli::parse();
        let stdout = io::stdout();
        let stderr = io::stderr();
        let found = dispatch(
            cli,
            config::load_or_init,
            &mut stdout.lock(),
            &mut stderr.lock(),
        )?;

        Ok(if found {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        })
    }
}

/// Run one command. `load_config` is only called by commands that need the
/// namespace map. Returns false on a lookup miss.
fn dispatch(
    cli: Cli,
    load_config: impl FnOnce() -> Result<DocmapConfig>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<bool> {
    let build_map = || -> Result<UrlMap> {
        let cfg = load_config()?;
        tracing::debug!("loaded config: {:?}", cfg);
        cfg.build_map(&cli.map_files, cli.no_builtin)
    };

    Ok(match cli.command {
        CliCommand::Get { namespace } => run_get(&build_map()?, &namespace, out)?,
        CliCommand::List => {
            run_list(&build_map()?, out)?;
            true
        }
        CliCommand::Export { format } => {
            run_export(&build_map()?, format, out)?;
            true
        }
        CliCommand::Resolve { links } => run_resolve(&build_map()?, &links, out, err)?,
        CliCommand::Check { files } => {
            run_check(&files, out)?;
            true
        }
    })
}

#[cfg(test)]
mod tests;
