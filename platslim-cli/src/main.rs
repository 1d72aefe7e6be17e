//! platslim CLI - computes which platform modules an application needs.
//!
//! Modes:
//! - `--disabled`: scan the application sources and print the platform
//!   modules nothing depends on, as a properties fragment ready to paste
//!   into the suite's platform.properties
//! - `--build`: read that disabled list back and print the archive and
//!   configuration files of every remaining module, grouped by directory

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use std::path::{Path, PathBuf};

use platslim_core::prelude::*;
use platslim_core::{init_structured_logging, load_config_file};

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate platform module dependency lists")]
#[command(group(ArgGroup::new("mode").required(true).args(["disabled", "build"])))]
pub struct Cli {
    /// Path to the platform installation
    #[arg(short = 'n', long, value_name = "PATH")]
    nbpath: PathBuf,

    /// Path to the application source tree; defaults to the current directory
    #[arg(short = 's', long, value_name = "PATH")]
    srcpath: Option<PathBuf>,

    /// Generate the disabled modules list
    #[arg(short = 'd', long)]
    disabled: bool,

    /// Generate the list of module files to package
    #[arg(short = 'b', long)]
    build: bool,

    /// Properties file holding the disabled list (build mode)
    #[arg(long, value_name = "FILE")]
    properties: Option<PathBuf>,

    /// Configuration file; defaults to platslim.toml in the source tree
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output results in JSON format
    #[arg(long)]
    json: bool,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Picks the explicit config file, else platslim.toml in the source tree,
/// else the built-in defaults.
fn resolve_config(explicit: Option<&Path>, srcpath: &Path) -> Result<PlatslimConfig> {
    if let Some(path) = explicit {
        return load_config_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()));
    }
    Ok(load_config(srcpath)
        .with_context(|| format!("Failed to load config from {}", srcpath.display()))?
        .unwrap_or_default())
}

fn run(cli: &Cli) -> Result<()> {
    let srcpath = match &cli.srcpath {
        Some(p) => p.clone(),
        None => std::env::current_dir().context("Failed to determine current directory")?,
    };
    let config = resolve_config(cli.config.as_deref(), &srcpath)?;

    let mut slim = Platslim::new(&cli.nbpath).source_root(&srcpath).config(config);
    if let Some(props) = &cli.properties {
        slim = slim.properties_file(props);
    }

    if cli.disabled {
        let report = slim.disabled_modules()?;
        if cli.json {
            print_json(&report);
        } else {
            print_disabled_plain(&report.key, &report.disabled_list());
        }
    }

    if cli.build {
        let report = slim.build_files().with_context(|| {
            format!(
                "Failed to resolve module files in {}",
                cli.nbpath.display()
            )
        })?;
        if cli.json {
            print_json(&report);
        } else {
            print_buckets_plain(&report.buckets);
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("[PANIC] platslim internal error: {}", info);
    }));

    let cli = Cli::parse();
    init_structured_logging(cli.verbose);
    tracing::debug!(?cli, "starting");

    run(&cli)
}
