//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --config) are inherited by all subcommands
//! - `build` and `watch` share the directory and concurrency overrides

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::Config;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// gxr - hydration bundles for server-rendered React components
#[derive(Parser, Debug)]
#[command(name = "gxr")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
#[command(after_help = "Components opt in with a \"use client\" directive.")]
pub struct Cli {
    /// Output NDJSON events for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Config file (default: ./gxr.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Bundle every client component and write the manifest
    Build {
        #[command(flatten)]
        args: BuildArgs,
    },

    /// Rebuild whenever a component changes
    Watch {
        #[command(flatten)]
        args: BuildArgs,

        /// Quiet period after the last change before rebuilding
        #[arg(long, value_name = "MS")]
        debounce_ms: Option<u64>,
    },
}

/// Overrides shared by `build` and `watch`
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildArgs {
    /// Components directory (default: ./client/components)
    #[arg(long, value_name = "DIR")]
    pub components: Option<PathBuf>,

    /// Output directory (default: ./public)
    #[arg(long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Maximum concurrent bundler invocations
    #[arg(short = 'j', long, value_name = "N", value_parser = clap::value_parser!(usize))]
    pub concurrency: Option<usize>,
}

impl BuildArgs {
    /// Apply flags on top of a loaded config (flags win)
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(dir) = &self.components {
            config.build.components_dir = dir.clone();
        }
        if let Some(dir) = &self.output {
            config.build.output_dir = dir.clone();
        }
        if let Some(n) = self.concurrency {
            config.build.concurrency = Some(n.max(1));
        }
        config
    }
}
