use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Top-level CLI parser for the `gantry` binary.
#[derive(Debug, Parser)]
#[command(name = "gantry", version, about = "Gantry - CRUD schema augmentation")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Augment a JSON schema document and print the result.
    Augment(AugmentArgs),
    /// Print the JSON Schema that input documents must satisfy.
    DocumentSchema,
}

#[derive(Clone, Debug, Args)]
pub struct AugmentArgs {
    /// Path to the JSON schema document.
    pub file: PathBuf,

    /// Output format: sdl, json
    #[arg(short, long, default_value = "sdl")]
    pub format: OutputFormat,
}

/// How the augmented schema is printed.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Sdl,
    Json,
}
