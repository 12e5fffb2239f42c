//! CLI argument parsing for the ARC gate.
//!
//! The surface is one positional command plus optional path overrides whose
//! defaults reproduce the layout of an ARC repository checkout.
use clap::{Args, Parser, ValueEnum};
use std::path::PathBuf;

/// Root CLI entrypoint.
#[derive(Parser, Debug)]
#[command(
    name = "arcs",
    version,
    about = "Validate ARC proposals and build the site index",
    after_help = "Commands:\n  ci    Check every arc-NNNN/README.md against the ARC schema\n  site  Check every ARC, then write site/src/arcs.json\n\nExamples:\n  arcs ci\n  arcs site --root ../\n  arcs site --out /tmp/arcs.json"
)]
pub struct RootArgs {
    /// Command to run
    #[arg(value_enum, ignore_case = true)]
    pub command: Command,

    #[command(flatten)]
    pub run: RunArgs,
}

/// Top-level commands.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Check every ARC against the schema
    Ci,
    /// Check every ARC and write the site index
    Site,
}

/// Options shared by both commands.
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Directory containing the arc-NNNN directories
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Output path for the site index [default: <root>/site/src/arcs.json]
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Emit debug logging for every ARC processed
    #[arg(long)]
    pub verbose: bool,
}
