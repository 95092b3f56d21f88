use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::markup::StyleOp;

#[derive(Parser)]
#[command(name = "tp", about = concat!("taskpad v", env!("CARGO_PKG_VERSION"), " - tasks with inline markdown"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Read configuration from this file instead of ./taskpad.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Append logs to this file (level from RUST_LOG, default warn)
    #[arg(long = "log-file", global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Toggle a style on a byte range of stdin and print the result
    Fmt(FmtArgs),
    /// List the formatting styles and their shortcuts
    Styles,
}

#[derive(Args)]
pub struct FmtArgs {
    /// Style to toggle: bold, italic, underline, numbered-list (or b, i, u, h)
    pub style: StyleOp,
    /// Selection start (byte offset)
    #[arg(long, default_value_t = 0)]
    pub start: usize,
    /// Selection end (byte offset, default: end of input)
    #[arg(long)]
    pub end: Option<usize>,
}
