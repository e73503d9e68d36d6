use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

/// inspect instruction operands and their byte locations.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
#[command(propagate_version = true)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Command,

    /// Log more; repeat for more detail. `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    #[command(visible_alias = "i")]
    Inspect(Options),
}

impl Command {
    pub fn options(&self) -> &Options {
        match self {
            Self::Inspect(opts) => opts,
        }
    }
}

#[derive(Debug, Args)]
pub struct Options {
    /// Set the value of every register operand.
    #[arg(long)]
    pub value: Option<u64>,

    /// Resize every operand before inspecting it.
    #[arg(long)]
    pub resize: Option<String>,

    /// Read descriptors from a file, one per line.
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Operand descriptors of the form `tag:name:size`, e.g. `imm:0xff:WORD`.
    #[arg(required_unless_present = "file")]
    pub operands: Vec<String>,
}
