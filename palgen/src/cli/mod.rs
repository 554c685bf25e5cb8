//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use palgen_core::Target;

#[derive(Parser, Debug)]
#[command(
    name = "palgen",
    version,
    about = "Generate dwm and st color headers from a pywal palette"
)]
pub struct Cli {
    /// Config file [default: $XDG_CONFIG_HOME/palgen/config.toml]
    #[arg(long, global = true, env = "PALGEN_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write colors-wal-dwm.h and colors-wal-st.h
    Generate(GenerateArgs),
    /// Validate a generated header and report whether it is canonical
    Check(CheckArgs),
    /// Print the default configuration to stdout
    PrintConfig,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Palette file (pywal colors.json or a .toml palette)
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Directory the headers are written to
    #[arg(long, short)]
    pub out_dir: Option<PathBuf>,

    /// Which headers to write; overrides the config
    #[arg(long, value_enum)]
    pub target: Option<TargetArg>,

    /// Keep running and regenerate whenever the palette file changes
    #[arg(long)]
    pub watch: bool,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Header to check
    pub file: PathBuf,

    /// Accept uppercase hex digits
    #[arg(long)]
    pub normalize_case: bool,

    /// Fail unless the file is byte-identical to what generate would write
    #[arg(long)]
    pub canonical: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetArg {
    Dwm,
    St,
    All,
}

impl TargetArg {
    pub fn targets(self) -> Vec<Target> {
        match self {
            Self::Dwm => vec![Target::WindowManagerScheme],
            Self::St => vec![Target::TerminalPalette],
            Self::All => Target::ALL.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests;
