//! Defines the nlpp command line interface

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use nlpp_preprocessor::{Config, FlagValue};
use nlpp_utils::io::default_output_path;

/// Comment and uncomment blocks of a NetLogo model driven by `;; $@`
/// directives
#[derive(Parser, Debug)]
#[command(name = "nlpp", version = None)]
pub struct Cli {
    /// See what version of nlpp you are using
    #[arg(short, long)]
    pub version: bool,

    /// The file to preprocess, or `-` for stdin
    #[arg(short, long, required_unless_present = "version")]
    pub input: Option<PathBuf>,

    /// Where to write the result, or `-` for stdout.
    /// Defaults to `<input-stem>.post<input-ext>` next to the input
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Silent mode: only report errors
    #[arg(short, long)]
    pub silent: bool,

    /// Test only: preprocess and report, but do not write the output
    #[arg(short, long)]
    pub test: bool,

    /// Predeclare a flag, as if it appeared in a CONFIG block. `NAME` alone
    /// means `NAME=TRUE`
    #[arg(
        short = 'D',
        long = "define",
        value_name = "NAME[=VALUE]",
        value_parser = parse_define,
        action = ArgAction::Append
    )]
    pub defines: Vec<(String, FlagValue)>,
}

impl Cli {
    /// The output path, derived from the input path if none was given
    pub fn output_path(&self) -> Option<PathBuf> {
        self.output
            .clone()
            .or_else(|| self.input.as_deref().map(default_output_path))
    }

    /// The flags predeclared with `--define`
    pub fn config(&self) -> Config {
        self.defines.iter().cloned().collect()
    }
}

/// Parse a `NAME[=VALUE]` argument with the same value rules as a config
/// entry
fn parse_define(raw: &str) -> Result<(String, FlagValue), String> {
    let (name, value) = raw.split_once('=').unwrap_or((raw, "TRUE"));
    if name.is_empty() || name.contains(char::is_whitespace) {
        return Err(format!("`{name}` is not a valid flag name"));
    }

    Ok((name.to_string(), FlagValue::from_entry(name, value)))
}
