#![doc = r"nlpp - comments and uncomments blocks of NetLogo models driven by `;; $@` directives"]
#![allow(unknown_lints)] // in case you use non-nightly clippy
#![warn(
    clippy::cargo,
    clippy::nursery,
    clippy::pedantic,
    clippy::missing_docs_in_private_items,
    missing_docs,
    clippy::absolute_paths,
    clippy::as_conversions,
    clippy::dbg_macro,
    clippy::deref_by_slicing,
    clippy::else_if_without_else,
    clippy::empty_structs_with_brackets,
    clippy::format_push_string,
    clippy::if_then_some_else_none,
    clippy::let_underscore_must_use,
    clippy::min_ident_chars,
    clippy::redundant_type_annotations,
    clippy::same_name_method,
    clippy::semicolon_inside_block,
    clippy::todo,
    clippy::unimplemented,
    clippy::wildcard_enum_match_arm,
    let_underscore_drop,
    macro_use_extern_crate,
    missing_debug_implementations,
    unsafe_op_in_unsafe_fn,
    unused_qualifications,
    clippy::unwrap_used
)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

mod build_info;
mod cli;
mod ice;
mod logging;

use std::{
    io::{IsTerminal, Read, Write},
    process,
};

use anyhow::bail;
use clap::Parser;
use cli::Cli;
use nlpp_utils::io;
use tracing::info;

fn main() -> anyhow::Result<()> {
    ice::setup_panic_hook();

    let cli = Cli::parse();

    if cli.version {
        println!("{}", build_info::version());
        return Ok(());
    }

    logging::init(cli.silent)?;

    let (Some(input_path), Some(output_path)) = (cli.input.as_deref(), cli.output_path()) else {
        bail!("no input file provided");
    };

    let (file_name, mut input) = io::open_input(input_path)?;
    let mut source = Vec::new();
    input.read_to_end(&mut source)?;

    info!(input = %file_name, "preprocessing");
    let color = std::io::stderr().is_terminal();

    let result = match nlpp_preprocessor::preprocess_with(&source, cli.config()) {
        Ok(result) => result,
        Err(diagnostic) => {
            eprintln!("{}", diagnostic.render(&source, &file_name, color)?);
            process::exit(1);
        }
    };

    if !cli.silent {
        for warning in &result.warnings {
            eprintln!("{}", warning.render(&source, &file_name, color)?);
        }
    }

    if cli.test {
        info!(
            warnings = result.warnings.len(),
            "test run finished, output not written"
        );
        return Ok(());
    }

    let mut output = io::open_output(&output_path)?;
    output.write_all(&result.output)?;
    output.flush()?;

    info!(output = %output_path.display(), "wrote output");

    Ok(())
}
