//! Directive-driven preprocessor for NetLogo-style source files
//!
//! The input is a text file using `;` line comments, handled as bytes so that
//! models in legacy encodings pass through unchanged. Directive lines of the
//! form `;; $@NAME` declare boolean flags inside a CONFIG block and then guard
//! blocks of code: a block guarded by a false flag is commented out, a block
//! guarded by a true flag is uncommented. A line starting with `@#$#@#$#@` ends
//! the code section; everything after it is copied unchanged.
//!
//! ```text
//! ;; $@CONFIG
//! ;; $@DEBUG FALSE
//! ;; $@END
//! ;; $@DEBUG
//! show ticks        <- becomes "; show ticks"
//! ;; $@END
//! ```
//!
//! # Example
//! ```
//! use nlpp_preprocessor::preprocess;
//!
//! let source = ";; $@CONFIG\n;; $@DEBUG FALSE\n;; $@END\n;; $@DEBUG\nshow ticks\n;; $@END\n";
//! let result = preprocess(source.as_bytes()).expect("valid input");
//! assert!(result.output.ends_with(b"; show ticks\n;; $@END\n"));
//! ```
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
    let_underscore_drop,
    macro_use_extern_crate,
    missing_debug_implementations,
    unsafe_op_in_unsafe_fn,
    unused_qualifications,
    clippy::unwrap_used,
    clippy::print_stderr,
    clippy::print_stdout
)]
#![allow(
    clippy::multiple_crate_versions,
    clippy::cargo_common_metadata,
    clippy::module_name_repetitions
)]

mod config;
pub mod directive;
mod preprocess;
mod state;
mod transform;

pub use config::{Config, FlagValue};
pub use directive::{directive_body, is_directive, is_end_of_code, Line};
pub use preprocess::{preprocess, preprocess_with, Preprocessed, Preprocessor};
pub use state::State;
pub use transform::{comment_line, uncomment_line};
