//! The directive state machine
//!
//! A [`Preprocessor`] owns the current [`State`] and the flag [`Config`] of
//! one run over one input. Lines are fed to [`Preprocessor::process_line`]
//! strictly in order; each yields exactly one output line or the error that
//! stops the run. Lines are bytes, so input that is not UTF-8 passes through
//! untouched.

use std::borrow::Cow;

use nlpp_diagnostics::{Diagnostic, DiagnosticKind, SpanExt};
use nlpp_utils::span::Span;
use tracing::{debug, info};

use crate::{
    comment_line,
    directive::{Line, CONFIG_TAG, END_TAG},
    uncomment_line, Config, FlagValue, State,
};

/// The result of preprocessing a whole input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preprocessed {
    /// The transformed input, one line per input line
    pub output: Vec<u8>,
    /// Non-fatal problems found along the way
    pub warnings: Vec<Diagnostic>,
}

/// Processing context for a single input
#[derive(Debug, Default)]
pub struct Preprocessor {
    /// Current state
    state: State,
    /// Flags declared so far
    config: Config,
    /// Number of lines processed so far
    line_number: usize,
    /// Byte offset of the next line within the input
    offset: usize,
    /// Span of the directive that opened the current block
    block_start: Option<Span>,
    /// Warnings collected so far
    warnings: Vec<Diagnostic>,
}

impl Preprocessor {
    /// Create a [`Preprocessor`] with no declared flags
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a [`Preprocessor`] whose flags are seeded from `config`
    ///
    /// CONFIG blocks in the input may still overwrite these.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The current [`State`]
    #[must_use]
    pub const fn state(&self) -> State {
        self.state
    }

    /// The flags declared so far
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Number of lines processed so far
    #[must_use]
    pub const fn lines_processed(&self) -> usize {
        self.line_number
    }

    /// Process the next line of input, terminator included
    ///
    /// # Errors
    /// Returns [`DiagnosticKind::UnexpectedDirective`] if a directive other
    /// than `END` appears inside a COMMENT or UNCOMMENT block. The run cannot
    /// continue after that.
    pub fn process_line<'a>(&mut self, line: &'a [u8]) -> Result<Cow<'a, [u8]>, Diagnostic> {
        self.line_number += 1;
        let span = Span::of_line(self.offset, line);
        self.offset += line.len();

        if self.state.is_terminal() {
            return Ok(Cow::Borrowed(line));
        }

        match Line::classify(line, self.state) {
            Line::Sentinel => {
                info!(line = self.line_number, "end of code reached");
                self.state = State::EndOfCode;
                self.block_start = None;
            }
            Line::Tag(name) if name == END_TAG => {
                debug!(line = self.line_number, block = %self.state, "closing block");
                self.state = State::Normal;
                self.block_start = None;
            }
            Line::ConfigEntry { name, value } => self.declare(&name, &value, span),
            Line::Tag(name) => match self.state {
                State::Normal => self.open_block(&name, span),
                State::Comment | State::Uncomment => {
                    return Err(span.error(DiagnosticKind::UnexpectedDirective {
                        name: name.into_owned(),
                        block: self.state.open_block().unwrap_or("NORMAL"),
                        line: self.line_number,
                    }));
                }
                // CONFIG only yields `END` tags and END_OF_CODE returned above
                State::Config | State::EndOfCode => {}
            },
            Line::Plain => match self.state {
                State::Comment => return Ok(comment_line(line)),
                State::Uncomment => return Ok(uncomment_line(line)),
                State::Config => {
                    self.warn(span.warning(DiagnosticKind::NotAConfigEntry {
                        line: self.line_number,
                    }));
                }
                State::Normal | State::EndOfCode => {}
            },
        }

        Ok(Cow::Borrowed(line))
    }

    /// Finish the run, returning every warning collected
    ///
    /// Adds a warning if the input ended inside an open block.
    #[must_use]
    pub fn finish(mut self) -> Vec<Diagnostic> {
        if let Some(block) = self.state.open_block() {
            let span = self
                .block_start
                .unwrap_or_else(|| Span::from_positions(self.offset, self.offset));
            self.warn(DiagnosticKind::UnterminatedBlock { block }.warning_in(span));
        }

        self.warnings
    }

    /// Handle a tag directive seen outside any block
    fn open_block(&mut self, name: &str, span: Span) {
        info!(line = self.line_number, directive = %name, "read directive");

        let next = if name == CONFIG_TAG {
            State::Config
        } else if let Some(value) = self.config.get(name) {
            if value.is_truthy() {
                State::Uncomment
            } else {
                State::Comment
            }
        } else {
            debug!(directive = %name, "unknown directive ignored");
            return;
        };

        info!(line = self.line_number, directive = %name, state = %next, "entering block");
        self.state = next;
        self.block_start = Some(span);
    }

    /// Record a config entry
    fn declare(&mut self, name: &str, raw: &str, span: Span) {
        let value = FlagValue::from_entry(name, raw);
        info!(line = self.line_number, flag = %name, %value, "read config pair");

        if name == CONFIG_TAG || name == END_TAG {
            self.warn(span.warning(DiagnosticKind::ReservedFlagName {
                name: name.to_string(),
                line: self.line_number,
            }));
        }

        self.config.insert(name, value);
    }

    /// Keep a warning for the caller to report
    fn warn(&mut self, diagnostic: Diagnostic) {
        debug!(warning = %diagnostic.kind(), "recorded warning");
        self.warnings.push(diagnostic);
    }
}

/// Preprocess a whole input with no predeclared flags
///
/// # Errors
/// Returns the [`Diagnostic`] that stopped processing. No output is returned
/// in that case.
pub fn preprocess(source: &[u8]) -> Result<Preprocessed, Diagnostic> {
    preprocess_with(source, Config::new())
}

/// Preprocess a whole input, starting from the flags in `config`
///
/// # Errors
/// See [`preprocess`].
pub fn preprocess_with(source: &[u8], config: Config) -> Result<Preprocessed, Diagnostic> {
    let mut preprocessor = Preprocessor::with_config(config);
    let mut output = Vec::with_capacity(source.len());

    for line in source.split_inclusive(|&byte| byte == b'\n') {
        output.extend_from_slice(&preprocessor.process_line(line)?);
    }

    Ok(Preprocessed {
        output,
        warnings: preprocessor.finish(),
    })
}
