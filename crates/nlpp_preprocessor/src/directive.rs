//! Recognition of directive lines and the end-of-code sentinel
//!
//! Every input line is classified once into a [`Line`] before the state
//! machine looks at it, so the transition rules dispatch on a variant instead
//! of re-inspecting the text. Lines are raw bytes: models are not required to
//! be valid UTF-8, only directive bodies are decoded (lossily).

use std::borrow::Cow;

use crate::State;

/// Marker that starts a directive once leading whitespace is removed
pub const DIRECTIVE_MARKER: &[u8] = b";; $@";

/// Marker at the very start of a line after which nothing is transformed
pub const END_OF_CODE_SENTINEL: &[u8] = b"@#$#@#$#@";

/// Directive that opens a CONFIG block
pub const CONFIG_TAG: &str = "CONFIG";

/// Directive that closes any open block
pub const END_TAG: &str = "END";

/// Flag whose value is kept as text instead of a boolean
pub const VERSION_FLAG: &str = "VERSION";

/// Whether `byte` counts as whitespace when trimming a line
///
/// ASCII only, including vertical tab. A non-breaking space is text.
const fn is_line_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | b'\x0b' | b'\x0c')
}

/// `line` without leading and trailing whitespace
#[must_use]
pub fn trim_line(line: &[u8]) -> &[u8] {
    let start = line
        .iter()
        .position(|&byte| !is_line_whitespace(byte))
        .unwrap_or(line.len());
    let end = line
        .iter()
        .rposition(|&byte| !is_line_whitespace(byte))
        .map_or(start, |last| last + 1);
    &line[start..end]
}

/// Whether `line` starts with the end-of-code sentinel. Leading whitespace is
/// not skipped.
#[must_use]
pub fn is_end_of_code(line: &[u8]) -> bool {
    line.starts_with(END_OF_CODE_SENTINEL)
}

/// The body of a directive line: the trimmed line without [`DIRECTIVE_MARKER`]
///
/// Returns [`None`] if `line` is not a directive. The body is not trimmed any
/// further, so `;; $@ FOO` has the body `" FOO"`.
#[must_use]
pub fn directive_body(line: &[u8]) -> Option<Cow<'_, str>> {
    trim_line(line)
        .strip_prefix(DIRECTIVE_MARKER)
        .map(String::from_utf8_lossy)
}

/// Whether `line` is a directive
#[must_use]
pub fn is_directive(line: &[u8]) -> bool {
    trim_line(line).starts_with(DIRECTIVE_MARKER)
}

/// A classified input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    /// The end-of-code sentinel
    Sentinel,
    /// A directive naming a block, a flag, or `END`
    Tag(Cow<'a, str>),
    /// A flag declaration inside a CONFIG block
    ConfigEntry {
        /// Everything before the first space
        name: String,
        /// Everything after the first space, empty if there is none
        value: String,
    },
    /// Any other line
    Plain,
}

impl<'a> Line<'a> {
    /// Classify `line` as seen while the preprocessor is in `state`
    ///
    /// Only inside a CONFIG block is a directive read as a config entry, and
    /// even there `END` stays a tag so the block can be closed.
    #[must_use]
    pub fn classify(line: &'a [u8], state: State) -> Self {
        if is_end_of_code(line) {
            return Self::Sentinel;
        }

        match directive_body(line) {
            None => Self::Plain,
            Some(body) if body == END_TAG || state != State::Config => Self::Tag(body),
            Some(body) => {
                let (name, value) = body.split_once(' ').unwrap_or((&*body, ""));
                Self::ConfigEntry {
                    name: name.to_string(),
                    value: value.to_string(),
                }
            }
        }
    }
}
