//! Defines everything the preprocessor can report about its input.

use nlpp_utils::span::{Span, Spannable};
use thiserror::Error;

use crate::{Diagnostic, Severity};

/// The list of possible diagnostics
///
/// Only [`DiagnosticKind::UnexpectedDirective`] stops processing. The other
/// kinds are reported as warnings next to the produced output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A directive other than `END` appeared inside a COMMENT or UNCOMMENT
    /// block.
    #[error("Unexpected preprocessor tag found: `{name}` inside a {block} block on line {line}")]
    UnexpectedDirective {
        /// The directive body, e.g. `DEBUG`
        name: String,
        /// The block the directive appeared in
        block: &'static str,
        /// 1-based line number
        line: usize,
    },

    /// A line inside a CONFIG block that is not a directive. It is passed
    /// through and does not declare anything.
    #[error("line {line} inside a CONFIG block is not a config entry and was ignored")]
    NotAConfigEntry {
        /// 1-based line number
        line: usize,
    },

    /// A CONFIG entry declared `CONFIG` or `END`, which can never be
    /// referenced as a flag.
    #[error("flag `{name}` on line {line} uses a reserved directive name and can never be referenced")]
    ReservedFlagName {
        /// The declared name
        name: String,
        /// 1-based line number
        line: usize,
    },

    /// Input ended while a block was still open.
    #[error("end of input reached inside an open {block} block (missing `;; $@END`)")]
    UnterminatedBlock {
        /// The block left open
        block: &'static str,
    },
}

impl DiagnosticKind {
    /// Create a [`Diagnostic`] with [`Severity::Error`] located at `span`
    #[must_use]
    pub fn error_in(self, span: Span) -> Diagnostic {
        Diagnostic(Severity::Error, self.in_span(span))
    }

    /// Create a [`Diagnostic`] with [`Severity::Warning`] located at `span`
    #[must_use]
    pub fn warning_in(self, span: Span) -> Diagnostic {
        Diagnostic(Severity::Warning, self.in_span(span))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unexpected_directive_message_names_the_tag() {
        let kind = DiagnosticKind::UnexpectedDirective {
            name: "UNKNOWN".to_string(),
            block: "COMMENT",
            line: 5,
        };
        assert_eq!(
            kind.to_string(),
            "Unexpected preprocessor tag found: `UNKNOWN` inside a COMMENT block on line 5"
        );
    }

    #[test]
    fn error_in_and_warning_in_pick_severity() {
        let span = Span::from_positions(0, 4);
        let error = DiagnosticKind::UnterminatedBlock { block: "CONFIG" }.error_in(span);
        let warning = DiagnosticKind::NotAConfigEntry { line: 2 }.warning_in(span);

        assert_eq!(error.severity(), &Severity::Error);
        assert_eq!(warning.severity(), &Severity::Warning);
        assert_eq!(warning.kind().span(), span);
    }
}
