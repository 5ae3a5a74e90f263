//! Defines the [`Diagnostic`] type and how it is rendered for the user.

use std::{error::Error, io, str};

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};
use derive_more::Display;
use nlpp_utils::span::Spanned;

use crate::DiagnosticKind;

/// The severity of a [`Diagnostic`].
#[derive(Clone, PartialEq, Eq, Debug, Display)]
pub enum Severity {
    /// Error. Preprocessing stops and no output is written.
    #[display("error")]
    Error,
    /// Warning. Output is still produced.
    #[display("warning")]
    Warning,
}

impl Severity {
    /// Convert severity to ariadne's [`ReportKind`]
    const fn to_report_kind(&self) -> ReportKind<'static> {
        match *self {
            Self::Error => ReportKind::Error,
            Self::Warning => ReportKind::Warning,
        }
    }

    /// Get the color for this severity
    const fn color(&self) -> Color {
        match *self {
            Self::Error => Color::Red,
            Self::Warning => Color::Yellow,
        }
    }
}

/// A diagnostic message produced by the preprocessor
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{_0}: {_1}")]
pub struct Diagnostic(pub Severity, pub Spanned<DiagnosticKind>);

impl Diagnostic {
    /// The [`Severity`] of this diagnostic
    #[must_use]
    pub const fn severity(&self) -> &Severity {
        &self.0
    }

    /// The [`DiagnosticKind`] of this diagnostic along with its location
    #[must_use]
    pub const fn kind(&self) -> &Spanned<DiagnosticKind> {
        &self.1
    }

    /// Whether this diagnostic is only a warning
    #[must_use]
    pub fn is_warning(&self) -> bool {
        self.0 == Severity::Warning
    }

    /// Render this [`Diagnostic`] as an ariadne report against `source`
    ///
    /// `file_name` is shown in the report header. Pass `color: false` when
    /// the output is not a terminal. If `source` is not valid UTF-8 the
    /// report cannot show the offending line, so only the message and its
    /// byte range are rendered.
    ///
    /// # Errors
    /// Returns any error raised while writing the report.
    pub fn render(&self, source: &[u8], file_name: &str, color: bool) -> io::Result<String> {
        let span = self.1.span();

        let Ok(source) = str::from_utf8(source) else {
            return Ok(format!(
                "{self}\n  --> {file_name} (bytes {}..{})\n",
                span.start(),
                span.end()
            ));
        };

        let message = self.1.to_string();
        let report = Report::build(self.0.to_report_kind(), (file_name, span.range()))
            .with_config(
                Config::default()
                    .with_index_type(IndexType::Byte)
                    .with_color(color),
            )
            .with_message(message.clone())
            .with_label(
                Label::new((file_name, span.range()))
                    .with_message(message)
                    .with_color(self.0.color()),
            )
            .finish();

        let mut buffer = Vec::new();
        report.write((file_name, Source::from(source)), &mut buffer)?;

        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

impl Error for Diagnostic {}
