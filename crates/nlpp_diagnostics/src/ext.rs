//! Extension traits for building NLPP diagnostics

use nlpp_utils::span::Span;

use crate::{Diagnostic, DiagnosticKind};

/// A trait to easily create [`Diagnostic`]s from [`Span`]s
pub trait SpanExt {
    /// Create an error [`Diagnostic`] from this [`Span`] and a [`DiagnosticKind`]
    #[must_use]
    fn error(self, kind: DiagnosticKind) -> Diagnostic;

    /// Create a warning [`Diagnostic`] from this [`Span`] and a
    /// [`DiagnosticKind`]
    #[must_use]
    fn warning(self, kind: DiagnosticKind) -> Diagnostic;
}
impl SpanExt for Span {
    #[inline]
    fn error(self, kind: DiagnosticKind) -> Diagnostic {
        kind.error_in(self)
    }

    #[inline]
    fn warning(self, kind: DiagnosticKind) -> Diagnostic {
        kind.warning_in(self)
    }
}
