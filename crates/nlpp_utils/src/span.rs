//! Associations to spans within the input source
//!
//! The preprocessor reports problems against whole lines, so a [`Span`] here
//! is the byte range a line occupies within the input (terminator included).
//! [`Spanned<T>`] attaches such a range to a value, and the [`Spannable`]
//! trait allows building one with a chained method call.

use std::{fmt::Display, ops::Range};

/// Represents the start and end of some segment of a string
///
/// Obtained through [`Span::from_positions`], [`Span::of_line`] or from a
/// [`Spanned<T>`] ([`Spanned::span`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span(usize, usize);
impl Span {
    /// Create a new [`Span`] given a start and end location.
    ///
    /// # Panics
    /// Panics if `start > end`.
    #[must_use]
    pub fn from_positions(start: usize, end: usize) -> Self {
        assert!(
            end >= start,
            "span must have positive length (got span {start}..{end})"
        );
        Self(start, end)
    }

    /// Create the [`Span`] covering `line`, which begins at byte `offset`
    #[must_use]
    #[inline]
    pub fn of_line(offset: usize, line: &[u8]) -> Self {
        Self::from_positions(offset, offset + line.len())
    }

    /// Obtains the starting position of this [`Span`] as a `usize`
    #[must_use]
    #[inline]
    pub const fn start(&self) -> usize {
        self.0
    }

    /// Obtains the ending position of this [`Span`] as a `usize`
    #[must_use]
    #[inline]
    pub const fn end(&self) -> usize {
        self.1
    }

    /// Convert this [`Span`] into a half-open [`Range`], good for slicing into
    /// your input
    #[must_use]
    #[inline]
    pub const fn range(&self) -> Range<usize> {
        self.start()..self.end()
    }
}

/// Represents something (`T`) contained within a [`Span`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spanned<T>(Span, T);
impl<T> Spanned<T> {
    /// Create a new [`Spanned<T>`] instance from a [`Span`] and value
    #[must_use]
    #[inline]
    pub const fn from_span_and_value(span: Span, value: T) -> Self {
        Self(span, value)
    }

    /// Obtains the [`Span`] associated with this [`Spanned<T>`] instance
    #[must_use]
    #[inline]
    pub const fn span(&self) -> Span {
        self.0
    }

    /// Obtains a reference to the value this [`Spanned<T>`] instance wraps
    #[inline]
    pub const fn value(&self) -> &T {
        &self.1
    }
}
impl<T> Display for Spanned<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.value().fmt(f)
    }
}

/// A trait automatically implemented on all types that allows you to attach a
/// [`Span`] to something, creating a [`Spanned<T>`] instance.
pub trait Spannable
where
    Self: Sized,
{
    /// Attach a [`Span`] to this value, creating a [`Spanned<T>`] instance
    fn in_span(self, span: Span) -> Spanned<Self>;
}

impl<T: Sized> Spannable for T {
    #[inline]
    fn in_span(self, span: Span) -> Spanned<Self> {
        Spanned::from_span_and_value(span, self)
    }
}

/// Create a [`Spanned<T>`] instance from two locations and a value.
///
/// # Panics
/// Panics if `start > end`.
#[macro_export]
macro_rules! spanned {
    ($start:expr, $value:expr, $end:expr) => {
        $crate::span::Spanned::from_span_and_value(
            $crate::span::Span::from_positions($start, $end),
            $value,
        )
    };
}
