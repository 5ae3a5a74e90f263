//! Text rewrites applied to lines inside COMMENT and UNCOMMENT blocks
//!
//! Both only look at the first one or two bytes after leading whitespace. A
//! single `;` marks a commented line; `;;` is a regular comment (or a
//! directive) and is never touched by uncommenting.

use std::borrow::Cow;

use crate::directive::trim_line;

/// Comment out `line` by prefixing `"; "`, unless it is already commented
#[must_use]
pub fn comment_line(line: &[u8]) -> Cow<'_, [u8]> {
    let already_commented = trim_line(line)
        .strip_prefix(b";")
        .is_some_and(|rest| !rest.starts_with(b";"));

    if already_commented {
        Cow::Borrowed(line)
    } else {
        let mut commented = Vec::with_capacity(line.len() + 2);
        commented.extend_from_slice(b"; ");
        commented.extend_from_slice(line);
        Cow::Owned(commented)
    }
}

/// Remove the first `;` from a line commented out with a single `;`
#[must_use]
pub fn uncomment_line(line: &[u8]) -> Cow<'_, [u8]> {
    let trimmed = trim_line(line);
    if trimmed.starts_with(b";;") || !trimmed.starts_with(b";") {
        return Cow::Borrowed(line);
    }

    match line.iter().position(|&byte| byte == b';') {
        Some(at) => Cow::Owned([&line[..at], &line[at + 1..]].concat()),
        None => Cow::Borrowed(line),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_prefixes_code() {
        assert_eq!(&*comment_line(b"  fd 1\n"), b";   fd 1\n");
        assert_eq!(&*comment_line(b"x = 1"), b"; x = 1");
    }

    #[test]
    fn comment_leaves_single_semicolon_lines() {
        assert_eq!(&*comment_line(b"; x = 1\n"), b"; x = 1\n");
        assert_eq!(&*comment_line(b"   ;fd 1\n"), b"   ;fd 1\n");
        assert!(matches!(comment_line(b"; x = 1\n"), Cow::Borrowed(_)));
    }

    #[test]
    fn comment_prefixes_double_semicolon_lines() {
        assert_eq!(&*comment_line(b";; a note\n"), b"; ;; a note\n");
    }

    #[test]
    fn comment_prefixes_blank_lines() {
        assert_eq!(&*comment_line(b"\n"), b"; \n");
    }

    #[test]
    fn comment_prefixes_line_indented_with_non_breaking_space() {
        let line = "\u{a0};x\n".as_bytes();
        assert_eq!(&*comment_line(line), [b"; ".as_slice(), line].concat().as_slice());
    }

    #[test]
    fn comment_keeps_invalid_utf8_bytes() {
        assert_eq!(&*comment_line(b"caf\xE9\n"), b"; caf\xE9\n");
    }

    #[test]
    fn uncomment_removes_first_semicolon_only() {
        assert_eq!(&*uncomment_line(b"; fd 1\n"), b" fd 1\n");
        assert_eq!(&*uncomment_line(b"  ;fd 1 ; note\n"), b"  fd 1 ; note\n");
    }

    #[test]
    fn uncomment_leaves_plain_and_double_comment_lines() {
        assert_eq!(&*uncomment_line(b"fd 1\n"), b"fd 1\n");
        assert_eq!(&*uncomment_line(b";; a note\n"), b";; a note\n");
        assert_eq!(&*uncomment_line(b"\n"), b"\n");
    }

    #[test]
    fn uncomment_reverses_comment_up_to_the_separator_space() {
        let commented = comment_line(b"fd 1\n");
        assert_eq!(&*commented, b"; fd 1\n");
        assert_eq!(&*uncomment_line(&commented), b" fd 1\n");
    }
}
