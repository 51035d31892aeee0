//! Line splitting.
//!
//! A line ends at `\r\n` or at any single line-break character: `\n`, `\r`,
//! vertical tab, form feed, the file/group/record separators `\x1c`-`\x1e`,
//! NEL (`\u{85}`), and the Unicode line and paragraph separators. The
//! terminator is not part of the line, and a terminator at the very end of
//! the text does not start a new (empty) line. Empty text has no lines at all.

use std::iter::FusedIterator;

/// Iterator over the lines of a text. Created by [`split_lines`].
#[derive(Clone, Debug)]
pub struct Lines<'a> {
    rest: &'a str,
}

/// Split `text` into its lines.
///
/// ```
/// use seqdiff_report::split_lines;
///
/// let lines: Vec<&str> = split_lines("a\r\nb\rc\n").collect();
/// assert_eq!(lines, ["a", "b", "c"]);
/// assert_eq!(split_lines("").count(), 0);
/// ```
pub fn split_lines(text: &str) -> Lines<'_> {
    Lines { rest: text }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        match self.rest.char_indices().find(|&(_, c)| is_line_break(c)) {
            Some((pos, c)) => {
                let line = &self.rest[..pos];
                let terminator = if self.rest[pos..].starts_with("\r\n") {
                    2
                } else {
                    c.len_utf8()
                };
                self.rest = &self.rest[pos + terminator..];
                Some(line)
            }
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            }
        }
    }
}

impl FusedIterator for Lines<'_> {}

/// Characters that end a line on their own.
pub fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<&str> {
        split_lines(text).collect()
    }

    #[test]
    fn empty_text_has_no_lines() {
        assert!(lines("").is_empty());
    }

    #[test]
    fn single_line_without_terminator() {
        assert_eq!(lines("x"), ["x"]);
    }

    #[test]
    fn trailing_terminator_adds_no_line() {
        assert_eq!(lines("a\nb\n"), ["a", "b"]);
        assert_eq!(lines("a\r\nb\r\n"), ["a", "b"]);
        assert_eq!(lines("a\rb\r"), ["a", "b"]);
    }

    #[test]
    fn lone_newline_is_one_empty_line() {
        assert_eq!(lines("\n"), [""]);
        assert_eq!(lines("\r\n"), [""]);
    }

    #[test]
    fn blank_lines_are_kept() {
        assert_eq!(lines("a\n\nb"), ["a", "", "b"]);
        assert_eq!(lines("a\n\n"), ["a", ""]);
    }

    #[test]
    fn mixed_terminators() {
        assert_eq!(lines("one\r\ntwo\nthree\rfour"), ["one", "two", "three", "four"]);
    }

    #[test]
    fn crlf_is_a_single_terminator() {
        // "\r\n" is one break, "\n\r" is two.
        assert_eq!(lines("a\r\nb"), ["a", "b"]);
        assert_eq!(lines("a\n\rb"), ["a", "", "b"]);
    }

    #[test]
    fn control_separators_break_lines() {
        assert_eq!(lines("a\u{0b}b"), ["a", "b"]);
        assert_eq!(lines("a\u{0c}b"), ["a", "b"]);
        assert_eq!(lines("a\u{1c}b"), ["a", "b"]);
        assert_eq!(lines("a\u{1d}b"), ["a", "b"]);
        assert_eq!(lines("a\u{1e}b"), ["a", "b"]);
    }

    #[test]
    fn unicode_separators_break_lines() {
        assert_eq!(lines("a\u{85}b"), ["a", "b"]);
        assert_eq!(lines("a\u{2028}b"), ["a", "b"]);
        assert_eq!(lines("a\u{2029}b"), ["a", "b"]);
    }

    #[test]
    fn multibyte_terminator_at_end_adds_no_line() {
        assert_eq!(lines("a\u{2029}"), ["a"]);
        assert_eq!(lines("\u{2028}\u{2028}x"), ["", "", "x"]);
    }

    #[test]
    fn only_crlf_pairs_up() {
        // A separator followed by "\n" is two breaks.
        assert_eq!(lines("a\u{0c}\nb"), ["a", "", "b"]);
        assert_eq!(lines("a\r\u{85}b"), ["a", "", "b"]);
    }

    #[test]
    fn tab_and_space_do_not_break() {
        assert!(!is_line_break('\t'));
        assert!(!is_line_break(' '));
        assert!(!is_line_break('\u{1f}'));
    }

    #[test]
    fn whitespace_is_preserved() {
        assert_eq!(lines("  a \t\nb  "), ["  a \t", "b  "]);
    }

    #[test]
    fn multibyte_text() {
        assert_eq!(lines("línea\nÁÉ\r\n漢字"), ["línea", "ÁÉ", "漢字"]);
    }

    #[test]
    fn iterator_is_fused() {
        let mut it = split_lines("a");
        assert_eq!(it.next(), Some("a"));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }
}
