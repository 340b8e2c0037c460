//! Display-width measurement for terminal text.
//!
//! Width here means terminal columns, not bytes or chars:
//!
//! - ANSI color sequences (`ESC [ <digits and ;> m`) occupy no columns. Other
//!   escape sequences are counted like ordinary text
//! - East Asian "Wide" and "Fullwidth" characters occupy two columns
//! - every other character occupies one column
//!
//! Cells are also split into lines here, since every width and height
//! computation in the crate works line by line.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_width::UnicodeWidthChar;

static COLOR_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\x1b\[[0-9;]+m").expect("color code pattern is valid"));

/// Returns the display width of a string, ignoring ANSI color codes.
///
/// # Example
///
/// ```rust
/// use termtables::display_width;
///
/// assert_eq!(display_width("hello"), 5);
/// assert_eq!(display_width("\x1b[31mRed\x1b[39m"), 3);
/// assert_eq!(display_width("世界"), 4);
/// assert_eq!(display_width(""), 0);
/// ```
pub fn display_width(s: &str) -> usize {
    if s.contains('\x1b') {
        COLOR_CODE.replace_all(s, "").chars().map(char_width).sum()
    } else {
        s.chars().map(char_width).sum()
    }
}

/// Returns the display width of raw bytes.
///
/// The bytes are decoded as UTF-8 first. Input that isn't valid UTF-8 is
/// measured by its byte length instead of failing.
///
/// ```rust
/// use termtables::display_width_bytes;
///
/// assert_eq!(display_width_bytes("世界".as_bytes()), 4);
/// assert_eq!(display_width_bytes(&[0xff, 0xfe, b'a']), 3);
/// ```
pub fn display_width_bytes(bytes: &[u8]) -> usize {
    match std::str::from_utf8(bytes) {
        Ok(s) => display_width(s),
        Err(err) => {
            debug!(
                "measuring {} bytes by raw length, not valid UTF-8: {}",
                bytes.len(),
                err
            );
            bytes.len()
        }
    }
}

/// Splits cell text into display lines.
///
/// Unlike [`str::lines`], a trailing newline produces a trailing empty line
/// and the empty string produces one empty line. A `\r` before each `\n` is
/// dropped.
///
/// ```rust
/// use termtables::split_lines;
///
/// assert_eq!(split_lines("a\nb").collect::<Vec<_>>(), vec!["a", "b"]);
/// assert_eq!(split_lines("a\n").collect::<Vec<_>>(), vec!["a", ""]);
/// assert_eq!(split_lines("").collect::<Vec<_>>(), vec![""]);
/// ```
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> + '_ {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Number of display lines in a cell, always at least one.
pub fn line_count(text: &str) -> usize {
    text.matches('\n').count() + 1
}

/// Display width of the widest line in a cell.
pub fn max_line_width(text: &str) -> usize {
    split_lines(text).map(display_width).max().unwrap_or(0)
}

fn char_width(c: char) -> usize {
    match c.width() {
        Some(2) => 2,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_width_ascii() {
        assert_eq!(display_width("Avocado"), 7);
        assert_eq!(display_width(" "), 1);
    }

    #[test]
    fn test_display_width_empty() {
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn test_display_width_only_escapes() {
        assert_eq!(display_width("\x1b[31m\x1b[0m"), 0);
        assert_eq!(display_width("\x1b[1;34m"), 0);
    }

    #[test]
    fn test_display_width_colored() {
        assert_eq!(display_width("\x1b[31mRed\x1b[39m"), 3);
        assert_eq!(display_width("\x1b[34mTest\x1b[0m"), 4);
        assert_eq!(display_width("a\x1b[1;32mbc\x1b[0md"), 4);
    }

    #[test]
    fn test_display_width_non_color_escapes_count() {
        assert_eq!(display_width("\x1b[2Jab"), 6);
        assert_eq!(display_width("\x1b[1A"), 4);
        assert_eq!(display_width("\x1b[m"), 3);
        assert_eq!(display_width("\x1b[mx\x1b[0m"), 4);
    }

    #[test]
    fn test_display_width_cjk() {
        assert_eq!(display_width("世界"), 4);
        assert_eq!(display_width("蓝色"), 4);
        assert_eq!(display_width("世界你好"), 8);
        assert_eq!(display_width("ａｂ"), 4); // fullwidth latin
    }

    #[test]
    fn test_display_width_rtl() {
        assert_eq!(display_width("שלום"), 4);
        assert_eq!(display_width("معرب"), 4);
    }

    #[test]
    fn test_display_width_mixed() {
        assert_eq!(display_width("\x1b[31m世\x1b[0mx"), 3);
    }

    #[test]
    fn test_display_width_bytes_valid() {
        assert_eq!(display_width_bytes(b"hello"), 5);
        assert_eq!(display_width_bytes("蓝色".as_bytes()), 4);
    }

    #[test]
    fn test_display_width_bytes_invalid_falls_back_to_len() {
        assert_eq!(display_width_bytes(&[0xc3, 0x28]), 2);
        assert_eq!(display_width_bytes(&[0xff]), 1);
    }

    #[test]
    fn test_split_lines_trailing_newline() {
        let lines: Vec<_> = split_lines("Row Three\n").collect();
        assert_eq!(lines, vec!["Row Three", ""]);
    }

    #[test]
    fn test_split_lines_leading_newline() {
        let lines: Vec<_> = split_lines("\nRow Four").collect();
        assert_eq!(lines, vec!["", "Row Four"]);
    }

    #[test]
    fn test_split_lines_crlf() {
        let lines: Vec<_> = split_lines("a\r\nb").collect();
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn test_line_count() {
        assert_eq!(line_count(""), 1);
        assert_eq!(line_count("one"), 1);
        assert_eq!(line_count("One\nTwo"), 2);
        assert_eq!(line_count("Buckle\nMy\nShoe"), 3);
        assert_eq!(line_count("trailing\n"), 2);
    }

    #[test]
    fn test_max_line_width() {
        assert_eq!(max_line_width(""), 0);
        assert_eq!(max_line_width("Buckle\nMy\nShoe"), 6);
        assert_eq!(max_line_width("ab\n世界"), 4);
    }
}
