//! Cell alignment and padding.
//!
//! [`align_and_pad`] turns one cell's text into a rectangular block of lines:
//! every line has the same display width and the block has the requested
//! number of lines. The table assembler calls it once per cell with the
//! column's inner width and the row's inner height.

use serde::{Deserialize, Serialize};

use crate::width::{display_width, split_lines};

/// Horizontal text alignment within a column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Justify {
    /// Left-align text (pad on the right).
    #[default]
    Left,
    /// Center text. An odd leftover column goes on the right.
    Center,
    /// Right-align text (pad on the left).
    Right,
}

/// Vertical placement of a cell's lines within a taller row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    /// Lines start at the top; blank lines follow.
    #[default]
    Top,
    /// Lines are centered; an odd blank line goes above.
    #[serde(alias = "center")]
    Middle,
    /// Lines end at the bottom; blank lines precede.
    Bottom,
}

/// Combined horizontal and vertical alignment for one cell.
///
/// `justify` is optional so callers can tell "explicitly left" apart from
/// "unspecified" (Markdown alignment markers depend on it). Both render as
/// left-aligned text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CellAlign {
    /// Horizontal alignment, left when unset.
    pub justify: Option<Justify>,
    /// Vertical alignment.
    pub vertical: VerticalAlign,
}

impl CellAlign {
    /// Top-left alignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the horizontal alignment.
    pub fn justify(mut self, justify: Justify) -> Self {
        self.justify = Some(justify);
        self
    }

    /// Set the vertical alignment.
    pub fn vertical(mut self, vertical: VerticalAlign) -> Self {
        self.vertical = vertical;
        self
    }
}

impl From<Justify> for CellAlign {
    fn from(justify: Justify) -> Self {
        CellAlign::new().justify(justify)
    }
}

/// Padding around a cell's content, in columns (left/right) and lines
/// (top/bottom).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Padding {
    /// Spaces before the content on every line.
    pub left: usize,
    /// Spaces after the content on every line.
    pub right: usize,
    /// Blank lines above the content.
    pub top: usize,
    /// Blank lines below the content.
    pub bottom: usize,
}

impl Padding {
    /// No padding on any side.
    pub const NONE: Padding = Padding {
        left: 0,
        right: 0,
        top: 0,
        bottom: 0,
    };

    /// Padding on all four sides.
    pub fn new(left: usize, right: usize, top: usize, bottom: usize) -> Self {
        Padding {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Left and right padding only. This is what tables use.
    pub fn horizontal(left: usize, right: usize) -> Self {
        Padding {
            left,
            right,
            top: 0,
            bottom: 0,
        }
    }
}

/// Aligns a cell's text to a fixed box and pads it with spaces.
///
/// Returns `padding.top + inner_height + padding.bottom` lines, each exactly
/// `padding.left + inner_width + padding.right` columns wide. Text with more
/// lines than `inner_height`, or lines wider than `inner_width`, is kept as is
/// and never truncated.
///
/// # Example
///
/// ```rust
/// use termtables::{align_and_pad, CellAlign, Justify, Padding};
///
/// let lines = align_and_pad("A\nBB", CellAlign::new(), 2, 2, Padding::NONE);
/// assert_eq!(lines, vec!["A ", "BB"]);
///
/// let lines = align_and_pad("x", Justify::Right.into(), 3, 2, Padding::horizontal(1, 1));
/// assert_eq!(lines, vec!["   x ", "     "]);
/// ```
pub fn align_and_pad(
    text: &str,
    align: CellAlign,
    inner_width: usize,
    inner_height: usize,
    padding: Padding,
) -> Vec<String> {
    align_and_pad_with(text, align, inner_width, inner_height, padding, ' ')
}

/// Like [`align_and_pad`], but fills with `fill` instead of spaces.
///
/// `fill` should be a single-column visible character.
pub fn align_and_pad_with(
    text: &str,
    align: CellAlign,
    inner_width: usize,
    inner_height: usize,
    padding: Padding,
    fill: char,
) -> Vec<String> {
    let lines: Vec<&str> = split_lines(text).collect();
    let missing = inner_height.saturating_sub(lines.len());
    let (above, below) = match align.vertical {
        VerticalAlign::Top => (0, missing),
        VerticalAlign::Bottom => (missing, 0),
        VerticalAlign::Middle => (missing / 2 + missing % 2, missing / 2),
    };

    let justify = align.justify.unwrap_or_default();
    let blank: String = std::iter::repeat(fill)
        .take(padding.left + inner_width + padding.right)
        .collect();

    let mut out = Vec::with_capacity(padding.top + above + lines.len() + below + padding.bottom);
    out.extend(std::iter::repeat(blank.clone()).take(padding.top + above));
    for line in lines {
        out.push(justify_line(line, justify, inner_width, padding, fill));
    }
    out.extend(std::iter::repeat(blank).take(below + padding.bottom));
    out
}

fn justify_line(
    line: &str,
    justify: Justify,
    inner_width: usize,
    padding: Padding,
    fill: char,
) -> String {
    let gap = inner_width.saturating_sub(display_width(line));
    let (before, after) = match justify {
        Justify::Left => (0, gap),
        Justify::Right => (gap, 0),
        Justify::Center => (gap / 2, gap - gap / 2),
    };

    let mut out = String::with_capacity(line.len() + padding.left + padding.right + gap);
    out.extend(std::iter::repeat(fill).take(padding.left + before));
    out.push_str(line);
    out.extend(std::iter::repeat(fill).take(after + padding.right));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pad(text: &str, align: CellAlign, w: usize, h: usize, p: Padding) -> Vec<String> {
        align_and_pad(text, align, w, h, p)
    }

    #[test]
    fn test_empty_is_one_blank_line() {
        assert_eq!(pad("", CellAlign::new(), 0, 1, Padding::NONE), vec![""]);
        assert_eq!(
            pad("", CellAlign::new(), 3, 1, Padding::horizontal(1, 1)),
            vec!["     "]
        );
    }

    #[test]
    fn test_multi_line_top_left() {
        assert_eq!(
            pad("A\nBB", CellAlign::new(), 2, 2, Padding::NONE),
            vec!["A ", "BB"]
        );
    }

    #[test]
    fn test_horizontal_alignment() {
        let p = Padding::NONE;
        assert_eq!(pad("ab", Justify::Left.into(), 5, 1, p), vec!["ab   "]);
        assert_eq!(pad("ab", Justify::Right.into(), 5, 1, p), vec!["   ab"]);
        assert_eq!(pad("ab", Justify::Center.into(), 5, 1, p), vec![" ab  "]);
        assert_eq!(pad("red", Justify::Center.into(), 5, 1, p), vec![" red "]);
    }

    #[test]
    fn test_center_odd_space_goes_right() {
        assert_eq!(
            pad("a", Justify::Center.into(), 4, 1, Padding::NONE),
            vec![" a  "]
        );
    }

    #[test]
    fn test_padding_applied_after_alignment() {
        assert_eq!(
            pad("x", Justify::Right.into(), 3, 1, Padding::horizontal(2, 1)),
            vec!["    x "]
        );
        assert_eq!(
            pad("x", Justify::Center.into(), 3, 1, Padding::horizontal(1, 2)),
            vec!["  x   "]
        );
    }

    #[test]
    fn test_vertical_top_default() {
        assert_eq!(
            pad("a", CellAlign::new(), 1, 3, Padding::NONE),
            vec!["a", " ", " "]
        );
    }

    #[test]
    fn test_vertical_bottom() {
        let align = CellAlign::new().vertical(VerticalAlign::Bottom);
        assert_eq!(pad("a", align, 1, 3, Padding::NONE), vec![" ", " ", "a"]);
    }

    #[test]
    fn test_vertical_middle_odd_remainder_above() {
        let align = CellAlign::new().vertical(VerticalAlign::Middle);
        assert_eq!(pad("a", align, 1, 3, Padding::NONE), vec![" ", "a", " "]);
        assert_eq!(
            pad("a", align, 1, 4, Padding::NONE),
            vec![" ", " ", "a", " "]
        );
    }

    #[test]
    fn test_top_and_bottom_padding() {
        let lines = pad("a", CellAlign::new(), 1, 1, Padding::new(1, 1, 1, 2));
        assert_eq!(lines, vec!["   ", " a ", "   ", "   "]);
    }

    #[test]
    fn test_trailing_newline_adds_blank_line() {
        assert_eq!(
            pad("Row Three\n", CellAlign::new(), 9, 2, Padding::NONE),
            vec!["Row Three", "         "]
        );
    }

    #[test]
    fn test_wide_characters_use_display_width() {
        let lines = pad("世界", Justify::Right.into(), 6, 1, Padding::horizontal(1, 1));
        assert_eq!(lines, vec!["   世界 "]);
        assert_eq!(display_width(&lines[0]), 8);
    }

    #[test]
    fn test_colored_text_uses_display_width() {
        let text = "\x1b[31mRed\x1b[39m";
        let lines = pad(text, Justify::Left.into(), 5, 1, Padding::NONE);
        assert_eq!(lines, vec![format!("{}  ", text)]);
        assert_eq!(display_width(&lines[0]), 5);
    }

    #[test]
    fn test_custom_fill() {
        let lines = align_and_pad_with(
            "ab",
            Justify::Center.into(),
            4,
            2,
            Padding::horizontal(1, 1),
            '.',
        );
        assert_eq!(lines, vec!["..ab..", "......"]);
    }

    #[test]
    fn test_overflow_is_not_truncated() {
        assert_eq!(
            pad("toolong", CellAlign::new(), 3, 1, Padding::NONE),
            vec!["toolong"]
        );
        assert_eq!(
            pad("a\nb\nc", CellAlign::new(), 1, 1, Padding::NONE),
            vec!["a", "b", "c"]
        );
    }
}
