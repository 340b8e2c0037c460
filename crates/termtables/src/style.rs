//! Border glyphs, layout flags and the named style presets.
//!
//! A [`TableStyle`] is plain data: the assembler runs one algorithm for every
//! look and reads glyphs and toggles from the style. Presets are constructors
//! (and a serializable [`Preset`] name) rather than separate table types.
//!
//! Picking a preset for the host (box drawing vs. ASCII on a limited console)
//! is left to the caller.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::align::{Justify, VerticalAlign};
use crate::error::TableError;

/// The eleven glyphs used to draw table borders.
///
/// Glyphs are strings so they may carry escape sequences (e.g. terminal
/// line-drawing mode). An empty string draws nothing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorderChars {
    /// Fill for horizontal borders.
    pub horizontal: String,
    /// Left/right edges and column separators on content lines.
    pub vertical: String,
    pub top_left: String,
    pub top_right: String,
    pub bottom_left: String,
    pub bottom_right: String,
    /// Left edge of an inner horizontal border.
    pub left_t: String,
    /// Crossing of an inner horizontal border and a column separator.
    pub cross: String,
    /// Right edge of an inner horizontal border.
    pub right_t: String,
    /// Column separator meeting the top border.
    pub top_t: String,
    /// Column separator meeting the bottom border.
    pub bottom_t: String,
}

impl BorderChars {
    #[allow(clippy::too_many_arguments)]
    fn from_glyphs(
        horizontal: &str,
        vertical: &str,
        top_left: &str,
        top_right: &str,
        bottom_left: &str,
        bottom_right: &str,
        left_t: &str,
        cross: &str,
        right_t: &str,
        top_t: &str,
        bottom_t: &str,
    ) -> Self {
        BorderChars {
            horizontal: horizontal.into(),
            vertical: vertical.into(),
            top_left: top_left.into(),
            top_right: top_right.into(),
            bottom_left: bottom_left.into(),
            bottom_right: bottom_right.into(),
            left_t: left_t.into(),
            cross: cross.into(),
            right_t: right_t.into(),
            top_t: top_t.into(),
            bottom_t: bottom_t.into(),
        }
    }

    /// ASCII borders: +, -, |
    pub fn ascii() -> Self {
        Self::from_glyphs("-", "|", "+", "+", "+", "+", "+", "+", "+", "+", "+")
    }

    /// Light box-drawing characters: ┌, ─, ┐, │, └, ┘, ├, ┼, ┤, ┬, ┴
    pub fn light() -> Self {
        Self::from_glyphs("─", "│", "┌", "┐", "└", "┘", "├", "┼", "┤", "┬", "┴")
    }

    /// Heavy box-drawing characters: ┏, ━, ┓, ┃, ┗, ┛, ┣, ╋, ┫, ┳, ┻
    pub fn heavy() -> Self {
        Self::from_glyphs("━", "┃", "┏", "┓", "┗", "┛", "┣", "╋", "┫", "┳", "┻")
    }

    /// Double-line box drawing: ╔, ═, ╗, ║, ╚, ╝, ╠, ╬, ╣, ╦, ╩
    pub fn double() -> Self {
        Self::from_glyphs("═", "║", "╔", "╗", "╚", "╝", "╠", "╬", "╣", "╦", "╩")
    }

    /// Rounded corners with light lines: ╭, ─, ╮, │, ╰, ╯, ├, ┼, ┤, ┬, ┴
    pub fn rounded() -> Self {
        Self::from_glyphs("─", "│", "╭", "╮", "╰", "╯", "├", "┼", "┤", "┬", "┴")
    }
}

impl Default for BorderChars {
    fn default() -> Self {
        Self::ascii()
    }
}

/// How rows and rules are arranged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Regular box: optional top/bottom borders, inner rules per the style flags.
    #[default]
    Boxed,
    /// GitHub-flavored Markdown: no top/bottom border and no title. The header
    /// is followed by an alignment-marker rule. Footing and row rules are not
    /// drawn.
    Markdown,
}

/// Everything that controls how one table is drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableStyle {
    /// Border glyphs.
    pub chars: BorderChars,
    /// Row and rule arrangement.
    pub layout: Layout,
    /// Draw the top, left, right and bottom border.
    pub outer_border: bool,
    /// Separate columns with a vertical line.
    pub inner_column_border: bool,
    /// Draw a rule below the first row.
    pub inner_heading_row_border: bool,
    /// Draw a rule above the last row.
    pub inner_footing_row_border: bool,
    /// Draw a rule between every pair of rows.
    pub inner_row_border: bool,
    /// Horizontal alignment per column index. Unlisted columns are left-aligned.
    pub justify_columns: BTreeMap<usize, Justify>,
    /// Vertical alignment of cells in multi-line rows.
    pub vertical_align: VerticalAlign,
    /// Spaces before each cell's content.
    pub padding_left: usize,
    /// Spaces after each cell's content.
    pub padding_right: usize,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self::ascii()
    }
}

impl TableStyle {
    /// Plain ASCII box with a rule under the header.
    ///
    /// ```text
    /// +---------+-------+
    /// | Name    | Color |
    /// +---------+-------+
    /// | Avocado | green |
    /// +---------+-------+
    /// ```
    pub fn ascii() -> Self {
        TableStyle {
            chars: BorderChars::ascii(),
            layout: Layout::Boxed,
            outer_border: true,
            inner_column_border: true,
            inner_heading_row_border: true,
            inner_footing_row_border: false,
            inner_row_border: false,
            justify_columns: BTreeMap::new(),
            vertical_align: VerticalAlign::Top,
            padding_left: 1,
            padding_right: 1,
        }
    }

    /// Single-line Unicode box drawing.
    pub fn single() -> Self {
        Self::ascii().chars(BorderChars::light())
    }

    /// Double-line Unicode box drawing.
    pub fn double() -> Self {
        Self::ascii().chars(BorderChars::double())
    }

    /// Heavy-line Unicode box drawing.
    pub fn heavy() -> Self {
        Self::ascii().chars(BorderChars::heavy())
    }

    /// Light lines with rounded corners.
    pub fn rounded() -> Self {
        Self::ascii().chars(BorderChars::rounded())
    }

    /// GitHub-flavored Markdown table.
    ///
    /// ```text
    /// | Name    | Color |
    /// |---------|------:|
    /// | Avocado | green |
    /// ```
    pub fn markdown() -> Self {
        TableStyle {
            layout: Layout::Markdown,
            ..Self::ascii()
        }
    }

    /// Borderless output meant for scripts: column separators only.
    pub fn porcelain() -> Self {
        TableStyle {
            outer_border: false,
            inner_heading_row_border: false,
            ..Self::ascii()
        }
    }

    /// Replace the border glyphs.
    pub fn chars(mut self, chars: BorderChars) -> Self {
        self.chars = chars;
        self
    }

    /// Set the alignment of one column.
    pub fn justify(mut self, column: usize, justify: Justify) -> Self {
        self.justify_columns.insert(column, justify);
        self
    }

    /// Set left and right cell padding.
    pub fn padding(mut self, left: usize, right: usize) -> Self {
        self.padding_left = left;
        self.padding_right = right;
        self
    }

    /// Set vertical alignment for multi-line rows.
    pub fn vertical_align(mut self, vertical: VerticalAlign) -> Self {
        self.vertical_align = vertical;
        self
    }

    /// Toggle the outer border.
    pub fn outer_border(mut self, enable: bool) -> Self {
        self.outer_border = enable;
        self
    }

    /// Toggle column separators.
    pub fn inner_column_border(mut self, enable: bool) -> Self {
        self.inner_column_border = enable;
        self
    }

    /// Toggle the rule below the first row.
    pub fn inner_heading_row_border(mut self, enable: bool) -> Self {
        self.inner_heading_row_border = enable;
        self
    }

    /// Toggle the rule above the last row.
    pub fn inner_footing_row_border(mut self, enable: bool) -> Self {
        self.inner_footing_row_border = enable;
        self
    }

    /// Toggle rules between all rows.
    pub fn inner_row_border(mut self, enable: bool) -> Self {
        self.inner_row_border = enable;
        self
    }
}

/// Named style presets, usable from config files and the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    #[default]
    Ascii,
    Single,
    Double,
    Heavy,
    Rounded,
    Markdown,
    Porcelain,
}

impl Preset {
    /// All presets, in display order.
    pub const ALL: [Preset; 7] = [
        Preset::Ascii,
        Preset::Single,
        Preset::Double,
        Preset::Heavy,
        Preset::Rounded,
        Preset::Markdown,
        Preset::Porcelain,
    ];

    /// The style this preset names.
    pub fn style(self) -> TableStyle {
        match self {
            Preset::Ascii => TableStyle::ascii(),
            Preset::Single => TableStyle::single(),
            Preset::Double => TableStyle::double(),
            Preset::Heavy => TableStyle::heavy(),
            Preset::Rounded => TableStyle::rounded(),
            Preset::Markdown => TableStyle::markdown(),
            Preset::Porcelain => TableStyle::porcelain(),
        }
    }

    /// Lowercase name, as accepted by [`str::parse`].
    pub fn name(self) -> &'static str {
        match self {
            Preset::Ascii => "ascii",
            Preset::Single => "single",
            Preset::Double => "double",
            Preset::Heavy => "heavy",
            Preset::Rounded => "rounded",
            Preset::Markdown => "markdown",
            Preset::Porcelain => "porcelain",
        }
    }
}

impl std::str::FromStr for Preset {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let names: Vec<_> = Preset::ALL.iter().map(|p| p.name()).collect();
                TableError::UnknownPreset {
                    name: s.to_string(),
                    expected: names.join(", "),
                }
            })
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
