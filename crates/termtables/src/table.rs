//! The table assembler.
//!
//! [`render`] runs the same steps for every style:
//!
//! 1. measure the grid once ([`compute_dimensions`])
//! 2. align every cell to its column width and row height ([`align_and_pad`])
//! 3. join cells into row lines and interleave horizontal borders
//!    ([`build_row`], [`build_border`])
//!
//! Presets differ only in the glyphs and flags of their [`TableStyle`].
//! [`Table`] bundles a grid, a title and a style, and adds the width queries
//! callers use to decide whether the table fits the terminal.

use std::fmt;

use log::{debug, trace};

use crate::align::{align_and_pad, CellAlign, Justify, Padding};
use crate::build::{build_border, build_row, combine};
use crate::dimensions::{self, compute_dimensions, Dimensions};
use crate::error::Result;
use crate::grid::{Grid, Row};
use crate::style::{Layout, TableStyle};
use crate::terminal::SizeProvider;
use crate::width::display_width;

/// Which horizontal border to build.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BorderKind {
    /// Above the first row. Carries the title.
    Top,
    /// Below the last row.
    Bottom,
    /// Below the first row.
    Heading,
    /// Above the last row.
    Footing,
    /// Between two rows, and in place of separator markers.
    Row,
}

/// A grid with a title and a style.
///
/// # Example
///
/// ```rust
/// use termtables::Table;
///
/// let table = Table::new(vec![vec!["Name", "Color"], vec!["Avocado", "green"]])
///     .with_title("Fruit");
/// assert_eq!(
///     table.render(),
///     "+Fruit----+-------+\n\
///      | Name    | Color |\n\
///      +---------+-------+\n\
///      | Avocado | green |\n\
///      +---------+-------+"
/// );
/// assert_eq!(table.table_width(), 19);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    grid: Grid,
    title: Option<String>,
    style: TableStyle,
}

impl Table {
    /// A table with the default ASCII style and no title.
    pub fn new(grid: impl Into<Grid>) -> Self {
        Table {
            grid: grid.into(),
            title: None,
            style: TableStyle::default(),
        }
    }

    /// Set the title shown in the top border.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replace the style.
    pub fn with_style(mut self, style: TableStyle) -> Self {
        self.style = style;
        self
    }

    /// The rows being rendered.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable access to the rows, e.g. to append more before rendering.
    ///
    /// ```rust
    /// use termtables::Table;
    ///
    /// let mut table = Table::new(vec![vec!["a"]]);
    /// table.grid_mut().push_separator().push_row(["b"]);
    /// table.set_title(Some("T".to_string()));
    /// assert_eq!(table.title(), Some("T"));
    /// assert_eq!(table.grid().len(), 3);
    /// assert_eq!(table.render(), "+T--+\n| a |\n+---+\n| b |\n+---+");
    /// ```
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// The title drawn into the top border, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Sets or clears the title.
    pub fn set_title(&mut self, title: Option<String>) {
        self.title = title;
    }

    /// The style used by [`render`](Self::render).
    pub fn style(&self) -> &TableStyle {
        &self.style
    }

    /// Mutable access to the style.
    pub fn style_mut(&mut self) -> &mut TableStyle {
        &mut self.style
    }

    /// Measures the grid with this table's padding.
    pub fn dimensions(&self) -> Dimensions {
        compute_dimensions(
            &self.grid,
            self.style.padding_left,
            self.style.padding_right,
        )
    }

    /// Builds one horizontal border for the current grid.
    ///
    /// In Markdown layout, [`BorderKind::Heading`] is the alignment-marker row.
    pub fn horizontal_border(&self, kind: BorderKind) -> String {
        let dims = self.dimensions();
        if self.style.layout == Layout::Markdown && kind == BorderKind::Heading {
            return markdown_marker_row(&self.style, &dims.outer_widths);
        }
        border_line(&self.style, kind, &dims.outer_widths, self.title())
    }

    /// All output lines, top to bottom.
    pub fn lines(&self) -> Vec<String> {
        table_lines(&self.grid, self.title(), &self.style)
    }

    /// The rendered table, lines joined with `\n` and no trailing newline.
    pub fn render(&self) -> String {
        render(&self.grid, self.title(), &self.style)
    }

    /// Display width of the widest rendered line, computed without rendering.
    ///
    /// In Markdown layout the alignment-marker row is at least three columns
    /// wide per cell, so narrow columns are counted at that width.
    pub fn table_width(&self) -> usize {
        let frame = Frame::for_style(&self.style);
        let mut outer_widths = self.dimensions().outer_widths;
        if self.style.layout == Layout::Markdown {
            outer_widths.iter_mut().for_each(|w| *w = (*w).max(3));
        }
        dimensions::table_width(&outer_widths, frame.outer_width(), frame.inner_width())
    }

    /// How wide `column` could grow before the table is wider than
    /// `terminal_width`. Negative when the other columns already overflow.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::ColumnOutOfRange`](crate::TableError::ColumnOutOfRange)
    /// if the table has no such column.
    pub fn column_max_width(&self, column: usize, terminal_width: usize) -> Result<isize> {
        let frame = Frame::for_style(&self.style);
        dimensions::column_max_width(
            &self.dimensions().inner_widths,
            column,
            frame.outer_width(),
            frame.inner_width(),
            self.style.padding_left + self.style.padding_right,
            terminal_width,
        )
    }

    /// Whether the table fits in `terminal_width` columns.
    pub fn fits(&self, terminal_width: usize) -> bool {
        self.table_width() <= terminal_width
    }

    /// Whether the table fits in the terminal reported by `terminal`.
    ///
    /// ```rust
    /// use termtables::{FixedSize, Table};
    ///
    /// let table = Table::new(vec![vec!["Name", "Color"], vec!["Avocado", "green"]]);
    /// assert!(table.ok(&FixedSize::new(19, 24)));
    /// assert!(!table.ok(&FixedSize::new(18, 24)));
    /// ```
    pub fn ok(&self, terminal: &impl SizeProvider) -> bool {
        self.fits(terminal.width())
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Renders a grid into a string, lines joined with `\n` and no trailing
/// newline.
///
/// # Example
///
/// ```rust
/// use termtables::{render, Grid, TableStyle};
///
/// let grid = Grid::from(vec![vec!["Name", "Color"], vec!["Avocado", "green"]]);
/// assert_eq!(
///     render(&grid, None, &TableStyle::ascii()),
///     "+---------+-------+\n\
///      | Name    | Color |\n\
///      +---------+-------+\n\
///      | Avocado | green |\n\
///      +---------+-------+"
/// );
/// ```
pub fn render(grid: &Grid, title: Option<&str>, style: &TableStyle) -> String {
    table_lines(grid, title, style).join("\n")
}

/// Glyphs drawn on content lines: left edge, column separator, right edge.
struct Frame<'a> {
    left: &'a str,
    intersect: &'a str,
    right: &'a str,
}

impl<'a> Frame<'a> {
    fn for_style(style: &'a TableStyle) -> Self {
        let vertical = style.chars.vertical.as_str();
        match style.layout {
            Layout::Markdown => Frame {
                left: vertical,
                intersect: vertical,
                right: vertical,
            },
            Layout::Boxed => {
                let edge = if style.outer_border { vertical } else { "" };
                Frame {
                    left: edge,
                    intersect: if style.inner_column_border { vertical } else { "" },
                    right: edge,
                }
            }
        }
    }

    fn outer_width(&self) -> usize {
        display_width(self.left) + display_width(self.right)
    }

    fn inner_width(&self) -> usize {
        display_width(self.intersect)
    }
}

fn table_lines(grid: &Grid, title: Option<&str>, style: &TableStyle) -> Vec<String> {
    let dims = compute_dimensions(grid, style.padding_left, style.padding_right);
    trace!(
        "rendering {} rows: inner widths {:?}, inner heights {:?}, outer widths {:?}",
        grid.len(),
        dims.inner_widths,
        dims.inner_heights,
        dims.outer_widths
    );

    match style.layout {
        Layout::Boxed => boxed_lines(grid, title, style, &dims),
        Layout::Markdown => markdown_lines(grid, style, &dims),
    }
}

fn boxed_lines(
    grid: &Grid,
    title: Option<&str>,
    style: &TableStyle,
    dims: &Dimensions,
) -> Vec<String> {
    let frame = Frame::for_style(style);
    let rows = grid.rows();
    let last = rows.len().saturating_sub(1);
    let mut lines = Vec::new();

    if style.outer_border {
        lines.push(border_line(style, BorderKind::Top, &dims.outer_widths, title));
    }

    for (i, row) in rows.iter().enumerate() {
        match row {
            Row::Separator => {
                // A divider next to the outer border, or right after another
                // divider, would draw the same rule twice.
                let at_edge = style.outer_border && (i == 0 || i == last);
                let repeated = i > 0 && rows[i - 1].is_separator();
                if at_edge || repeated {
                    debug!("separator marker at row {} merged into adjacent rule", i);
                } else {
                    lines.push(border_line(style, BorderKind::Row, &dims.outer_widths, None));
                }
            }
            Row::Cells(cells) => {
                lines.extend(row_lines(cells, dims.inner_heights[i], style, dims, &frame))
            }
        }

        if i == last || row.is_separator() || rows[i + 1].is_separator() {
            continue;
        }
        let kind = if i == 0 && style.inner_heading_row_border {
            Some(BorderKind::Heading)
        } else if i + 1 == last && style.inner_footing_row_border {
            Some(BorderKind::Footing)
        } else if style.inner_row_border {
            Some(BorderKind::Row)
        } else {
            None
        };
        if let Some(kind) = kind {
            lines.push(border_line(style, kind, &dims.outer_widths, None));
        }
    }

    if style.outer_border {
        lines.push(border_line(style, BorderKind::Bottom, &dims.outer_widths, None));
    }
    lines
}

fn markdown_lines(grid: &Grid, style: &TableStyle, dims: &Dimensions) -> Vec<String> {
    let frame = Frame::for_style(style);
    let mut lines = Vec::new();
    let mut header_done = false;

    for (i, row) in grid.rows().iter().enumerate() {
        let Row::Cells(cells) = row else {
            debug!("markdown layout skips separator marker at row {}", i);
            continue;
        };
        lines.extend(row_lines(cells, dims.inner_heights[i], style, dims, &frame));
        if !header_done {
            lines.push(markdown_marker_row(style, &dims.outer_widths));
            header_done = true;
        }
    }
    lines
}

/// Aligns every cell of one row and joins them into output lines.
fn row_lines(
    cells: &[String],
    inner_height: usize,
    style: &TableStyle,
    dims: &Dimensions,
    frame: &Frame<'_>,
) -> Vec<String> {
    let padding = Padding::horizontal(style.padding_left, style.padding_right);
    let aligned: Vec<Vec<String>> = dims
        .inner_widths
        .iter()
        .enumerate()
        .map(|(col, &width)| {
            let text = cells.get(col).map(String::as_str).unwrap_or("");
            let align = CellAlign {
                justify: style.justify_columns.get(&col).copied(),
                vertical: style.vertical_align,
            };
            align_and_pad(text, align, width, inner_height, padding)
        })
        .collect();
    build_row(&aligned, frame.left, frame.intersect, frame.right)
}

/// One horizontal border of a boxed table.
///
/// Top and bottom always use their corner glyphs. Inner borders only get
/// edge glyphs when the outer border is on. Column intersections only appear
/// when the column border is on.
fn border_line(
    style: &TableStyle,
    kind: BorderKind,
    outer_widths: &[usize],
    title: Option<&str>,
) -> String {
    let chars = &style.chars;
    let columns = style.inner_column_border;
    let (left, intersect, right) = match kind {
        BorderKind::Top => (&chars.top_left, &chars.top_t, &chars.top_right),
        BorderKind::Bottom => (&chars.bottom_left, &chars.bottom_t, &chars.bottom_right),
        BorderKind::Heading | BorderKind::Footing | BorderKind::Row => {
            (&chars.left_t, &chars.cross, &chars.right_t)
        }
    };
    let (left, intersect, right) = (left.as_str(), intersect.as_str(), right.as_str());
    let edges = matches!(kind, BorderKind::Top | BorderKind::Bottom) || style.outer_border;
    let title = if kind == BorderKind::Top { title } else { None };

    build_border(
        outer_widths,
        &chars.horizontal,
        if edges { left } else { "" },
        if columns { intersect } else { "" },
        if edges { right } else { "" },
        title,
    )
}

/// The GitHub Markdown alignment row that follows the header.
fn markdown_marker_row(style: &TableStyle, outer_widths: &[usize]) -> String {
    let markers = outer_widths.iter().enumerate().map(|(col, &width)| {
        let width = width.max(3);
        match style.justify_columns.get(&col) {
            Some(Justify::Left) => format!(":{}", "-".repeat(width - 1)),
            Some(Justify::Right) => format!("{}:", "-".repeat(width - 1)),
            Some(Justify::Center) => format!(":{}:", "-".repeat(width - 2)),
            None => "-".repeat(width),
        }
    });
    let vertical = style.chars.vertical.as_str();
    combine(markers, vertical, vertical, vertical)
}
