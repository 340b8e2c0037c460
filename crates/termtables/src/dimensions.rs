//! Column width and row height calculation.
//!
//! The grid is scanned once; the resulting [`Dimensions`] are reused by the
//! cell aligner, the row builder and the border builder.

use crate::error::{Result, TableError};
use crate::grid::{Grid, Row};
use crate::width::{line_count, max_line_width};

/// Measured sizes of a grid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dimensions {
    /// Widest line per column, without padding.
    pub inner_widths: Vec<usize>,
    /// Line count per row, without padding. Separators are 0.
    pub inner_heights: Vec<usize>,
    /// `inner_widths` plus left and right padding.
    pub outer_widths: Vec<usize>,
}

impl Dimensions {
    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.inner_widths.len()
    }
}

/// Computes inner widths, inner heights and outer widths for a grid.
///
/// # Example
///
/// ```rust
/// use termtables::{compute_dimensions, Grid};
///
/// let grid = Grid::from(vec![vec!["One\nTwo", "Buckle\nMy\nShoe"]]);
/// let dims = compute_dimensions(&grid, 1, 1);
/// assert_eq!(dims.inner_widths, vec![3, 6]);
/// assert_eq!(dims.inner_heights, vec![3]);
/// assert_eq!(dims.outer_widths, vec![5, 8]);
/// ```
pub fn compute_dimensions(grid: &Grid, padding_left: usize, padding_right: usize) -> Dimensions {
    let mut inner_widths = vec![0; grid.column_count()];
    let mut inner_heights = Vec::with_capacity(grid.len());

    for row in grid.rows() {
        match row {
            Row::Separator => inner_heights.push(0),
            Row::Cells(cells) => {
                let mut height = 1;
                for (i, cell) in cells.iter().enumerate() {
                    inner_widths[i] = inner_widths[i].max(max_line_width(cell));
                    height = height.max(line_count(cell));
                }
                inner_heights.push(height);
            }
        }
    }

    let outer_widths = inner_widths
        .iter()
        .map(|w| w + padding_left + padding_right)
        .collect();

    Dimensions {
        inner_widths,
        inner_heights,
        outer_widths,
    }
}

/// Total display width of a table.
///
/// `outer_border` is the combined width of the left and right edges, and
/// `inner_border` the width of one column separator.
///
/// ```rust
/// use termtables::table_width;
///
/// // "| Lettuce | green | vegetable |"
/// assert_eq!(table_width(&[9, 7, 11], 2, 1), 31);
/// assert_eq!(table_width(&[], 2, 1), 2);
/// ```
pub fn table_width(outer_widths: &[usize], outer_border: usize, inner_border: usize) -> usize {
    let separators = outer_widths.len().saturating_sub(1);
    outer_widths.iter().sum::<usize>() + outer_border + inner_border * separators
}

/// How wide column `column` could grow before the table exceeds
/// `terminal_width`.
///
/// The result is signed: a negative budget means the other columns already
/// overflow the terminal. `padding` is left plus right padding of one column.
///
/// # Errors
///
/// Returns [`TableError::ColumnOutOfRange`] if `column` doesn't exist.
///
/// ```rust
/// use termtables::column_max_width;
///
/// let widths = [7, 5, 9];
/// assert_eq!(column_max_width(&widths, 0, 2, 1, 2, 79).unwrap(), 55);
/// assert!(column_max_width(&widths, 3, 2, 1, 2, 79).is_err());
/// ```
pub fn column_max_width(
    inner_widths: &[usize],
    column: usize,
    outer_border: usize,
    inner_border: usize,
    padding: usize,
    terminal_width: usize,
) -> Result<isize> {
    let own = *inner_widths
        .get(column)
        .ok_or(TableError::ColumnOutOfRange {
            column,
            columns: inner_widths.len(),
        })?;

    let columns = inner_widths.len();
    let non_data = outer_border + inner_border * (columns - 1) + padding * columns;
    let data = inner_widths.iter().sum::<usize>() - own;

    Ok(terminal_width as isize - data as isize - non_data as isize)
}
