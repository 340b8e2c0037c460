//! Table input: rows of text cells, with optional separator markers.

use std::fmt::Display;

/// One row of a [`Grid`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Row {
    /// A row of cells. May be shorter than other rows.
    Cells(Vec<String>),
    /// Draw a horizontal divider here instead of content.
    Separator,
}

impl Row {
    /// The row's cells, or `None` for a separator.
    pub fn cells(&self) -> Option<&[String]> {
        match self {
            Row::Cells(cells) => Some(cells),
            Row::Separator => None,
        }
    }

    /// Whether this row is a separator marker.
    pub fn is_separator(&self) -> bool {
        matches!(self, Row::Separator)
    }

    /// Number of cells (zero for separators).
    pub fn len(&self) -> usize {
        self.cells().map_or(0, <[String]>::len)
    }

    /// Whether the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S: Into<String>> FromIterator<S> for Row {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Row::Cells(iter.into_iter().map(Into::into).collect())
    }
}

/// An ordered sequence of rows, the input to every render.
///
/// Rows may be ragged; missing cells render as empty.
///
/// ```rust
/// use termtables::Grid;
///
/// let mut grid = Grid::from(vec![vec!["Name", "Qty"], vec!["Apple", "3"]]);
/// grid.push_separator();
/// grid.push_row(["Total".to_string(), 3.to_string()]);
///
/// assert_eq!(grid.len(), 4);
/// assert_eq!(grid.column_count(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Row>,
}

impl Grid {
    /// An empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a grid from prepared rows.
    pub fn from_rows(rows: Vec<Row>) -> Self {
        Grid { rows }
    }

    /// Append a row of cells. Any `Display` value is accepted.
    pub fn push_row<I, T>(&mut self, cells: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: Display,
    {
        self.rows
            .push(Row::Cells(cells.into_iter().map(|c| c.to_string()).collect()));
        self
    }

    /// Append a row where `None` values become empty cells.
    pub fn push_optional_row<I, T>(&mut self, cells: I) -> &mut Self
    where
        I: IntoIterator<Item = Option<T>>,
        T: Display,
    {
        self.rows.push(Row::Cells(
            cells
                .into_iter()
                .map(|c| c.map(|v| v.to_string()).unwrap_or_default())
                .collect(),
        ));
        self
    }

    /// Append a separator marker.
    pub fn push_separator(&mut self) -> &mut Self {
        self.rows.push(Row::Separator);
        self
    }

    /// All rows, in order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows, separators included.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the grid has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Length of the longest row.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Row::len).max().unwrap_or(0)
    }
}

impl<R, S> From<Vec<R>> for Grid
where
    R: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from(rows: Vec<R>) -> Self {
        Grid {
            rows: rows.into_iter().map(|r| r.into_iter().collect()).collect(),
        }
    }
}

impl FromIterator<Row> for Grid {
    fn from_iter<I: IntoIterator<Item = Row>>(iter: I) -> Self {
        Grid {
            rows: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_nested_vec() {
        let grid = Grid::from(vec![vec!["a", "b"], vec!["c"]]);
        assert_eq!(grid.len(), 2);
        assert_eq!(grid.column_count(), 2);
        assert_eq!(grid.rows()[1].cells(), Some(&["c".to_string()][..]));
    }

    #[test]
    fn test_empty_grid() {
        let grid = Grid::new();
        assert!(grid.is_empty());
        assert_eq!(grid.column_count(), 0);
    }

    #[test]
    fn test_separator_has_no_cells() {
        let mut grid = Grid::new();
        grid.push_separator();
        assert!(grid.rows()[0].is_separator());
        assert_eq!(grid.rows()[0].len(), 0);
        assert_eq!(grid.column_count(), 0);
    }

    #[test]
    fn test_push_row_display_values() {
        let mut grid = Grid::new();
        grid.push_row([1.5_f64, 0.9]).push_row([true, false]);
        assert_eq!(
            grid.rows()[0],
            Row::Cells(vec!["1.5".to_string(), "0.9".to_string()])
        );
        assert_eq!(
            grid.rows()[1],
            Row::Cells(vec!["true".to_string(), "false".to_string()])
        );
    }

    #[test]
    fn test_push_optional_row() {
        let mut grid = Grid::new();
        grid.push_optional_row([Some(123), None, Some(7)]);
        assert_eq!(
            grid.rows()[0],
            Row::Cells(vec!["123".to_string(), String::new(), "7".to_string()])
        );
    }

    #[test]
    fn test_collect_rows() {
        let grid: Grid = vec![Row::from_iter(["x"]), Row::Separator]
            .into_iter()
            .collect();
        assert_eq!(grid.len(), 2);
        assert_eq!(grid.column_count(), 1);
    }
}
