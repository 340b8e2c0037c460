//! Joining cells and border glyphs into output lines.
//!
//! Two kinds of lines make up a table:
//!
//! - row lines, built by [`build_row`] from already aligned cells
//! - horizontal borders, built by [`build_border`] from outer column widths,
//!   with an optional title spliced into the line
//!
//! An empty glyph string disables that part of the border.

use log::debug;

use crate::width::display_width;

/// Joins items with `intersect` between them and `left`/`right` around them.
///
/// ```rust
/// use termtables::combine;
///
/// assert_eq!(combine(["1", "2", "3"], "<", "+", ">"), "<1+2+3>");
/// assert_eq!(combine(Vec::<&str>::new(), "<", "+", ">"), "<>");
/// assert_eq!(combine(["a", "b"], "", "", ""), "ab");
/// ```
pub fn combine<I, S>(items: I, left: &str, intersect: &str, right: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut line = String::from(left);
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            line.push_str(intersect);
        }
        line.push_str(item.as_ref());
    }
    line.push_str(right);
    line
}

/// Combines aligned cells into the lines of one table row.
///
/// Each cell is a list of lines, as returned by
/// [`align_and_pad`](crate::align_and_pad). Line `n` of the output joins line
/// `n` of every cell. A row without cells still yields one line made of the
/// left and right borders.
///
/// ```rust
/// use termtables::build_row;
///
/// let cells = vec![
///     vec![" Row One    ".to_string(), " Column One ".to_string()],
///     vec![" Two ".to_string(), "     ".to_string()],
/// ];
/// assert_eq!(
///     build_row(&cells, "|", "|", "|"),
///     vec!["| Row One    | Two |", "| Column One |     |"]
/// );
/// ```
pub fn build_row(cells: &[Vec<String>], left: &str, intersect: &str, right: &str) -> Vec<String> {
    let height = cells.iter().map(Vec::len).max().unwrap_or(0);
    if height == 0 {
        return vec![combine(std::iter::empty::<&str>(), left, intersect, right)];
    }

    (0..height)
        .map(|n| {
            let parts = cells
                .iter()
                .map(|cell| cell.get(n).map(String::as_str).unwrap_or(""));
            combine(parts, left, intersect, right)
        })
        .collect()
}

/// Builds a horizontal border line, optionally with a title.
///
/// Each column gets `horizontal` repeated to its outer width; columns are
/// joined with `intersect` and bounded by `left`/`right`.
///
/// A title starts right after `left`. It overwrites as many fill and
/// intersect glyphs as its display width covers, spilling into later
/// columns when needed. A title wider than the space between the corners is
/// dropped and the plain border is returned.
///
/// ```rust
/// use termtables::build_border;
///
/// assert_eq!(build_border(&[5, 6, 7], "-", "<", "+", ">", None), "<-----+------+------->");
/// assert_eq!(build_border(&[], "-", "<", "+", ">", None), "<>");
/// assert_eq!(build_border(&[3, 3], "-", "+", "+", "+", Some("Title")), "+Title--+");
/// assert_eq!(build_border(&[1, 1], "-", "+", "+", "+", Some("Title")), "+-+-+");
/// ```
pub fn build_border(
    outer_widths: &[usize],
    horizontal: &str,
    left: &str,
    intersect: &str,
    right: &str,
    title: Option<&str>,
) -> String {
    let plain = || {
        combine(
            outer_widths.iter().map(|&w| horizontal.repeat(w)),
            left,
            intersect,
            right,
        )
    };

    let title = match title {
        Some(title) if !outer_widths.is_empty() && !horizontal.is_empty() => title,
        _ => return plain(),
    };

    let title_width = display_width(title);
    let interior = border_glyphs(outer_widths, horizontal, intersect);
    let available: usize = interior.iter().map(|(_, w)| w).sum();
    if title_width > available {
        debug!(
            "dropping title of width {} from border with {} columns of room",
            title_width, available
        );
        return plain();
    }

    let mut line = String::from(left);
    line.push_str(title);
    let mut covered = 0;
    for (glyph, width) in interior {
        if covered >= title_width {
            line.push_str(glyph);
        } else {
            covered += width;
        }
    }
    // A wide glyph only partly covered by the title leaves a gap to fill.
    if covered > title_width {
        let gap = covered - title_width;
        let at = left.len() + title.len();
        line.insert_str(at, &" ".repeat(gap));
    }
    line.push_str(right);
    line
}

/// Every glyph between the corners of a border, paired with its display width.
fn border_glyphs<'a>(
    outer_widths: &[usize],
    horizontal: &'a str,
    intersect: &'a str,
) -> Vec<(&'a str, usize)> {
    let fill_width = display_width(horizontal);
    let intersect_width = display_width(intersect);
    let total = outer_widths.iter().sum::<usize>() + outer_widths.len();

    let mut glyphs = Vec::with_capacity(total);
    for (i, &width) in outer_widths.iter().enumerate() {
        if i > 0 && !intersect.is_empty() {
            glyphs.push((intersect, intersect_width));
        }
        glyphs.extend(std::iter::repeat((horizontal, fill_width)).take(width));
    }
    glyphs
}
