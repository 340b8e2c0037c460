//! Property-based tests for the layout engine using proptest.

use proptest::prelude::*;
use termtables::{
    align_and_pad, compute_dimensions, display_width, CellAlign, Grid, Justify, Padding, Preset,
    Table, VerticalAlign,
};

// ============================================================================
// Strategies
// ============================================================================

/// Cell text mixing ASCII, wide characters, color codes and newlines.
fn cell_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-zA-Z0-9 ,.]{0,6}",
            Just("世界".to_string()),
            Just("\x1b[31mred\x1b[0m".to_string()),
            Just("\n".to_string()),
        ],
        0..4,
    )
    .prop_map(|parts| parts.concat())
}

fn grid_strategy() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(prop::collection::vec(cell_strategy(), 0..5), 0..6)
}

fn justify_strategy() -> impl Strategy<Value = Option<Justify>> {
    prop_oneof![
        Just(None),
        Just(Some(Justify::Left)),
        Just(Some(Justify::Center)),
        Just(Some(Justify::Right)),
    ]
}

fn vertical_strategy() -> impl Strategy<Value = VerticalAlign> {
    prop_oneof![
        Just(VerticalAlign::Top),
        Just(VerticalAlign::Middle),
        Just(VerticalAlign::Bottom),
    ]
}

fn boxed_preset_strategy() -> impl Strategy<Value = Preset> {
    prop_oneof![
        Just(Preset::Ascii),
        Just(Preset::Single),
        Just(Preset::Double),
        Just(Preset::Heavy),
        Just(Preset::Rounded),
        Just(Preset::Porcelain),
    ]
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Aligned cells always form an exact rectangle when the box is big enough.
    #[test]
    fn aligned_cell_is_rectangular(
        text in cell_strategy(),
        justify in justify_strategy(),
        vertical in vertical_strategy(),
        extra_width in 0usize..5,
        extra_height in 0usize..3,
        left in 0usize..3,
        right in 0usize..3,
    ) {
        let grid = Grid::from(vec![vec![text.clone()]]);
        let dims = compute_dimensions(&grid, 0, 0);
        let width = dims.inner_widths[0] + extra_width;
        let height = dims.inner_heights[0] + extra_height;
        let align = CellAlign { justify, vertical };

        let lines = align_and_pad(&text, align, width, height, Padding::horizontal(left, right));
        prop_assert_eq!(lines.len(), height);
        for line in &lines {
            prop_assert_eq!(display_width(line), left + width + right);
        }
    }

    /// One outer width per column, each exactly inner plus padding.
    #[test]
    fn dimensions_are_consistent(
        rows in grid_strategy(),
        left in 0usize..4,
        right in 0usize..4,
    ) {
        let max_row = rows.iter().map(Vec::len).max().unwrap_or(0);
        let grid = Grid::from(rows);
        let dims = compute_dimensions(&grid, left, right);

        prop_assert_eq!(dims.inner_widths.len(), max_row);
        prop_assert_eq!(dims.outer_widths.len(), max_row);
        prop_assert_eq!(dims.inner_heights.len(), grid.len());
        for (inner, outer) in dims.inner_widths.iter().zip(&dims.outer_widths) {
            prop_assert_eq!(*outer, inner + left + right);
        }
        for height in &dims.inner_heights {
            prop_assert!(*height >= 1);
        }
    }

    /// Measuring twice gives the same answer.
    #[test]
    fn dimensions_are_idempotent(rows in grid_strategy()) {
        let grid = Grid::from(rows);
        prop_assert_eq!(compute_dimensions(&grid, 1, 1), compute_dimensions(&grid, 1, 1));
    }

    /// Every rendered line is exactly as wide as the width query predicts.
    #[test]
    fn table_width_matches_render(
        rows in grid_strategy(),
        preset in boxed_preset_strategy(),
        title in prop::option::of("[A-Za-z ]{0,20}"),
        row_border in any::<bool>(),
        footing in any::<bool>(),
    ) {
        let style = preset
            .style()
            .inner_row_border(row_border)
            .inner_footing_row_border(footing);
        let mut table = Table::new(rows).with_style(style);
        table.set_title(title);

        let width = table.table_width();
        for line in table.lines() {
            prop_assert_eq!(display_width(&line), width, "line {:?}", line);
        }
    }

    /// The number of content lines equals the sum of row heights.
    #[test]
    fn render_line_count(rows in grid_strategy()) {
        let table = Table::new(rows).with_style(Preset::Porcelain.style());
        let heights: usize = table.dimensions().inner_heights.iter().sum();
        prop_assert_eq!(table.lines().len(), heights);
    }

    /// Column budgets shrink one-for-one as the terminal narrows.
    #[test]
    fn column_budget_tracks_terminal_width(
        rows in grid_strategy(),
        terminal in 0usize..200,
    ) {
        let table = Table::new(rows);
        let columns = table.dimensions().columns();
        for column in 0..columns {
            let wide = table.column_max_width(column, terminal + 1).unwrap();
            let narrow = table.column_max_width(column, terminal).unwrap();
            prop_assert_eq!(wide - narrow, 1);
        }
        prop_assert!(table.column_max_width(columns, terminal).is_err());
    }
}
