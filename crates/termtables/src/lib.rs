//! # termtables - Aligned Text Tables for Terminals
//!
//! `termtables` turns a grid of text cells into a bordered, fixed-width string
//! ready to print. Cells may span several lines, contain wide (CJK) characters
//! or carry ANSI color codes; widths are measured in terminal columns, so the
//! borders always line up.
//!
//! ## Core Concepts
//!
//! - [`Grid`]: rows of cells, optionally with [`Row::Separator`] markers
//! - [`TableStyle`]: border glyphs, border toggles, alignment and padding
//! - [`Preset`]: named styles (`ascii`, `single`, `double`, `heavy`,
//!   `rounded`, `markdown`, `porcelain`)
//! - [`Table`]: a grid plus title and style, with width-fit queries
//! - [`StyleConfig`]: a preset with overrides, loaded from YAML or JSON
//!
//! ## Quick Start
//!
//! ```rust
//! use termtables::{Justify, Table, TableStyle};
//!
//! let table = Table::new(vec![
//!     vec!["Name", "Color", "Type"],
//!     vec!["Avocado", "green", "nut"],
//!     vec!["Tomato", "red", "fruit"],
//! ])
//! .with_style(TableStyle::ascii().justify(2, Justify::Right));
//!
//! assert_eq!(
//!     table.render(),
//!     "+---------+-------+-------+\n\
//!      | Name    | Color |  Type |\n\
//!      +---------+-------+-------+\n\
//!      | Avocado | green |   nut |\n\
//!      | Tomato  | red   | fruit |\n\
//!      +---------+-------+-------+"
//! );
//! ```
//!
//! ## Fitting the Terminal
//!
//! Long text is never wrapped or truncated. Instead, ask how much room a
//! column has and shorten the content yourself:
//!
//! ```rust
//! use termtables::{FixedSize, Table};
//!
//! let table = Table::new(vec![vec!["id", "description"], vec!["1", "short"]]);
//! let budget = table.column_max_width(1, 40).unwrap();
//! assert_eq!(budget, 31);
//! assert!(table.ok(&FixedSize::new(40, 24)));
//! ```
//!
//! ## Building Blocks
//!
//! The stages of a render are public for callers that lay out text themselves:
//! [`display_width`], [`align_and_pad`], [`compute_dimensions`],
//! [`build_row`] and [`build_border`].

mod align;
mod build;
pub mod config;
mod dimensions;
mod error;
mod grid;
pub mod style;
mod table;
pub mod terminal;
mod width;

pub use align::{align_and_pad, align_and_pad_with, CellAlign, Justify, Padding, VerticalAlign};
pub use build::{build_border, build_row, combine};
pub use config::{GlyphOverrides, StyleConfig};
pub use dimensions::{column_max_width, compute_dimensions, table_width, Dimensions};
pub use error::{Result, TableError};
pub use grid::{Grid, Row};
pub use style::{BorderChars, Layout, Preset, TableStyle};
pub use table::{render, BorderKind, Table};
pub use terminal::{
    terminal_size, FixedSize, SizeProvider, SystemTerminal, TerminalSize, DEFAULT_HEIGHT,
    DEFAULT_WIDTH,
};
pub use width::{display_width, display_width_bytes, line_count, max_line_width, split_lines};
