//! `termtables`: print a JSON, YAML or CSV grid as a terminal table.
//!
//! ```text
//! $ printf '[["Name","Qty"],["Apple",3],null,["Total",3]]' | termtables --format json -j 1=right
//! +-------+-----+
//! | Name  | Qty |
//! +-------+-----+
//! | Apple |   3 |
//! +-------+-----+
//! | Total |   3 |
//! +-------+-----+
//! ```

mod input;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use log::{debug, info};
use termtables::{
    Justify, Preset, SizeProvider, StyleConfig, SystemTerminal, Table, TableStyle, VerticalAlign,
};

use crate::input::Format;

/// Render a grid of cells as an aligned text table.
#[derive(Debug, Parser)]
#[command(name = "termtables", version, about)]
struct Cli {
    /// Input file. Reads stdin when omitted or `-`.
    input: Option<PathBuf>,

    /// Input format.
    #[arg(short, long, value_enum, default_value_t = Format::Auto)]
    format: Format,

    /// Style preset: ascii, single, double, heavy, rounded, markdown, porcelain.
    #[arg(short, long)]
    style: Option<Preset>,

    /// Style config file (YAML or JSON). --style replaces its preset.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Title shown in the top border.
    #[arg(short, long)]
    title: Option<String>,

    /// Column alignment as COL=ALIGN (left, center, right). Repeatable.
    #[arg(short, long = "justify", value_name = "COL=ALIGN", value_parser = parse_justify)]
    justify: Vec<(usize, Justify)>,

    /// Vertical alignment in multi-line rows: top, middle, bottom.
    #[arg(long, value_parser = parse_vertical)]
    valign: Option<VerticalAlign>,

    /// Spaces before each cell.
    #[arg(long)]
    padding_left: Option<usize>,

    /// Spaces after each cell.
    #[arg(long)]
    padding_right: Option<usize>,

    /// Draw a rule between every row.
    #[arg(long)]
    row_border: bool,

    /// Draw a rule above the last row.
    #[arg(long)]
    footing_border: bool,

    /// Don't draw the rule below the first row.
    #[arg(long)]
    no_heading_border: bool,

    /// Don't draw the outer border.
    #[arg(long)]
    no_outer_border: bool,

    /// Don't separate columns with a vertical line.
    #[arg(long)]
    no_column_border: bool,

    /// Report the table width and per-column room against the terminal on stderr.
    #[arg(long)]
    check: bool,

    /// More logging (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn parse_justify(s: &str) -> Result<(usize, Justify), String> {
    let (column, align) = s
        .split_once('=')
        .ok_or_else(|| format!("expected COL=ALIGN, got `{}`", s))?;
    let column = column
        .trim()
        .parse()
        .map_err(|_| format!("invalid column index `{}`", column))?;
    let justify = match align.trim().to_ascii_lowercase().as_str() {
        "left" | "l" => Justify::Left,
        "center" | "c" => Justify::Center,
        "right" | "r" => Justify::Right,
        other => return Err(format!("unknown alignment `{}`", other)),
    };
    Ok((column, justify))
}

fn parse_vertical(s: &str) -> Result<VerticalAlign, String> {
    match s.to_ascii_lowercase().as_str() {
        "top" => Ok(VerticalAlign::Top),
        "middle" | "center" => Ok(VerticalAlign::Middle),
        "bottom" => Ok(VerticalAlign::Bottom),
        other => Err(format!("unknown vertical alignment `{}`", other)),
    }
}

fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Layers the config file, then the command line, over the preset.
fn build_style(cli: &Cli) -> Result<TableStyle> {
    let mut config = match &cli.config {
        Some(path) => StyleConfig::from_file(path)
            .with_context(|| format!("failed to load style config {}", path.display()))?,
        None => StyleConfig::default(),
    };
    if let Some(preset) = cli.style {
        config.preset = preset;
    }
    let mut style = config.resolve();

    for &(column, justify) in &cli.justify {
        style.justify_columns.insert(column, justify);
    }
    if let Some(vertical) = cli.valign {
        style.vertical_align = vertical;
    }
    if let Some(left) = cli.padding_left {
        style.padding_left = left;
    }
    if let Some(right) = cli.padding_right {
        style.padding_right = right;
    }
    if cli.row_border {
        style.inner_row_border = true;
    }
    if cli.footing_border {
        style.inner_footing_row_border = true;
    }
    if cli.no_heading_border {
        style.inner_heading_row_border = false;
    }
    if cli.no_outer_border {
        style.outer_border = false;
    }
    if cli.no_column_border {
        style.inner_column_border = false;
    }
    Ok(style)
}

fn report_fit(table: &Table, terminal: &impl SizeProvider) -> Result<()> {
    let width = terminal.width();
    eprintln!(
        "table width: {} (terminal: {}, fits: {})",
        table.table_width(),
        width,
        if table.ok(terminal) { "yes" } else { "no" }
    );
    for column in 0..table.dimensions().columns() {
        eprintln!(
            "column {}: room for {}",
            column,
            table.column_max_width(column, width)?
        );
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let style = build_style(&cli)?;
    let format = cli.format.resolve(cli.input.as_deref());
    debug!("reading input as {:?}", format);

    let content = input::read_source(cli.input.as_deref())?;
    let grid = input::parse_grid(&content, format)?;
    info!(
        "loaded {} rows, {} columns",
        grid.len(),
        grid.column_count()
    );

    let mut table = Table::new(grid).with_style(style);
    table.set_title(cli.title);

    if cli.check {
        report_fit(&table, &SystemTerminal)?;
    }
    println!("{}", table);
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level(cli.verbose)))
        .format_timestamp(None)
        .init();

    if let Err(err) = run(cli) {
        eprintln!("termtables: {:#}", err);
        std::process::exit(1);
    }
}
