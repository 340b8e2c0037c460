//! Reading grids from JSON, YAML and CSV.
//!
//! JSON and YAML documents are a list of rows. A row is a list of scalars or
//! `null`, which marks a separator. `null` cells become empty strings. CSV is
//! read without a header row and may be ragged.

use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use log::debug;
use serde_json::Value;
use termtables::{Grid, Row};

/// Input document format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Pick by file extension, YAML otherwise.
    #[default]
    Auto,
    Json,
    Yaml,
    Csv,
}

impl Format {
    /// Resolves `Auto` using the input path, if there is one.
    pub fn resolve(self, path: Option<&Path>) -> Format {
        if self != Format::Auto {
            return self;
        }
        let ext = path
            .and_then(|p| p.extension())
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Format::Json,
            Some("csv") => Format::Csv,
            _ => Format::Yaml,
        }
    }
}

/// Reads the whole input, from `path` or from stdin when `path` is `None` or `-`.
pub fn read_source(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .with_context(|| format!("failed to read {}", p.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Parses a document in the given (already resolved) format.
pub fn parse_grid(content: &str, format: Format) -> Result<Grid> {
    match format {
        Format::Json => {
            let rows: Vec<Option<Vec<Value>>> =
                serde_json::from_str(content).context("invalid JSON table")?;
            rows_to_grid(rows)
        }
        Format::Yaml | Format::Auto => {
            if content.trim().is_empty() {
                return Ok(Grid::new());
            }
            let rows: Vec<Option<Vec<Value>>> =
                serde_yaml::from_str(content).context("invalid YAML table")?;
            rows_to_grid(rows)
        }
        Format::Csv => parse_csv(content),
    }
}

fn rows_to_grid(rows: Vec<Option<Vec<Value>>>) -> Result<Grid> {
    rows.into_iter()
        .enumerate()
        .map(|(i, row)| match row {
            None => Ok(Row::Separator),
            Some(cells) => cells
                .into_iter()
                .enumerate()
                .map(|(j, cell)| {
                    scalar_to_string(cell).with_context(|| format!("row {}, cell {}", i, j))
                })
                .collect::<Result<Vec<_>>>()
                .map(Row::Cells),
        })
        .collect()
}

fn scalar_to_string(value: Value) -> Result<String> {
    Ok(match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => bail!("cells must be scalars, got {}", value),
    })
}

fn parse_csv(content: &str) -> Result<Grid> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut grid = Grid::new();
    for (i, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("invalid CSV at record {}", i))?;
        grid.push_row(record.iter());
    }
    debug!("read {} CSV records", grid.len());
    Ok(grid)
}
