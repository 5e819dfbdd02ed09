//! JSON board documents.
//!
//! A board document is a JSON object whose `"Board"` field holds exactly 81
//! number-or-string values in row-major order. Values 1-9 become symbols;
//! everything else (0, out-of-range numbers, non-integer numbers, and
//! unparseable strings) loads as an empty cell. That leniency is a
//! deliberate policy carried by the core conversions, not a parsing gap;
//! only a structurally broken document (unreadable, not JSON, wrong cell
//! count) is an error.

use std::{fs, io, path::Path};

use gridsolve_core::{Cell, Grid, GridError, Symbol};
use serde::Deserialize;

/// Errors raised while loading a board document.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub(crate) enum LoadError {
    /// The document could not be read.
    #[display("cannot read board document: {_0}")]
    Io(io::Error),
    /// The document is not valid JSON or lacks the expected shape.
    #[display("malformed board document: {_0}")]
    Json(serde_json::Error),
    /// The board array does not hold exactly 81 values.
    #[display("invalid board contents: {_0}")]
    Grid(GridError),
}

/// A raw cell value as it appears in a document.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl RawValue {
    fn to_cell(&self) -> Cell {
        match self {
            RawValue::Integer(value) => Symbol::from_number(*value),
            // non-integer numbers are never symbols
            RawValue::Float(_) => None,
            RawValue::Text(text) => Symbol::from_text(text),
        }
    }
}

#[derive(Debug, Deserialize)]
struct BoardDocument {
    #[serde(rename = "Board")]
    board: Vec<RawValue>,
}

/// Loads a grid from the JSON document at `path`.
pub(crate) fn load_board(path: &Path) -> Result<Grid, LoadError> {
    let text = fs::read_to_string(path)?;
    parse_board(&text)
}

fn parse_board(text: &str) -> Result<Grid, LoadError> {
    let document: BoardDocument = serde_json::from_str(text)?;
    let cells: Vec<Cell> = document.board.iter().map(RawValue::to_cell).collect();
    let mut grid = Grid::new();
    grid.ingest(&cells)?;
    Ok(grid)
}
