//! Core data structures for the gridsolve puzzle solver.
//!
//! This crate models a 9×9 constraint-satisfaction grid in which every cell
//! holds one of nine symbols and no symbol may repeat within a row, column,
//! or 3×3 box. It provides the board itself and the constraint views the
//! search layer is built on:
//!
//! - [`Symbol`]: the nine filled cell values; the empty cell is the absence
//!   of a symbol ([`Cell`] is `Option<Symbol>`)
//! - [`SymbolSet`]: a nine-bit set of symbols, used for unit contents and
//!   per-cell candidates
//! - [`Position`]: a (row, column) coordinate that is valid by construction
//! - [`Grid`]: the 81-cell board with row/column/box views, candidate
//!   generation, bulk ingestion, and the fixed textual rendering
//!
//! # Examples
//!
//! ```
//! use gridsolve_core::{Grid, Position, Symbol};
//!
//! let mut grid = Grid::new();
//! grid.put(Position::new(0, 0), Some(Symbol::S5));
//!
//! // 5 is no longer available anywhere in row 0
//! let candidates = grid.available_symbols(Position::new(0, 8));
//! assert!(!candidates.contains(Symbol::S5));
//! ```

pub mod error;
pub mod grid;
pub mod position;
pub mod symbol;
pub mod symbol_set;

pub use self::{
    error::GridError,
    grid::Grid,
    position::Position,
    symbol::{Cell, Symbol},
    symbol_set::SymbolSet,
};
