//! The 9×9 board: cell storage, unit views, and candidate generation.

use std::fmt::{self, Display};

use crate::{
    error::GridError,
    position::Position,
    symbol::{Cell, Symbol},
    symbol_set::SymbolSet,
};

/// A 9×9 grid of cells, stored as an 81-element row-major array.
///
/// The grid itself places no restriction on what [`put`](Self::put) writes;
/// the no-duplicate-in-unit invariant is maintained by construction in the
/// search layer, which only ever places symbols drawn from
/// [`available_symbols`](Self::available_symbols).
///
/// Cloning yields a fully independent grid: cells are plain values, so the
/// derived `Clone` is a deep copy.
///
/// # Examples
///
/// ```
/// use gridsolve_core::{Grid, Position, Symbol};
///
/// let mut grid = Grid::new();
/// assert_eq!(grid.empty_cells().len(), 81);
///
/// grid.put(Position::new(0, 0), Some(Symbol::S1));
/// assert_eq!(grid.get(Position::new(0, 0)), Some(Symbol::S1));
/// assert_eq!(grid.to_string().lines().count(), 13);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Cell; 81],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Creates a grid with every cell empty.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the cell at `pos`.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Overwrites the cell at `pos` unconditionally.
    ///
    /// Callers are responsible for not violating unit uniqueness; the
    /// search layer guarantees this by only placing candidate symbols.
    pub fn put(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.index()] = cell;
    }

    /// Sets every cell to empty.
    pub fn clear(&mut self) {
        self.cells = [None; 81];
    }

    /// Returns the 9 cells of row `r`, left to right.
    ///
    /// # Panics
    ///
    /// Panics if `r` is not in the range 0-8.
    #[must_use]
    pub fn row(&self, r: u8) -> [Cell; 9] {
        assert!(r < 9, "row index out of range: {r}");
        let mut cells = [None; 9];
        for c in 0u8..9 {
            cells[usize::from(c)] = self.get(Position::new(r, c));
        }
        cells
    }

    /// Returns the 9 cells of column `c`, top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `c` is not in the range 0-8.
    #[must_use]
    pub fn col(&self, c: u8) -> [Cell; 9] {
        assert!(c < 9, "column index out of range: {c}");
        let mut cells = [None; 9];
        for r in 0u8..9 {
            cells[usize::from(r)] = self.get(Position::new(r, c));
        }
        cells
    }

    /// Returns the 9 cells of the 3×3 box containing `pos`, row-major.
    #[must_use]
    pub fn box_at(&self, pos: Position) -> [Cell; 9] {
        let base_row = pos.row() / 3 * 3;
        let base_col = pos.col() / 3 * 3;
        let mut cells = [None; 9];
        for i in 0u8..9 {
            cells[usize::from(i)] = self.get(Position::new(base_row + i / 3, base_col + i % 3));
        }
        cells
    }

    /// Returns every empty cell in row-major scan order.
    ///
    /// The order is part of the contract: it fixes the search's
    /// cell-selection policy to first-empty-in-scan-order.
    #[must_use]
    pub fn empty_cells(&self) -> Vec<Position> {
        Position::all()
            .filter(|&pos| self.get(pos).is_none())
            .collect()
    }

    /// Returns the symbols that can be placed at `pos` without duplicating
    /// a symbol in its row, column, or box.
    ///
    /// An occupied cell has no candidates. Iterating the returned set
    /// yields candidates in ascending face-value order, so branch order is
    /// deterministic for a given board state.
    #[must_use]
    pub fn available_symbols(&self, pos: Position) -> SymbolSet {
        if self.get(pos).is_some() {
            return SymbolSet::EMPTY;
        }
        let units = [self.row(pos.row()), self.col(pos.col()), self.box_at(pos)];
        let used: SymbolSet = units.into_iter().flatten().flatten().collect();
        used.complement()
    }

    /// Bulk-loads the grid from an 81-element cell sequence in row-major
    /// order, overwriting every cell.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::LengthMismatch`], without touching the grid,
    /// unless `cells` holds exactly 81 elements.
    pub fn ingest(&mut self, cells: &[Cell]) -> Result<(), GridError> {
        if cells.len() != 81 {
            return Err(GridError::LengthMismatch { len: cells.len() });
        }
        self.cells.copy_from_slice(cells);
        Ok(())
    }
}

impl Display for Grid {
    /// Renders the fixed 13-line ASCII form: a `-------------` bar before
    /// row 0 and after rows 2, 5, and 8, and each data row as `|`-separated
    /// groups of three cells, one character per cell (space when empty).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const BAR: &str = "-------------";
        f.write_str(BAR)?;
        for r in 0u8..9 {
            f.write_str("\n|")?;
            for c in 0u8..9 {
                match self.get(Position::new(r, c)) {
                    Some(symbol) => write!(f, "{symbol}")?,
                    None => f.write_str(" ")?,
                }
                if c % 3 == 2 {
                    f.write_str("|")?;
                }
            }
            if r % 3 == 2 {
                write!(f, "\n{BAR}")?;
            }
        }
        Ok(())
    }
}
