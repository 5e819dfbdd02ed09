//! The backtracking engine and the forced-move propagation pass.

use gridsolve_core::{Grid, Position};

use crate::{SearchStats, SolveError};

/// Deterministic solver for 9×9 constraint grids.
///
/// The search visits empty cells in row-major scan order and tries
/// candidates in ascending face-value order, so a given starting grid
/// always produces the same solution. One grid is mutated in place by one
/// call stack: each recursion frame undoes exactly the placement it made
/// before reporting failure, which keeps the grid consistent at every
/// point control returns to a caller. A failed [`solve`](Self::solve)
/// therefore hands back the grid exactly as it arrived.
///
/// Dead-end statistics for the most recent call are kept on the solver
/// instance; see [`stats`](Self::stats).
///
/// # Examples
///
/// ```
/// use gridsolve_core::Grid;
/// use gridsolve_solver::Solver;
///
/// let mut solver = Solver::new();
/// let mut grid = Grid::new();
///
/// // Even a fully empty grid has a completion.
/// solver.solve(&mut grid)?;
/// assert!(grid.empty_cells().is_empty());
/// # Ok::<(), gridsolve_solver::SolveError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Solver {
    stats: SearchStats,
}

impl Solver {
    /// Creates a solver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the dead-end statistics from the most recent solving call.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Completes the grid in place by backtracking search.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::NoSolution`] when every candidate at the top
    /// level has been exhausted. The mutate-then-undo discipline guarantees
    /// the grid is then exactly as it was before the call.
    pub fn solve(&mut self, grid: &mut Grid) -> Result<(), SolveError> {
        self.stats.reset();
        let empties = grid.empty_cells();
        if self.fill(grid, &empties, 0) {
            Ok(())
        } else {
            Err(SolveError::NoSolution)
        }
    }

    /// Solves an owned copy, leaving `grid` untouched.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::NoSolution`] when the puzzle has no solution.
    pub fn solve_copy(&mut self, grid: &Grid) -> Result<Grid, SolveError> {
        let mut copy = grid.clone();
        self.solve(&mut copy)?;
        Ok(copy)
    }

    /// Completes the grid by forced moves alone (the strict pass).
    ///
    /// Each round scans the open cells and places every cell whose
    /// candidate set has exactly one member; cells with more (or fewer)
    /// candidates wait for the next round. The pass never guesses.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::PropagationStalled`] when a full round places
    /// nothing while open cells remain. The grid keeps the forced moves
    /// made up to that point, as far as inference could take it.
    pub fn propagate(&mut self, grid: &mut Grid) -> Result<(), SolveError> {
        self.stats.reset();
        let (_, open) = Self::propagate_rounds(grid);
        if open.is_empty() {
            Ok(())
        } else {
            Err(SolveError::PropagationStalled { open: open.len() })
        }
    }

    /// Runs the strict pass first, then backtracks over whatever remains.
    ///
    /// A stalled pass is not a failure here; it simply hands the remaining
    /// open cells to the search.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::NoSolution`] when the search fails. The forced
    /// moves made by the pre-pass are undone along with the search's own
    /// placements, restoring the grid to its pre-call state.
    pub fn solve_with_propagation(&mut self, grid: &mut Grid) -> Result<(), SolveError> {
        self.stats.reset();
        let (placed, open) = Self::propagate_rounds(grid);
        if self.fill(grid, &open, 0) {
            Ok(())
        } else {
            for pos in placed {
                grid.put(pos, None);
            }
            Err(SolveError::NoSolution)
        }
    }

    /// Runs forced-move rounds to a fixpoint. Returns the positions placed
    /// and the cells still open, both in row-major scan order.
    fn propagate_rounds(grid: &mut Grid) -> (Vec<Position>, Vec<Position>) {
        let mut placed = Vec::new();
        let mut open = grid.empty_cells();
        loop {
            let mut deferred = Vec::with_capacity(open.len());
            for &pos in &open {
                if let Some(symbol) = grid.available_symbols(pos).as_single() {
                    grid.put(pos, Some(symbol));
                    placed.push(pos);
                } else {
                    deferred.push(pos);
                }
            }
            if deferred.is_empty() || deferred.len() == open.len() {
                return (placed, deferred);
            }
            open = deferred;
        }
    }

    /// Fills `empties` left to right, backtracking on failure. A frame that
    /// exhausts its candidates records a dead-end at its depth and undoes
    /// nothing but its own placement.
    fn fill(&mut self, grid: &mut Grid, empties: &[Position], depth: u8) -> bool {
        let Some((&pos, rest)) = empties.split_first() else {
            return true;
        };
        for symbol in grid.available_symbols(pos) {
            grid.put(pos, Some(symbol));
            if self.fill(grid, rest, depth + 1) {
                return true;
            }
            grid.put(pos, None);
        }
        self.stats.record_dead_end(depth);
        false
    }
}

#[cfg(test)]
mod tests {
    use gridsolve_core::{Cell, Symbol, SymbolSet};

    use super::*;

    const EASY: [i64; 81] = [
        0, 0, 6, 0, 1, 0, 0, 0, 0, //
        0, 7, 9, 0, 0, 0, 8, 2, 0, //
        0, 3, 4, 0, 7, 0, 6, 1, 9, //
        0, 0, 0, 6, 2, 1, 0, 0, 0, //
        3, 0, 5, 7, 0, 4, 1, 0, 8, //
        0, 0, 0, 5, 8, 3, 0, 0, 0, //
        4, 9, 3, 0, 5, 0, 2, 8, 0, //
        0, 5, 8, 0, 0, 0, 4, 7, 0, //
        0, 0, 0, 0, 4, 0, 5, 0, 0, //
    ];

    const MEDIUM: [i64; 81] = [
        0, 9, 0, 0, 0, 4, 0, 0, 0, //
        0, 0, 0, 0, 0, 9, 3, 0, 0, //
        7, 0, 0, 3, 0, 0, 6, 0, 0, //
        2, 0, 0, 8, 9, 0, 5, 0, 0, //
        0, 4, 1, 0, 6, 0, 8, 2, 0, //
        0, 0, 8, 0, 2, 3, 0, 0, 7, //
        0, 0, 7, 0, 0, 8, 0, 0, 3, //
        0, 0, 2, 1, 0, 0, 0, 0, 0, //
        0, 0, 0, 2, 0, 0, 0, 1, 0, //
    ];

    fn easy_solved() -> String {
        [
            "-------------",
            "|286|419|357|",
            "|179|365|824|",
            "|534|278|619|",
            "-------------",
            "|847|621|935|",
            "|325|794|168|",
            "|961|583|742|",
            "-------------",
            "|493|157|286|",
            "|658|932|471|",
            "|712|846|593|",
            "-------------",
        ]
        .join("\n")
    }

    fn medium_solved() -> String {
        [
            "-------------",
            "|693|514|782|",
            "|825|679|341|",
            "|714|382|695|",
            "-------------",
            "|276|891|534|",
            "|341|765|829|",
            "|958|423|167|",
            "-------------",
            "|167|948|253|",
            "|432|156|978|",
            "|589|237|416|",
            "-------------",
        ]
        .join("\n")
    }

    fn grid_from(values: &[i64; 81]) -> Grid {
        let cells: Vec<Cell> = values.iter().map(|&v| Symbol::from_number(v)).collect();
        let mut grid = Grid::new();
        grid.ingest(&cells).unwrap();
        grid
    }

    /// A valid grid with no solution: row 0 uses 2-9 and column 0 uses 1,
    /// so nothing can go in the top-left cell.
    fn blocked_grid() -> Grid {
        let mut grid = Grid::new();
        for c in 1u8..9 {
            grid.put(Position::new(0, c), Some(Symbol::from_value(c + 1)));
        }
        grid.put(Position::new(1, 0), Some(Symbol::S1));
        grid
    }

    fn assert_units_complete(grid: &Grid) {
        for i in 0u8..9 {
            let row: SymbolSet = grid.row(i).into_iter().flatten().collect();
            assert_eq!(row, SymbolSet::FULL, "row {i} incomplete");
            let col: SymbolSet = grid.col(i).into_iter().flatten().collect();
            assert_eq!(col, SymbolSet::FULL, "column {i} incomplete");
            let box_pos = Position::new(i / 3 * 3, i % 3 * 3);
            let box_cells: SymbolSet = grid.box_at(box_pos).into_iter().flatten().collect();
            assert_eq!(box_cells, SymbolSet::FULL, "box {i} incomplete");
        }
    }

    #[test]
    fn test_solves_easy_puzzle_to_known_form() {
        let mut grid = grid_from(&EASY);
        let mut solver = Solver::new();
        solver.solve(&mut grid).unwrap();
        assert_eq!(grid.to_string(), easy_solved());
        assert_units_complete(&grid);
    }

    #[test]
    fn test_solves_medium_puzzle_to_known_form() {
        let mut grid = grid_from(&MEDIUM);
        let mut solver = Solver::new();
        solver.solve(&mut grid).unwrap();
        assert_eq!(grid.to_string(), medium_solved());
    }

    #[test]
    fn test_solves_fully_empty_grid() {
        let mut grid = Grid::new();
        let mut solver = Solver::new();
        solver.solve(&mut grid).unwrap();
        assert!(grid.empty_cells().is_empty());
        assert_units_complete(&grid);
    }

    #[test]
    fn test_solved_grid_solves_again_unchanged() {
        let mut grid = grid_from(&EASY);
        let mut solver = Solver::new();
        solver.solve(&mut grid).unwrap();

        let solved = grid.clone();
        solver.solve(&mut grid).unwrap();
        assert_eq!(grid, solved);
        assert!(solver.stats().is_empty());
    }

    #[test]
    fn test_no_solution_restores_grid() {
        let mut grid = blocked_grid();
        let before = grid.clone();
        let mut solver = Solver::new();

        assert_eq!(solver.solve(&mut grid), Err(SolveError::NoSolution));
        assert_eq!(grid, before);
        // the one dead-end is the blocked cell itself, at the top of the search
        assert_eq!(solver.stats().dead_ends_at(0), 1);
        assert_eq!(solver.stats().total(), 1);
    }

    #[test]
    fn test_solve_copy_preserves_input() {
        let grid = grid_from(&EASY);
        let mut solver = Solver::new();

        let solved = solver.solve_copy(&grid).unwrap();
        assert_eq!(solved.to_string(), easy_solved());
        assert_eq!(grid, grid_from(&EASY));

        assert_eq!(
            solver.solve_copy(&blocked_grid()),
            Err(SolveError::NoSolution)
        );
    }

    #[test]
    fn test_propagation_completes_forced_chain() {
        let mut grid = grid_from(&EASY);
        let mut solver = Solver::new();
        solver.solve(&mut grid).unwrap();
        let solved = grid.clone();

        // removing a handful of scattered cells leaves each of them forced
        grid.put(Position::new(0, 0), None);
        grid.put(Position::new(4, 4), None);
        grid.put(Position::new(8, 8), None);

        solver.propagate(&mut grid).unwrap();
        assert_eq!(grid, solved);
    }

    #[test]
    fn test_strict_pass_solves_singles_only_puzzle() {
        // every deduction in this puzzle is a forced move, so inference
        // alone completes it
        let mut grid = grid_from(&EASY);
        let mut solver = Solver::new();
        solver.propagate(&mut grid).unwrap();
        assert_eq!(grid.to_string(), easy_solved());
    }

    #[test]
    fn test_propagation_stalls_where_guessing_is_needed() {
        let mut grid = grid_from(&MEDIUM);
        let mut solver = Solver::new();
        let err = solver.propagate(&mut grid).unwrap_err();
        let SolveError::PropagationStalled { open } = err else {
            panic!("expected a stall, got {err:?}");
        };
        assert!(open >= 1);
        assert!(!grid.empty_cells().is_empty());
    }

    #[test]
    fn test_propagation_stalls_immediately_on_empty_grid() {
        let mut grid = Grid::new();
        let mut solver = Solver::new();
        assert_eq!(
            solver.propagate(&mut grid),
            Err(SolveError::PropagationStalled { open: 81 })
        );
        assert_eq!(grid, Grid::new());
    }

    #[test]
    fn test_stalled_propagation_keeps_forced_moves() {
        // row 8 is complete except its last cell, which is forced to 1;
        // the blocked top-left cell still makes the whole grid unsolvable
        let mut grid = blocked_grid();
        for c in 0u8..8 {
            grid.put(Position::new(8, c), Some(Symbol::from_value(c + 2)));
        }

        let mut solver = Solver::new();
        let err = solver.propagate(&mut grid).unwrap_err();
        assert!(matches!(err, SolveError::PropagationStalled { .. }));
        assert_eq!(grid.get(Position::new(8, 8)), Some(Symbol::S1));
    }

    #[test]
    fn test_hybrid_matches_full_search() {
        // the pre-pass stalls on this puzzle, so the search stage finishes it
        let mut grid = grid_from(&MEDIUM);
        let mut solver = Solver::new();
        solver.solve_with_propagation(&mut grid).unwrap();
        assert_eq!(grid.to_string(), medium_solved());

        let mut grid = grid_from(&EASY);
        solver.solve_with_propagation(&mut grid).unwrap();
        assert_eq!(grid.to_string(), easy_solved());
    }

    #[test]
    fn test_hybrid_failure_undoes_forced_moves() {
        let mut grid = blocked_grid();
        for c in 0u8..8 {
            grid.put(Position::new(8, c), Some(Symbol::from_value(c + 2)));
        }
        let before = grid.clone();

        let mut solver = Solver::new();
        assert_eq!(
            solver.solve_with_propagation(&mut grid),
            Err(SolveError::NoSolution)
        );
        assert_eq!(grid, before);
    }

    #[test]
    fn test_stats_reset_between_runs() {
        let mut solver = Solver::new();

        let mut grid = blocked_grid();
        assert_eq!(solver.solve(&mut grid), Err(SolveError::NoSolution));
        assert_eq!(solver.stats().total(), 1);

        let mut solved = grid_from(&EASY);
        solver.solve(&mut solved).unwrap();
        solver.solve(&mut solved).unwrap();
        assert!(solver.stats().is_empty());
    }
}
