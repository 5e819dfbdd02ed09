//! Deterministic solving for 9×9 constraint grids.
//!
//! The [`Solver`] consumes a [`Grid`](gridsolve_core::Grid) and completes it
//! three ways:
//!
//! - [`Solver::solve`]: full backtracking search over the empty cells in
//!   row-major scan order, mutating the grid in place with strict
//!   mutate-then-undo discipline
//! - [`Solver::propagate`]: the strict pass, repeatedly filling every cell
//!   whose candidate set has exactly one member, never guessing
//! - [`Solver::solve_with_propagation`]: propagation first, backtracking
//!   over whatever remains
//!
//! Dead-ends hit during search are counted per recursion depth in
//! [`SearchStats`], available from [`Solver::stats`] after any solving call.

pub use self::{error::*, solver::*, stats::*};

mod error;
mod solver;
mod stats;
