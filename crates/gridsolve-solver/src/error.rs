//! Negative solving outcomes.

/// A solving call that could not complete the grid.
///
/// Both variants are ordinary negative results, not crashes: the puzzle
/// itself admits no solution, or the chosen pass is too weak to find one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SolveError {
    /// Backtracking exhausted every candidate at the top level; the grid
    /// has been restored to its pre-call state.
    #[display("no solution")]
    NoSolution,
    /// A full strict-pass scan placed no forced move while cells remained
    /// open; the grid keeps the forced moves already made.
    #[display("propagation stalled with {open} open cells")]
    PropagationStalled {
        /// Number of cells still empty when the pass stalled.
        open: usize,
    },
}
