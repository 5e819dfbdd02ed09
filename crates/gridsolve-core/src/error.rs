//! Errors raised by grid access and bulk ingestion.

/// Errors produced while constructing positions or loading a grid.
///
/// Individual malformed symbol values are *not* an error: the lenient
/// conversions on [`Symbol`](crate::Symbol) coerce them to empty cells.
/// Only structural problems (coordinates off the board, a bulk load whose
/// length is not 81) are reported here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// A (row, column) coordinate outside the 9×9 board.
    #[display("cell out of range: ({row}, {col})")]
    OutOfRange {
        /// The offending row index.
        row: u8,
        /// The offending column index.
        col: u8,
    },
    /// A bulk load whose sequence length is not exactly 81.
    #[display("expected 81 cells, got {len}")]
    LengthMismatch {
        /// The length that was supplied.
        len: usize,
    },
}
