//! Error types for grid construction.

/// Errors produced while building a [`Grid`](crate::Grid) from CSV text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// The input does not end with a final newline, or is too short to
    /// contain one. Without the terminator the last record is ambiguous,
    /// so parsing refuses rather than render a misaligned table.
    #[error("input does not end with a final newline")]
    MissingFinalNewline,
}
