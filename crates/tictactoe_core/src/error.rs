//! Error types for move application.

/// Error returned when a move cannot be applied.
///
/// Occupied cells and finished games are expected, recoverable outcomes the
/// caller must check. Out-of-range coordinates are a caller contract
/// violation: the presentation layer is expected to only ever send valid
/// cells, so this variant signals a bug rather than a game-legality outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell at `(row, col)` already holds a mark.
    #[display("cell ({_0}, {_1}) is already occupied")]
    SquareOccupied(usize, usize),

    /// The game has already reached a terminal state.
    #[display("game is already over")]
    GameOver,

    /// A coordinate was outside `0..=2`.
    #[display("coordinates ({_0}, {_1}) are out of range")]
    OutOfRange(usize, usize),
}

impl std::error::Error for MoveError {}
