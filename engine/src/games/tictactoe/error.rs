use derive_more::{Display, Error, From};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum IllegalMoveReason {
    #[display("cell {} is already marked", _0)]
    CellOccupied(#[error(not(source))] usize),
    #[display("cell {} is outside the board", _0)]
    OutOfBounds(#[error(not(source))] usize),
    #[display("game is already over")]
    GameFinished,
    #[display("it is the computer's turn")]
    ComputerToMove,
}

/// Failure of a board or session operation.
///
/// `IllegalMove` is rejected before any state changes and the caller may
/// simply ask for another move. `PreconditionViolation` means the caller
/// asked the computer to move when no move was possible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum GameError {
    #[display("Illegal move: {}", _0)]
    IllegalMove(IllegalMoveReason),
    #[display("Precondition violated: {}", _0)]
    #[from(ignore)]
    PreconditionViolation(#[error(not(source))] &'static str),
}
