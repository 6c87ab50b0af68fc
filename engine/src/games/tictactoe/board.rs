use super::error::{GameError, IllegalMoveReason};
use super::types::{CELL_COUNT, Mark, Player};
use super::win_detector::evaluate;

/// 3x3 grid stored row-major, cell `row * 3 + col`.
///
/// The board is `Copy`: search and evaluation always work on their own
/// snapshot, and `apply_move` returns a new board rather than editing one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    /// Player whose turn it is when X opens and turns alternate.
    pub fn next_player(&self) -> Player {
        if self.count(Mark::X) > self.count(Mark::O) {
            Player::O
        } else {
            Player::X
        }
    }

    pub(crate) fn with_mark(mut self, index: usize, mark: Mark) -> Self {
        self.cells[index] = mark;
        self
    }

    pub fn apply_move(&self, index: usize, player: Player) -> Result<Board, GameError> {
        let cell = self.get(index).ok_or(IllegalMoveReason::OutOfBounds(index))?;

        if evaluate(self).is_terminal() {
            return Err(IllegalMoveReason::GameFinished.into());
        }

        if cell != Mark::Empty {
            return Err(IllegalMoveReason::CellOccupied(index).into());
        }

        Ok(self.with_mark(index, player.mark()))
    }
}

pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .cells
        .iter()
        .enumerate()
        .filter(|(_, cell)| **cell == Mark::Empty)
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
pub(crate) fn board_from_str(layout: &str) -> Board {
    let mut cells = [Mark::Empty; CELL_COUNT];
    for (i, ch) in layout.chars().filter(|c| !c.is_whitespace()).enumerate() {
        cells[i] = match ch {
            'X' => Mark::X,
            'O' => Mark::O,
            _ => Mark::Empty,
        };
    }
    Board::from_cells(cells)
}

#[cfg(test)]
fn collect_positions(board: Board, seen: &mut std::collections::HashSet<Board>) {
    if !seen.insert(board) || evaluate(&board).is_terminal() {
        return;
    }
    let mark = board.next_player().mark();
    for index in get_available_moves(&board) {
        collect_positions(board.with_mark(index, mark), seen);
    }
}

/// Every position reachable from the empty board with X opening, finished
/// ones included.
#[cfg(test)]
pub(crate) fn reachable_positions() -> std::collections::HashSet<Board> {
    let mut seen = std::collections::HashSet::new();
    collect_positions(Board::new(), &mut seen);
    seen
}
