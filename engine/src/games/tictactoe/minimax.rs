use super::board::{Board, get_available_moves};
use super::types::{GameStatus, Mark, Player};
use super::win_detector::evaluate;

pub const WIN_SCORE: i32 = 1;
pub const LOSS_SCORE: i32 = -1;
pub const DRAW_SCORE: i32 = 0;

/// The computer plays O unless told otherwise.
pub const DEFAULT_BOT: Player = Player::O;

/// Game-theoretic value of `board` for O, with O to move when `maximizing`.
pub fn minimax_value(board: &Board, maximizing: bool) -> i32 {
    minimax_value_for(board, DEFAULT_BOT, maximizing)
}

/// Value of `board` for `bot` under optimal play from both sides.
/// `maximizing` says whether `bot` is the one to move.
pub fn minimax_value_for(board: &Board, bot: Player, maximizing: bool) -> i32 {
    minimax(*board, bot, maximizing, 0)
}

fn terminal_score(status: GameStatus, bot: Player) -> Option<i32> {
    match status {
        GameStatus::Won(winner) if winner == bot => Some(WIN_SCORE),
        GameStatus::Won(_) => Some(LOSS_SCORE),
        GameStatus::Draw => Some(DRAW_SCORE),
        GameStatus::InProgress => None,
    }
}

// Exhaustive, no pruning. `depth` is carried for depth-aware scoring but
// does not affect the value.
fn minimax(board: Board, bot: Player, is_maximizing: bool, depth: usize) -> i32 {
    if let Some(score) = terminal_score(evaluate(&board), bot) {
        return score;
    }

    let mover: Mark = if is_maximizing {
        bot.mark()
    } else {
        bot.opponent().mark()
    };

    let scores = get_available_moves(&board)
        .into_iter()
        .map(|index| minimax(board.with_mark(index, mover), bot, !is_maximizing, depth + 1));

    if is_maximizing {
        scores.max().unwrap_or(DRAW_SCORE)
    } else {
        scores.min().unwrap_or(DRAW_SCORE)
    }
}

pub fn best_move(board: &Board) -> Option<usize> {
    best_move_for(board, DEFAULT_BOT)
}

/// Lowest-index cell among those with the highest minimax value for `bot`.
/// `None` when the board is decided or full.
pub fn best_move_for(board: &Board, bot: Player) -> Option<usize> {
    if evaluate(board).is_terminal() {
        return None;
    }

    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in get_available_moves(board) {
        let score = minimax(board.with_mark(index, bot.mark()), bot, false, 1);

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}
