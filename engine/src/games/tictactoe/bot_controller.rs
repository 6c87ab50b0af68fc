use crate::games::SessionRng;
use super::board::{Board, get_available_moves};
use super::error::GameError;
use super::minimax::best_move_for;
use super::types::{Difficulty, Player};
use super::win_detector::evaluate;

pub struct BotInput {
    pub board: Board,
    pub bot: Player,
}

impl BotInput {
    pub fn new(board: Board, bot: Player) -> Self {
        Self { board, bot }
    }
}

/// Computer move for O at the given difficulty.
pub fn select_move(
    board: &Board,
    difficulty: Difficulty,
    rng: &mut SessionRng,
) -> Result<usize, GameError> {
    calculate_move(difficulty, BotInput::new(*board, Player::O), rng)
}

pub fn calculate_move(
    difficulty: Difficulty,
    input: BotInput,
    rng: &mut SessionRng,
) -> Result<usize, GameError> {
    if evaluate(&input.board).is_terminal() {
        return Err(GameError::PreconditionViolation("board is already decided"));
    }

    let chosen = match difficulty {
        Difficulty::Easy => calculate_random_move(&input, rng),
        Difficulty::Medium => {
            if rng.coin_flip() {
                calculate_random_move(&input, rng)
            } else {
                best_move_for(&input.board, input.bot)
            }
        }
        Difficulty::Hard => best_move_for(&input.board, input.bot),
    };

    chosen.ok_or(GameError::PreconditionViolation("no empty cells"))
}

fn calculate_random_move(input: &BotInput, rng: &mut SessionRng) -> Option<usize> {
    let available_moves = get_available_moves(&input.board);
    if available_moves.is_empty() {
        return None;
    }
    let idx = rng.random_index(available_moves.len());
    Some(available_moves[idx])
}
