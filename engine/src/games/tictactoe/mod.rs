mod board;
mod bot_controller;
mod error;
mod minimax;
mod session;
mod settings;
mod types;
mod win_detector;

pub use board::{Board, get_available_moves};
pub use bot_controller::{BotInput, calculate_move, select_move};
pub use error::{GameError, IllegalMoveReason};
pub use minimax::{best_move, best_move_for, minimax_value, minimax_value_for};
pub use session::{SessionEvent, SessionOutcome, SessionState, TicTacToeSession};
pub use settings::{COMPUTER_NAME, DEFAULT_PLAYER_O_NAME, DEFAULT_PLAYER_X_NAME, TicTacToeSessionSettings};
pub use types::{BOARD_SIZE, CELL_COUNT, Difficulty, GameStatus, Mark, Player, WinningLine};
pub use win_detector::{WIN_PATTERNS, check_win, check_win_with_line, evaluate};
