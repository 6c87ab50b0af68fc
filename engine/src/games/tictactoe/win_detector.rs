use super::board::Board;
use super::types::{GameStatus, Mark, Player, WinningLine};

/// Rows, then columns, then the two diagonals.
pub const WIN_PATTERNS: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(board: &Board) -> Option<Player> {
    check_win_with_line(board).map(|line| line.player)
}

/// First completed pattern in table order.
pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();

    WIN_PATTERNS.iter().find_map(|&[a, b, c]| {
        let mark = cells[a];
        if mark != Mark::Empty && mark == cells[b] && mark == cells[c] {
            mark.player().map(|player| WinningLine::new(player, [a, b, c]))
        } else {
            None
        }
    })
}

fn has_line(board: &Board, player: Player) -> bool {
    let mark = player.mark();
    let cells = board.cells();
    WIN_PATTERNS
        .iter()
        .any(|&[a, b, c]| cells[a] == mark && cells[b] == mark && cells[c] == mark)
}

pub fn evaluate(board: &Board) -> GameStatus {
    debug_assert!(
        !(has_line(board, Player::X) && has_line(board, Player::O)),
        "both players hold a completed line"
    );

    if let Some(player) = check_win(board) {
        return GameStatus::Won(player);
    }

    if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::board::{board_from_str, reachable_positions};

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), GameStatus::InProgress);
    }

    #[test]
    fn test_every_pattern_wins_for_either_player() {
        for pattern in WIN_PATTERNS {
            for player in [Player::X, Player::O] {
                let board = pattern
                    .iter()
                    .fold(Board::new(), |b, &i| b.with_mark(i, player.mark()));

                assert_eq!(evaluate(&board), GameStatus::Won(player));
                assert_eq!(
                    check_win_with_line(&board),
                    Some(WinningLine::new(player, pattern))
                );
            }
        }
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = board_from_str("XOX XOO OXX");

        assert_eq!(evaluate(&board), GameStatus::Draw);
    }

    #[test]
    fn test_every_reachable_full_board_without_line_is_draw() {
        let full_without_line: Vec<Board> = reachable_positions()
            .into_iter()
            .filter(|board| board.is_full() && check_win(board).is_none())
            .collect();

        assert!(!full_without_line.is_empty());
        for board in full_without_line {
            assert_eq!(evaluate(&board), GameStatus::Draw, "board {:?}", board.cells());
        }
    }

    #[test]
    fn test_every_reachable_board_with_line_is_won_by_its_owner() {
        for board in reachable_positions() {
            if let Some(line) = check_win_with_line(&board) {
                assert_eq!(evaluate(&board), GameStatus::Won(line.player));
            }
        }
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        let board = board_from_str("XOX OXO OXX");

        assert_eq!(evaluate(&board), GameStatus::Won(Player::X));
    }

    #[test]
    fn test_double_line_same_player_reported_once_first_pattern() {
        let board = board_from_str("XXX X.. X.O");

        assert_eq!(evaluate(&board), GameStatus::Won(Player::X));
        assert_eq!(check_win_with_line(&board).map(|l| l.cells), Some([0, 1, 2]));
    }

    #[test]
    fn test_partial_lines_do_not_win() {
        let board = board_from_str("XX. OO. ...");

        assert_eq!(evaluate(&board), GameStatus::InProgress);
        assert_eq!(check_win(&board), None);
    }
}
