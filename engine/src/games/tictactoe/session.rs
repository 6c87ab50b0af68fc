use crate::games::SessionRng;
use crate::log;
use super::board::Board;
use super::bot_controller::select_move;
use super::error::{GameError, IllegalMoveReason};
use super::settings::TicTacToeSessionSettings;
use super::types::{Difficulty, GameStatus, Mark, Player, WinningLine};
use super::win_detector::{check_win_with_line, evaluate};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    AwaitingMove(Player),
    Finished(GameStatus),
}

/// What a single accepted move led to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionOutcome {
    Continue(Player),
    Win(Player),
    Draw,
}

/// Notifications for the front-end, drained with `take_events`. Events not
/// drained before `restart` belong to the old game and are dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    MovePlaced { index: usize, player: Player },
    /// The computer is to move next; the front-end calls `computer_turn`
    /// once it is ready to show the move.
    ComputerTurnRequested,
    GameOver(GameStatus),
    Restarted,
}

pub struct TicTacToeSession {
    settings: TicTacToeSessionSettings,
    player_x_name: String,
    player_o_name: String,
    board: Board,
    state: SessionState,
    moves: Vec<(usize, Mark)>,
    events: Vec<SessionEvent>,
    rng: SessionRng,
}

impl TicTacToeSession {
    pub fn new(settings: TicTacToeSessionSettings) -> Self {
        let rng = match settings.seed {
            Some(seed) => SessionRng::new(seed),
            None => SessionRng::from_random(),
        };

        let session = Self {
            player_x_name: settings.resolved_player_x_name(),
            player_o_name: settings.resolved_player_o_name(),
            settings,
            board: Board::new(),
            state: SessionState::AwaitingMove(Player::X),
            moves: Vec::new(),
            events: Vec::new(),
            rng,
        };

        log!(
            "New session: {} (X) vs {} (O), vs_computer={}, difficulty={}, seed={}",
            session.player_x_name,
            session.player_o_name,
            session.settings.vs_computer,
            session.settings.difficulty,
            session.rng.seed()
        );

        session
    }

    /// Plays a human move for the side to move. Against the computer, O's
    /// moves only come from `computer_turn`.
    pub fn submit_move(&mut self, index: usize) -> Result<SessionOutcome, GameError> {
        if self.is_computer_turn() {
            return Err(IllegalMoveReason::ComputerToMove.into());
        }
        self.place_mark(index)
    }

    fn place_mark(&mut self, index: usize) -> Result<SessionOutcome, GameError> {
        let SessionState::AwaitingMove(player) = self.state else {
            return Err(IllegalMoveReason::GameFinished.into());
        };

        let board = self.board.apply_move(index, player)?;
        self.board = board;
        self.moves.push((index, player.mark()));
        self.events.push(SessionEvent::MovePlaced { index, player });

        log!("{} ({}) marked cell {}", self.player_name(player), player, index);

        let status = evaluate(&self.board);
        let outcome = match status {
            GameStatus::InProgress => {
                let next = player.opponent();
                self.state = SessionState::AwaitingMove(next);
                if self.is_computer(next) {
                    self.events.push(SessionEvent::ComputerTurnRequested);
                }
                SessionOutcome::Continue(next)
            }
            GameStatus::Won(winner) => {
                self.finish(status);
                SessionOutcome::Win(winner)
            }
            GameStatus::Draw => {
                self.finish(status);
                SessionOutcome::Draw
            }
        };

        Ok(outcome)
    }

    /// Picks O's move with the configured difficulty, plays it and returns
    /// the chosen cell.
    pub fn computer_turn(&mut self) -> Result<usize, GameError> {
        if !self.settings.vs_computer {
            return Err(GameError::PreconditionViolation("session has no computer player"));
        }

        match self.state {
            SessionState::AwaitingMove(player) if self.is_computer(player) => {}
            SessionState::AwaitingMove(_) => {
                return Err(GameError::PreconditionViolation("not the computer's turn"));
            }
            SessionState::Finished(_) => {
                return Err(GameError::PreconditionViolation("game is already over"));
            }
        }

        let index = select_move(&self.board, self.settings.difficulty, &mut self.rng)?;
        log!("Computer ({}) chose cell {}", self.settings.difficulty, index);

        self.place_mark(index)?;
        Ok(index)
    }

    pub fn restart(&mut self) {
        self.board = Board::new();
        self.state = SessionState::AwaitingMove(Player::X);
        self.moves.clear();
        self.events.clear();
        self.events.push(SessionEvent::Restarted);

        log!("Session restarted");
    }

    fn finish(&mut self, status: GameStatus) {
        self.state = SessionState::Finished(status);
        self.events.push(SessionEvent::GameOver(status));

        match status {
            GameStatus::Won(winner) => log!("{} ({}) wins", self.player_name(winner), winner),
            _ => log!("Game drawn"),
        }
    }

    fn is_computer(&self, player: Player) -> bool {
        self.settings.vs_computer && player == Player::O
    }

    pub fn take_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn status(&self) -> GameStatus {
        match self.state {
            SessionState::AwaitingMove(_) => GameStatus::InProgress,
            SessionState::Finished(status) => status,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, SessionState::AwaitingMove(_))
    }

    pub fn current_player(&self) -> Option<Player> {
        match self.state {
            SessionState::AwaitingMove(player) => Some(player),
            SessionState::Finished(_) => None,
        }
    }

    pub fn is_computer_turn(&self) -> bool {
        self.current_player().is_some_and(|p| self.is_computer(p))
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.board)
    }

    pub fn last_move(&self) -> Option<(usize, Mark)> {
        self.moves.last().copied()
    }

    pub fn moves(&self) -> &[(usize, Mark)] {
        &self.moves
    }

    pub fn settings(&self) -> &TicTacToeSessionSettings {
        &self.settings
    }

    pub fn difficulty(&self) -> Difficulty {
        self.settings.difficulty
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn player_name(&self, player: Player) -> &str {
        match player {
            Player::X => &self.player_x_name,
            Player::O => &self.player_o_name,
        }
    }

    pub fn get_winner(&self) -> Option<&str> {
        match self.status() {
            GameStatus::Won(player) => Some(self.player_name(player)),
            _ => None,
        }
    }

    pub fn status_message(&self) -> String {
        match self.state {
            SessionState::AwaitingMove(player) => {
                format!("{}'s turn ({})", self.player_name(player), player)
            }
            SessionState::Finished(GameStatus::Won(player)) => {
                format!("{} Wins!", self.player_name(player))
            }
            SessionState::Finished(_) => "It's a Draw!".to_string(),
        }
    }
}
