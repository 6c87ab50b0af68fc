use std::time::Duration;

use tictactoe_engine::games::tictactoe::{
    BOARD_SIZE, CELL_COUNT, Mark, Player, SessionEvent, TicTacToeSession,
    TicTacToeSessionSettings,
};
use tictactoe_engine::log;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    Cell(usize),
    Quit,
}

/// Cells are typed 1-9 the way the board prints them.
pub fn parse_command(input: &str) -> Result<ConsoleCommand, String> {
    let trimmed = input.trim();
    if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
        return Ok(ConsoleCommand::Quit);
    }

    match trimmed.parse::<usize>() {
        Ok(n) if (1..=CELL_COUNT).contains(&n) => Ok(ConsoleCommand::Cell(n - 1)),
        _ => Err(format!("Enter a cell number 1-{} or q to quit", CELL_COUNT)),
    }
}

/// Board text with the winning cells bracketed.
pub fn render_board(session: &TicTacToeSession) -> String {
    let board = session.board();
    let winning_line = session.winning_line();

    let rows: Vec<String> = (0..BOARD_SIZE)
        .map(|row| {
            (0..BOARD_SIZE)
                .map(|col| {
                    let index = row * BOARD_SIZE + col;
                    let symbol = match board.get(index) {
                        Some(Mark::Empty) | None => (index + 1).to_string(),
                        Some(mark) => mark.symbol().to_string(),
                    };
                    if winning_line.is_some_and(|line| line.contains(index)) {
                        format!("[{}]", symbol)
                    } else {
                        format!(" {} ", symbol)
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();

    rows.join("\n---+---+---\n")
}

async fn read_line(lines: &mut Lines<BufReader<Stdin>>) -> Result<Option<String>, String> {
    lines
        .next_line()
        .await
        .map_err(|e| format!("Failed to read input: {}", e))
}

pub fn match_banner(session: &TicTacToeSession) -> String {
    let settings = session.settings();
    let x = session.player_name(Player::X);
    let o = session.player_name(Player::O);
    if settings.vs_computer {
        format!("{} (X) vs {} (O), difficulty: {}", x, o, settings.difficulty)
    } else {
        format!("{} (X) vs {} (O)", x, o)
    }
}

pub async fn run_game(settings: TicTacToeSessionSettings, think_delay: Duration) -> Result<(), String> {
    let mut session = TicTacToeSession::new(settings);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}\n", match_banner(&session));
    println!("{}\n", render_board(&session));

    loop {
        let mut computer_requested = false;
        for event in session.take_events() {
            match event {
                SessionEvent::ComputerTurnRequested => computer_requested = true,
                SessionEvent::GameOver(_) => println!("{}\n", session.status_message()),
                SessionEvent::Restarted => println!("{}\n", render_board(&session)),
                SessionEvent::MovePlaced { .. } => {}
            }
        }

        if computer_requested {
            tokio::time::sleep(think_delay).await;
            let index = session.computer_turn().map_err(|e| e.to_string())?;
            println!("Computer marks cell {}\n", index + 1);
            println!("{}\n", render_board(&session));
            continue;
        }

        if !session.is_running() {
            println!("Play again? [y/n]");
            match read_line(&mut lines).await? {
                Some(answer) if answer.trim().eq_ignore_ascii_case("y") => {
                    session.restart();
                    continue;
                }
                _ => break,
            }
        }

        println!("{}", session.status_message());
        let Some(input) = read_line(&mut lines).await? else {
            break;
        };

        match parse_command(&input) {
            Ok(ConsoleCommand::Quit) => break,
            Ok(ConsoleCommand::Cell(index)) => match session.submit_move(index) {
                Ok(_) => println!("\n{}\n", render_board(&session)),
                Err(err) => println!("{}", err),
            },
            Err(message) => println!("{}", message),
        }
    }

    log!("Leaving after {} moves", session.moves().len());
    Ok(())
}
