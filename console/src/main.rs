mod config;
mod runner;

use std::time::Duration;

use clap::Parser;
use tictactoe_engine::config::Validate;
use tictactoe_engine::games::tictactoe::{COMPUTER_NAME, Difficulty};
use tictactoe_engine::{log, logger};

#[derive(Parser)]
#[command(name = "tictactoe_console", about = "Tic-tac-toe in the terminal")]
struct Args {
    /// Config file; defaults to tictactoe_console_config.yaml next to the executable.
    #[arg(long)]
    config: Option<String>,

    #[arg(long)]
    player_x: Option<String>,

    #[arg(long)]
    player_o: Option<String>,

    /// Play O against the computer.
    #[arg(long)]
    vs_computer: bool,

    /// easy, medium or hard.
    #[arg(long)]
    difficulty: Option<Difficulty>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    think_delay_ms: Option<u64>,

    /// Write the effective settings back to the config file.
    #[arg(long)]
    save_config: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

fn apply_overrides(mut config: config::Config, args: &Args) -> config::Config {
    if let Some(name) = &args.player_x {
        config.game.player_x_name = name.clone();
    }
    if let Some(name) = &args.player_o {
        config.game.player_o_name = name.clone();
    }
    if args.vs_computer {
        config.game.vs_computer = true;
        config.game.player_o_name = COMPUTER_NAME.to_string();
    }
    if let Some(difficulty) = args.difficulty {
        config.game.difficulty = difficulty;
    }
    if args.seed.is_some() {
        config.game.seed = args.seed;
    }
    if let Some(delay) = args.think_delay_ms {
        config.think_delay_ms = delay;
    }
    config
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Console".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_path = args.config.clone().unwrap_or_else(config::get_config_path);
    let config_manager = config::get_config_manager(&config_path);
    let config = apply_overrides(config_manager.get_config()?, &args);
    config.validate()?;

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Saved settings to {}", config_path);
    }

    log!(
        "Starting game, difficulty {}, think delay {}ms",
        config.game.difficulty,
        config.think_delay_ms
    );

    runner::run_game(config.game, Duration::from_millis(config.think_delay_ms)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vs_computer_flag_overrides_stored_opponent() {
        let args = Args::try_parse_from([
            "tictactoe_console",
            "--player-x",
            "Ann",
            "--vs-computer",
            "--difficulty",
            "easy",
            "--think-delay-ms",
            "0",
        ])
        .unwrap();

        let config = apply_overrides(config::Config::default(), &args);

        assert_eq!(config.game.player_x_name, "Ann");
        assert_eq!(config.game.player_o_name, COMPUTER_NAME);
        assert!(config.game.vs_computer);
        assert_eq!(config.game.difficulty, Difficulty::Easy);
        assert_eq!(config.think_delay_ms, 0);
    }

    #[test]
    fn test_no_flags_keep_stored_config() {
        let args = Args::try_parse_from(["tictactoe_console"]).unwrap();

        assert_eq!(apply_overrides(config::Config::default(), &args), config::Config::default());
    }

    #[test]
    fn test_unknown_difficulty_is_rejected() {
        assert!(Args::try_parse_from(["tictactoe_console", "--difficulty", "insane"]).is_err());
    }
}
