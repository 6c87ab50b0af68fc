use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::types::Difficulty;

pub const DEFAULT_PLAYER_X_NAME: &str = "Player X";
pub const DEFAULT_PLAYER_O_NAME: &str = "Player O";
pub const COMPUTER_NAME: &str = "Computer";
pub const MAX_NAME_LENGTH: usize = 32;

/// Chosen once when a game is set up. `restart` keeps these as they are.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToeSessionSettings {
    pub player_x_name: String,
    pub player_o_name: String,
    pub vs_computer: bool,
    pub difficulty: Difficulty,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl TicTacToeSessionSettings {
    pub fn two_players(player_x_name: &str, player_o_name: &str) -> Self {
        Self {
            player_x_name: player_x_name.to_string(),
            player_o_name: player_o_name.to_string(),
            vs_computer: false,
            difficulty: Difficulty::default(),
            seed: None,
        }
    }

    pub fn vs_computer(player_x_name: &str, difficulty: Difficulty) -> Self {
        Self {
            player_x_name: player_x_name.to_string(),
            player_o_name: COMPUTER_NAME.to_string(),
            vs_computer: true,
            difficulty,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// X's display name; blank falls back to the default.
    pub fn resolved_player_x_name(&self) -> String {
        resolve_name(&self.player_x_name, DEFAULT_PLAYER_X_NAME)
    }

    /// O's display name; always "Computer" against the computer.
    pub fn resolved_player_o_name(&self) -> String {
        if self.vs_computer {
            COMPUTER_NAME.to_string()
        } else {
            resolve_name(&self.player_o_name, DEFAULT_PLAYER_O_NAME)
        }
    }
}

fn resolve_name(name: &str, fallback: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

impl Default for TicTacToeSessionSettings {
    fn default() -> Self {
        Self::two_players(DEFAULT_PLAYER_X_NAME, DEFAULT_PLAYER_O_NAME)
    }
}

impl Validate for TicTacToeSessionSettings {
    fn validate(&self) -> Result<(), String> {
        for (label, name) in [("X", &self.player_x_name), ("O", &self.player_o_name)] {
            if name.trim().chars().count() > MAX_NAME_LENGTH {
                return Err(format!(
                    "Player {} name must not exceed {} characters",
                    label, MAX_NAME_LENGTH
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigSerializer, YamlConfigSerializer};

    #[test]
    fn test_blank_names_fall_back_to_defaults() {
        let settings = TicTacToeSessionSettings::two_players("  ", "");

        assert_eq!(settings.resolved_player_x_name(), "Player X");
        assert_eq!(settings.resolved_player_o_name(), "Player O");
    }

    #[test]
    fn test_names_are_trimmed() {
        let settings = TicTacToeSessionSettings::two_players(" Ann ", "Bob\n");

        assert_eq!(settings.resolved_player_x_name(), "Ann");
        assert_eq!(settings.resolved_player_o_name(), "Bob");
    }

    #[test]
    fn test_vs_computer_forces_computer_name() {
        let mut settings = TicTacToeSessionSettings::vs_computer("Ann", Difficulty::Easy);
        settings.player_o_name = "Bob".to_string();

        assert_eq!(settings.resolved_player_o_name(), "Computer");
    }

    #[test]
    fn test_long_names_fail_validation() {
        let settings = TicTacToeSessionSettings::two_players(&"a".repeat(33), "Bob");

        assert!(settings.validate().is_err());
        assert!(TicTacToeSessionSettings::default().validate().is_ok());
    }

    #[test]
    fn test_yaml_uses_lowercase_difficulty_and_omits_missing_seed() {
        let settings = TicTacToeSessionSettings::vs_computer("Ann", Difficulty::Medium);
        let yaml = YamlConfigSerializer::new().serialize(&settings).unwrap();

        assert!(yaml.contains("difficulty: medium"));
        assert!(!yaml.contains("seed"));
    }

    #[test]
    fn test_yaml_without_seed_deserializes() {
        let yaml = "player_x_name: Ann\nplayer_o_name: Computer\nvs_computer: true\ndifficulty: easy\n";
        let settings: TicTacToeSessionSettings = YamlConfigSerializer::new().deserialize(yaml).unwrap();

        assert_eq!(settings, TicTacToeSessionSettings::vs_computer("Ann", Difficulty::Easy));
    }
}
