use serde::{Deserialize, Serialize};
use tictactoe_engine::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use tictactoe_engine::games::tictactoe::TicTacToeSessionSettings;

pub const CONFIG_FILE_NAME: &str = "tictactoe_console_config.yaml";
pub const MAX_THINK_DELAY_MS: u64 = 5_000;

pub fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager(
    path: &str,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub game: TicTacToeSessionSettings,
    #[serde(default = "default_think_delay_ms")]
    pub think_delay_ms: u64,
}

fn default_think_delay_ms() -> u64 {
    400
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        if self.think_delay_ms > MAX_THINK_DELAY_MS {
            return Err(format!(
                "think_delay_ms must not exceed {}",
                MAX_THINK_DELAY_MS
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            game: TicTacToeSessionSettings::default(),
            think_delay_ms: default_think_delay_ms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::config::{ConfigContentProvider, ConfigSerializer};
    use tictactoe_engine::games::tictactoe::Difficulty;

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_console_config_{}.yaml", random_number));
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();

        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: Config = serializer.deserialize(&serialized).unwrap();

        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_through_manager() {
        let config = Config {
            game: TicTacToeSessionSettings::vs_computer("Ann", Difficulty::Medium),
            think_delay_ms: 0,
        };
        let file_path = get_temp_file_path();
        let manager = get_config_manager(&file_path);

        assert!(manager.set_config(&config).is_ok());
        assert_eq!(manager.get_config(), Ok(config.clone()));

        let fresh_manager = get_config_manager(&file_path);
        assert_eq!(fresh_manager.get_config(), Ok(config));

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager = get_config_manager("this_file_does_not_exist.yaml");

        assert_eq!(manager.get_config(), Ok(Config::default()));
    }

    #[test]
    fn test_missing_delay_uses_default() {
        let file_path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(file_path.clone());
        provider
            .set_config_content(
                "game:\n  player_x_name: Ann\n  player_o_name: Bob\n  vs_computer: false\n  difficulty: easy\n",
            )
            .unwrap();

        let config = get_config_manager(&file_path).get_config().unwrap();

        assert_eq!(config.think_delay_ms, 400);
        assert_eq!(config.game.difficulty, Difficulty::Easy);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_excessive_delay_fails_validation() {
        let config = Config {
            think_delay_ms: MAX_THINK_DELAY_MS + 1,
            ..Config::default()
        };

        assert!(config.validate().is_err());
    }
}
