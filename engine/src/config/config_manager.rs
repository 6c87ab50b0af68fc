use serde::{Deserialize, Serialize};
use std::sync::Mutex;

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Loads, validates and caches one configuration value. A provider with no
/// stored content yields `TConfig::default()`, which is not cached so a later
/// `set_config` is still picked up.
pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Mutex<Option<TConfig>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path),
            YamlConfigSerializer::new(),
        )
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config: Mutex::new(None),
            config_content_provider,
            config_serializer,
        }
    }

    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut current = self
            .config
            .lock()
            .map_err(|e| format!("Config cache poisoned: {}", e))?;

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let Some(config_data) = self.config_content_provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config = self.config_serializer.deserialize(&config_data)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *current = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let serialized_config = self.config_serializer.serialize(config)?;
        self.config_content_provider
            .set_config_content(&serialized_config)?;

        let mut current = self
            .config
            .lock()
            .map_err(|e| format!("Config cache poisoned: {}", e))?;
        *current = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryContentProvider;
    use crate::games::tictactoe::{Difficulty, TicTacToeSessionSettings};

    fn memory_manager(
        content: Option<&str>,
    ) -> ConfigManager<MemoryContentProvider, TicTacToeSessionSettings> {
        let provider = match content {
            Some(content) => MemoryContentProvider::with_content(content),
            None => MemoryContentProvider::new(),
        };
        ConfigManager::new(provider, YamlConfigSerializer::new())
    }

    #[test]
    fn test_empty_storage_returns_default() {
        let manager = memory_manager(None);

        assert_eq!(manager.get_config(), Ok(TicTacToeSessionSettings::default()));
    }

    #[test]
    fn test_set_then_get_returns_saved_settings() {
        let manager = memory_manager(None);
        let settings = TicTacToeSessionSettings::vs_computer("Ann", Difficulty::Easy).with_seed(7);

        assert!(manager.set_config(&settings).is_ok());
        assert_eq!(manager.get_config(), Ok(settings.clone()));
        assert_eq!(manager.get_config(), Ok(settings));
    }

    #[test]
    fn test_invalid_stored_config_is_rejected() {
        let yaml = format!(
            "player_x_name: {}\nplayer_o_name: Bob\nvs_computer: false\ndifficulty: hard\n",
            "a".repeat(40)
        );
        let manager = memory_manager(Some(&yaml));

        let result = manager.get_config();
        assert!(result.is_err());
        assert!(result.unwrap_err().starts_with("Config validation error"));
    }

    #[test]
    fn test_invalid_config_is_not_saved() {
        let manager = memory_manager(None);
        let settings = TicTacToeSessionSettings::two_players(&"b".repeat(40), "Bob");

        assert!(manager.set_config(&settings).is_err());
        assert_eq!(manager.get_config(), Ok(TicTacToeSessionSettings::default()));
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        let manager = memory_manager(Some("difficulty: [unclosed"));

        assert!(manager.get_config().is_err());
    }
}
