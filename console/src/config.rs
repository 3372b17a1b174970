use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use trigram_common::config::{
    ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};
use trigram_common::games::trigram::{BotType, FirstPlayerMode};

const CONFIG_FILE_NAME: &str = "trigram_config.yaml";

fn default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub type ConsoleConfigManager =
    ConfigManager<FileContentConfigProvider, ConsoleConfig, YamlConfigSerializer>;

pub fn get_config_manager(path: Option<PathBuf>) -> ConsoleConfigManager {
    ConfigManager::from_yaml_file(path.unwrap_or_else(default_config_path))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ConsoleConfig {
    pub first_player: FirstPlayerMode,
    pub bot: BotType,
    pub seed: Option<u64>,
    pub computer_name: String,
    pub human_name: String,
    pub verbose: bool,
    pub log_prefix: Option<String>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            first_player: FirstPlayerMode::Random,
            bot: BotType::Minimax,
            seed: None,
            computer_name: "Computer".to_string(),
            human_name: "Player".to_string(),
            verbose: false,
            log_prefix: None,
        }
    }
}

impl Validate for ConsoleConfig {
    fn validate(&self) -> Result<(), String> {
        if self.computer_name.trim().is_empty() {
            return Err("computer_name must not be empty".to_string());
        }
        if self.human_name.trim().is_empty() {
            return Err("human_name must not be empty".to_string());
        }
        if self.computer_name.trim() == self.human_name.trim() {
            return Err(format!(
                "computer_name and human_name must differ, both are '{}'",
                self.computer_name
            ));
        }
        if let Some(prefix) = &self.log_prefix
            && prefix.trim().is_empty()
        {
            return Err("log_prefix must not be empty when set".to_string());
        }
        Ok(())
    }
}
