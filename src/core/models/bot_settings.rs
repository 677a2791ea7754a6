use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::global_constants;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GisSettings {
    /// Reply used when a search fails for any reason.
    #[serde(default)]
    pub default: Option<String>,
    /// Channels where the `gis` command is ignored.
    #[serde(default)]
    pub exclude: Vec<String>,
    #[serde(default = "default_search_url")]
    pub search_url: String,
    #[serde(default = "default_deadline_ms")]
    pub deadline_ms: u64,
    #[serde(default = "default_probe_timeout_secs")]
    pub probe_timeout_secs: u64,
}

fn default_search_url() -> String {
    global_constants::DEFAULT_SEARCH_URL.to_string()
}

fn default_deadline_ms() -> u64 {
    global_constants::DEFAULT_DEADLINE_MS
}

fn default_probe_timeout_secs() -> u64 {
    global_constants::DEFAULT_PROBE_TIMEOUT_SECS
}

impl Default for GisSettings {
    fn default() -> Self {
        Self {
            default: None,
            exclude: Vec::new(),
            search_url: default_search_url(),
            deadline_ms: default_deadline_ms(),
            probe_timeout_secs: default_probe_timeout_secs(),
        }
    }
}

impl GisSettings {
    pub fn deadline(&self) -> Duration {
        Duration::from_millis(self.deadline_ms)
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }

    pub fn is_excluded(&self, channel: &str) -> bool {
        self.exclude.iter().any(|excluded| excluded == channel)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BotSettings {
    #[serde(default = "default_bot_name")]
    pub bot_name: String,
    #[serde(default = "default_channel")]
    pub default_channel: String,
    #[serde(default)]
    pub gis: GisSettings,
}

fn default_bot_name() -> String {
    global_constants::DEFAULT_BOT_NAME.to_string()
}

fn default_channel() -> String {
    global_constants::DEFAULT_CHANNEL.to_string()
}

impl Default for BotSettings {
    fn default() -> Self {
        Self {
            bot_name: default_bot_name(),
            default_channel: default_channel(),
            gis: GisSettings::default(),
        }
    }
}

impl BotSettings {
    /// Loads settings from `path`, or from the per-user config directory when `None`.
    ///
    /// A missing file is replaced by the defaults, which are written back to disk.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let settings_path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::get_settings_file_path()?,
        };

        if !settings_path.exists() {
            log::info!(
                "{} No settings file found at {:?}, using defaults",
                global_constants::LOG_TAG_SETTINGS,
                settings_path
            );
            let default_settings = Self::default();
            default_settings.save(&settings_path)?;
            return Ok(default_settings);
        }

        let contents = std::fs::read_to_string(&settings_path)?;
        let settings: BotSettings = serde_json::from_str(&contents)?;

        log::info!(
            "{} Loaded settings from {:?}",
            global_constants::LOG_TAG_SETTINGS,
            settings_path
        );
        log::debug!(
            "{} Search URL: {}, excluded channels: {:?}",
            global_constants::LOG_TAG_SETTINGS,
            settings.gis.search_url,
            settings.gis.exclude
        );

        Ok(settings)
    }

    pub fn save(&self, settings_path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(settings_path, contents)?;

        log::info!(
            "{} Saved settings to {:?}",
            global_constants::LOG_TAG_SETTINGS,
            settings_path
        );
        Ok(())
    }

    fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::SETTINGS_DIR_NAME);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }
}
