//! Configuration file handling.
//!
//! Settings live in `config.json` inside the platform data directory (see
//! [`DataStorage`]). Every section is optional, and command-line flags always
//! take precedence over values read from the file.
//!
//! ## Configuration Structure
//!
//! - **Toggl Config**: API token, default workspace and endpoint URLs
//! - **Report Config**: default merge policy and per-task duration display
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use toggl_reporter::libs::config::Config;
//!
//! // Load existing configuration or fall back to defaults
//! let config = Config::read()?;
//!
//! if let Some(toggl) = &config.toggl {
//!     println!("Reports URL: {}", toggl.reports_url);
//! }
//!
//! // Run interactive configuration setup
//! Config::init()?.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::api::toggl::TogglConfig;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// A section offered by the interactive setup.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Key used to route the selection to its setup routine
    pub key: String,
    /// Display name shown in the selection list
    pub name: String,
}

/// Default report presentation.
///
/// Flags can only switch these on, so a `true` here cannot be turned off
/// from the command line.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ReportConfig {
    /// Keep every entry as its own task row instead of merging equal descriptions.
    #[serde(default)]
    pub do_not_merge_equal: bool,
    /// Print the accumulated duration next to each task.
    #[serde(default)]
    pub show_duration_for_each: bool,
}

impl ReportConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "report".to_string(),
            name: "Report".to_string(),
        }
    }

    pub fn init(config: &Option<Self>) -> Result<Self> {
        let config = config.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleReport);
        Ok(Self {
            do_not_merge_equal: Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptDoNotMergeEqual.to_string())
                .default(config.do_not_merge_equal)
                .interact()?,
            show_duration_for_each: Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptShowDurationForEach.to_string())
                .default(config.show_duration_for_each)
                .interact()?,
        })
    }
}

/// Root configuration container.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toggl: Option<TogglConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report: Option<ReportConfig>,
}

impl Config {
    /// Reads the configuration file, or returns the defaults when there is none.
    ///
    /// # Errors
    ///
    /// Fails when the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        Self::read_from(&DataStorage::new())
    }

    /// Reads the configuration from a specific data directory.
    pub fn read_from(storage: &DataStorage) -> Result<Config> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            tracing::debug!(path = %config_file_path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(&config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        tracing::info!(path = %config_file_path.display(), "loaded config");
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        self.save_to(&DataStorage::new())
    }

    pub fn save_to(&self, storage: &DataStorage) -> Result<()> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Interactive setup of the selected sections, starting from the current file.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = [TogglConfig::module(), ReportConfig::module()];
        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "toggl" => config.toggl = Some(TogglConfig::init(&config.toggl)?),
                "report" => config.report = Some(ReportConfig::init(&config.report)?),
                _ => {}
            }
        }

        Ok(config)
    }

    /// API token from the file, if one is set and not blank.
    pub fn token(&self) -> Option<&str> {
        self.toggl.as_ref()?.token.as_deref().filter(|token| !token.trim().is_empty())
    }

    pub fn workspace_id(&self) -> Option<u64> {
        self.toggl.as_ref()?.workspace_id
    }

    /// Toggl settings, with default endpoints when the section is missing.
    pub fn toggl_or_default(&self) -> TogglConfig {
        self.toggl.clone().unwrap_or_default()
    }

    pub fn report_or_default(&self) -> ReportConfig {
        self.report.clone().unwrap_or_default()
    }
}
