use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Tableau Server base URL, e.g. `https://tableau.example.com`
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default = "default_api_version")]
    pub api_version: String,
    /// Site content URL; empty for the default site
    #[serde(default)]
    pub site: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Where datasources are downloaded to and read from
    #[serde(default = "default_datasource_dir")]
    pub datasource_dir: PathBuf,
    #[serde(default = "default_json_output")]
    pub json_output: PathBuf,
    #[serde(default = "default_markdown_output")]
    pub markdown_output: PathBuf,
}

fn default_api_version() -> String {
    "3.0".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_page_size() -> u32 {
    100
}

fn default_datasource_dir() -> PathBuf {
    PathBuf::from("Published Extracts")
}

fn default_json_output() -> PathBuf {
    PathBuf::from("TableauServerDataDictionary.json")
}

fn default_markdown_output() -> PathBuf {
    PathBuf::from("TableauServerDataDictionary.md")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: None,
            api_version: default_api_version(),
            site: String::new(),
            timeout_secs: default_timeout_secs(),
            page_size: default_page_size(),
        }
    }
}

impl ServerConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            datasource_dir: default_datasource_dir(),
            json_output: default_json_output(),
            markdown_output: default_markdown_output(),
        }
    }
}

impl Config {
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "linux") {
            // Use XDG config directory on Linux
            dirs::config_dir()
                .context("Failed to get XDG config directory")?
                .join("tableau-dictionary")
        } else {
            dirs::home_dir()
                .context("Failed to get home directory")?
                .join(".tableau-dictionary")
        };

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        debug!("Loading config from: {:?}", config_path);

        if !config_path.exists() {
            info!("Config file doesn't exist, using defaults");
            return Ok(Self::default());
        }

        let config_content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        let config: Config = toml::from_str(&config_content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;

        debug!("Loaded config: {:?}", config);
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        debug!("Saving config to: {:?}", config_path);

        if let Some(config_dir) = config_path.parent() {
            if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
                fs::create_dir_all(config_dir).with_context(|| {
                    format!("Failed to create config directory: {:?}", config_dir)
                })?;
                info!("Created config directory: {:?}", config_dir);
            }
        }

        let config_content =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        fs::write(config_path, config_content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        info!("Config saved successfully");
        Ok(())
    }

    pub fn set_server(&mut self, url: String, site: Option<String>, api_version: Option<String>) {
        info!("Setting server to: {}", url);
        self.server.url = Some(url.trim_end_matches('/').to_string());
        if let Some(site) = site {
            self.server.site = site;
        }
        if let Some(api_version) = api_version {
            self.server.api_version = api_version;
        }
    }

    pub fn set_datasource_dir(&mut self, dir: PathBuf) {
        info!("Setting datasource directory to: {:?}", dir);
        self.paths.datasource_dir = dir;
    }
}
