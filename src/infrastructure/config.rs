use crate::domain::error::PdfTrError;
use crate::domain::model::RenderMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://your-pdf-translator-service.onrender.com";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    pub http_proxy: Option<String>,
    #[serde(default = "default_from_lang")]
    pub default_from_lang: String,
    #[serde(default = "default_to_lang")]
    pub default_to_lang: String,
    #[serde(default)]
    pub render_mode: RenderMode,
    #[serde(default = "default_error_display_ms")]
    pub error_display_ms: u64,
    /// Command used to open translated documents, e.g. "firefox --new-tab"
    pub open_command: Option<String>,
    /// Where translated documents are written before opening
    pub blob_dir: Option<String>,
    #[serde(default)]
    pub logging: Logging,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Logging {
    #[serde(default = "default_enable")]
    pub enable: bool,
    pub path: Option<String>,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            enable: true,
            path: None,
            level: "WARN".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            http_proxy: None,
            default_from_lang: default_from_lang(),
            default_to_lang: default_to_lang(),
            render_mode: RenderMode::default(),
            error_display_ms: default_error_display_ms(),
            open_command: None,
            blob_dir: None,
            logging: Logging::default(),
        }
    }
}

impl Config {
    pub fn error_display(&self) -> Duration {
        Duration::from_millis(self.error_display_ms)
    }

    pub fn blob_dir(&self) -> PathBuf {
        match &self.blob_dir {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => default_blob_dir(),
        }
    }
}

// Defaults
fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
fn default_from_lang() -> String {
    "English".to_string()
}
fn default_to_lang() -> String {
    "Chinese".to_string()
}
fn default_error_display_ms() -> u64 {
    5000
}
fn default_enable() -> bool {
    true
}
fn default_log_level() -> String {
    "WARN".to_string()
}

pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("pdftr").join("config.toml"))
}

/// Cache directory for translated documents: ~/.cache/pdftr/blobs (Linux)
pub fn default_blob_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("pdftr")
        .join("blobs")
}

pub fn parse_config(content: &str) -> Result<Config, PdfTrError> {
    Ok(toml::from_str::<Config>(content)?)
}

pub fn load_config() -> Result<Config, PdfTrError> {
    let config_path = get_config_path();

    if let Some(path) = config_path {
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            match parse_config(&content) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    eprintln!(
                        "Warning: Failed to parse config file: {}. Using defaults.",
                        e
                    );
                }
            }
        }
    }

    Ok(Config::default())
}

pub fn generate_config_sample() -> Result<(), PdfTrError> {
    let config_path = get_config_path();

    if let Some(path) = config_path {
        if path.exists() {
            eprintln!("Config file already exists at: {}", path.display());
            return Ok(());
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let sample = Config::default();
        let toml_content = toml::to_string_pretty(&sample)
            .map_err(|e| PdfTrError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(&path, toml_content)
            .map_err(|e| PdfTrError::Config(format!("Failed to write config file: {}", e)))?;
        println!("Generated config file at: {}", path.display());
    } else {
        return Err(PdfTrError::Config(
            "Cannot determine config directory".to_string(),
        ));
    }

    Ok(())
}
