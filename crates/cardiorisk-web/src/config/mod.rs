//! Configuration loading for CardioRisk.
//! Reads cardiorisk.toml from the current directory or the path in CARDIORISK_CONFIG.
//! A missing file is not an error: every field has a default.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub artifacts: ArtifactsConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16    { 3001 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactsConfig {
    #[serde(default = "default_weights_path")]
    pub weights_path: PathBuf,
    #[serde(default = "default_scaler_path")]
    pub scaler_path: PathBuf,
}

fn default_weights_path() -> PathBuf { PathBuf::from("model/custom_model_params.json") }
fn default_scaler_path()  -> PathBuf { PathBuf::from("model/scaler_params.json") }

impl Default for ArtifactsConfig {
    fn default() -> Self {
        Self { weights_path: default_weights_path(), scaler_path: default_scaler_path() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    #[serde(default = "bool_true")]
    pub enforce_form_limits: bool,
}

fn bool_true() -> bool { true }

impl Default for ValidationConfig {
    fn default() -> Self {
        Self { enforce_form_limits: bool_true() }
    }
}

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}


impl Config {
    /// Load configuration from cardiorisk.toml, then apply environment overrides.
    /// Checks CARDIORISK_CONFIG env var first, then current directory.
    pub fn load() -> anyhow::Result<(Self, ConfigSource)> {
        let path = std::env::var("CARDIORISK_CONFIG")
            .unwrap_or_else(|_| "cardiorisk.toml".to_string());

        let (mut config, source) = if Path::new(&path).exists() {
            let content = std::fs::read_to_string(&path)?;
            (Self::from_toml_str(&content)?, ConfigSource::File(PathBuf::from(&path)))
        } else {
            (Self::default(), ConfigSource::Defaults)
        };

        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        Ok((config, source))
    }

    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// CARDIORISK_WEIGHTS, CARDIORISK_SCALER and CARDIORISK_PORT win over the file.
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<()> {
        if let Some(path) = lookup("CARDIORISK_WEIGHTS") {
            self.artifacts.weights_path = PathBuf::from(path);
        }
        if let Some(path) = lookup("CARDIORISK_SCALER") {
            self.artifacts.scaler_path = PathBuf::from(path);
        }
        if let Some(port) = lookup("CARDIORISK_PORT") {
            self.server.port = port
                .parse()
                .map_err(|e| anyhow::anyhow!("CARDIORISK_PORT={port} is not a valid port: {e}"))?;
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.parse()
            .map_err(|e| anyhow::anyhow!("Invalid server address {addr}: {e}"))
    }
}
