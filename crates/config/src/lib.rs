//! Bridge Configuration Management
//!
//! Loads bridge configuration from `config/bridge.txt`, a `key = value` file
//! with `#` comments.

use bridge_core::BridgeError;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Default location of the configuration file, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "config/bridge.txt";

const DEFAULT_BEDROCK_ADDRESS: &str = "0.0.0.0:19132";
const DEFAULT_REMOTE_ADDRESS: &str = "127.0.0.1:25565";

/// Configuration file errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line}: invalid value {value:?} for {key}")]
    InvalidValue {
        line: usize,
        key: String,
        value: String,
    },
}

impl From<ConfigError> for BridgeError {
    fn from(err: ConfigError) -> Self {
        BridgeError::Config(err.to_string())
    }
}

/// Complete bridge configuration
#[derive(Debug, Clone, PartialEq)]
pub struct BridgeConfig {
    /// Address Bedrock clients connect to (from "bedrock-address")
    pub bedrock_address: SocketAddr,
    /// Java server the bridge connects to (from "remote-address")
    pub remote_address: SocketAddr,
    /// Maximum concurrent sessions (from "max-players")
    pub max_players: usize,
    /// Assume every client has the optional pack applied
    /// (from "enable-optional-pack-required-features")
    pub enable_optional_pack_required_features: bool,
    /// Directory overriding the embedded mapping tables (from "mappings-dir")
    pub mappings_dir: Option<PathBuf>,
    /// Verbose logging (from "debug-mode")
    pub debug_mode: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            bedrock_address: parse_default_address(DEFAULT_BEDROCK_ADDRESS),
            remote_address: parse_default_address(DEFAULT_REMOTE_ADDRESS),
            max_players: 100,
            enable_optional_pack_required_features: false,
            mappings_dir: None,
            debug_mode: false,
        }
    }
}

fn parse_default_address(address: &str) -> SocketAddr {
    address
        .parse()
        .unwrap_or_else(|_| SocketAddr::from(([0, 0, 0, 0], 19132)))
}

impl BridgeConfig {
    /// Load configuration from a file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Load configuration from [`DEFAULT_CONFIG_PATH`]
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load_from_file(DEFAULT_CONFIG_PATH)
    }

    /// Parse configuration file content
    ///
    /// Unknown keys are ignored; malformed values are rejected.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        for (index, line) in content.lines().enumerate() {
            let line = line.trim();

            // Skip comments and empty lines
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(eq_pos) = line.find('=') {
                let key = line[..eq_pos].trim();
                let value = line[eq_pos + 1..].trim();

                config.parse_option(key, value).map_err(|_| ConfigError::InvalidValue {
                    line: index + 1,
                    key: key.to_string(),
                    value: value.to_string(),
                })?;
            }
        }

        Ok(config)
    }

    fn parse_option(&mut self, key: &str, value: &str) -> Result<(), ()> {
        match key {
            "bedrock-address" => self.bedrock_address = value.parse().map_err(|_| ())?,
            "remote-address" => self.remote_address = value.parse().map_err(|_| ())?,
            "max-players" => self.max_players = value.parse().map_err(|_| ())?,
            "enable-optional-pack-required-features" => {
                self.enable_optional_pack_required_features = value.parse().map_err(|_| ())?;
            }
            "mappings-dir" => {
                self.mappings_dir = (!value.is_empty()).then(|| PathBuf::from(value));
            }
            "debug-mode" => self.debug_mode = value.parse().map_err(|_| ())?,
            _ => {
                tracing::debug!("Unknown config option: {} = {}", key, value);
            }
        }
        Ok(())
    }

    /// Default log filter for this configuration
    pub fn log_filter(&self) -> &'static str {
        if self.debug_mode {
            "debug"
        } else {
            "info"
        }
    }

    /// Display configuration summary
    pub fn display(&self) {
        tracing::info!("Bridge configuration:");
        tracing::info!("  Bedrock listener: {}", self.bedrock_address);
        tracing::info!("  Java remote: {}", self.remote_address);
        tracing::info!("  Max players: {}", self.max_players);
        tracing::info!(
            "  Optional pack features: {}",
            if self.enable_optional_pack_required_features { "enabled" } else { "disabled" }
        );
        match &self.mappings_dir {
            Some(dir) => tracing::info!("  Mappings: {}", dir.display()),
            None => tracing::info!("  Mappings: embedded"),
        }
        tracing::info!("  Debug mode: {}", self.debug_mode);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = BridgeConfig::default();
        assert_eq!(config.bedrock_address.port(), 19132);
        assert_eq!(config.remote_address.port(), 25565);
        assert!(!config.enable_optional_pack_required_features);
        assert_eq!(config.mappings_dir, None);
        assert_eq!(config.log_filter(), "info");
    }

    #[test]
    fn test_parse_simple_config() {
        let config_text = r#"
# bridge options
bedrock-address = 127.0.0.1:19133
enable-optional-pack-required-features = true
mappings-dir = /opt/bridge/mappings
max-players = 20
debug-mode = true
some-future-option = 1
"#;
        let config = BridgeConfig::parse(config_text).unwrap();
        assert_eq!(config.bedrock_address, "127.0.0.1:19133".parse().unwrap());
        assert!(config.enable_optional_pack_required_features);
        assert_eq!(config.mappings_dir, Some(PathBuf::from("/opt/bridge/mappings")));
        assert_eq!(config.max_players, 20);
        assert_eq!(config.log_filter(), "debug");
    }

    #[test]
    fn test_invalid_value_reports_line() {
        let result = BridgeConfig::parse("debug-mode = false\nmax-players = lots\n");
        match result {
            Err(ConfigError::InvalidValue { line, key, .. }) => {
                assert_eq!(line, 2);
                assert_eq!(key, "max-players");
            }
            other => panic!("expected invalid value, got {:?}", other),
        }
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bridge.txt");
        fs::write(&path, "remote-address = 10.0.0.5:25566\n").unwrap();

        let config = BridgeConfig::load_from_file(&path).unwrap();
        assert_eq!(config.remote_address, "10.0.0.5:25566".parse().unwrap());
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = BridgeConfig::load_from_file(temp_dir.path().join("missing.txt"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
