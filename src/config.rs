//! Service configuration loading.
//!
//! Configuration is read from a YAML file into typed structs. Every
//! field has a default, and a missing file yields the full default
//! configuration, so the service runs with no config file at all.
//!
//! ```yaml
//! server:
//!   host: 127.0.0.1
//!   port: 4000
//! store:
//!   path: ./data.json
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// The complete service configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Snapshot store settings.
    #[serde(default)]
    pub store: StoreConfig,
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Address to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind; the `PORT` environment variable overrides it.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Snapshot store settings.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Path of the JSON data file.
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    4000
}

fn default_store_path() -> PathBuf {
    PathBuf::from("./data.json")
}

impl ServiceConfig {
    /// Loads configuration from the given YAML file.
    ///
    /// A missing file is not an error: the defaults apply. An existing
    /// file that fails to read or parse is reported as `ConfigParse`.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let path_str = path.display().to_string();
        let content = fs::read_to_string(path).map_err(|e| EngineError::ConfigParse {
            path: path_str.clone(),
            message: e.to_string(),
        })?;
        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParse {
            path: path_str,
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.store.path, PathBuf::from("./data.json"));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = ServiceConfig::load("/nonexistent/config.yaml").unwrap();
        assert_eq!(config.server.port, 4000);
    }

    #[test]
    fn test_load_full_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "server:\n  host: 0.0.0.0\n  port: 8080\nstore:\n  path: /tmp/leaves.json\n"
        )
        .unwrap();

        let config = ServiceConfig::load(file.path()).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.store.path, PathBuf::from("/tmp/leaves.json"));
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "server:\n  port: 9000\n").unwrap();

        let config = ServiceConfig::load(file.path()).unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.store.path, PathBuf::from("./data.json"));
    }

    #[test]
    fn test_load_invalid_yaml_reports_config_parse() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "server: [not a mapping").unwrap();

        match ServiceConfig::load(file.path()) {
            Err(EngineError::ConfigParse { .. }) => {}
            other => panic!("Expected ConfigParse error, got {other:?}"),
        }
    }
}
