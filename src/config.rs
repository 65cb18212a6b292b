//! Configuration file support for bootcamp-service.
//!
//! Provides YAML-based configuration through `bootcamp-service.config.yml`
//! files, including data structures, file loading, validation, and merging
//! with command-line overrides.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use crate::bootcamp::services::fan_out::{DEFAULT_CALL_TIMEOUT, DEFAULT_CONCURRENCY};
use crate::bootcamp::services::FanOut;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "bootcamp-service.config.yml";

pub const DEFAULT_LISTEN: &str = "0.0.0.0:8080";
pub const DEFAULT_CAPACITY_URL: &str = "http://localhost:8081";
pub const DEFAULT_TECHNOLOGY_URL: &str = "http://localhost:8082";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub server: Option<ServerSection>,
    pub capacity: Option<AuthoritySection>,
    pub technology: Option<AuthoritySection>,
    pub fan_out: Option<FanOutSection>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

#[derive(Debug, Deserialize, Default)]
pub struct ServerSection {
    pub listen: Option<String>,
}

/// Location of a remote authority.
#[derive(Debug, Deserialize, Default)]
pub struct AuthoritySection {
    pub base_url: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct FanOutSection {
    pub concurrency: Option<usize>,
    pub timeout_ms: Option<u64>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty document deserializes as null
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(listen) = config.server.as_ref().and_then(|s| s.listen.as_deref()) {
        parse_listen(listen)?;
    }
    if let Some(url) = config.capacity.as_ref().and_then(|s| s.base_url.as_deref()) {
        validate_base_url("capacity.base_url", url)?;
    }
    if let Some(url) = config.technology.as_ref().and_then(|s| s.base_url.as_deref()) {
        validate_base_url("technology.base_url", url)?;
    }
    if let Some(fan_out) = &config.fan_out {
        if fan_out.concurrency == Some(0) {
            bail!(
                "Invalid config: fan_out.concurrency must be greater than 0.\n\n\
                 💡 Hint: The default is {}.",
                DEFAULT_CONCURRENCY
            );
        }
        if fan_out.timeout_ms == Some(0) {
            bail!(
                "Invalid config: fan_out.timeout_ms must be greater than 0.\n\n\
                 💡 Hint: The default is {}.",
                DEFAULT_CALL_TIMEOUT.as_millis()
            );
        }
    }
    Ok(())
}

fn parse_listen(listen: &str) -> Result<SocketAddr> {
    listen.trim().parse().with_context(|| {
        format!(
            "Invalid listen address: '{}'\n\n💡 Hint: Use the form host:port (e.g., \"{}\").",
            listen, DEFAULT_LISTEN
        )
    })
}

fn validate_base_url(field: &str, url: &str) -> Result<()> {
    let parsed = reqwest::Url::parse(url.trim())
        .with_context(|| format!("Invalid {}: '{}' is not a valid URL", field, url))?;

    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        bail!(
            "Invalid {}: '{}' must be an absolute http(s) URL.\n\n\
             💡 Hint: For example \"{}\".",
            field,
            url,
            DEFAULT_CAPACITY_URL
        );
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        tracing::warn!("Unknown config field '{}' will be ignored.", key);
    }
}

/// Values given on the command line; each one wins over the config file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub listen: Option<String>,
    pub capacity_url: Option<String>,
    pub technology_url: Option<String>,
}

/// Fully resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSettings {
    pub listen: SocketAddr,
    pub capacity_url: String,
    pub technology_url: String,
    pub fan_out: FanOut,
}

impl ServiceSettings {
    /// Merges defaults, the config file, and CLI overrides, in increasing precedence.
    pub fn resolve(file: Option<ConfigFile>, overrides: &CliOverrides) -> Result<Self> {
        let file = file.unwrap_or_default();

        let listen = overrides
            .listen
            .clone()
            .or_else(|| file.server.and_then(|s| s.listen))
            .unwrap_or_else(|| DEFAULT_LISTEN.to_string());
        let capacity_url = overrides
            .capacity_url
            .clone()
            .or_else(|| file.capacity.and_then(|s| s.base_url))
            .unwrap_or_else(|| DEFAULT_CAPACITY_URL.to_string());
        let technology_url = overrides
            .technology_url
            .clone()
            .or_else(|| file.technology.and_then(|s| s.base_url))
            .unwrap_or_else(|| DEFAULT_TECHNOLOGY_URL.to_string());

        let fan_out_section = file.fan_out.unwrap_or_default();
        let concurrency = fan_out_section.concurrency.unwrap_or(DEFAULT_CONCURRENCY);
        let timeout = fan_out_section
            .timeout_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_CALL_TIMEOUT);

        validate_base_url("capacity URL", &capacity_url)?;
        validate_base_url("technology URL", &technology_url)?;

        Ok(Self {
            listen: parse_listen(&listen)?,
            capacity_url: capacity_url.trim().to_string(),
            technology_url: technology_url.trim().to_string(),
            fan_out: FanOut::new(concurrency, timeout),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
server:
  listen: "127.0.0.1:9000"
capacity:
  base_url: "http://capacity.internal:8081"
technology:
  base_url: "https://technology.internal"
fan_out:
  concurrency: 3
  timeout_ms: 1500
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(
            config.server.as_ref().unwrap().listen.as_deref(),
            Some("127.0.0.1:9000")
        );
        assert_eq!(
            config.capacity.as_ref().unwrap().base_url.as_deref(),
            Some("http://capacity.internal:8081")
        );
        let fan_out = config.fan_out.as_ref().unwrap();
        assert_eq!(fan_out.concurrency, Some(3));
        assert_eq!(fan_out.timeout_ms, Some(1500));
        assert!(config.unknown_fields.is_empty());
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"
server:
  listen: "127.0.0.1:9000"
"#,
        )
        .unwrap();

        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_some());
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/config.yml"));
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.yml");
        fs::write(&config_path, "invalid: yaml: [[[broken").unwrap();

        let result = load_config_from_path(&config_path);
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_empty_file_is_default() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "\n").unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert!(config.server.is_none());
        assert!(config.fan_out.is_none());
    }

    #[test]
    fn test_zero_concurrency_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "fan_out:\n  concurrency: 0\n").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("fan_out.concurrency"));
    }

    #[test]
    fn test_zero_timeout_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "fan_out:\n  timeout_ms: 0\n").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("fan_out.timeout_ms"));
    }

    #[test]
    fn test_non_http_url_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "capacity:\n  base_url: \"ftp://capacity\"\n").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("capacity.base_url"));
    }

    #[test]
    fn test_bad_listen_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "server:\n  listen: \"not-an-address\"\n").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Invalid listen address"));
    }

    #[test]
    fn test_unknown_fields_warning() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
server:
  listen: "127.0.0.1:9000"
database: postgres
retries: 3
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.unknown_fields.len(), 2);
        assert!(config.unknown_fields.contains_key("database"));
        assert!(config.unknown_fields.contains_key("retries"));
    }

    #[test]
    fn test_resolve_defaults() {
        let settings = ServiceSettings::resolve(None, &CliOverrides::default()).unwrap();

        assert_eq!(settings.listen, DEFAULT_LISTEN.parse::<SocketAddr>().unwrap());
        assert_eq!(settings.capacity_url, DEFAULT_CAPACITY_URL);
        assert_eq!(settings.technology_url, DEFAULT_TECHNOLOGY_URL);
        assert_eq!(settings.fan_out, FanOut::default());
    }

    #[test]
    fn test_resolve_precedence() {
        let file = ConfigFile {
            server: Some(ServerSection {
                listen: Some("127.0.0.1:9000".to_string()),
            }),
            capacity: Some(AuthoritySection {
                base_url: Some("http://from-file:1".to_string()),
            }),
            technology: Some(AuthoritySection {
                base_url: Some("http://from-file:2".to_string()),
            }),
            fan_out: Some(FanOutSection {
                concurrency: Some(2),
                timeout_ms: Some(250),
            }),
            unknown_fields: HashMap::new(),
        };
        let overrides = CliOverrides {
            listen: None,
            capacity_url: Some("http://from-cli:1".to_string()),
            technology_url: None,
        };

        let settings = ServiceSettings::resolve(Some(file), &overrides).unwrap();

        assert_eq!(settings.listen.port(), 9000);
        assert_eq!(settings.capacity_url, "http://from-cli:1");
        assert_eq!(settings.technology_url, "http://from-file:2");
        assert_eq!(settings.fan_out.concurrency(), 2);
        assert_eq!(settings.fan_out.call_timeout(), Duration::from_millis(250));
    }

    #[test]
    fn test_resolve_rejects_bad_override() {
        let overrides = CliOverrides {
            listen: Some("nowhere".to_string()),
            ..CliOverrides::default()
        };
        assert!(ServiceSettings::resolve(None, &overrides).is_err());

        let overrides = CliOverrides {
            technology_url: Some("localhost:8082".to_string()),
            ..CliOverrides::default()
        };
        assert!(ServiceSettings::resolve(None, &overrides).is_err());
    }
}
