use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_log_file")]
    pub log_file: String,
    #[serde(default)]
    pub use_json: bool,
    /// Log file rotation: "never", "daily", or "hourly"
    #[serde(default = "default_rotation")]
    pub rotation: String,
    #[serde(default)]
    pub gateway: GatewayConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_dir: default_log_dir(),
            log_file: default_log_file(),
            use_json: false,
            rotation: default_rotation(),
            gateway: GatewayConfig::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_dir() -> String {
    "logs".to_string()
}

fn default_log_file() -> String {
    "bankcore.log".to_string()
}

fn default_rotation() -> String {
    "never".to_string()
}

impl AppConfig {
    /// Load `config/{env}.yaml`.
    pub fn load(env: &str) -> anyhow::Result<Self> {
        let config_path = format!("config/{}.yaml", env);
        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config file: {config_path}"))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse config yaml: {config_path}"))
    }

    /// Load `config/{env}.yaml`, falling back to built-in defaults when the
    /// file is absent.
    pub fn load_or_default(env: &str) -> Self {
        match Self::load(env) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("{err:#}; using default configuration");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.rotation, "never");
        assert_eq!(config.gateway.port, 8080);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: AppConfig = serde_yaml::from_str("use_json: true\n").unwrap();
        assert!(config.use_json);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.gateway.host, "0.0.0.0");
    }

    #[test]
    fn test_full_yaml() {
        let yaml = r#"
log_level: debug
log_dir: /tmp/logs
log_file: api.log
use_json: true
rotation: daily
gateway:
  host: 127.0.0.1
  port: 9000
"#;
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.rotation, "daily");
        assert_eq!(config.gateway.port, 9000);
    }
}
