// GUI configuration module
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub version: String,
    pub app: AppSettings,
    pub api: ApiSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub theme: String,
    pub language: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    /// Base URL of the engine, e.g. "http://127.0.0.1:5001".
    pub base_url: String,
    pub timeout_secs: u64,
}

impl AppConfig {
    /// Loads the default configuration embedded at compile time.
    pub fn load_default() -> Result<Self, anyhow::Error> {
        let config_str = include_str!("../../assets/config/default.json");
        let config: AppConfig = serde_json::from_str(config_str)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_default_config_parses() {
        let cfg = AppConfig::load_default().unwrap();
        assert!(!cfg.api.base_url.is_empty());
        assert_eq!(cfg.app.language, "pt-BR");
    }
}
