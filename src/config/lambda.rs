use crate::config::toml_config::HttpConfig;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::env;

/// Environment variable pointing at an optional TOML settings file.
pub const CONFIG_PATH_VAR: &str = "CALCULATOR_CONFIG";

#[derive(Debug, Clone, Default)]
pub struct LambdaConfig {
    pub http: HttpConfig,
    pub config_path: Option<String>,
}

impl LambdaConfig {
    /// 讀取 `CALCULATOR_CONFIG` 指定的檔案（若有），再套用 CORS_* 環境變數
    pub fn from_env() -> Result<Self> {
        let config_path = env::var(CONFIG_PATH_VAR)
            .ok()
            .filter(|path| !path.trim().is_empty());

        let http = match &config_path {
            Some(path) => {
                tracing::info!("Loading HTTP configuration from {}", path);
                HttpConfig::from_file(path)?
            }
            None => HttpConfig::default(),
        }
        .with_env_overrides();

        Ok(Self { http, config_path })
    }
}

impl Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        self.http.validate()?;

        tracing::info!("✅ Lambda configuration validation passed");
        Ok(())
    }
}
