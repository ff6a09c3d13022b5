use crate::domain::ports::CorsProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_origin, validate_token_list, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_ALLOWED_ORIGIN: &str = "*";
pub const DEFAULT_ALLOWED_METHODS: &str = "POST, OPTIONS";
pub const DEFAULT_ALLOWED_HEADERS: &str = "Content-Type";

/// HTTP settings for the proxy transport.
///
/// ```toml
/// [cors]
/// allowed_origin = "https://calculator.example.com"
/// allowed_methods = "POST, OPTIONS"
/// allowed_headers = "Content-Type"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct HttpConfig {
    #[serde(default)]
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origin: String,
    pub allowed_methods: String,
    pub allowed_headers: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
            allowed_methods: DEFAULT_ALLOWED_METHODS.to_string(),
            allowed_headers: DEFAULT_ALLOWED_HEADERS.to_string(),
        }
    }
}

impl HttpConfig {
    /// 從檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置，未提供的欄位使用預設值
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// 以環境變數覆寫 CORS 設定
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from an arbitrary key lookup. Blank values are ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(origin) = non_blank("CORS_ALLOW_ORIGIN") {
            self.cors.allowed_origin = origin;
        }
        if let Some(methods) = non_blank("CORS_ALLOW_METHODS") {
            self.cors.allowed_methods = methods;
        }
        if let Some(headers) = non_blank("CORS_ALLOW_HEADERS") {
            self.cors.allowed_headers = headers;
        }
        self
    }
}

impl CorsProvider for HttpConfig {
    fn allowed_origin(&self) -> &str {
        &self.cors.allowed_origin
    }

    fn allowed_methods(&self) -> &str {
        &self.cors.allowed_methods
    }

    fn allowed_headers(&self) -> &str {
        &self.cors.allowed_headers
    }
}

impl Validate for HttpConfig {
    fn validate(&self) -> Result<()> {
        validate_origin("cors.allowed_origin", &self.cors.allowed_origin)?;
        validate_token_list("cors.allowed_methods", &self.cors.allowed_methods)?;
        validate_token_list("cors.allowed_headers", &self.cors.allowed_headers)?;

        tracing::debug!("✅ HTTP configuration validation passed");
        Ok(())
    }
}
