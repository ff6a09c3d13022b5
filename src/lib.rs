pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::http::{ApiGatewayProxyRequest, ApiGatewayProxyResponse, ProxyHandler};
pub use config::{lambda::LambdaConfig, toml_config::HttpConfig};
pub use core::calculator::CalculationService;
pub use domain::model::{CalculationInput, CalculationOutput, CompoundingFrequency, ErrorResponse};
pub use utils::error::{CalcError, ConfigError, ErrorCategory, Result};
