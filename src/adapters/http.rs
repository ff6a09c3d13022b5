use crate::core::calculator::CalculationService;
use crate::domain::model::ErrorResponse;
use crate::domain::ports::CorsProvider;
use crate::utils::error::{ErrorCategory, PROCESSING_FAILURE_MESSAGE};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method not allowed";

/// API Gateway REST "Lambda proxy integration" request. Only the fields the
/// calculator reads are modelled; everything else in the event is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiGatewayProxyRequest {
    #[serde(default)]
    pub http_method: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub headers: Option<HashMap<String, String>>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub is_base64_encoded: bool,
}

impl ApiGatewayProxyRequest {
    pub fn post(body: impl Into<String>) -> Self {
        Self {
            http_method: Some("POST".to_string()),
            body: Some(body.into()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiGatewayProxyResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
    #[serde(default)]
    pub is_base64_encoded: bool,
}

impl ApiGatewayProxyResponse {
    pub fn json_body<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_str(&self.body)
    }
}

/// Relays proxy requests to the [`CalculationService`] and shapes the result
/// into a proxy response with CORS headers attached.
#[derive(Debug, Clone)]
pub struct ProxyHandler<C: CorsProvider> {
    service: CalculationService,
    cors: C,
}

impl<C: CorsProvider> ProxyHandler<C> {
    pub fn new(service: CalculationService, cors: C) -> Self {
        Self { service, cors }
    }

    pub fn handle(&self, request: &ApiGatewayProxyRequest) -> ApiGatewayProxyResponse {
        let method = request
            .http_method
            .as_deref()
            .map(str::to_ascii_uppercase)
            .unwrap_or_else(|| "POST".to_string());

        match method.as_str() {
            "OPTIONS" => self.respond(200, String::new()),
            "POST" => self.calculate(request),
            other => {
                tracing::warn!(method = other, "Rejected unsupported method");
                let mut response = self.error(405, METHOD_NOT_ALLOWED_MESSAGE);
                response
                    .headers
                    .insert("Allow".to_string(), "POST, OPTIONS".to_string());
                response
            }
        }
    }

    fn calculate(&self, request: &ApiGatewayProxyRequest) -> ApiGatewayProxyResponse {
        // base64 內容不解碼，直接交給 JSON 解析（會失敗並回報 500）
        let outcome = self.service.evaluate(request.body.as_deref());

        match outcome {
            Ok(output) => match serde_json::to_string(&output) {
                Ok(body) => {
                    tracing::info!(
                        result = output.result,
                        frequency = output.frequency,
                        "Calculation succeeded"
                    );
                    self.respond(200, body)
                }
                Err(e) => {
                    tracing::error!("Error serializing calculation output: {}", e);
                    self.error(500, PROCESSING_FAILURE_MESSAGE)
                }
            },
            Err(e) => {
                match e.category() {
                    ErrorCategory::ClientInput => {
                        tracing::warn!(reason = %e, "Rejected calculation request")
                    }
                    ErrorCategory::ProcessingFault => {
                        tracing::error!(
                            path = request.path.as_deref().unwrap_or("-"),
                            base64 = request.is_base64_encoded,
                            "Error processing request: {}",
                            e
                        )
                    }
                }
                self.error(e.status_code(), &e.public_message())
            }
        }
    }

    fn error(&self, status_code: u16, message: &str) -> ApiGatewayProxyResponse {
        let body = serde_json::to_string(&ErrorResponse::new(message))
            .unwrap_or_else(|_| format!(r#"{{"error":"{}"}}"#, PROCESSING_FAILURE_MESSAGE));
        self.respond(status_code, body)
    }

    fn respond(&self, status_code: u16, body: String) -> ApiGatewayProxyResponse {
        ApiGatewayProxyResponse {
            status_code,
            headers: self.headers(),
            body,
            is_base64_encoded: false,
        }
    }

    fn headers(&self) -> HashMap<String, String> {
        HashMap::from([
            ("Content-Type".to_string(), "application/json".to_string()),
            (
                "Access-Control-Allow-Origin".to_string(),
                self.cors.allowed_origin().to_string(),
            ),
            (
                "Access-Control-Allow-Methods".to_string(),
                self.cors.allowed_methods().to_string(),
            ),
            (
                "Access-Control-Allow-Headers".to_string(),
                self.cors.allowed_headers().to_string(),
            ),
        ])
    }
}
