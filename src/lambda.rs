#[cfg(feature = "lambda")]
use compound_interest_api::utils::{logger, validation::Validate};
#[cfg(feature = "lambda")]
use compound_interest_api::{
    ApiGatewayProxyRequest, ApiGatewayProxyResponse, CalculationService, HttpConfig,
    LambdaConfig, ProxyHandler,
};
#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

#[cfg(feature = "lambda")]
async fn function_handler(
    handler: &ProxyHandler<HttpConfig>,
    event: LambdaEvent<ApiGatewayProxyRequest>,
) -> Result<ApiGatewayProxyResponse, Error> {
    let (request, context) = event.into_parts();
    tracing::debug!(request_id = %context.request_id, "Handling calculation request");

    Ok(handler.handle(&request))
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    // 冷啟動時載入一次配置，之後每次呼叫共用同一個無狀態 handler
    let config = LambdaConfig::from_env()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;
    config
        .validate()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

    let handler = ProxyHandler::new(CalculationService::new(), config.http);
    tracing::info!("Compound interest Lambda function ready");

    run(service_fn(|event| function_handler(&handler, event))).await
}
