use clap::Parser;
use compound_interest_api::utils::logger;
use compound_interest_api::{CalculationService, CliConfig, ErrorCategory, ErrorResponse};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting compound-interest-api CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let payload = config.resolve_payload(std::io::stdin().lock())?;
    let service = CalculationService::new();

    let (body, exit_code) = match service.evaluate(payload.as_deref()) {
        Ok(output) => (serde_json::to_value(output)?, 0),
        Err(e) => {
            let exit_code = match e.category() {
                ErrorCategory::ClientInput => {
                    tracing::warn!("Validation failed: {}", e);
                    2
                }
                ErrorCategory::ProcessingFault => {
                    tracing::error!("Error processing request: {}", e);
                    1
                }
            };
            (serde_json::to_value(ErrorResponse::new(e.public_message()))?, exit_code)
        }
    };

    let rendered = if config.pretty {
        serde_json::to_string_pretty(&body)?
    } else {
        serde_json::to_string(&body)?
    };
    println!("{}", rendered);

    if exit_code > 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}
