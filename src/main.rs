use oanda_mcp_server::prelude::*;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // .env may carry LOGLEVEL, so it is read before the subscriber is installed
    load_dotenv();
    setup_logger();
    info!("Oanda MCP Server {} starting...", version());

    let config = Config::new().inspect_err(|e| error!("Invalid configuration: {}", e))?;
    info!("Configuration loaded: {}", config);

    serve(config).await
}
