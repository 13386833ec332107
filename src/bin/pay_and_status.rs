use clap::Parser;
use payflow_kit::utils::{logger, validation::Validate};
use payflow_kit::{create_client, pay_and_check_status, PayAndStatusCli, ToolkitError};

async fn run(config: &PayAndStatusCli) -> Result<(), ToolkitError> {
    config.validate()?;

    let client = create_client(&config.client_config())?;
    let request = config.payment_request()?;
    let outcome = pay_and_check_status(client.as_ref(), &request, &config.poll_policy()).await?;

    println!(
        "Payment finished with status {} after {} attempt(s)",
        outcome.status, outcome.attempts
    );
    Ok(())
}

#[tokio::main]
async fn main() {
    let config = PayAndStatusCli::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config).await {
        tracing::debug!("Error in pay + status example: {:?}", e);
        eprintln!("❌ Error in pay + status example: {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}
