#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use payflow_kit::domain::model::{ApiRequest, ApiResponse};
#[cfg(feature = "lambda")]
use payflow_kit::utils::logger;
#[cfg(feature = "lambda")]
use payflow_kit::{handle_request, Acknowledge};

#[cfg(feature = "lambda")]
async fn function_handler(event: LambdaEvent<ApiRequest>) -> Result<ApiResponse, Error> {
    tracing::debug!(request_id = %event.context.request_id, "Handling API request");

    // 失敗時只回傳通用訊息，細節寫進日誌
    let response = handle_request(&event.payload, &Acknowledge).await;
    Ok(response)
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    run(service_fn(function_handler)).await
}
