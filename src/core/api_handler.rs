use crate::domain::model::{ApiRequest, ApiResponse, RequestContext};
use crate::domain::ports::RequestLogic;
use async_trait::async_trait;
use futures::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;

/// Default logic: acknowledges every request.
#[derive(Debug, Clone, Default)]
pub struct Acknowledge;

#[async_trait]
impl RequestLogic for Acknowledge {
    async fn handle(&self, _req: &ApiRequest) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Runs `logic` and maps the outcome to a response.
///
/// Failures (errors and panics alike) are logged with the request context and
/// answered with a generic 500 body; error details never reach the caller.
pub async fn handle_request(req: &ApiRequest, logic: &dyn RequestLogic) -> ApiResponse {
    let result = match AssertUnwindSafe(logic.handle(req)).catch_unwind().await {
        Ok(result) => result,
        Err(panic) => Err(anyhow::anyhow!(
            "request logic panicked: {}",
            panic_message(panic.as_ref())
        )),
    };

    match result {
        Ok(()) => ApiResponse::ok(),
        Err(err) => {
            let context = RequestContext::capture(req, &err);
            tracing::error!(
                method = ?context.method,
                url = ?context.url,
                params = ?context.params,
                query = ?context.query,
                body = ?context.body,
                error = %context.error,
                stack = %context.stack,
                "API request failed"
            );
            ApiResponse::internal_error()
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panic_message_downcasts() {
        let boxed: Box<dyn Any + Send> = Box::new("boom");
        assert_eq!(panic_message(boxed.as_ref()), "boom");
        let boxed: Box<dyn Any + Send> = Box::new(String::from("kaboom"));
        assert_eq!(panic_message(boxed.as_ref()), "kaboom");
        let boxed: Box<dyn Any + Send> = Box::new(42u8);
        assert_eq!(panic_message(boxed.as_ref()), "unknown panic payload");
    }

    #[tokio::test]
    async fn test_acknowledge_returns_ok_body() {
        let response = handle_request(&ApiRequest::default(), &Acknowledge).await;
        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, serde_json::json!({ "ok": true }));
    }
}
