use async_trait::async_trait;
use payflow_kit::domain::model::{ApiRequest, ApiResponse};
use payflow_kit::domain::ports::RequestLogic;
use payflow_kit::{handle_request, Acknowledge};
use serde_json::json;

struct FailingLogic(&'static str);

#[async_trait]
impl RequestLogic for FailingLogic {
    async fn handle(&self, _req: &ApiRequest) -> anyhow::Result<()> {
        Err(anyhow::anyhow!(self.0).context("loading order"))
    }
}

struct PanickingLogic;

#[async_trait]
impl RequestLogic for PanickingLogic {
    async fn handle(&self, req: &ApiRequest) -> anyhow::Result<()> {
        let _body = req.body.as_ref().expect("body is required");
        Ok(())
    }
}

fn sample_request() -> ApiRequest {
    serde_json::from_value(json!({
        "method": "POST",
        "url": "/orders",
        "originalUrl": "/api/orders?dry_run=true",
        "params": { "id": "42" },
        "query": { "dry_run": "true" },
        "body": { "amount": "1.00" }
    }))
    .unwrap()
}

#[tokio::test]
async fn test_success_returns_ok_ack() {
    let response = handle_request(&sample_request(), &Acknowledge).await;

    assert_eq!(response, ApiResponse::ok());
    assert_eq!(response.status_code, 200);
    assert_eq!(response.body, json!({ "ok": true }));
}

#[tokio::test]
async fn test_error_returns_generic_500() {
    for message in ["connection refused", "secret token sk_live_abc leaked"] {
        let response = handle_request(&sample_request(), &FailingLogic(message)).await;

        assert_eq!(response.status_code, 500);
        assert_eq!(response.body, json!({ "message": "Internal server error" }));
        assert!(!response.body.to_string().contains(message));
    }
}

#[tokio::test]
async fn test_panic_is_contained() {
    let response = handle_request(&ApiRequest::default(), &PanickingLogic).await;

    assert_eq!(response, ApiResponse::internal_error());
}

#[tokio::test]
async fn test_request_fields_are_optional() {
    let req: ApiRequest = serde_json::from_value(json!({})).unwrap();
    assert_eq!(req.effective_url(), None);

    let response = handle_request(&req, &FailingLogic("boom")).await;
    assert_eq!(response.status_code, 500);
}

#[test]
fn test_response_wire_format() {
    let value = serde_json::to_value(ApiResponse::internal_error()).unwrap();
    assert_eq!(
        value,
        json!({ "statusCode": 500, "body": { "message": "Internal server error" } })
    );
    assert_eq!(sample_request().effective_url(), Some("/api/orders?dry_run=true"));
}
