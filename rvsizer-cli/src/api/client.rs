//! HTTP client for the pricing and provisioning endpoints

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Url;
use serde::Serialize;
use serde_json::Value;

use super::error::SubmitError;
use super::response::{PricingOutcome, interpret_pricing, interpret_provision, parse_body};
use crate::ingest::PromptBatch;

/// Timeout applied to every request unless configured otherwise
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// JSON-over-HTTP client shared by all commands
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(format!("rvsizer/{}", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { http })
    }

    /// POST the prompt batch as `{ "prompts": [...] }` to the pricing endpoint
    pub async fn submit_prompts(
        &self,
        url: &str,
        batch: &PromptBatch,
    ) -> Result<PricingOutcome, SubmitError> {
        log::info!("Submitting {} prompts to {}", batch.len(), url);
        let body = self.post_json(url, batch).await?;
        log::debug!("Pricing response: {}", body);
        interpret_pricing(body)
    }

    /// POST a flat provisioning request
    pub async fn submit_provision<T: Serialize + ?Sized>(
        &self,
        url: &str,
        request: &T,
    ) -> Result<Value, SubmitError> {
        log::info!("Submitting provisioning request to {}", url);
        let body = self.post_json(url, request).await?;
        log::debug!("Provisioning response: {}", body);
        interpret_provision(body)
    }

    /// POST a JSON body and return the decoded response body.
    ///
    /// Non-success statuses become [`SubmitError::Status`]; transport failures
    /// are classified into timeout and network errors.
    pub async fn post_json<T: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &T,
    ) -> Result<Value, SubmitError> {
        let url = parse_url(url)?;

        let response = self
            .http
            .post(url.clone())
            .json(body)
            .send()
            .await
            .map_err(|e| {
                log::error!("Error submitting to {}: {}", url, e);
                SubmitError::from_reqwest(&e)
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            log::error!("Error reading response from {}: {}", url, e);
            SubmitError::from_reqwest(&e)
        })?;

        if !status.is_success() {
            log::warn!("{} returned HTTP {}", url, status.as_u16());
            return Err(SubmitError::from_status(status.as_u16(), &text));
        }

        Ok(parse_body(&text))
    }
}

fn parse_url(url: &str) -> Result<Url, SubmitError> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Err(SubmitError::InvalidUrl(String::new()));
    }

    match Url::parse(trimmed) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Ok(parsed),
        _ => Err(SubmitError::InvalidUrl(trimmed.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn batch() -> PromptBatch {
        PromptBatch {
            prompts: vec![
                "VCPU:2,Memory(GB):8,Disk(GB):40,OperatingSystem:RHEL9".to_string(),
                "VCPU:4,OperatingSystem:Windows".to_string(),
            ],
        }
    }

    #[tokio::test]
    async fn test_submit_prompts_extracts_text() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/default/pricing")
                    .header("content-type", "application/json")
                    .json_body(json!({
                        "prompts": [
                            "VCPU:2,Memory(GB):8,Disk(GB):40,OperatingSystem:RHEL9",
                            "VCPU:4,OperatingSystem:Windows"
                        ]
                    }));
                then.status(200).json_body(json!({
                    "success": true,
                    "data": {"output": {"message": {"content": [{"text": "m5.large x2"}]}}}
                }));
            })
            .await;

        let client = ApiClient::new(Duration::from_secs(5)).unwrap();
        let outcome = client
            .submit_prompts(&server.url("/default/pricing"), &batch())
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(outcome, PricingOutcome::Text("m5.large x2".to_string()));
    }

    #[tokio::test]
    async fn test_submit_prompts_rejected() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/pricing");
                then.status(200)
                    .json_body(json!({"success": false, "message": "model unavailable"}));
            })
            .await;

        let client = ApiClient::new(DEFAULT_TIMEOUT).unwrap();
        let err = client
            .submit_prompts(&server.url("/pricing"), &batch())
            .await
            .unwrap_err();

        assert_eq!(err, SubmitError::Rejected("model unavailable".to_string()));
    }

    #[tokio::test]
    async fn test_error_status_uses_body_message() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/provision");
                then.status(400).json_body(json!({"message": "Invalid parameters"}));
            })
            .await;

        let client = ApiClient::new(DEFAULT_TIMEOUT).unwrap();
        let err = client
            .submit_provision(&server.url("/provision"), &json!({"instance_name": "x"}))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            SubmitError::Status {
                status: 400,
                message: "Invalid parameters".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_timeout_is_classified() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/slow");
                then.status(200)
                    .delay(Duration::from_millis(500))
                    .json_body(json!({"success": true}));
            })
            .await;

        let client = ApiClient::new(Duration::from_millis(50)).unwrap();
        let err = client
            .submit_prompts(&server.url("/slow"), &batch())
            .await
            .unwrap_err();

        assert_eq!(err, SubmitError::Timeout);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_network_error() {
        let client = ApiClient::new(Duration::from_secs(2)).unwrap();
        let err = client
            .submit_prompts("http://127.0.0.1:1/pricing", &batch())
            .await
            .unwrap_err();

        assert!(matches!(err, SubmitError::Network(_)));
    }

    #[tokio::test]
    async fn test_invalid_url_is_rejected_before_sending() {
        let client = ApiClient::new(DEFAULT_TIMEOUT).unwrap();

        let err = client.post_json("", &json!({})).await.unwrap_err();
        assert_eq!(err, SubmitError::InvalidUrl(String::new()));

        let err = client.post_json("not a url", &json!({})).await.unwrap_err();
        assert_eq!(err, SubmitError::InvalidUrl("not a url".to_string()));

        let err = client.post_json("ftp://host/x", &json!({})).await.unwrap_err();
        assert!(matches!(err, SubmitError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn test_provision_accepts_any_payload() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/db");
                then.status(200).body("accepted");
            })
            .await;

        let client = ApiClient::new(DEFAULT_TIMEOUT).unwrap();
        let body = client
            .submit_provision(&server.url("/db"), &json!({"engine": "mysql"}))
            .await
            .unwrap();

        assert_eq!(body, Value::String("accepted".to_string()));
    }
}
