//! OpenAI text-completion client

use std::future::Future;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::CompletionError;
use crate::config::CompletionConfig;

/// Body of a text-completion request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    text: String,
}

/// Something that can turn a prompt into generated text
///
/// The session only talks to this trait, so tests can swap in a fake.
pub trait Completer {
    fn complete(
        &self,
        api_key: &str,
        request: &CompletionRequest,
    ) -> impl Future<Output = Result<String, CompletionError>> + Send;
}

/// Client for an OpenAI-compatible `/v1/completions` endpoint
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    endpoint: String,
}

impl OpenAiClient {
    pub fn new(config: &CompletionConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }
}

impl Completer for OpenAiClient {
    async fn complete(
        &self,
        api_key: &str,
        request: &CompletionRequest,
    ) -> Result<String, CompletionError> {
        tracing::debug!(
            model = %request.model,
            temperature = request.temperature,
            max_tokens = request.max_tokens,
            prompt_len = request.prompt.len(),
            "Sending completion request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(CompletionError::Api { status, body });
        }

        parse_completion(&body)
    }
}

/// Extract the first choice's text from a completion response body
fn parse_completion(body: &str) -> Result<String, CompletionError> {
    let response: CompletionResponse = serde_json::from_str(body)
        .map_err(|e| CompletionError::MalformedResponse(e.to_string()))?;

    response
        .choices
        .into_iter()
        .next()
        .map(|c| c.text)
        .ok_or(CompletionError::NoChoices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request() -> CompletionRequest {
        CompletionRequest {
            model: "gpt-3.5-turbo-instruct".to_string(),
            prompt: "Objective: Say hi\nTone: Friendly".to_string(),
            max_tokens: 400,
            temperature: 0.5,
        }
    }

    #[test]
    fn test_request_body_shape() {
        let value = serde_json::to_value(request()).unwrap();
        assert_eq!(
            value,
            json!({
                "model": "gpt-3.5-turbo-instruct",
                "prompt": "Objective: Say hi\nTone: Friendly",
                "max_tokens": 400,
                "temperature": 0.5,
            })
        );
    }

    #[test]
    fn test_parse_first_choice() {
        let body = r#"{"id":"cmpl-1","choices":[{"text":"Hello team,","index":0},{"text":"ignored"}]}"#;
        assert_eq!(parse_completion(body).unwrap(), "Hello team,");
    }

    #[test]
    fn test_parse_empty_choices() {
        let err = parse_completion(r#"{"choices":[]}"#).unwrap_err();
        assert!(matches!(err, CompletionError::NoChoices));
    }

    #[test]
    fn test_parse_malformed_body() {
        let err = parse_completion("<html>bad gateway</html>").unwrap_err();
        assert!(matches!(err, CompletionError::MalformedResponse(_)));

        let err = parse_completion(r#"{"choices":[{"message":"chat shape"}]}"#).unwrap_err();
        assert!(matches!(err, CompletionError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_network_error() {
        let config = CompletionConfig {
            endpoint: "http://127.0.0.1:1/v1/completions".to_string(),
            timeout_secs: 5,
            ..CompletionConfig::default()
        };
        let client = OpenAiClient::new(&config).unwrap();

        let err = client.complete("sk-test", &request()).await.unwrap_err();
        assert!(
            matches!(
                err,
                CompletionError::Network(_) | CompletionError::Timeout(_)
            ),
            "unexpected error: {:?}",
            err
        );
    }

    #[tokio::test]
    async fn test_stalled_endpoint_times_out() {
        // Accepts the connection but never answers
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            if let Ok((stream, _)) = listener.accept() {
                std::thread::sleep(std::time::Duration::from_secs(5));
                drop(stream);
            }
        });

        let config = CompletionConfig {
            endpoint: format!("http://{}/v1/completions", addr),
            timeout_secs: 1,
            ..CompletionConfig::default()
        };
        let client = OpenAiClient::new(&config).unwrap();

        let err = client.complete("sk-test", &request()).await.unwrap_err();
        assert!(
            matches!(err, CompletionError::Timeout(_)),
            "unexpected error: {:?}",
            err
        );
        assert_eq!(err.to_string(), "request to completion service timed out");
    }
}
