//! `TextGenerator` backed by the Gemini `generateContent` REST endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{thinking_budget, GenerateRequest, TextGenerator};
use crate::errors::AppError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentBody<'a> {
    contents: Vec<RequestContent<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    max_output_tokens: u32,
    thinking_config: ThinkingConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ThinkingConfig {
    thinking_budget: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
    #[serde(default)]
    thought: bool,
}

impl GenerateContentResponse {
    /// Visible text of the first candidate; reasoning parts are skipped.
    fn text(self) -> String {
        self.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter(|part| !part.thought)
                    .filter_map(|part| part.text)
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

impl GeminiClient {
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            api_key,
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, request: GenerateRequest) -> Result<String, AppError> {
        let Some(api_key) = &self.api_key else {
            return Err(AppError::Generation(
                "Gemini API_KEY is not configured. Please ensure it's set in your environment."
                    .to_string(),
            ));
        };

        let body = GenerateContentBody {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: &request.prompt,
                }],
            }],
            // A zero budget means no budget.
            generation_config: request
                .max_output_tokens
                .filter(|n| *n > 0)
                .map(|max_output_tokens| GenerationConfig {
                    max_output_tokens,
                    thinking_config: ThinkingConfig {
                        thinking_budget: thinking_budget(max_output_tokens),
                    },
                }),
        };

        let url = format!("{}/models/{}:generateContent", self.endpoint, request.model);
        tracing::debug!(model = %request.model, "Requesting generated text");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!("Gemini API returned {}: {}", status, error_text);
            return Err(AppError::Generation(format!(
                "Failed to generate content: Gemini API error ({}): {}",
                status, error_text
            )));
        }

        let parsed: GenerateContentResponse = response.json().await?;
        let text = parsed.text();
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::Generation(
                "Failed to generate content: No text content received from Gemini API."
                    .to_string(),
            ));
        }

        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::State,
        http::{HeaderMap, Uri},
        Json, Router,
    };
    use serde_json::{json, Value};

    #[derive(Clone, Default)]
    struct Captured {
        request: Arc<Mutex<Option<(String, Option<String>, Value)>>>,
    }

    async fn spawn_fake(reply: Value) -> (String, Captured) {
        let captured = Captured::default();
        let app = Router::new()
            .fallback(
                |State((captured, reply)): State<(Captured, Value)>,
                 uri: Uri,
                 headers: HeaderMap,
                 Json(body): Json<Value>| async move {
                    let key = headers
                        .get("x-goog-api-key")
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string);
                    *captured.request.lock().unwrap() = Some((uri.path().to_string(), key, body));
                    Json(reply)
                },
            )
            .with_state((captured.clone(), reply));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{}", addr), captured)
    }

    fn request(max_output_tokens: Option<u32>) -> GenerateRequest {
        GenerateRequest {
            prompt: "Describe Paris".to_string(),
            model: "gemini-2.5-flash".to_string(),
            max_output_tokens,
        }
    }

    #[tokio::test]
    async fn test_missing_credential_fails_without_calling_out() {
        let client = GeminiClient::new("http://127.0.0.1:9", None);
        let err = client.generate(request(Some(150))).await.unwrap_err();
        assert!(matches!(err, AppError::Generation(ref msg) if msg.contains("API_KEY")));
    }

    #[tokio::test]
    async fn test_generate_sends_budget_and_trims_visible_text() {
        let (endpoint, captured) = spawn_fake(json!({
            "candidates": [{
                "content": {
                    "parts": [
                        { "text": "weighing options", "thought": true },
                        { "text": "  The city of light.  " }
                    ]
                }
            }]
        }))
        .await;

        let client = GeminiClient::new(endpoint, Some("secret".to_string()));
        let text = client.generate(request(Some(150))).await.unwrap();
        assert_eq!(text, "The city of light.");

        let (path, key, body) = captured.request.lock().unwrap().clone().unwrap();
        assert_eq!(path, "/models/gemini-2.5-flash:generateContent");
        assert_eq!(key.as_deref(), Some("secret"));
        assert_eq!(body["contents"][0]["parts"][0]["text"], "Describe Paris");
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 150);
        assert_eq!(body["generationConfig"]["thinkingConfig"]["thinkingBudget"], 50);
    }

    #[tokio::test]
    async fn test_generate_without_budget_omits_config() {
        let (endpoint, captured) = spawn_fake(json!({
            "candidates": [{ "content": { "parts": [{ "text": "ok" }] } }]
        }))
        .await;

        let client = GeminiClient::new(endpoint, Some("secret".to_string()));
        client.generate(request(None)).await.unwrap();

        let (_, _, body) = captured.request.lock().unwrap().clone().unwrap();
        assert!(body.get("generationConfig").is_none());
    }

    #[tokio::test]
    async fn test_zero_budget_omits_config() {
        let (endpoint, captured) = spawn_fake(json!({
            "candidates": [{ "content": { "parts": [{ "text": "ok" }] } }]
        }))
        .await;

        let client = GeminiClient::new(endpoint, Some("secret".to_string()));
        client.generate(request(Some(0))).await.unwrap();

        let (_, _, body) = captured.request.lock().unwrap().clone().unwrap();
        assert!(body.get("generationConfig").is_none());
    }

    #[tokio::test]
    async fn test_empty_response_is_an_error() {
        let (endpoint, _) = spawn_fake(json!({ "candidates": [] })).await;

        let client = GeminiClient::new(endpoint, Some("secret".to_string()));
        let err = client.generate(request(Some(80))).await.unwrap_err();
        assert_eq!(
            err,
            AppError::Generation(
                "Failed to generate content: No text content received from Gemini API."
                    .to_string()
            )
        );
    }
}
