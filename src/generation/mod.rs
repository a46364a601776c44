//! Generative text adapter used to pre-fill editor fields.

mod gemini;

pub use gemini::GeminiClient;

use async_trait::async_trait;

use crate::errors::AppError;

/// A prompt together with the output budget it should be generated under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub text: String,
    pub max_output_tokens: Option<u32>,
}

impl Prompt {
    pub fn new(text: impl Into<String>, max_output_tokens: u32) -> Self {
        Self {
            text: text.into(),
            max_output_tokens: Some(max_output_tokens),
        }
    }

    pub fn into_request(self, model: &str) -> GenerateRequest {
        GenerateRequest {
            prompt: self.text,
            model: model.to_string(),
            max_output_tokens: self.max_output_tokens,
        }
    }
}

/// One call to the hosted model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub prompt: String,
    pub model: String,
    pub max_output_tokens: Option<u32>,
}

/// Turns a prompt into plain text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Returns the trimmed completion, or a `Generation` error when no
    /// credential is configured, the call fails, or no text comes back.
    async fn generate(&self, request: GenerateRequest) -> Result<String, AppError>;
}

/// Reasoning allowance reserved out of an output budget: a quarter of it,
/// clamped to 50..=200 tokens.
pub fn thinking_budget(max_output_tokens: u32) -> u32 {
    (max_output_tokens / 4).clamp(50, 200)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thinking_budget_clamps() {
        assert_eq!(thinking_budget(80), 50);
        assert_eq!(thinking_budget(400), 100);
        assert_eq!(thinking_budget(2000), 200);
        assert_eq!(thinking_budget(0), 50);
    }

    #[test]
    fn test_prompt_into_request() {
        let request = Prompt::new("Say hi", 80).into_request("some-model");
        assert_eq!(request.prompt, "Say hi");
        assert_eq!(request.model, "some-model");
        assert_eq!(request.max_output_tokens, Some(80));
    }
}
