use prompt_errors::AppError;
use serde::{Deserialize, Serialize};

/// Output length limit sent with every request.
pub const MAX_TOKENS_TO_SAMPLE: u32 = 200;

/// Body of a single invoke-model call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptRequest {
    pub prompt: String,
    pub max_tokens_to_sample: u32,
}

impl PromptRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            max_tokens_to_sample: MAX_TOKENS_TO_SAMPLE,
        }
    }

    pub fn to_body(&self) -> Result<Vec<u8>, AppError> {
        serde_json::to_vec(self).map_err(|e| AppError::Internal(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_carries_prompt_and_limit() {
        let body = PromptRequest::new("Hello").to_body().unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(
            value,
            serde_json::json!({ "prompt": "Hello", "max_tokens_to_sample": 200 })
        );
    }

    #[test]
    fn test_prompt_is_not_trimmed() {
        let request = PromptRequest::new("  Human: hi\n\nAssistant:");
        assert_eq!(request.prompt, "  Human: hi\n\nAssistant:");
    }
}
