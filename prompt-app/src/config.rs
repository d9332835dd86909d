use crate::domain::ModelInfo;

const DEFAULT_REGION: &str = "us-east-1";
const DEFAULT_MODEL_ID: &str = "anthropic.claude-v2";

/// Where model calls go. Credentials are never stored here; the AWS
/// provider chain resolves them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BedrockConfig {
    pub region: String,
    pub model_id: String,
}

impl Default for BedrockConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            model_id: DEFAULT_MODEL_ID.to_string(),
        }
    }
}

impl BedrockConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// `BEDROCK_REGION`, then `AWS_REGION`, then the default. Blank values
    /// count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let region = non_blank("BEDROCK_REGION")
            .or_else(|| non_blank("AWS_REGION"))
            .unwrap_or_else(|| DEFAULT_REGION.to_string());
        let model_id =
            non_blank("BEDROCK_MODEL_ID").unwrap_or_else(|| DEFAULT_MODEL_ID.to_string());

        Self { region, model_id }
    }

    pub fn model_info(&self) -> ModelInfo {
        ModelInfo {
            model_id: self.model_id.clone(),
            region: self.region.clone(),
        }
    }
}
