use crate::config::BedrockConfig;
use crate::domain::{Answer, ModelResponse, PromptRequest};
use crate::infrastructure::bedrock::{BedrockClient, ModelRuntime};
use crate::infrastructure::validation::PromptValidator;
use prompt_errors::AppError;
use std::sync::Arc;
use tracing::Instrument;
use uuid::Uuid;

pub struct AskModel {
    runtime: Arc<dyn ModelRuntime>,
    config: BedrockConfig,
}

impl AskModel {
    pub fn new(runtime: Arc<dyn ModelRuntime>, config: BedrockConfig) -> Self {
        Self { runtime, config }
    }

    pub async fn new_bedrock(config: BedrockConfig) -> Self {
        let client = BedrockClient::from_env(&config.region).await;
        Self::new(Arc::new(client), config)
    }

    pub fn config(&self) -> &BedrockConfig {
        &self.config
    }

    /// Empty prompts are rejected before any remote call. Otherwise exactly
    /// one call is made and its failure is returned as-is, without retry.
    pub async fn execute(&self, prompt: String) -> Result<Answer, AppError> {
        PromptValidator::validate(&prompt)?;

        let span = tracing::info_span!(
            "invoke_model",
            request_id = %Uuid::new_v4(),
            model_id = %self.config.model_id,
            region = %self.config.region,
        );
        let text = self.complete(&prompt).instrument(span).await?;

        Ok(Answer::new(
            prompt,
            text,
            self.config.model_id.clone(),
            self.config.region.clone(),
        ))
    }

    async fn complete(&self, prompt: &str) -> Result<String, AppError> {
        let body = PromptRequest::new(prompt).to_body()?;
        tracing::info!("Invoking model ({} prompt bytes)", prompt.len());

        let raw = self
            .runtime
            .invoke_model(&self.config.model_id, body)
            .await?;

        let response = ModelResponse::from_slice(&raw)?;
        if !response.has_completion() {
            tracing::warn!("Model response has no completion field");
        }

        Ok(response.into_display_text())
    }
}
