use crate::application::AskModel;
use crate::config::BedrockConfig;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext {
    pub ask_model: Arc<AskModel>,
}

impl AppContext {
    pub fn new(ask_model: AskModel) -> Self {
        Self {
            ask_model: Arc::new(ask_model),
        }
    }

    pub async fn from_env() -> Self {
        let config = BedrockConfig::from_env();
        tracing::info!(
            "Using Bedrock model {} in {}",
            config.model_id,
            config.region
        );
        Self::new(AskModel::new_bedrock(config).await)
    }

    pub fn config(&self) -> &BedrockConfig {
        self.ask_model.config()
    }
}
