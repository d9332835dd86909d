use async_trait::async_trait;
use prompt_errors::AppError;

/// One raw invoke-model round trip: JSON bytes in, JSON bytes out.
#[async_trait]
pub trait ModelRuntime: Send + Sync {
    async fn invoke_model(&self, model_id: &str, body: Vec<u8>) -> Result<Vec<u8>, AppError>;
}
