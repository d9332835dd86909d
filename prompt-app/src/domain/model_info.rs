use serde::{Deserialize, Serialize};

/// Which model and region the server is configured to call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub model_id: String,
    pub region: String,
}
